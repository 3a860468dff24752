//! Publishing HTTP server.
//!
//! A `tiny_http` accept loop hands each request to a fixed `rayon` pool.
//! API routes go to [`crate::api`]; everything else is served from the
//! public directory.

mod body;
mod path;
mod response;
mod route;

use crate::{
    api,
    config::PressConfig,
    core::{is_shutdown, register_server},
    debug, log,
    store::PostStore,
};
use anyhow::{Context, Result};
use route::Route;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// State shared by every request handler.
pub struct ServeContext {
    pub config: PressConfig,
    pub store: PostStore,
}

impl ServeContext {
    pub fn new(config: PressConfig) -> Self {
        let store = PostStore::new(&config);
        Self { config, store }
    }
}

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
}

/// Bind the HTTP server and register it for graceful shutdown.
pub fn bind_server(config: &PressConfig) -> Result<BoundServer> {
    let addr = SocketAddr::new(config.serve.interface, config.serve.port);
    let server = Server::http(addr)
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", addr, e))?;
    // Port 0 binds an ephemeral port; report the one actually bound.
    let addr = server.server_addr().to_ip().unwrap_or(addr);
    let server = Arc::new(server);

    register_server(Arc::clone(&server));

    Ok(BoundServer { server, addr })
}

/// Bind and run until shutdown.
pub fn serve(config: PressConfig) -> Result<()> {
    let bound = bind_server(&config)?;
    let ctx = Arc::new(ServeContext::new(config));

    log!("serve"; "{} running on port {}", ctx.config.site.name, bound.addr().port());
    log!("serve"; "admin: http://localhost:{}/{}", bound.addr().port(), ctx.config.site.admin_page);
    debug!("serve"; "serving {}", ctx.store.paths().public_dir.display());

    bound.run(ctx)
}

impl BoundServer {
    /// Get the bound address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start the request loop (blocking).
    ///
    /// Returns once the server is unblocked and every dispatched request has
    /// finished.
    pub fn run(self, ctx: Arc<ServeContext>) -> Result<()> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(ctx.config.serve.workers)
            .thread_name(|i| format!("pressroom-http-{i}"))
            .build()
            .context("Failed to create request thread pool")?;

        let ctx: &ServeContext = &ctx;
        pool.in_place_scope(|scope| {
            for request in self.server.incoming_requests() {
                scope.spawn(move |_| {
                    if let Err(e) = handle_request(request, ctx) {
                        log!("serve"; "request error: {e:#}");
                    }
                });
            }
            debug!("serve"; "waiting for in-flight requests");
        });

        log!("serve"; "stopped");
        Ok(())
    }
}

/// Handle a single HTTP request
fn handle_request(mut request: Request, ctx: &ServeContext) -> Result<()> {
    if is_shutdown() {
        return response::respond_unavailable(request);
    }

    debug!("serve"; "{} {}", request.method(), request.url());

    match route::route(request.method(), request.url()) {
        Route::Publish => {
            let declared = request.body_length();
            let reply = match body::read_limited(
                request.as_reader(),
                declared,
                ctx.config.serve.body_limit,
            ) {
                Ok(body) => api::publish(&ctx.store, &body),
                Err(e) => e.into(),
            };
            response::respond_json(request, &reply)
        }
        Route::ListPosts => response::respond_json(request, &api::list_posts(&ctx.store)),
        Route::Static => {
            let public_dir = &ctx.store.paths().public_dir;
            match path::resolve_path(request.url(), public_dir) {
                Some(path) => response::respond_file(request, &path),
                None => response::respond_not_found(request, public_dir),
            }
        }
        Route::NotFound => response::respond_not_found(request, &ctx.store.paths().public_dir),
    }
}
