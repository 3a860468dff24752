//! Request routing.

use tiny_http::Method;

pub const PUBLISH_PATH: &str = "/api/publish";
pub const POSTS_PATH: &str = "/api/posts";

/// Where a request is dispatched.
#[derive(Debug, PartialEq, Eq)]
pub enum Route {
    Publish,
    ListPosts,
    /// Static file lookup under the public directory.
    Static,
    NotFound,
}

/// Match a method and raw request URL to a route. Query strings are ignored.
pub fn route(method: &Method, url: &str) -> Route {
    let path = url.split(['?', '#']).next().unwrap_or(url);

    match (method, path) {
        (Method::Post, PUBLISH_PATH) => Route::Publish,
        (Method::Get | Method::Head, POSTS_PATH) => Route::ListPosts,
        (Method::Get | Method::Head, _) => Route::Static,
        _ => Route::NotFound,
    }
}
