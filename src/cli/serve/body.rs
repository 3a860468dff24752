//! Request body reading with a size cap.

use std::io::Read;

use crate::api::ApiError;

/// Read at most `limit` bytes from `reader`.
///
/// A declared length above the limit is rejected before reading. Bodies
/// without a declared length are read one byte past the limit to detect
/// overflow.
pub fn read_limited(
    reader: impl Read,
    declared: Option<usize>,
    limit: usize,
) -> Result<Vec<u8>, ApiError> {
    if declared.is_some_and(|len| len > limit) {
        return Err(ApiError::PayloadTooLarge { limit });
    }

    let mut body = Vec::with_capacity(declared.unwrap_or(0));
    reader
        .take(limit as u64 + 1)
        .read_to_end(&mut body)
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e).context("Failed to read request body")))?;

    if body.len() > limit {
        return Err(ApiError::PayloadTooLarge { limit });
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_within_limit() {
        let body = read_limited(&b"{\"a\":1}"[..], Some(7), 16).unwrap();
        assert_eq!(body, b"{\"a\":1}");
    }

    #[test]
    fn test_declared_length_over_limit() {
        let err = read_limited(&b""[..], Some(17), 16).unwrap_err();
        assert!(matches!(err, ApiError::PayloadTooLarge { limit: 16 }));
    }

    #[test]
    fn test_undeclared_body_over_limit() {
        let data = vec![b'x'; 17];
        let err = read_limited(&data[..], None, 16).unwrap_err();
        assert!(matches!(err, ApiError::PayloadTooLarge { .. }));

        let data = vec![b'x'; 16];
        assert_eq!(read_limited(&data[..], None, 16).unwrap().len(), 16);
    }
}
