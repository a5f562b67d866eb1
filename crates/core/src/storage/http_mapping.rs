//! Pure functions for mapping store errors to HTTP status codes.

use super::StoreError;

/// Maps a [`StoreError`] to an HTTP status code.
///
/// Every store failure is a server-side problem the client cannot fix, so
/// all variants map to 500 (Internal Server Error).
///
/// # Examples
///
/// ```
/// use ecskudos_core::storage::{store_error_to_status_code, StoreError};
///
/// let error = StoreError::QueryFailed("Throughput exceeded, please retry".to_string());
/// assert_eq!(store_error_to_status_code(&error), 500);
/// ```
pub fn store_error_to_status_code(error: &StoreError) -> u16 {
    match error {
        StoreError::ConnectionFailed(_)
        | StoreError::QueryFailed(_)
        | StoreError::Serialization(_)
        | StoreError::InvalidData(_) => 500,
    }
}
