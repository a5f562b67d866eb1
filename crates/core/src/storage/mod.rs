pub mod attributes;
mod error;
mod http_mapping;
mod traits;

pub use error::{Result, StoreError};
pub use http_mapping::store_error_to_status_code;
pub use traits::KudoRepository;

/// Table name pattern: `ecskudos-<environment>-kudos`.
pub const TABLE_NAME_PREFIX: &str = "ecskudos";

/// Builds the environment-scoped table name.
///
/// ```
/// use ecskudos_core::storage::table_name;
///
/// assert_eq!(table_name("test"), "ecskudos-test-kudos");
/// ```
pub fn table_name(environment: &str) -> String {
    format!("{TABLE_NAME_PREFIX}-{environment}-kudos")
}
