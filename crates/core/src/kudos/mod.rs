mod error;
mod translate;
mod types;

pub use error::KudoError;
pub use translate::{translate_event, Translation, OPENED_ACTION};
pub use types::{ContributionType, Kudo};
