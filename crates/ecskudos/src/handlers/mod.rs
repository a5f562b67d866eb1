pub mod contributions;
pub mod error;
pub mod health;
pub mod kudos;
pub mod preflight;

pub use error::AppError;
