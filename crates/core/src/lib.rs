//! Functional core for ecskudos.
//!
//! Everything in this crate is pure: webhook verification and parsing, the
//! translation of webhook events into kudos, and the storage contracts that
//! the server's backends implement.

pub mod kudos;
pub mod serde;
pub mod storage;
pub mod webhook;
