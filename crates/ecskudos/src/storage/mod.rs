//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! [`KudoRepository`](ecskudos_core::storage::KudoRepository) trait.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always compiled. The server falls back to it
//! when the `dynamodb` feature is disabled, and tests use it directly.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p ecskudos
//! ```
//!
//! Build with in-memory storage only:
//! ```bash
//! cargo build -p ecskudos --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[cfg_attr(feature = "dynamodb", allow(unused_imports))]
pub use inmemory::InMemoryRepository;
