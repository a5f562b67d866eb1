//! In-memory storage backend.
//!
//! Stores kudos in a HashMap keyed by user, wrapped in `Arc<RwLock<_>>`.
//! Data is not persisted and is lost when the repository is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use ecskudos::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

// Only the tests use this backend when DynamoDB is compiled in.
#![cfg_attr(feature = "dynamodb", allow(dead_code))]

mod repository;

pub use repository::InMemoryRepository;
