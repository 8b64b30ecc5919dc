//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.

pub mod store;

pub use store::InMemoryPostStore;
