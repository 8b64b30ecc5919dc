//! # Quill Core
//!
//! The domain layer of Quill: the post lifecycle and the store port.
//! This crate has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
