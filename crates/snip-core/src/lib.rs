//! Core types and traits for the snip URL shortener.
//!
//! This crate provides the types shared by the mapping store
//! implementations and the HTTP gateway.

pub mod error;
pub mod shortcode;
pub mod store;

pub use error::{CoreError, StoreError};
pub use shortcode::{ShortCode, URL_SAFE_ALPHABET};
pub use store::{Mapping, MappingStore};
