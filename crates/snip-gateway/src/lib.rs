//! HTTP front end for the snip mapping store.
//!
//! Translates the `/shorten`, `/r/{code}` and `/analytics/{code}` routes into
//! [`MappingStore`](snip_core::MappingStore) calls and their results into
//! JSON payloads or redirects.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
