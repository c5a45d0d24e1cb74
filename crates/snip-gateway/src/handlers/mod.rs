mod health;
mod url;

pub use health::health_handler;
pub use url::{analytics_handler, redirect_handler, shorten_handler};
