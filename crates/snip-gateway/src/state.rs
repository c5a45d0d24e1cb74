use std::sync::Arc;

use snip_core::{MappingStore, ShortCode};

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn MappingStore>,
    link_prefix: String,
}

impl AppState {
    /// `public_base_url` is the scheme and authority clients reach the
    /// redirect route under, e.g. `http://localhost:3000`.
    pub fn new(store: Arc<dyn MappingStore>, public_base_url: impl AsRef<str>) -> Self {
        Self {
            store,
            link_prefix: format!("{}/r", public_base_url.as_ref().trim_end_matches('/')),
        }
    }

    pub fn store(&self) -> &dyn MappingStore {
        self.store.as_ref()
    }

    /// The redirect link handed back for `code`.
    pub fn short_link(&self, code: &ShortCode) -> String {
        code.to_url(&self.link_prefix)
    }
}
