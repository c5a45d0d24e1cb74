use crate::error::StoreError;
use crate::shortcode::ShortCode;
use serde::{Deserialize, Serialize};

/// A snapshot of one stored mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// The identifier handed out for `long_url`.
    pub short_code: ShortCode,
    /// The original URL that was shortened.
    pub long_url: String,
    /// How many times `short_code` was resolved through the redirect path.
    pub access_count: u64,
}

/// The bidirectional long URL <-> short code store.
///
/// Implementations own all mapping data and uphold, under concurrent use:
/// - a short code maps to at most one long URL, and vice versa
/// - both directions of a mapping become visible together
/// - access counts start at zero and never lose increments
///
/// Every operation completes synchronously without I/O. Absence is a normal
/// outcome and is reported as `None` (or `0` for counts), never as an error.
pub trait MappingStore: Send + Sync + 'static {
    /// Returns the short code previously issued for `long_url`.
    fn find_short(&self, long_url: &str) -> Option<ShortCode>;

    /// Returns the long URL behind `code`.
    fn find_long(&self, code: &str) -> Option<String>;

    /// Returns the access count for `code`, `0` if the code is unknown.
    fn access_count(&self, code: &str) -> u64;

    /// Returns the short code for `long_url`, creating the mapping on first use.
    ///
    /// Repeated calls for the same URL return the same code without drawing a
    /// new identifier. Fails with [`StoreError::InvalidInput`] for an empty URL
    /// and with [`StoreError::IdentifierSpaceExhausted`] when no unused code
    /// could be drawn within the retry budget.
    fn create_mapping(&self, long_url: &str) -> Result<ShortCode, StoreError>;

    /// Counts one access of `code`. Unknown codes are ignored.
    fn record_access(&self, code: &str);

    /// Returns a snapshot of the whole mapping behind `code`.
    fn mapping(&self, code: &str) -> Option<Mapping>;

    /// Number of mappings held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
