use crate::settings::StoreSettings;
use parking_lot::RwLock;
use snip_core::{Mapping, MappingStore, ShortCode, StoreError};
use snip_generator::Generator;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error, trace, warn};

/// In-memory storage entry for one short code.
#[derive(Debug)]
struct Entry {
    long_url: String,
    accesses: AtomicU64,
}

impl Entry {
    fn new(long_url: String) -> Self {
        Self {
            long_url,
            accesses: AtomicU64::new(0),
        }
    }
}

/// Both directions of every mapping. Only ever mutated as a pair.
#[derive(Debug, Default)]
struct Tables {
    by_long: HashMap<String, ShortCode>,
    by_short: HashMap<ShortCode, Entry>,
}

impl Tables {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            by_long: HashMap::with_capacity(capacity),
            by_short: HashMap::with_capacity(capacity),
        }
    }
}

/// In-memory implementation of [`MappingStore`].
///
/// Both tables sit behind a single `RwLock`, so a lookup sees either the whole
/// mapping or none of it. Creation holds the write lock across the
/// existence check, the collision-checked draw and the paired insert.
///
/// Access counters live inside the entries as atomics and are bumped under
/// the read lock: redirects never serialize on each other, only on creation.
#[derive(Debug)]
pub struct InMemoryMappingStore<G> {
    tables: RwLock<Tables>,
    generator: G,
    max_attempts: u32,
}

impl<G: Generator> InMemoryMappingStore<G> {
    /// Creates an empty store with default settings.
    pub fn new(generator: G) -> Self {
        Self::with_settings(generator, StoreSettings::default())
    }

    pub fn with_settings(generator: G, settings: StoreSettings) -> Self {
        Self {
            tables: RwLock::new(Tables::with_capacity(settings.capacity)),
            generator,
            max_attempts: settings.max_attempts.max(1),
        }
    }

    /// Draws candidates until one is not yet issued.
    ///
    /// Takes the tables by reference so the caller's write guard keeps the
    /// candidate free until it is inserted.
    fn draw_unused(&self, tables: &Tables) -> Result<ShortCode, StoreError> {
        for attempt in 1..=self.max_attempts {
            let candidate: ShortCode = self.generator.generate().into();
            if !tables.by_short.contains_key(&candidate) {
                return Ok(candidate);
            }
            warn!(
                code = %candidate,
                attempt,
                max_attempts = self.max_attempts,
                "generated short code already in use, redrawing"
            );
        }

        error!(
            attempts = self.max_attempts,
            mappings = tables.by_short.len(),
            "no unused short code within retry budget"
        );
        Err(StoreError::IdentifierSpaceExhausted {
            attempts: self.max_attempts,
        })
    }
}

impl<G: Generator> MappingStore for InMemoryMappingStore<G> {
    fn find_short(&self, long_url: &str) -> Option<ShortCode> {
        self.tables.read().by_long.get(long_url).cloned()
    }

    fn find_long(&self, code: &str) -> Option<String> {
        let tables = self.tables.read();
        let found = tables.by_short.get(code).map(|entry| entry.long_url.clone());
        trace!(code, found = found.is_some(), "resolving short code");
        found
    }

    fn access_count(&self, code: &str) -> u64 {
        self.tables
            .read()
            .by_short
            .get(code)
            .map_or(0, |entry| entry.accesses.load(Ordering::Acquire))
    }

    fn create_mapping(&self, long_url: &str) -> Result<ShortCode, StoreError> {
        if long_url.is_empty() {
            return Err(StoreError::InvalidInput(
                "long url cannot be empty".to_string(),
            ));
        }

        if let Some(code) = self.find_short(long_url) {
            trace!(code = %code, "long url already shortened");
            return Ok(code);
        }

        let mut tables = self.tables.write();

        // Another caller may have created it between the read and the write lock.
        if let Some(code) = tables.by_long.get(long_url) {
            return Ok(code.clone());
        }

        let code = self.draw_unused(&tables)?;
        tables
            .by_short
            .insert(code.clone(), Entry::new(long_url.to_owned()));
        tables.by_long.insert(long_url.to_owned(), code.clone());

        debug!(code = %code, long_url, "created mapping");
        Ok(code)
    }

    fn record_access(&self, code: &str) {
        let tables = self.tables.read();
        match tables.by_short.get(code) {
            Some(entry) => {
                let count = entry.accesses.fetch_add(1, Ordering::AcqRel) + 1;
                trace!(code, count, "recorded access");
            }
            None => trace!(code, "ignoring access to unknown short code"),
        }
    }

    fn mapping(&self, code: &str) -> Option<Mapping> {
        let tables = self.tables.read();
        let (short_code, entry) = tables.by_short.get_key_value(code)?;
        Some(Mapping {
            short_code: short_code.clone(),
            long_url: entry.long_url.clone(),
            access_count: entry.accesses.load(Ordering::Acquire),
        })
    }

    fn len(&self) -> usize {
        self.tables.read().by_short.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snip_generator::{RandomGenerator, ScriptedGenerator};
    use std::sync::Arc;

    fn scripted(codes: &[&str]) -> Arc<ScriptedGenerator> {
        Arc::new(ScriptedGenerator::new(codes.iter().copied()).unwrap())
    }

    #[test]
    fn shorten_resolve_and_count() {
        let store = InMemoryMappingStore::new(scripted(&["AbCdEfGh"]));

        let code = store.create_mapping("https://example.com/a").unwrap();
        assert_eq!(code.as_str(), "AbCdEfGh");
        assert_eq!(store.find_short("https://example.com/a"), Some(code.clone()));
        assert_eq!(
            store.find_long("AbCdEfGh").as_deref(),
            Some("https://example.com/a")
        );

        for _ in 0..3 {
            store.record_access("AbCdEfGh");
        }
        assert_eq!(store.access_count("AbCdEfGh"), 3);
    }

    #[test]
    fn create_is_idempotent_and_does_not_draw_again() {
        let generator = scripted(&["first", "second"]);
        let store = InMemoryMappingStore::new(Arc::clone(&generator));

        let first = store.create_mapping("https://example.com").unwrap();
        let second = store.create_mapping("https://example.com").unwrap();

        assert_eq!(first, second);
        assert_eq!(generator.draws(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn new_mapping_starts_at_zero() {
        let store = InMemoryMappingStore::new(RandomGenerator::new());
        let code = store.create_mapping("https://example.com").unwrap();
        assert_eq!(store.access_count(code.as_str()), 0);
    }

    #[test]
    fn empty_url_is_invalid_input() {
        let generator = scripted(&["unused"]);
        let store = InMemoryMappingStore::new(Arc::clone(&generator));

        let err = store.create_mapping("").unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert!(store.is_empty());
        assert_eq!(generator.draws(), 0);
    }

    #[test]
    fn unknown_code_is_absent_not_an_error() {
        let store = InMemoryMappingStore::new(RandomGenerator::new());

        assert_eq!(store.find_long("doesNotExist"), None);
        assert_eq!(store.access_count("doesNotExist"), 0);
        assert_eq!(store.mapping("doesNotExist"), None);
        assert_eq!(store.find_short("https://never.example"), None);
    }

    #[test]
    fn access_to_unknown_code_is_a_no_op() {
        let store = InMemoryMappingStore::new(RandomGenerator::new());

        store.record_access("doesNotExist");

        assert_eq!(store.access_count("doesNotExist"), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn collision_on_first_draw_is_redrawn() {
        let generator = scripted(&["AAAAAAAA", "AAAAAAAA", "BBBBBBBB"]);
        let store = InMemoryMappingStore::new(Arc::clone(&generator));

        let a = store.create_mapping("https://a.example").unwrap();
        let b = store.create_mapping("https://b.example").unwrap();

        assert_eq!(a.as_str(), "AAAAAAAA");
        assert_eq!(b.as_str(), "BBBBBBBB");
        assert_eq!(generator.draws(), 3);
        // The first mapping was not overwritten by the colliding draw.
        assert_eq!(store.find_long("AAAAAAAA").as_deref(), Some("https://a.example"));
        assert_eq!(store.find_long("BBBBBBBB").as_deref(), Some("https://b.example"));
    }

    #[test]
    fn exhausted_retry_budget_fails_without_overwriting() {
        let generator = scripted(&["AAAAAAAA"]);
        let settings = StoreSettings::builder().max_attempts(5).build();
        let store = InMemoryMappingStore::with_settings(Arc::clone(&generator), settings);

        store.create_mapping("https://a.example").unwrap();
        let err = store.create_mapping("https://b.example").unwrap_err();

        assert_eq!(err, StoreError::IdentifierSpaceExhausted { attempts: 5 });
        assert_eq!(generator.draws(), 6);
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_short("https://b.example"), None);
        assert_eq!(store.find_long("AAAAAAAA").as_deref(), Some("https://a.example"));
    }

    #[test]
    fn zero_attempts_still_draws_once() {
        let settings = StoreSettings::builder().max_attempts(0).build();
        let store = InMemoryMappingStore::with_settings(scripted(&["only"]), settings);

        assert_eq!(store.create_mapping("https://a.example").unwrap().as_str(), "only");
    }

    #[test]
    fn round_trip_through_both_directions() {
        let store = InMemoryMappingStore::new(RandomGenerator::new());

        for i in 0..100 {
            let url = format!("https://example.com/{i}");
            let code = store.create_mapping(&url).unwrap();
            let long = store.find_long(code.as_str()).unwrap();
            assert_eq!(long, url);
            assert_eq!(store.find_short(&long), Some(code));
        }
        assert_eq!(store.len(), 100);
    }

    #[test]
    fn long_urls_are_opaque_keys() {
        let store = InMemoryMappingStore::new(RandomGenerator::new());

        let plain = store.create_mapping("https://example.com").unwrap();
        let slash = store.create_mapping("https://example.com/").unwrap();
        let odd = store.create_mapping("not a url at all \u{1F980}").unwrap();

        assert_ne!(plain, slash);
        assert_ne!(slash, odd);
        assert_eq!(
            store.find_long(odd.as_str()).as_deref(),
            Some("not a url at all \u{1F980}")
        );
    }

    #[test]
    fn mapping_snapshot_reflects_counter() {
        let store = InMemoryMappingStore::new(scripted(&["snap"]));
        store.create_mapping("https://example.com").unwrap();
        store.record_access("snap");
        store.record_access("snap");

        let mapping = store.mapping("snap").unwrap();
        assert_eq!(
            mapping,
            Mapping {
                short_code: ShortCode::new_unchecked("snap"),
                long_url: "https://example.com".to_string(),
                access_count: 2,
            }
        );
    }

    #[test]
    fn store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryMappingStore<RandomGenerator>>();
        assert_send_sync::<InMemoryMappingStore<Arc<ScriptedGenerator>>>();
    }
}
