use crate::error::GeneratorError;
use crate::Generator;
use parking_lot::Mutex;
use snip_core::ShortCode;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

/// A generator that replays a fixed list of codes.
///
/// Once the list is used up the last code is repeated forever, which makes it
/// easy to force collisions: `["AAAA", "AAAA", "BBBB"]` collides on the second
/// draw, and a single-entry script collides on every draw after the first.
#[derive(Debug)]
pub struct ScriptedGenerator {
    remaining: Mutex<VecDeque<ShortCode>>,
    last: ShortCode,
    draws: AtomicU64,
}

impl ScriptedGenerator {
    pub fn new<I, S>(codes: I) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let remaining: VecDeque<ShortCode> =
            codes.into_iter().map(ShortCode::new_unchecked).collect();
        let last = remaining.back().cloned().ok_or(GeneratorError::EmptyScript)?;
        Ok(Self {
            remaining: Mutex::new(remaining),
            last,
            draws: AtomicU64::new(0),
        })
    }

    /// Number of codes handed out so far.
    pub fn draws(&self) -> u64 {
        self.draws.load(Ordering::SeqCst)
    }
}

impl Generator for ScriptedGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        self.draws.fetch_add(1, Ordering::SeqCst);
        self.remaining
            .lock()
            .pop_front()
            .unwrap_or_else(|| self.last.clone())
    }
}
