use crate::error::GeneratorError;
use crate::Generator;
use rand::Rng;
use snip_core::{ShortCode, URL_SAFE_ALPHABET};

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_LENGTH: usize = 8;

const MAX_LENGTH: usize = 64;

/// Draws fixed-length codes uniformly from [`URL_SAFE_ALPHABET`].
///
/// Eight symbols give 2^48 codes, so collisions are rare at any realistic
/// scale. They are still possible, and the store redraws when one happens.
#[derive(Debug, Clone, Copy)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    /// Creates a generator producing codes of [`DEFAULT_LENGTH`] symbols.
    pub fn new() -> Self {
        Self {
            length: DEFAULT_LENGTH,
        }
    }

    /// Creates a generator producing codes of `length` symbols.
    pub fn with_length(length: usize) -> Result<Self, GeneratorError> {
        if length == 0 || length > MAX_LENGTH {
            return Err(GeneratorError::InvalidLength {
                length,
                max_length: MAX_LENGTH,
            });
        }
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let mut rng = rand::rng();
        let code: String = (0..self.length)
            .map(|_| URL_SAFE_ALPHABET[rng.random_range(0..URL_SAFE_ALPHABET.len())] as char)
            .collect();
        ShortCode::new_unchecked(code)
    }
}
