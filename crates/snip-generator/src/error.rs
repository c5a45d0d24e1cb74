use thiserror::Error;

/// Errors returned when configuring a generator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid code length {length}; expected 1..={max_length}")]
    InvalidLength { length: usize, max_length: usize },
    #[error("a scripted generator needs at least one code")]
    EmptyScript,
}
