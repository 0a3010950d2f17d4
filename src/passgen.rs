use rand::Rng;
use thiserror::Error;

/// Base alphabet, uppercase then lowercase. Always part of the pool.
const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const DIGITS: &str = "0123456789";

/// Fixed symbol set (28 characters).
const SYMBOLS: &str = "!#$%&'()*+-/:;<=>?@[]^_`{|}~";

/// User-controlled generation parameters.
///
/// Letters are always included, so any combination of the two flags yields a
/// non-empty pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordConfig {
    pub length: usize,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            include_digits: false,
            include_symbols: false,
        }
    }
}

impl PasswordConfig {
    pub const MIN_LENGTH: usize = 6;
    pub const MAX_LENGTH: usize = 100;
    pub const DEFAULT_LENGTH: usize = 8;

    /// Sets the length, clamped to `[MIN_LENGTH, MAX_LENGTH]`.
    ///
    /// This is the UI-facing policy; [`generate_password`] itself honours any
    /// positive length and does not assume the caller clamped it.
    pub fn set_length(&mut self, length: usize) {
        self.length = length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH);
    }

    /// Characters eligible for selection under this configuration.
    pub fn charset(&self) -> Vec<char> {
        let mut charset: Vec<char> = LETTERS.chars().collect();

        if self.include_digits {
            charset.extend(DIGITS.chars());
        }

        if self.include_symbols {
            charset.extend(SYMBOLS.chars());
        }

        charset
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("password length must be at least 1")]
    EmptyLength,
}

/// Draws `config.length` characters from the configured pool, uniformly at
/// random and with replacement.
///
/// Repeated characters are expected, and no character class is guaranteed to
/// appear: a password generated with `include_digits` may still contain no
/// digit. Uses the thread-local general-purpose RNG; no cryptographic
/// strength is guaranteed.
pub fn generate_password(config: &PasswordConfig) -> Result<String, GenerateError> {
    if config.length == 0 {
        return Err(GenerateError::EmptyLength);
    }

    let charset = config.charset();

    let mut rng = rand::rng();
    let password: String = (0..config.length)
        .map(|_| {
            let idx = rng.random_range(0..charset.len());
            charset[idx]
        })
        .collect();

    Ok(password)
}
