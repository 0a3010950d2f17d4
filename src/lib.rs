//! # Passmint - Tiny Password Generator
//!
//! Passmint is a small desktop widget for generating random passwords: pick a
//! length, choose whether digits and symbols are allowed, and copy the result
//! to the clipboard with one click.
//!
//! ## Overview
//!
//! The generation logic lives in [`passgen`] and is independent of the UI:
//! - The pool always contains the 52 Latin letters.
//! - Digits (`0-9`) and a fixed 28-symbol set are appended when enabled.
//! - Each output position is drawn uniformly at random, with replacement.
//!
//! Passwords are drawn from the thread-local general-purpose RNG. This is a
//! convenience generator, not a cryptographic one; do not rely on it for
//! high-value secrets.
//!
//! ## Quick Start Example
//!
//! ```
//! use passmint::{generate_password, PasswordConfig};
//!
//! let config = PasswordConfig {
//!     length: 12,
//!     include_digits: true,
//!     include_symbols: false,
//! };
//!
//! let password = generate_password(&config).unwrap();
//!
//! assert_eq!(password.chars().count(), 12);
//! assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
//! ```

pub mod passgen;

pub use passgen::{GenerateError, PasswordConfig, generate_password};
