//! Shared types for the typo detector.
//!
//! - [`character`] -- letter, whitespace and punctuation classification
//! - [`case`] -- lowercase forms used for known-word lookup and repeats
//! - [`word`] -- the [`Word`](word::Word) token with location and score

pub mod case;
pub mod character;
pub mod word;

pub use word::Word;
