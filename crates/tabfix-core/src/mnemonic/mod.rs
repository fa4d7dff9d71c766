//! Two-letter window codes.
//!
//! Each window in a snapshot gets a code made of the first letter of its
//! process name and a positional disambiguator. Codes are unique within one
//! snapshot and are rebuilt from scratch on every activation.

pub mod operations;
pub mod types;

pub use operations::{OVERFLOW_BUCKET, assign_mnemonics, bucket_index, disambiguators, find_match};
pub use types::Mnemonic;
