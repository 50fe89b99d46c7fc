//  ____  ____                ____
// |  _ \|  _ \ __ _ ___ ___ / ___| ___ _ __
// | |_) | |_) / _` / __/ __| |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \ |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/\____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-02
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use std::fmt;
use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
// Quotes and backslash are left out so downstream consumers never need
// escaping.
pub const SYMBOLS: &str = "!@#$%^&*()_-+=[]{};:<>,./?|`~";

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 64;

// 字符类选择, one independent toggle per class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharSelection {
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for CharSelection {
    fn default() -> Self {
        Self {
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: false,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum GenError {
    NoCharacterClassSelected,
    InvalidLength(usize),
    RandomSource(String),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::NoCharacterClassSelected => {
                write!(f, "At least one character class must be selected")
            }
            GenError::InvalidLength(length) => {
                write!(
                    f,
                    "Password length must be between {} and {}, got {}",
                    MIN_LENGTH, MAX_LENGTH, length
                )
            }
            GenError::RandomSource(msg) => {
                write!(f, "Secure random source failure: {}", msg)
            }
        }
    }
}

impl std::error::Error for GenError {}

/// Concatenate the enabled class alphabets in fixed order:
/// uppercase, lowercase, digits, symbols.
pub fn build_alphabet(selection: &CharSelection) -> String {
    let mut alphabet = String::new();
    if selection.include_uppercase { alphabet.push_str(UPPERCASE); }
    if selection.include_lowercase { alphabet.push_str(LOWERCASE); }
    if selection.include_digits { alphabet.push_str(DIGITS); }
    if selection.include_symbols { alphabet.push_str(SYMBOLS); }
    alphabet
}

/// Generate a password of `length` characters drawn from the union alphabet
/// of the selected classes.
///
/// Each position is an independent uniform draw with replacement, so repeats
/// are expected and no selected class is guaranteed to appear in the output.
pub fn generate(selection: &CharSelection, length: usize) -> Result<String, GenError> {
    let alphabet: Vec<char> = build_alphabet(selection).chars().collect();
    if alphabet.is_empty() {
        return Err(GenError::NoCharacterClassSelected);
    }
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(GenError::InvalidLength(length));
    }

    let mut rng = OsRng;
    let mut password = String::with_capacity(length);
    for _ in 0..length {
        let idx = secure_index(&mut rng, alphabet.len())?;
        password.push(alphabet[idx]);
    }
    Ok(password)
}

// Unbiased bounded draw from the OS CSPRNG. Rejection sampling: values past
// the largest multiple of `bound` are redrawn so the modulo stays uniform.
fn secure_index(rng: &mut OsRng, bound: usize) -> Result<usize, GenError> {
    let bound = bound as u32;
    let zone = (u32::MAX / bound) * bound;
    loop {
        let mut buf = [0u8; 4];
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| GenError::RandomSource(e.to_string()))?;
        let value = u32::from_le_bytes(buf);
        if value < zone {
            return Ok((value % bound) as usize);
        }
    }
}
