//! Room codes for the multi-device mode.
//!
//! A room code is a local label only. Generating or joining one flips the
//! session context into multi-device mode; no state is exchanged with other
//! devices.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, ValidationError};

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Six uppercase alphanumeric characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomCode(String);

impl RoomCode {
    pub const LEN: usize = 6;

    /// Draw a fresh code.
    pub fn generate(rng: &mut GameRng) -> Self {
        let code = (0..Self::LEN)
            .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect();
        Self(code)
    }

    /// Parse user input. Surrounding whitespace is ignored and letters are
    /// normalized to uppercase.
    ///
    /// ```
    /// use driveplay::session::RoomCode;
    ///
    /// assert_eq!(RoomCode::parse(" ab12cd ").unwrap().as_str(), "AB12CD");
    /// assert!(RoomCode::parse("AB-12C").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let valid = trimmed.chars().count() == Self::LEN
            && trimmed.chars().all(|c| c.is_ascii_alphanumeric());
        if !valid {
            return Err(ValidationError::InvalidRoomCode(input.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RoomCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RoomCode> for String {
    fn from(code: RoomCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_codes_parse_back() {
        let mut rng = GameRng::new(7);
        for _ in 0..50 {
            let code = RoomCode::generate(&mut rng);
            assert_eq!(code.as_str().len(), RoomCode::LEN);
            assert_eq!(RoomCode::parse(code.as_str()), Ok(code));
        }
    }

    #[test]
    fn test_generation_is_seeded() {
        let a = RoomCode::generate(&mut GameRng::new(3));
        let b = RoomCode::generate(&mut GameRng::new(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for input in ["", "ABC", "ABCDEFG", "ABC DE", "ÄBCDEF", "12345!"] {
            assert_eq!(
                RoomCode::parse(input),
                Err(ValidationError::InvalidRoomCode(input.to_string())),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: RoomCode = serde_json::from_str("\"q7w8e9\"").unwrap();
        assert_eq!(ok.as_str(), "Q7W8E9");
        assert!(serde_json::from_str::<RoomCode>("\"nope\"").is_err());
    }
}
