//! Character field rules.
//!
//! A character needs a display name and the id of the user that owns it.
//! Everything else is optional; a missing portrait falls back to the
//! placeholder image served by the front end.

use serde::{Deserialize, Deserializer};

use crate::error::CoreError;

/// Portrait path stored when a character is saved without one.
pub const DEFAULT_PORTRAIT: &str = "/img/default-portrait.jpg";

/// Age as submitted by a client.
///
/// The browser form posts the raw input text, so a numeric string is read
/// the same as a JSON number. `null`, a missing field and blank text all
/// mean "no age". Anything else is kept as [`AgeInput::Unparsed`] and
/// rejected by [`validate_character`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AgeInput {
    #[default]
    Blank,
    Years(i64),
    Unparsed(String),
}

impl AgeInput {
    /// The age to persist. `Unparsed` never reaches storage because
    /// validation rejects it first.
    pub fn years(&self) -> Option<i64> {
        match self {
            AgeInput::Years(years) => Some(*years),
            AgeInput::Blank | AgeInput::Unparsed(_) => None,
        }
    }

    fn from_text(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return AgeInput::Blank;
        }
        match text.parse() {
            Ok(years) => AgeInput::Years(years),
            Err(_) => AgeInput::Unparsed(text.to_string()),
        }
    }
}

impl From<Option<i64>> for AgeInput {
    fn from(age: Option<i64>) -> Self {
        age.map_or(AgeInput::Blank, AgeInput::Years)
    }
}

impl<'de> Deserialize<'de> for AgeInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => AgeInput::Blank,
            Some(Raw::Int(years)) => AgeInput::Years(years),
            Some(Raw::Float(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                AgeInput::Years(f as i64)
            }
            Some(Raw::Float(f)) => AgeInput::Unparsed(f.to_string()),
            Some(Raw::Text(text)) => AgeInput::from_text(&text),
        })
    }
}

/// Validate the fields shared by character create and update.
///
/// `name` and `user_id` must contain something other than whitespace and
/// `age`, when given, must be a whole number that is not negative.
pub fn validate_character(name: &str, user_id: &str, age: &AgeInput) -> Result<(), CoreError> {
    if name.trim().is_empty() || user_id.trim().is_empty() {
        return Err(CoreError::Validation(
            "Name and userId are required".to_string(),
        ));
    }
    match age {
        AgeInput::Unparsed(raw) => Err(CoreError::Validation(format!(
            "Age must be a whole number, got '{raw}'"
        ))),
        AgeInput::Years(years) if *years < 0 => Err(CoreError::Validation(format!(
            "Age must not be negative, got {years}"
        ))),
        _ => Ok(()),
    }
}

/// Return the portrait to persist, substituting [`DEFAULT_PORTRAIT`] for a
/// missing or blank value.
pub fn resolve_portrait(portrait: Option<&str>) -> String {
    match portrait.map(str::trim) {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => DEFAULT_PORTRAIT.to_string(),
    }
}
