//! NewAnimal - a validated, not yet identified animal.
//!
//! Request bodies arrive as loose JSON. Parsing them into `NewAnimal` is the
//! only way to obtain something the registry will store, so a failed parse
//! is the validation rejection.

use serde_json::{Map, Value};
use thiserror::Error;

/// Why a candidate animal was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected a JSON object")]
    NotAnObject,
    #[error("`{0}` is required")]
    Missing(&'static str),
    #[error("`{0}` must be a string")]
    NotAString(&'static str),
    #[error("`{0}` must not be empty")]
    Empty(&'static str),
    #[error("`{0}` must be an array")]
    NotAnArray(&'static str),
}

/// A candidate animal that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnimal {
    pub name: String,
    pub species: String,
    pub diet: String,
    /// Traits in submitted order. Members that were not JSON strings are
    /// held as their compact JSON text: `3` becomes `"3"` and `{"a":1}`
    /// becomes `"{\"a\":1}"`, so they do not round-trip to their
    /// submitted type.
    pub personality_traits: Vec<String>,
}

impl NewAnimal {
    /// Parse and validate a JSON candidate.
    ///
    /// Checks run in field order (`name`, `species`, `diet`,
    /// `personalityTraits`) and the first failure is returned. Trait members
    /// are not type-checked: strings are kept as-is, anything else is kept
    /// as its JSON text.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let name = required_string(object, "name")?;
        let species = required_string(object, "species")?;
        let diet = required_string(object, "diet")?;

        let personality_traits = match object.get("personalityTraits") {
            None | Some(Value::Null) => return Err(ValidationError::Missing("personalityTraits")),
            Some(Value::Array(items)) => items.iter().map(trait_text).collect(),
            Some(_) => return Err(ValidationError::NotAnArray("personalityTraits")),
        };

        Ok(Self {
            name,
            species,
            diet,
            personality_traits,
        })
    }
}

impl TryFrom<&Value> for NewAnimal {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

/// Whether `value` would be accepted as a new animal.
pub fn validate(value: &Value) -> bool {
    NewAnimal::from_json(value).is_ok()
}

fn required_string(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(ValidationError::Missing(field)),
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::Empty(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::NotAString(field)),
    }
}

fn trait_text(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
