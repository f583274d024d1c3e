use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

/// Per-field validation messages, keyed by the field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// First message for `field`
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// First message overall, in field name order
    pub fn first(&self) -> Option<&str> {
        self.0
            .values()
            .find_map(|messages| messages.first())
            .map(String::as_str)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (field, field_errors) in errors.field_errors() {
            for e in field_errors.iter() {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                out.insert(&field, message);
            }
        }
        out
    }
}

/// Runs the derived rules and folds failures into [`FieldErrors`]
pub fn validate_fields<T: Validate>(value: &T) -> Result<(), FieldErrors> {
    value.validate().map_err(|e| FieldErrors::from(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "O nome é obrigatório"))]
        name: String,
        #[validate(email(message = "Formato de e-mail inválido"))]
        email: String,
    }

    #[test]
    fn test_collects_messages_per_field() {
        let s = Sample { name: String::new(), email: "nope".into() };
        let errors = validate_fields(&s).unwrap_err();
        assert_eq!(errors.get("name"), Some("O nome é obrigatório"));
        assert_eq!(errors.get("email"), Some("Formato de e-mail inválido"));
        assert_eq!(errors.first(), Some("Formato de e-mail inválido"));
    }

    #[test]
    fn test_valid_value_passes() {
        let s = Sample { name: "Ana".into(), email: "ana@x.com".into() };
        assert!(validate_fields(&s).is_ok());
    }
}
