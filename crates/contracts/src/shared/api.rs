//! Wire helpers shared by every API call.
//!
//! The upstream API is inconsistent about how it wraps entities. Depending on
//! the endpoint a record arrives as:
//!   - `{ "_id": "...", "props": { ... } }`
//!   - `{ "_id": "...", "_props": { ... } }`
//!   - a flat object carrying its own `id`
//!
//! [`Record`] accepts all three and always yields the entity with `id` filled.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Entity that carries its own identifier
pub trait Identified {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// Implements [`Identified`] for structs with a `pub id: String` field
#[macro_export]
macro_rules! impl_identified {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::shared::api::Identified for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
                fn set_id(&mut self, id: String) {
                    self.id = id;
                }
            }
        )+
    };
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped {
        #[serde(rename = "_id", alias = "id")]
        id: String,
        #[serde(alias = "_props")]
        props: T,
    },
    Flat(T),
}

/// One entity decoded from any of the upstream envelope shapes
#[derive(Debug, Clone, PartialEq)]
pub struct Record<T>(pub T);

impl<T> Record<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<'de, T> Deserialize<'de> for Record<T>
where
    T: Deserialize<'de> + Identified,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Envelope::<T>::deserialize(deserializer)? {
            Envelope::Wrapped { id, mut props } => {
                if props.id().is_empty() {
                    props.set_id(id);
                }
                Ok(Record(props))
            }
            Envelope::Flat(item) => Ok(Record(item)),
        }
    }
}

/// Unwraps a decoded page of records
pub fn into_items<T>(records: Vec<Record<T>>) -> Vec<T> {
    records.into_iter().map(Record::into_inner).collect()
}

/// `{ id, name }` reference embedded in other records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Monetary total returned as a bare number, a float, or `{ value }`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CentsValue(pub i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCents {
    Int(i64),
    Float(f64),
    Object {
        #[serde(alias = "balance", alias = "total", alias = "amount")]
        value: f64,
    },
}

impl<'de> Deserialize<'de> for CentsValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawCents::deserialize(deserializer)? {
            RawCents::Int(v) => CentsValue(v),
            RawCents::Float(v) | RawCents::Object { value: v } => CentsValue(v.round() as i64),
        })
    }
}

/// Error body returned by the API and by the gateway.
///
/// `message` may be a string or a list of strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Text shown to the user: `error`, then `message`, then `fallback`
    pub fn into_message(self, fallback: &str) -> String {
        if let Some(error) = self.error.filter(|e| !e.trim().is_empty()) {
            return error;
        }
        match self.message {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => s,
            Some(serde_json::Value::Array(items)) => {
                let parts: Vec<String> = items
                    .into_iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect();
                if parts.is_empty() {
                    fallback.to_string()
                } else {
                    parts.join("; ")
                }
            }
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Deserialize)]
    struct Item {
        #[serde(default, alias = "_id")]
        id: String,
        name: String,
    }

    crate::impl_identified!(Item);

    #[test]
    fn test_record_props_envelope() {
        let r: Record<Item> =
            serde_json::from_str(r#"{"_id":"a1","props":{"name":"Ana"}}"#).unwrap();
        assert_eq!(r.0, Item { id: "a1".into(), name: "Ana".into() });
    }

    #[test]
    fn test_record_underscore_props_envelope() {
        let r: Record<Item> =
            serde_json::from_str(r#"{"_id":"t9","_props":{"name":"Gás"}}"#).unwrap();
        assert_eq!(r.0.id, "t9");
    }

    #[test]
    fn test_record_keeps_inner_id() {
        let r: Record<Item> =
            serde_json::from_str(r#"{"_id":"outer","props":{"id":"inner","name":"x"}}"#).unwrap();
        assert_eq!(r.0.id, "inner");
    }

    #[test]
    fn test_record_flat() {
        let items: Vec<Record<Item>> =
            serde_json::from_str(r#"[{"id":"1","name":"a"},{"_id":"2","name":"b"}]"#).unwrap();
        let items = into_items(items);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[1].id, "2");
    }

    #[test]
    fn test_error_body_prefers_error() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"E-mail já cadastrado","message":"x"}"#).unwrap();
        assert_eq!(body.into_message("falha"), "E-mail já cadastrado");
    }

    #[test]
    fn test_error_body_message_list() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":["nome vazio","email inválido"]}"#).unwrap();
        assert_eq!(body.into_message("falha"), "nome vazio; email inválido");
    }

    #[test]
    fn test_error_body_fallback() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_message("falha"), "falha");
    }

    #[test]
    fn test_cents_value_shapes() {
        let a: CentsValue = serde_json::from_str("1250").unwrap();
        let b: CentsValue = serde_json::from_str("1250.0").unwrap();
        let c: CentsValue = serde_json::from_str(r#"{"balance":99}"#).unwrap();
        assert_eq!((a.0, b.0, c.0), (1250, 1250, 99));
    }
}
