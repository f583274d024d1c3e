use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Aggregate
// ============================================================================

/// Customer of the distributor. `credit_balance` is in cents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub credit_balance: i64,
}

crate::impl_identified!(Customer);

impl Customer {
    pub fn address_line(&self) -> String {
        let parts: Vec<&str> = [
            self.street.as_str(),
            self.number.as_str(),
            self.district.as_str(),
            self.city.as_str(),
            self.state.as_str(),
        ]
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect();
        parts.join(", ")
    }

    pub fn to_form(&self) -> CustomerForm {
        CustomerForm {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: format_phone(&self.phone),
            street: self.street.clone(),
            number: self.number.clone(),
            district: self.district.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
        }
    }
}

// ============================================================================
// Forms
// ============================================================================

/// Create form. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CustomerForm {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "O e-mail é obrigatório"),
        email(message = "Formato de e-mail inválido")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "O telefone é obrigatório"))]
    pub phone: String,
    #[validate(length(min = 1, message = "A rua é obrigatória"))]
    pub street: String,
    #[validate(length(min = 1, message = "O número é obrigatório"))]
    pub number: String,
    #[validate(length(min = 1, message = "O bairro é obrigatório"))]
    pub district: String,
    #[validate(length(min = 1, message = "A cidade é obrigatória"))]
    pub city: String,
    #[validate(length(min = 1, message = "O estado é obrigatório"))]
    pub state: String,
}

impl CustomerForm {
    /// Copy with surrounding whitespace removed, so blank fields fail `length`
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            street: self.street.trim().to_string(),
            number: self.number.trim().to_string(),
            district: self.district.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
        }
    }

    pub fn to_create_request(&self) -> CreateCustomerRequest {
        let f = self.trimmed();
        CreateCustomerRequest {
            name: f.name,
            email: f.email,
            phone: digits_only(&f.phone),
            street: f.street,
            number: f.number,
            district: f.district,
            city: f.city,
            state: f.state,
            credit_balance: 0,
        }
    }

    pub fn to_update_request(&self) -> UpdateCustomerRequest {
        let f = self.trimmed();
        UpdateCustomerRequest {
            name: f.name,
            email: f.email,
            phone: digits_only(&f.phone),
            street: f.street,
            number: f.number,
            district: f.district,
            city: f.city,
            state: f.state,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub credit_balance: i64,
}

/// PATCH body. Only name and e-mail are checked on edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    pub name: String,
    #[validate(email(message = "Formato de e-mail inválido"))]
    pub email: String,
    pub phone: String,
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub state: String,
}

// ============================================================================
// Phone mask
// ============================================================================

pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Brazilian phone mask: `(11) 9999-9999` up to 10 digits,
/// `(11) 99999-9999` for 11. Partial input is masked progressively.
pub fn format_phone(input: &str) -> String {
    let d: String = digits_only(input).chars().take(11).collect();
    match d.len() {
        0 => String::new(),
        1..=2 => format!("({}", d),
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::Record;
    use crate::shared::validation::validate_fields;

    fn ana() -> CustomerForm {
        CustomerForm {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            phone: "11999999999".into(),
            street: "Rua A".into(),
            number: "10".into(),
            district: "Centro".into(),
            city: "SP".into(),
            state: "SP".into(),
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate_fields(&CustomerForm::default().trimmed()).unwrap_err();
        for field in ["name", "email", "phone", "street", "number", "district", "city", "state"] {
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut form = ana();
        form.name = "   ".into();
        let errors = validate_fields(&form.trimmed()).unwrap_err();
        assert_eq!(errors.get("name"), Some("O nome é obrigatório"));
    }

    #[test]
    fn test_invalid_email() {
        let mut form = ana();
        form.email = "ana.x.com".into();
        let errors = validate_fields(&form.trimmed()).unwrap_err();
        assert_eq!(errors.get("email"), Some("Formato de e-mail inválido"));
    }

    #[test]
    fn test_create_request_payload() {
        assert!(validate_fields(&ana()).is_ok());
        let json = serde_json::to_value(ana().to_create_request()).unwrap();
        assert_eq!(json["creditBalance"], 0);
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["phone"], "11999999999");
    }

    #[test]
    fn test_phone_mask() {
        assert_eq!(format_phone("1199998888"), "(11) 9999-8888");
        assert_eq!(format_phone("11999998888"), "(11) 99999-8888");
        assert_eq!(format_phone("(11) 99999-88889"), "(11) 99999-8888");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("1"), "(1");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn test_customer_from_props_envelope() {
        let r: Record<Customer> = serde_json::from_str(
            r#"{"_id":"c1","props":{"name":"Ana","email":"ana@x.com","creditBalance":1500}}"#,
        )
        .unwrap();
        assert_eq!(r.0.id, "c1");
        assert_eq!(r.0.credit_balance, 1500);
        assert_eq!(r.0.street, "");
    }
}
