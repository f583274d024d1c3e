use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::enums::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
}

crate::impl_identified!(User);

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    pub name: String,
    #[validate(email(message = "Insira um email válido"))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter pelo menos 6 caracteres"))]
    pub password: String,
    pub role: Role,
}

impl Default for CreateUserRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Deliveryman,
        }
    }
}

/// Deliverymen among all users, for selects
pub fn deliverymen(users: &[User]) -> Vec<User> {
    users
        .iter()
        .filter(|u| u.role == Role::Deliveryman)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::{into_items, Record};

    #[test]
    fn test_users_from_props_envelope() {
        let records: Vec<Record<User>> = serde_json::from_str(
            r#"[{"_id":"1","props":{"name":"Ana","email":"a@x.com","role":"ADMIN"}},
                {"_id":"2","props":{"name":"Beto","email":"b@x.com","role":"DELIVERYMAN"}}]"#,
        )
        .unwrap();
        let users = into_items(records);
        let only = deliverymen(&users);
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].id, "2");
    }
}
