use serde::{Deserialize, Serialize};

/// Role of a signed-in user. Navigation and route access are derived from it
/// in `system::routes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Deliveryman,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Deliveryman => "DELIVERYMAN",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::Deliveryman => "Entregador",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![Role::Admin, Role::Deliveryman]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ADMIN" => Some(Role::Admin),
            "DELIVERYMAN" => Some(Role::Deliveryman),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}
