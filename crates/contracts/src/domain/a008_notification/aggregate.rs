use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: String,
}

crate::impl_identified!(Notification);

pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_count() {
        let items: Vec<Notification> = serde_json::from_str(
            r#"[{"id":"1","title":"Estoque baixo","message":"P13 cheio abaixo de 5","read":false},
                {"id":"2","title":"Pagamento","message":"Débito quitado","read":true}]"#,
        )
        .unwrap();
        assert_eq!(unread_count(&items), 1);
    }
}
