use serde::{Deserialize, Serialize};

use crate::domain::a005_debt::aggregate::Debt;

/// Gas supplier with its debts. `GET /suppliers` sends the debts under
/// `_debts` beside the `props` envelope, so this type decodes itself
/// instead of going through `Record`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSupplier")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub debts: Vec<Debt>,
}

#[derive(Deserialize)]
struct SupplierProps {
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSupplier {
    Wrapped {
        #[serde(rename = "_id", alias = "id")]
        id: String,
        props: SupplierProps,
        #[serde(default, rename = "_debts")]
        debts: Vec<Debt>,
    },
    Flat {
        #[serde(alias = "_id")]
        id: String,
        #[serde(default)]
        name: String,
        #[serde(default, alias = "_debts")]
        debts: Vec<Debt>,
    },
}

impl From<RawSupplier> for Supplier {
    fn from(raw: RawSupplier) -> Self {
        match raw {
            RawSupplier::Wrapped { id, props, debts } => Supplier {
                id,
                name: props.name,
                debts,
            },
            RawSupplier::Flat { id, name, debts } => Supplier { id, name, debts },
        }
    }
}

impl Supplier {
    pub fn unpaid_total(&self) -> i64 {
        self.debts
            .iter()
            .filter(|d| !d.paid)
            .map(|d| d.amount)
            .sum()
    }
}

/// Suppliers that still have something to pay, with the amount due
pub fn with_open_debts(suppliers: &[Supplier]) -> Vec<(&Supplier, i64)> {
    suppliers
        .iter()
        .map(|s| (s, s.unpaid_total()))
        .filter(|(_, total)| *total > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaid_total_skips_paid_debts() {
        let raw = r#"[
            {"_id":"s1","props":{"name":"Gás Sul"},
             "_debts":[{"id":"d1","amount":1000,"paid":false},{"id":"d2","amount":500,"paid":true}]},
            {"id":"s2","name":"Gás Norte","debts":[{"id":"d3","amount":700,"paid":true}]}
        ]"#;
        let suppliers: Vec<Supplier> = serde_json::from_str(raw).unwrap();
        assert_eq!(suppliers[0].id, "s1");
        assert_eq!(suppliers[0].unpaid_total(), 1000);
        assert_eq!(suppliers[1].name, "Gás Norte");

        let open = with_open_debts(&suppliers);
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].0.name, "Gás Sul");
        assert_eq!(open[0].1, 1000);
    }
}
