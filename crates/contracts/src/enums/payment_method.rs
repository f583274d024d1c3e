use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Dinheiro,
    Cartao,
    CartaoCredito,
    Pix,
    /// Sale recorded as a customer debt
    Fiado,
    Transferencia,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Dinheiro => "DINHEIRO",
            PaymentMethod::Cartao => "CARTAO",
            PaymentMethod::CartaoCredito => "CARTAO_CREDITO",
            PaymentMethod::Pix => "PIX",
            PaymentMethod::Fiado => "FIADO",
            PaymentMethod::Transferencia => "TRANSFERENCIA",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Dinheiro => "Dinheiro",
            PaymentMethod::Cartao => "Cartão de débito",
            PaymentMethod::CartaoCredito => "Cartão de crédito",
            PaymentMethod::Pix => "Pix",
            PaymentMethod::Fiado => "Venda a receber",
            PaymentMethod::Transferencia => "Transferência",
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::Dinheiro,
            PaymentMethod::Cartao,
            PaymentMethod::CartaoCredito,
            PaymentMethod::Pix,
            PaymentMethod::Fiado,
            PaymentMethod::Transferencia,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "DINHEIRO" => Some(PaymentMethod::Dinheiro),
            "CARTAO" => Some(PaymentMethod::Cartao),
            "CARTAO_CREDITO" => Some(PaymentMethod::CartaoCredito),
            "PIX" => Some(PaymentMethod::Pix),
            "FIADO" => Some(PaymentMethod::Fiado),
            "TRANSFERENCIA" => Some(PaymentMethod::Transferencia),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_card_code() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CartaoCredito).unwrap(),
            "\"CARTAO_CREDITO\""
        );
        for m in PaymentMethod::all() {
            assert_eq!(PaymentMethod::from_code(m.code()), Some(m));
        }
    }

    #[test]
    fn test_fiado_label() {
        assert_eq!(PaymentMethod::Fiado.display_name(), "Venda a receber");
    }
}
