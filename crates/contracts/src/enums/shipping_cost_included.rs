use serde::{Deserialize, Serialize};

/// Какая часть доставки уже включена в цену товаров предзаказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingCostIncluded {
    /// Включена только международная часть
    Foreign,
    /// Включена полностью
    Full,
    /// Не включена
    Not,
}

impl ShippingCostIncluded {
    /// Код значения на проводе
    pub fn code(&self) -> &'static str {
        match self {
            ShippingCostIncluded::Foreign => "FOREIGN",
            ShippingCostIncluded::Full => "FULL",
            ShippingCostIncluded::Not => "NOT",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShippingCostIncluded::Foreign => "Включена доставка до склада",
            ShippingCostIncluded::Full => "Включена полностью",
            ShippingCostIncluded::Not => "Не включена",
        }
    }

    pub fn all() -> Vec<ShippingCostIncluded> {
        vec![
            ShippingCostIncluded::Foreign,
            ShippingCostIncluded::Full,
            ShippingCostIncluded::Not,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FOREIGN" => Some(ShippingCostIncluded::Foreign),
            "FULL" => Some(ShippingCostIncluded::Full),
            "NOT" => Some(ShippingCostIncluded::Not),
            _ => None,
        }
    }
}
