use serde::{Deserialize, Serialize};

/// Способ доставки заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryService {
    /// Самовывоз
    SelfPickup,
    /// Доставка СДЭК до пункта выдачи
    Cdek,
}

impl DeliveryService {
    pub fn code(&self) -> &'static str {
        match self {
            DeliveryService::SelfPickup => "SELF_PICKUP",
            DeliveryService::Cdek => "CDEK",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryService::SelfPickup => "Самовывоз",
            DeliveryService::Cdek => "СДЭК",
        }
    }

    /// Требуется ли пункт выдачи
    pub fn requires_point(&self) -> bool {
        matches!(self, DeliveryService::Cdek)
    }

    pub fn all() -> Vec<DeliveryService> {
        vec![DeliveryService::SelfPickup, DeliveryService::Cdek]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SELF_PICKUP" => Some(DeliveryService::SelfPickup),
            "CDEK" => Some(DeliveryService::Cdek),
            _ => None,
        }
    }
}
