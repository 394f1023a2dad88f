use serde::{Deserialize, Serialize};

/// Статус заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Cancelled,
    Unpaid,
    Accepted,
    Delivery,
    ReadyForPickup,
    Finished,
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Unpaid => "UNPAID",
            OrderStatus::Accepted => "ACCEPTED",
            OrderStatus::Delivery => "DELIVERY",
            OrderStatus::ReadyForPickup => "READY_FOR_PICKUP",
            OrderStatus::Finished => "FINISHED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Cancelled => "Отменён",
            OrderStatus::Unpaid => "Не оплачен",
            OrderStatus::Accepted => "Принят",
            OrderStatus::Delivery => "Доставляется",
            OrderStatus::ReadyForPickup => "Готов к выдаче",
            OrderStatus::Finished => "Завершён",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CANCELLED" => Some(OrderStatus::Cancelled),
            "UNPAID" => Some(OrderStatus::Unpaid),
            "ACCEPTED" => Some(OrderStatus::Accepted),
            "DELIVERY" => Some(OrderStatus::Delivery),
            "READY_FOR_PICKUP" => Some(OrderStatus::ReadyForPickup),
            "FINISHED" => Some(OrderStatus::Finished),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_for_pickup_wire_name() {
        let json = serde_json::to_string(&OrderStatus::ReadyForPickup).unwrap();
        assert_eq!(json, "\"READY_FOR_PICKUP\"");
        let parsed: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, OrderStatus::ReadyForPickup);
        assert_eq!(OrderStatus::from_code(parsed.code()), Some(parsed));
    }
}
