use crate::domain::common::AdminMeta;
use crate::enums::{DeliveryService, OrderStatus};
use crate::string_id;
use crate::system::users::UserDto;
use serde::{Deserialize, Serialize};

string_id!(
    /// Уникальный идентификатор заказа
    OrderId
);

/// Получатель заказа
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub full_name: String,
    pub phone: String,
}

/// Пункт выдачи службы доставки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPoint {
    pub address: String,
    pub code: String,
}

/// Параметры доставки заказа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub recipient: Recipient,
    pub service: DeliveryService,
    pub point: Option<DeliveryPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracking {
    pub code: String,
    pub link: String,
}

/// Доставка в ответе API, дополненная трек-номером
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDeliveryDto {
    #[serde(flatten)]
    pub delivery: Delivery,
    pub tracking: Option<Tracking>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemDto {
    pub id: String,
    pub title: String,
    pub image: String,
    pub quantity: u64,
    pub sum: u64,
}

/// Заказ покупателя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: OrderId,
    #[serde(flatten)]
    pub meta: AdminMeta,
    pub user: UserDto,
    pub status: OrderStatus,
    pub delivery: Option<OrderDeliveryDto>,
    pub items: Vec<OrderItemDto>,
}

impl OrderDto {
    /// Итоговая сумма по позициям
    pub fn total(&self) -> u64 {
        self.items.iter().fold(0, |acc, item| acc.saturating_add(item.sum))
    }
}

/// Что администратор может менять в заказе на текущем этапе
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEditablePropsDto {
    pub delivery: bool,
    pub statuses: Vec<OrderStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpdateStatusDto {
    pub id: OrderId,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpdateDeliveryDto {
    pub id: OrderId,
    pub delivery: Delivery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_delivery_flattened() {
        let json = r#"{
            "id": "o1",
            "createdAt": "2026-03-01T09:00:00Z",
            "updatedAt": "2026-03-01T09:30:00Z",
            "user": {
                "id": "u1",
                "createdAt": "2026-01-01T00:00:00Z",
                "updatedAt": "2026-01-01T00:00:00Z",
                "email": "buyer@example.com",
                "verified": true,
                "vkId": null
            },
            "status": "DELIVERY",
            "delivery": {
                "recipient": {"fullName": "Иван Петров", "phone": "+79991234567"},
                "service": "CDEK",
                "point": {"address": "Москва, Тверская 1", "code": "MSK12"},
                "tracking": null
            },
            "items": [
                {"id": "i1", "title": "Кружка", "image": "a.webp", "quantity": 2, "sum": 1200},
                {"id": "i2", "title": "Блюдце", "image": "b.webp", "quantity": 1, "sum": 300}
            ]
        }"#;
        let order: OrderDto = serde_json::from_str(json).unwrap();
        let delivery = order.delivery.as_ref().unwrap();
        assert_eq!(delivery.delivery.service, DeliveryService::Cdek);
        assert_eq!(delivery.delivery.recipient.full_name, "Иван Петров");
        assert_eq!(order.total(), 1500);
    }
}
