//! Эндпоинты заказов

use contracts::domain::a007_order::{
    OrderDto, OrderEditablePropsDto, OrderUpdateDeliveryDto, OrderUpdateStatusDto,
};

use crate::shared::api::{ApiError, Endpoint, HttpMethod, IdParams};
use crate::shared::cache::{CacheTag, MutationDef, QueryDef, TagKind};

fn order_tag(order_id: &str) -> CacheTag {
    CacheTag::item(TagKind::Order, order_id)
}

/// GET /admin/order?id=
pub fn get_order(order_id: &str) -> Result<QueryDef<OrderDto>, ApiError> {
    let endpoint =
        Endpoint::get("getOrder", "/admin/order").with_params(&IdParams { id: order_id })?;
    let tag = order_tag(order_id);
    Ok(QueryDef::new(endpoint, move |_| vec![tag.clone()]))
}

/// GET /admin/order/editable?id=
///
/// Набор разрешённых правок зависит от статуса, поэтому запрос
/// перечитывается вместе с заказом.
pub fn get_order_editable(order_id: &str) -> Result<QueryDef<OrderEditablePropsDto>, ApiError> {
    let endpoint = Endpoint::get("getOrderEditable", "/admin/order/editable")
        .with_params(&IdParams { id: order_id })?;
    let tag = order_tag(order_id);
    Ok(QueryDef::new(endpoint, move |_| vec![tag.clone()]))
}

/// PUT /admin/order/status
pub fn update_order_status(data: &OrderUpdateStatusDto) -> Result<MutationDef, ApiError> {
    let endpoint = Endpoint::new("updateOrderStatus", HttpMethod::Put, "/admin/order/status")
        .with_body(data)?;
    Ok(MutationDef::new(endpoint, vec![order_tag(data.id.as_str())]))
}

/// PUT /admin/order/delivery
pub fn update_order_delivery(data: &OrderUpdateDeliveryDto) -> Result<MutationDef, ApiError> {
    let endpoint = Endpoint::new("updateOrderDelivery", HttpMethod::Put, "/admin/order/delivery")
        .with_body(data)?;
    Ok(MutationDef::new(endpoint, vec![order_tag(data.id.as_str())]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_order::{Delivery, OrderId, Recipient};
    use contracts::enums::{DeliveryService, OrderStatus};

    #[test]
    fn test_order_queries_share_instance_tag() {
        let order = get_order("o1").unwrap();
        assert_eq!(order.endpoint.path_and_query(), "/admin/order?id=o1");
        let editable = get_order_editable("o1").unwrap();
        assert_eq!(editable.endpoint.cache_key(), "getOrderEditable:id=o1");
    }

    #[test]
    fn test_updates_invalidate_order() {
        let status = update_order_status(&OrderUpdateStatusDto {
            id: OrderId::from("o1"),
            status: OrderStatus::Finished,
        })
        .unwrap();
        assert_eq!(status.invalidates, vec![CacheTag::item(TagKind::Order, "o1")]);
        assert_eq!(status.endpoint.body.as_ref().unwrap()["status"], "FINISHED");

        let delivery = update_order_delivery(&OrderUpdateDeliveryDto {
            id: OrderId::from("o1"),
            delivery: Delivery {
                recipient: Recipient {
                    full_name: "Иван Петров".to_string(),
                    phone: "+79991234567".to_string(),
                },
                service: DeliveryService::SelfPickup,
                point: None,
            },
        })
        .unwrap();
        assert_eq!(delivery.invalidates, vec![CacheTag::item(TagKind::Order, "o1")]);
        assert_eq!(
            delivery.endpoint.body.as_ref().unwrap()["delivery"]["recipient"]["fullName"],
            "Иван Петров"
        );
    }
}
