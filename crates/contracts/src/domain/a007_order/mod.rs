pub mod aggregate;

pub use aggregate::{
    Delivery, DeliveryPoint, OrderDeliveryDto, OrderDto, OrderEditablePropsDto, OrderId,
    OrderItemDto, OrderUpdateDeliveryDto, OrderUpdateStatusDto, Recipient, Tracking,
};
