pub mod delivery_service;
pub mod order_status;
pub mod shipping_cost_included;

pub use delivery_service::DeliveryService;
pub use order_status::OrderStatus;
pub use shipping_cost_included::ShippingCostIncluded;
