//! Вариация (позиция каталога): условия продажи одного продукта
//! внутри публикации: цена, количество, скидка, рассрочка.

pub mod aggregate;
pub mod pricing;

pub use aggregate::{
    CatalogItemDto, CatalogItemId, CatalogItemPublishDto, CatalogItemUpdateDto, CreditInfo,
    CreditPayment, Discount, MaxRatingDto, Quantity,
};
