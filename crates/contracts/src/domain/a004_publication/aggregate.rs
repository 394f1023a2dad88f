use crate::domain::a001_category::{CategoryDto, CategoryId};
use crate::domain::a003_preorder::{PreorderDto, PreorderId};
use crate::domain::a005_catalog_item::{CatalogItemDto, CatalogItemPublishDto};
use crate::domain::common::AdminMeta;
use crate::enums::ShippingCostIncluded;
use crate::string_id;
use serde::{Deserialize, Serialize};

string_id!(
    /// Уникальный идентификатор публикации
    PublicationId
);

/// Вид публикации: товар в наличии или под заказ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicationKind {
    Stock,
    Preorder,
}

impl PublicationKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            PublicationKind::Stock => "В наличии",
            PublicationKind::Preorder => "Предзаказ",
        }
    }
}

/// Публикация в ответе API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationDto {
    pub id: PublicationId,
    #[serde(flatten)]
    pub meta: AdminMeta,
    pub link: String,
    pub category: CategoryDto,
    pub preorder: Option<PreorderDto>,
    pub shipping_cost_included: Option<ShippingCostIncluded>,
    pub items: Vec<CatalogItemDto>,
}

impl PublicationDto {
    pub fn kind(&self) -> PublicationKind {
        if self.preorder.is_some() {
            PublicationKind::Preorder
        } else {
            PublicationKind::Stock
        }
    }

    /// Количество активных вариаций
    pub fn active_items(&self) -> usize {
        self.items.iter().filter(|item| item.is_active).count()
    }
}

/// Создание публикации вместе с вариациями
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationCreateDto {
    pub link: String,
    pub category_id: CategoryId,
    pub preorder_id: Option<PreorderId>,
    pub shipping_cost_included: Option<ShippingCostIncluded>,
    pub items: Vec<CatalogItemPublishDto>,
}

/// Изменение заголовочных полей публикации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationUpdateDto {
    pub id: PublicationId,
    pub link: String,
    pub category_id: CategoryId,
    pub shipping_cost_included: Option<ShippingCostIncluded>,
}
