use crate::domain::a001_category::{CategoryDto, CategoryId};
use crate::string_id;
use serde::{Deserialize, Serialize};

string_id!(
    /// Уникальный идентификатор продукта
    ProductId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
}

/// Продукт: то, что продаётся в вариациях публикаций
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: ProductId,
    pub title: String,
    pub category: CategoryDto,
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

impl ProductDto {
    pub fn category_id(&self) -> &CategoryId {
        &self.category.id
    }

    /// Первое изображение продукта для превью
    pub fn preview_url(&self) -> Option<&str> {
        self.images.first().map(|image| image.url.as_str())
    }
}
