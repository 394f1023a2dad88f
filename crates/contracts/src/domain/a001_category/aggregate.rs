use crate::string_id;
use serde::{Deserialize, Serialize};

string_id!(
    /// Уникальный идентификатор категории каталога
    CategoryId
);

/// Категория каталога
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: CategoryId,
    pub title: String,
}
