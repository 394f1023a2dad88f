use crate::string_id;
use serde::{Deserialize, Serialize};

string_id!(
    /// Уникальный идентификатор предзаказа
    PreorderId
);

/// Предзаказ, к которому привязываются публикации под заказ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreorderDto {
    pub id: PreorderId,
    pub title: String,
}
