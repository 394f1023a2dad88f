use crate::domain::a001_category::{CategoryDto, CategoryId};
use crate::domain::common::AdminMeta;
use crate::shared::api::deserialize_non_empty;
use crate::string_id;
use serde::{Deserialize, Serialize};

string_id!(
    /// Уникальный идентификатор группы фильтров
    FilterGroupId
);

string_id!(
    /// Уникальный идентификатор значения фильтра
    FilterId
);

/// Значение фильтра в составе группы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterValueDto {
    pub id: FilterId,
    pub value: String,
}

/// Группа фильтров витрины (например, «Объём» со значениями «250 мл», «500 мл»)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterGroupDto {
    pub id: FilterGroupId,
    #[serde(flatten)]
    pub meta: AdminMeta,
    pub title: String,
    /// `None`: группа не привязана к категории
    pub category: Option<CategoryDto>,
    #[serde(deserialize_with = "deserialize_non_empty")]
    pub filters: Vec<FilterValueDto>,
}

impl FilterGroupDto {
    /// Значения через запятую для отображения в таблице
    pub fn values_joined(&self) -> String {
        self.filters
            .iter()
            .map(|filter| filter.value.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCreateValueDto {
    pub value: String,
}

/// Создание группы фильтров
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterGroupCreateDto {
    pub category_id: Option<CategoryId>,
    pub title: String,
    pub filters: Vec<FilterCreateValueDto>,
}

/// Значение фильтра при обновлении: `id == None` означает новое значение
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterUpdateDto {
    pub id: Option<FilterId>,
    pub value: String,
}

/// Обновление группы фильтров
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterGroupUpdateDto {
    pub id: FilterGroupId,
    pub category_id: Option<CategoryId>,
    pub title: String,
    pub filters: Vec<FilterUpdateDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_rejected() {
        let json = r#"{
            "id": "g1",
            "createdAt": "2026-01-01T10:00:00Z",
            "updatedAt": "2026-01-01T10:00:00Z",
            "title": "Объём",
            "category": null,
            "filters": []
        }"#;
        assert!(serde_json::from_str::<FilterGroupDto>(json).is_err());
    }

    #[test]
    fn test_values_joined() {
        let json = r#"{
            "id": "g1",
            "createdAt": "2026-01-01T10:00:00Z",
            "updatedAt": "2026-01-01T10:00:00Z",
            "title": "Объём",
            "category": {"id": "c1", "title": "Посуда"},
            "filters": [{"id": "f1", "value": "250 мл"}, {"id": "f2", "value": "500 мл"}]
        }"#;
        let group: FilterGroupDto = serde_json::from_str(json).unwrap();
        assert_eq!(group.values_joined(), "250 мл, 500 мл");
    }
}
