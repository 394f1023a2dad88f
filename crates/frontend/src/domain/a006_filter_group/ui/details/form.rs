//! Форма группы фильтров: название, категория и непустой список значений

use contracts::domain::a001_category::CategoryId;
use contracts::domain::a006_filter_group::{
    FilterCreateValueDto, FilterGroupCreateDto, FilterGroupDto, FilterGroupUpdateDto, FilterId,
    FilterUpdateDto,
};
use contracts::shared::validation::FieldErrors;
use uuid::Uuid;

/// Значение фильтра в форме; `id == None` у ещё не сохранённых
#[derive(Debug, Clone, PartialEq)]
pub struct FilterValueDraft {
    pub key: Uuid,
    pub id: Option<FilterId>,
    pub value: String,
}

impl FilterValueDraft {
    fn empty() -> Self {
        Self {
            key: Uuid::new_v4(),
            id: None,
            value: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterGroupDraft {
    pub title: String,
    /// `None`: группа без привязки к категории
    pub category_id: Option<CategoryId>,
    pub values: Vec<FilterValueDraft>,
}

impl Default for FilterGroupDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            category_id: None,
            values: vec![FilterValueDraft::empty()],
        }
    }
}

impl FilterGroupDraft {
    pub fn from_group(group: &FilterGroupDto) -> Self {
        Self {
            title: group.title.clone(),
            category_id: group.category.as_ref().map(|c| c.id.clone()),
            values: group
                .filters
                .iter()
                .map(|f| FilterValueDraft {
                    key: Uuid::new_v4(),
                    id: Some(f.id.clone()),
                    value: f.value.clone(),
                })
                .collect(),
        }
    }

    pub fn add_value(&mut self) {
        self.values.push(FilterValueDraft::empty());
    }

    /// Последнее значение не удаляется
    pub fn remove_value(&mut self, index: usize) -> bool {
        if self.values.len() <= 1 || index >= self.values.len() {
            return false;
        }
        self.values.remove(index);
        true
    }

    pub fn set_value(&mut self, index: usize, value: String) {
        if let Some(draft) = self.values.get_mut(index) {
            draft.value = value;
        }
    }

    fn check(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.title.trim().is_empty() {
            errors.push("title", "Укажите название группы");
        }
        if self.values.is_empty() {
            errors.push("filters", "Добавьте хотя бы одно значение");
        }
        for (i, draft) in self.values.iter().enumerate() {
            let value = draft.value.trim();
            if value.is_empty() {
                errors.push(format!("filters.{}.value", i), "Укажите значение");
            } else if self.values[..i].iter().any(|d| d.value.trim() == value) {
                errors.push(format!("filters.{}.value", i), "Значение уже есть в группе");
            }
        }
        errors
    }

    pub fn validate_create(&self) -> Result<FilterGroupCreateDto, FieldErrors> {
        self.check().into_result(FilterGroupCreateDto {
            category_id: self.category_id.clone(),
            title: self.title.trim().to_string(),
            filters: self
                .values
                .iter()
                .map(|d| FilterCreateValueDto {
                    value: d.value.trim().to_string(),
                })
                .collect(),
        })
    }

    pub fn validate_update(&self, group: &FilterGroupDto) -> Result<FilterGroupUpdateDto, FieldErrors> {
        self.check().into_result(FilterGroupUpdateDto {
            id: group.id.clone(),
            category_id: self.category_id.clone(),
            title: self.title.trim().to_string(),
            filters: self
                .values
                .iter()
                .map(|d| FilterUpdateDto {
                    id: d.id.clone(),
                    value: d.value.trim().to_string(),
                })
                .collect(),
        })
    }
}
