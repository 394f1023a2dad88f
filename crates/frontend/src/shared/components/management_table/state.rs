use leptos::prelude::*;

use crate::shared::filter::{apply_filters, FilterOperator, FilterPredicate, FilterableRow};
use crate::shared::list_utils::{matches_search, page_slice, sort_list, Sortable};

/// Строка управляемой таблицы
pub trait ManagedRow: FilterableRow + Sortable + Clone + Send + Sync + 'static {
    fn row_id(&self) -> String;

    /// Содержимое ячейки; по умолчанию текст из `field_value`
    fn render_cell(&self, field: &str) -> AnyView {
        let text = self.field_value(field).unwrap_or_default();
        view! { <span>{text}</span> }.into_any()
    }
}

/// Колонка таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub field: &'static str,
    pub header: &'static str,
    /// Участвует в фильтрах и быстром поиске
    pub filterable: bool,
}

impl ColumnDef {
    pub const fn new(field: &'static str, header: &'static str) -> Self {
        Self {
            field,
            header,
            filterable: true,
        }
    }

    /// Колонка без фильтра (картинки, действия)
    pub const fn plain(field: &'static str, header: &'static str) -> Self {
        Self {
            field,
            header,
            filterable: false,
        }
    }
}

/// Условие активно: у бинарного оператора есть значение
pub fn is_active(predicate: &FilterPredicate) -> bool {
    match FilterOperator::from_code(&predicate.operator) {
        Some(op) if op.is_unary() => true,
        _ => !predicate.value.is_empty(),
    }
}

#[derive(Clone, Debug)]
pub struct TableState<T> {
    /// Строки текущей страницы
    pub items: Vec<T>,
    pub filters: Vec<FilterPredicate>,
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T: ManagedRow> TableState<T> {
    pub fn new(page_size: usize, default_sort: Option<&str>) -> Self {
        Self {
            items: Vec::new(),
            filters: Vec::new(),
            search_query: String::new(),
            sort_field: default_sort.unwrap_or_default().to_string(),
            // по умолчанию новые сверху
            sort_ascending: default_sort.is_none(),
            page: 0,
            page_size,
            total_count: 0,
            total_pages: 1,
        }
    }

    /// Пересчитать видимые строки
    pub fn refresh(&mut self, all: &[T], search_fields: &[&str]) {
        let mut data: Vec<T> = apply_filters(all, &self.filters)
            .into_iter()
            .filter(|row| matches_search(*row, search_fields, &self.search_query))
            .cloned()
            .collect();
        if !self.sort_field.is_empty() {
            sort_list(&mut data, &self.sort_field, self.sort_ascending);
        }
        self.total_count = data.len();
        let (items, total_pages) = page_slice(&data, self.page, self.page_size);
        self.total_pages = total_pages;
        self.page = self.page.min(total_pages - 1);
        self.items = items;
    }

    /// Добавить или заменить условие по его полю
    pub fn set_filter(&mut self, predicate: FilterPredicate) {
        match self.filters.iter_mut().find(|p| p.field == predicate.field) {
            Some(existing) => *existing = predicate,
            None => self.filters.push(predicate),
        }
        self.page = 0;
    }

    /// Снять условие: поле остаётся в модели с пустым значением
    pub fn clear_filter(&mut self, field: &str) {
        if let Some(existing) = self.filters.iter_mut().find(|p| p.field == field) {
            existing.value.clear();
            if FilterOperator::from_code(&existing.operator).is_some_and(|op| op.is_unary()) {
                existing.operator = FilterOperator::Contains.code().to_string();
            }
        }
        self.page = 0;
    }

    pub fn active_filters(&self) -> Vec<FilterPredicate> {
        self.filters.iter().filter(|p| is_active(p)).cloned().collect()
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }
}
