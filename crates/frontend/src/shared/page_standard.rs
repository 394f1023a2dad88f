//! Категории страниц админки
//!
//! Корневой элемент каждой страницы получает `id` вида `{entity}--{category}`
//! и атрибут `data-page-category` с одной из констант ниже.

/// Таблица записей
pub const PAGE_CAT_LIST: &str = "list";

/// Просмотр и редактирование одной записи
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Форма создания
pub const PAGE_CAT_CREATE: &str = "create";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_CREATE];

/// Проверка формата `{entity}--{category}`
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a004_publication--list"));
        assert!(is_valid_page_id("a007_order--detail"));
        assert!(!is_valid_page_id("a004_publication"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a004_publication--dashboard"));
    }
}
