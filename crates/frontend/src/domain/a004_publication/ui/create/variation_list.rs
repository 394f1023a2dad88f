//! Список вариаций формы создания
//!
//! Список никогда не бывает пустым, продукт выбирается не более чем в
//! одной строке, а все продукты принадлежат категории публикации.

use contracts::domain::a001_category::CategoryId;
use contracts::domain::a002_product::{ProductDto, ProductId};

use super::form::VariationDraft;

/// Результат перетаскивания строки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderCommand {
    Move { from: usize, to: usize },
    /// Строку отпустили вне списка
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariationList {
    items: Vec<VariationDraft>,
}

impl Default for VariationList {
    fn default() -> Self {
        Self {
            items: vec![VariationDraft::default()],
        }
    }
}

impl VariationList {
    /// По строке на продукт; без продуктов одна пустая строка
    pub fn from_products(products: Vec<ProductDto>) -> Self {
        if products.is_empty() {
            return Self::default();
        }
        Self {
            items: products
                .into_iter()
                .map(|product| VariationDraft::new(Some(product)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Одна строка: заголовок «Товар», удаление недоступно
    pub fn is_single(&self) -> bool {
        self.items.len() == 1
    }

    pub fn get(&self, index: usize) -> Option<&VariationDraft> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariationDraft> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[VariationDraft] {
        &self.items
    }

    /// Изменить строку; несуществующий индекс игнорируется
    pub fn update(&mut self, index: usize, f: impl FnOnce(&mut VariationDraft)) {
        if let Some(item) = self.items.get_mut(index) {
            f(item);
        }
    }

    pub fn append(&mut self, draft: VariationDraft) {
        self.items.push(draft);
    }

    /// Удалить строку; последнюю строку удалить нельзя
    pub fn remove_at(&mut self, index: usize) -> bool {
        if self.items.len() <= 1 || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    pub fn apply(&mut self, command: ReorderCommand) -> bool {
        match command {
            ReorderCommand::Cancelled => false,
            ReorderCommand::Move { from, to } => {
                let len = self.items.len();
                if from >= len || to >= len || from == to {
                    return false;
                }
                let item = self.items.remove(from);
                self.items.insert(to, item);
                true
            }
        }
    }

    pub fn selected_product_ids(&self) -> Vec<ProductId> {
        self.items
            .iter()
            .filter_map(|item| item.product_id().cloned())
            .collect()
    }

    /// Продукт уже выбран в другой строке
    pub fn is_option_disabled(&self, product: &ProductDto, for_index: usize) -> bool {
        self.items
            .iter()
            .enumerate()
            .any(|(index, item)| index != for_index && item.product_id() == Some(&product.id))
    }

    /// Сбросить продукты, не относящиеся к категории; строки остаются
    pub fn on_category_changed(&mut self, category_id: Option<&CategoryId>) -> usize {
        let mut cleared = 0;
        for item in &mut self.items {
            let mismatch = item
                .product
                .as_ref()
                .is_some_and(|p| Some(p.category_id()) != category_id);
            if mismatch {
                item.product = None;
                cleared += 1;
            }
        }
        cleared
    }
}

/// Продукты, доступные для выбора в текущей категории
pub fn available_products(products: &[ProductDto], category_id: Option<&CategoryId>) -> Vec<ProductDto> {
    let Some(category_id) = category_id else {
        return Vec::new();
    };
    products
        .iter()
        .filter(|p| p.category_id() == category_id)
        .cloned()
        .collect()
}

/// Начальный выбор продуктов по запрошенным идентификаторам
///
/// Продукты берутся в порядке `candidates`; выбор обрывается на первом
/// запрошенном продукте другой категории, даже если дальше снова идут
/// продукты первой категории.
pub fn default_selection(
    candidates: &[ProductDto],
    requested_ids: &[ProductId],
) -> (Vec<ProductDto>, Option<CategoryId>) {
    let mut category_id: Option<CategoryId> = None;
    let mut selected = Vec::new();

    for product in candidates {
        if !requested_ids.contains(&product.id) {
            continue;
        }
        match &category_id {
            Some(category) if category != product.category_id() => break,
            Some(_) => {}
            None => category_id = Some(product.category_id().clone()),
        }
        selected.push(product.clone());
    }

    (selected, category_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::CategoryDto;

    fn product(id: &str, category: &str) -> ProductDto {
        ProductDto {
            id: ProductId::from(id),
            title: format!("Продукт {}", id),
            category: CategoryDto {
                id: CategoryId::from(category),
                title: category.to_string(),
            },
            images: Vec::new(),
        }
    }

    fn ids(list: &VariationList) -> Vec<Option<String>> {
        list.iter()
            .map(|item| item.product_id().map(|id| id.to_string()))
            .collect()
    }

    fn list_of(products: &[(&str, &str)]) -> VariationList {
        VariationList::from_products(products.iter().map(|(id, c)| product(id, c)).collect())
    }

    #[test]
    fn test_default_list_has_one_empty_row() {
        let list = VariationList::default();
        assert_eq!(list.len(), 1);
        assert!(list.is_single());
        assert_eq!(ids(&list), vec![None]);
    }

    #[test]
    fn test_remove_keeps_last_row() {
        let mut list = list_of(&[("1", "A"), ("2", "A")]);
        assert!(!list.remove_at(5));
        assert!(list.remove_at(0));
        assert_eq!(ids(&list), vec![Some("2".to_string())]);
        assert!(!list.remove_at(0));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_reorder() {
        let mut list = list_of(&[("1", "A"), ("2", "A"), ("3", "A")]);
        assert!(list.apply(ReorderCommand::Move { from: 0, to: 2 }));
        assert_eq!(
            ids(&list),
            vec![Some("2".into()), Some("3".into()), Some("1".into())]
        );
        assert!(list.apply(ReorderCommand::Move { from: 2, to: 0 }));
        assert_eq!(
            ids(&list),
            vec![Some("1".into()), Some("2".into()), Some("3".into())]
        );

        let before = list.clone();
        assert!(!list.apply(ReorderCommand::Cancelled));
        assert!(!list.apply(ReorderCommand::Move { from: 1, to: 7 }));
        assert_eq!(list, before);
    }

    #[test]
    fn test_option_disabled_in_other_rows_only() {
        let mut list = list_of(&[("1", "A")]);
        list.append(VariationDraft::default());
        let chosen = product("1", "A");
        assert!(!list.is_option_disabled(&chosen, 0));
        assert!(list.is_option_disabled(&chosen, 1));
        assert!(!list.is_option_disabled(&product("2", "A"), 1));
        assert_eq!(list.selected_product_ids(), vec![ProductId::from("1")]);
    }

    #[test]
    fn test_category_change_clears_mismatching_products() {
        let mut list = list_of(&[("1", "A"), ("2", "B")]);
        list.append(VariationDraft::default());
        let cleared = list.on_category_changed(Some(&CategoryId::from("A")));
        assert_eq!(cleared, 1);
        assert_eq!(ids(&list), vec![Some("1".into()), None, None]);

        list.on_category_changed(None);
        assert_eq!(ids(&list), vec![None, None, None]);
    }

    #[test]
    fn test_available_products_follow_category() {
        let products = vec![product("1", "A"), product("2", "B"), product("3", "A")];
        let available = available_products(&products, Some(&CategoryId::from("A")));
        let available: Vec<_> = available.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(available, vec!["1", "3"]);
        assert!(available_products(&products, None).is_empty());
    }

    #[test]
    fn test_default_selection_stops_at_first_foreign_category() {
        let candidates = vec![
            product("1", "A"),
            product("2", "A"),
            product("3", "B"),
            product("4", "A"),
        ];
        let requested: Vec<ProductId> = ["1", "2", "3", "4"].into_iter().map(ProductId::from).collect();
        let (selected, category) = default_selection(&candidates, &requested);
        let selected: Vec<_> = selected.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(selected, vec!["1", "2"]);
        assert_eq!(category, Some(CategoryId::from("A")));
    }

    #[test]
    fn test_default_selection_follows_candidate_order() {
        let candidates = vec![product("1", "A"), product("2", "B"), product("3", "B")];
        let requested = vec![ProductId::from("3"), ProductId::from("2")];
        let (selected, category) = default_selection(&candidates, &requested);
        let selected: Vec<_> = selected.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(selected, vec!["2", "3"]);
        assert_eq!(category, Some(CategoryId::from("B")));

        let (selected, category) = default_selection(&candidates, &[]);
        assert!(selected.is_empty());
        assert_eq!(category, None);
    }
}
