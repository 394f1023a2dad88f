/// Утилиты списков: сортировка, быстрый поиск, страницы
use std::cmp::Ordering;

use leptos::prelude::*;

use crate::shared::filter::{Debouncer, FilterableRow};

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сравнение значений ячеек: числа как числа, остальное как текст
pub fn compare_cells(a: Option<String>, b: Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match (a.parse::<f64>(), b.parse::<f64>()) {
            (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => a.to_lowercase().cmp(&b.to_lowercase()),
        },
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Быстрый поиск: подстрока в любой из колонок
pub fn matches_search<T: FilterableRow>(row: &T, fields: &[&str], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields.iter().any(|field| {
        row.field_value(field)
            .is_some_and(|v| v.to_lowercase().contains(&query))
    })
}

/// Срез текущей страницы и число страниц
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> (Vec<T>, usize) {
    if page_size == 0 {
        return (items.to_vec(), 1);
    }
    let total_pages = items.len().div_ceil(page_size).max(1);
    let page = page.min(total_pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(items.len());
    (items[start..end].to_vec(), total_pages)
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Поле поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Callback с итоговым значением после паузы ввода
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional)]
    delay_ms: Option<u32>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    let debouncer = Debouncer::new(delay_ms.unwrap_or(300));

    let handle_input = move |value: String| {
        set_input_value.set(value.clone());
        debouncer.call(move || on_change.run(value));
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder="Поиск…"
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Очистить"
                    on:click=move |_| {
                        set_input_value.set(String::new());
                        on_change.run(String::new());
                    }
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str, i64);

    impl Sortable for Item {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.0.cmp(other.0),
                _ => self.1.cmp(&other.1),
            }
        }
    }

    impl FilterableRow for Item {
        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.0.to_string()),
                "value" => Some(self.1.to_string()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_sort_list() {
        let mut items = vec![Item("b", 2), Item("a", 10), Item("c", 1)];
        sort_list(&mut items, "value", false);
        assert_eq!(items.iter().map(|i| i.1).collect::<Vec<_>>(), vec![10, 2, 1]);
        sort_list(&mut items, "name", true);
        assert_eq!(items[0].0, "a");
    }

    #[test]
    fn test_compare_cells_numeric() {
        assert_eq!(
            compare_cells(Some("9".into()), Some("10".into())),
            Ordering::Less
        );
        assert_eq!(
            compare_cells(Some("b".into()), Some("A".into())),
            Ordering::Greater
        );
        assert_eq!(compare_cells(None, Some("a".into())), Ordering::Less);
    }

    #[test]
    fn test_matches_search() {
        let item = Item("Телефон", 5);
        assert!(matches_search(&item, &["name"], "теле"));
        assert!(matches_search(&item, &["name", "value"], "5"));
        assert!(!matches_search(&item, &["name"], "5"));
        assert!(matches_search(&item, &["name"], "  "));
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (0..5).collect();
        assert_eq!(page_slice(&items, 0, 2), (vec![0, 1], 3));
        assert_eq!(page_slice(&items, 2, 2), (vec![4], 3));
        assert_eq!(page_slice(&items, 9, 2), (vec![4], 3));
        let empty: Vec<u32> = Vec::new();
        assert_eq!(page_slice(&empty, 0, 50), (vec![], 1));
    }
}
