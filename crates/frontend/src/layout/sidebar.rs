//! Боковое меню разделов админки

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU: [MenuItem; 3] = [
    MenuItem {
        path: "/publication",
        label: "Публикации",
        icon: "publications",
    },
    MenuItem {
        path: "/filter",
        label: "Группы фильтров",
        icon: "filter",
    },
    MenuItem {
        path: "/user",
        label: "Пользователи",
        icon: "users",
    },
];

/// Пункт активен на своей странице и на вложенных (`/publication/42`)
fn is_active_path(current: &str, path: &str) -> bool {
    match current.strip_prefix(path) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="app-sidebar__content">
            {MENU
                .into_iter()
                .map(|item| {
                    let active = move || location.pathname.with(|p| is_active_path(p, item.path));
                    view! {
                        <A href=item.path>
                            <div class="app-sidebar__item" class:app-sidebar__item--active=active>
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                            </div>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_path() {
        assert!(is_active_path("/publication", "/publication"));
        assert!(is_active_path("/publication/create", "/publication"));
        assert!(!is_active_path("/publications", "/publication"));
        assert!(!is_active_path("/user/1", "/publication"));
    }
}
