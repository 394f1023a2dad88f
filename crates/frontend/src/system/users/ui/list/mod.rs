use std::cmp::Ordering;
use std::collections::HashSet;

use contracts::system::users::UserDto;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::cache::use_query;
use crate::shared::components::management_table::{ColumnDef, ManagedRow, ManagementTable};
use crate::shared::date_utils::format_datetime;
use crate::shared::filter::FilterableRow;
use crate::shared::list_utils::{compare_cells, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::users::api::get_user_list;

const COLUMNS: [ColumnDef; 5] = [
    ColumnDef::new("email", "Email"),
    ColumnDef::new("verified", "Подтверждён"),
    ColumnDef::new("vkId", "VK ID"),
    ColumnDef::new("createdAt", "Создан"),
    ColumnDef::new("updatedAt", "Обновлен"),
];

impl FilterableRow for UserDto {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.to_string()),
            "email" => Some(self.email.clone()),
            "verified" => Some(if self.verified { "Да" } else { "Нет" }.to_string()),
            "vkId" => Some(self.vk_id.clone().unwrap_or_default()),
            "createdAt" => Some(self.meta.created_at.to_rfc3339()),
            "updatedAt" => Some(self.meta.updated_at.to_rfc3339()),
            _ => None,
        }
    }
}

impl Sortable for UserDto {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "verified" => self.verified.cmp(&other.verified),
            "createdAt" => self.meta.created_at.cmp(&other.meta.created_at),
            "updatedAt" => self.meta.updated_at.cmp(&other.meta.updated_at),
            _ => compare_cells(self.field_value(field), other.field_value(field)),
        }
    }
}

impl ManagedRow for UserDto {
    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn render_cell(&self, field: &str) -> AnyView {
        match field {
            "verified" => {
                if self.verified {
                    view! { <Badge color=BadgeColor::Success>"Да"</Badge> }.into_any()
                } else {
                    view! { <Badge color=BadgeColor::Informative>"Нет"</Badge> }.into_any()
                }
            }
            "createdAt" => view! { <span>{format_datetime(&self.meta.created_at)}</span> }.into_any(),
            "updatedAt" => view! { <span>{format_datetime(&self.meta.updated_at)}</span> }.into_any(),
            _ => view! { <span>{self.field_value(field).unwrap_or_default()}</span> }.into_any(),
        }
    }
}

#[component]
pub fn UserListPage() -> impl IntoView {
    let list = use_query(|| Ok(get_user_list()));
    let navigate = StoredValue::new_local(use_navigate());
    let selected = RwSignal::new(HashSet::<String>::new());

    let rows = Signal::derive(move || list.data().map(|l| l.items).unwrap_or_default());
    let on_row_click = Callback::new(move |id: String| {
        navigate.with_value(|nav| nav(&format!("/user/{}", id), Default::default()));
    });

    view! {
        <PageFrame
            page_id="user--list"
            category=PAGE_CAT_LIST
            title=Signal::derive(|| "Пользователи".to_string())
        >
            {move || list.error().map(|e| view! { <div class="error">{e}</div> })}
            <ManagementTable
                rows=rows
                columns=COLUMNS.to_vec()
                selected=selected
                loading=Signal::derive(move || list.loading())
                default_sort="createdAt"
                on_row_click=on_row_click
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::common::AdminMeta;
    use contracts::system::users::UserId;

    fn user(email: &str, verified: bool, day: u32) -> UserDto {
        let at = Utc.with_ymd_and_hms(2026, 1, day, 0, 0, 0).unwrap();
        UserDto {
            id: UserId::new(email),
            meta: AdminMeta {
                created_at: at,
                updated_at: at,
            },
            email: email.to_string(),
            verified,
            vk_id: None,
        }
    }

    #[test]
    fn test_user_row_values() {
        let u = user("a@example.com", true, 1);
        assert_eq!(u.field_value("verified").as_deref(), Some("Да"));
        assert_eq!(u.field_value("vkId").as_deref(), Some(""));
        assert_eq!(u.field_value("unknown"), None);
    }

    #[test]
    fn test_sort_by_created_at() {
        let older = user("a@example.com", false, 1);
        let newer = user("b@example.com", false, 2);
        assert_eq!(older.compare_by_field(&newer, "createdAt"), Ordering::Less);
        assert_eq!(newer.compare_by_field(&older, "email"), Ordering::Greater);
    }
}
