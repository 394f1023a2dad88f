use std::cmp::Ordering;
use std::collections::HashSet;

use contracts::domain::a004_publication::PublicationDto;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::a004_publication::api::{delete_publication, get_publication_list};
use crate::shared::cache::{use_mutation, use_query};
use crate::shared::components::management_table::{ColumnDef, ManagedRow, ManagementTable};
use crate::shared::date_utils::format_datetime;
use crate::shared::filter::FilterableRow;
use crate::shared::icons::icon;
use crate::shared::list_utils::{compare_cells, Sortable};
use crate::shared::modal::ConfirmDialog;
use crate::shared::notification::Notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const COLUMNS: [ColumnDef; 6] = [
    ColumnDef::new("link", "Ссылка"),
    ColumnDef::new("category", "Категория"),
    ColumnDef::new("kind", "Тип"),
    ColumnDef::new("items", "Вариаций"),
    ColumnDef::new("createdAt", "Создана"),
    ColumnDef::new("updatedAt", "Изменена"),
];

impl FilterableRow for PublicationDto {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.to_string()),
            "link" => Some(self.link.clone()),
            "category" => Some(self.category.title.clone()),
            "kind" => Some(self.kind().display_name().to_string()),
            "items" => Some(self.items.len().to_string()),
            "createdAt" => Some(self.meta.created_at.to_rfc3339()),
            "updatedAt" => Some(self.meta.updated_at.to_rfc3339()),
            _ => None,
        }
    }
}

impl Sortable for PublicationDto {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "createdAt" => self.meta.created_at.cmp(&other.meta.created_at),
            "updatedAt" => self.meta.updated_at.cmp(&other.meta.updated_at),
            _ => compare_cells(self.field_value(field), other.field_value(field)),
        }
    }
}

impl ManagedRow for PublicationDto {
    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn render_cell(&self, field: &str) -> AnyView {
        match field {
            "createdAt" => view! { <span>{format_datetime(&self.meta.created_at)}</span> }.into_any(),
            "updatedAt" => view! { <span>{format_datetime(&self.meta.updated_at)}</span> }.into_any(),
            "items" => {
                let text = format!("{} / {}", self.active_items(), self.items.len());
                view! { <span title="Активных / всего">{text}</span> }.into_any()
            }
            _ => view! { <span>{self.field_value(field).unwrap_or_default()}</span> }.into_any(),
        }
    }
}

#[component]
pub fn PublicationListPage() -> impl IntoView {
    let list = use_query(|| Ok(get_publication_list()));
    let delete = use_mutation();
    let notifications = Notifications::use_notifications();
    let navigate = StoredValue::new_local(use_navigate());

    let selected = RwSignal::new(HashSet::<String>::new());
    let confirm_open = RwSignal::new(false);

    let rows = Signal::derive(move || list.data().map(|l| l.items).unwrap_or_default());

    let on_row_click = Callback::new(move |id: String| {
        navigate.with_value(|nav| nav(&format!("/publication/{}", id), Default::default()));
    });
    let on_create = move |_| {
        navigate.with_value(|nav| nav("/publication/create", Default::default()));
    };

    let delete_selected = Callback::new(move |_: ()| {
        let ids: Vec<String> = selected.get_untracked().into_iter().collect();
        let total = ids.len();
        for id in ids {
            delete.run(delete_publication(&id), move |()| {
                selected.update(|s| {
                    s.remove(&id);
                });
                if selected.with_untracked(HashSet::is_empty) {
                    notifications.success(format!("Удалено публикаций: {}", total));
                }
            });
        }
        confirm_open.set(false);
    });

    let header_buttons: ChildrenFn = std::sync::Arc::new(move || {
        view! {
            <Button
                appearance=ButtonAppearance::Subtle
                disabled=Signal::derive(move || selected.with(HashSet::is_empty))
                on_click=move |_| confirm_open.set(true)
            >
                {icon("trash")}
                {move || format!("Удалить ({})", selected.with(HashSet::len))}
            </Button>
        }
        .into_any()
    });

    view! {
        <PageFrame
            page_id="publication--list"
            category=PAGE_CAT_LIST
            title=Signal::derive(|| "Публикации".to_string())
            actions=std::sync::Arc::new(move || {
                view! {
                    <Button appearance=ButtonAppearance::Primary on_click=on_create>
                        {icon("plus")}
                        "Создать"
                    </Button>
                }
                .into_any()
            })
        >
            {move || list.error().map(|e| view! { <div class="error">{e}</div> })}
            <ManagementTable
                rows=rows
                columns=COLUMNS.to_vec()
                selected=selected
                loading=Signal::derive(move || list.loading())
                default_sort="createdAt"
                on_row_click=on_row_click
                header_buttons=header_buttons
            />
            <Show when=move || confirm_open.get()>
                <ConfirmDialog
                    title="Удаление публикаций"
                    message="Удалить выбранные публикации вместе со всеми вариациями?"
                    busy=Signal::derive(move || delete.loading())
                    on_confirm=delete_selected
                    on_cancel=Callback::new(move |_| confirm_open.set(false))
                />
            </Show>
        </PageFrame>
    }
}
