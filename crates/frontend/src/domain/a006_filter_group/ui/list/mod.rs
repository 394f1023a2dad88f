use std::cmp::Ordering;
use std::collections::HashSet;

use contracts::domain::a006_filter_group::FilterGroupDto;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a006_filter_group::api::{delete_filter_groups, get_filter_group_list};
use crate::domain::a006_filter_group::ui::details::FilterGroupForm;
use crate::shared::cache::{use_mutation_with_message, use_query};
use crate::shared::components::management_table::{ColumnDef, ManagedRow, ManagementTable};
use crate::shared::date_utils::format_datetime;
use crate::shared::filter::FilterableRow;
use crate::shared::icons::icon;
use crate::shared::list_utils::{compare_cells, Sortable};
use crate::shared::modal::{ConfirmDialog, Modal};
use crate::shared::notification::Notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const COLUMNS: [ColumnDef; 5] = [
    ColumnDef::new("title", "Название"),
    ColumnDef::new("category", "Категория"),
    ColumnDef::new("filters", "Значения"),
    ColumnDef::new("createdAt", "Создан"),
    ColumnDef::new("updatedAt", "Обновлен"),
];

impl FilterableRow for FilterGroupDto {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.to_string()),
            "title" => Some(self.title.clone()),
            "category" => Some(
                self.category
                    .as_ref()
                    .map(|c| c.title.clone())
                    .unwrap_or_else(|| "Без привязки".to_string()),
            ),
            "filters" => Some(self.values_joined()),
            "createdAt" => Some(self.meta.created_at.to_rfc3339()),
            "updatedAt" => Some(self.meta.updated_at.to_rfc3339()),
            _ => None,
        }
    }
}

impl Sortable for FilterGroupDto {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "createdAt" => self.meta.created_at.cmp(&other.meta.created_at),
            "updatedAt" => self.meta.updated_at.cmp(&other.meta.updated_at),
            "filters" => self.filters.len().cmp(&other.filters.len()),
            _ => compare_cells(self.field_value(field), other.field_value(field)),
        }
    }
}

impl ManagedRow for FilterGroupDto {
    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn render_cell(&self, field: &str) -> AnyView {
        match field {
            "createdAt" => view! { <span>{format_datetime(&self.meta.created_at)}</span> }.into_any(),
            "updatedAt" => view! { <span>{format_datetime(&self.meta.updated_at)}</span> }.into_any(),
            "filters" => {
                let values = self.values_joined();
                let title = values.clone();
                view! { <span class="cell--truncate" title=title>{values}</span> }.into_any()
            }
            _ => view! { <span>{self.field_value(field).unwrap_or_default()}</span> }.into_any(),
        }
    }
}

/// Открытое окно страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialog {
    Closed,
    Create,
    Update,
    Delete,
}

#[component]
pub fn FilterGroupListPage() -> impl IntoView {
    let list = use_query(|| Ok(get_filter_group_list()));
    let delete = use_mutation_with_message("Произошла ошибка при удалении группы фильтров");
    let notifications = Notifications::use_notifications();

    let selected = RwSignal::new(HashSet::<String>::new());
    let dialog = RwSignal::new(Dialog::Closed);
    let close = Callback::new(move |_: ()| dialog.set(Dialog::Closed));

    let rows = Signal::derive(move || list.data().map(|l| l.items).unwrap_or_default());
    let selected_group = move || {
        let ids = selected.get();
        if ids.len() != 1 {
            return None;
        }
        rows.with(|rows| rows.iter().find(|g| ids.contains(g.id.as_str())).cloned())
    };

    let delete_selected = Callback::new(move |_: ()| {
        let ids: Vec<String> = selected.get_untracked().into_iter().collect();
        delete.run(delete_filter_groups(&ids), move |()| {
            selected.set(HashSet::new());
            dialog.set(Dialog::Closed);
            notifications.success("Группа фильтров успешно удалена");
        });
    });

    let header_buttons: ChildrenFn = std::sync::Arc::new(move || {
        view! {
            <Button
                appearance=ButtonAppearance::Subtle
                disabled=Signal::derive(move || selected.with(HashSet::is_empty))
                on_click=move |_| dialog.set(Dialog::Delete)
            >
                {icon("trash")}
                "Удалить"
            </Button>
            <Button
                appearance=ButtonAppearance::Subtle
                disabled=Signal::derive(move || selected.with(|s| s.len() != 1))
                on_click=move |_| dialog.set(Dialog::Update)
            >
                {icon("edit")}
                "Редактировать"
            </Button>
        }
        .into_any()
    });

    view! {
        <PageFrame
            page_id="filter_group--list"
            category=PAGE_CAT_LIST
            title=Signal::derive(|| "Группы фильтров".to_string())
            actions=std::sync::Arc::new(move || {
                view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| dialog.set(Dialog::Create)
                    >
                        {icon("plus")}
                        "Добавить"
                    </Button>
                }
                .into_any()
            })
        >
            <div class="page__subtitle">
                {move || format!("Количество: {}", rows.with(Vec::len))}
            </div>
            {move || {
                list.error().map(|_| view! { <div class="error">"Что-то пошло не так"</div> })
            }}
            <ManagementTable
                rows=rows
                columns=COLUMNS.to_vec()
                selected=selected
                loading=Signal::derive(move || list.loading() || delete.loading())
                default_sort="createdAt"
                header_buttons=header_buttons
            />

            {move || match dialog.get() {
                Dialog::Closed => None,
                Dialog::Create => Some(
                    view! {
                        <Modal title="Создать группу фильтров" on_close=close>
                            <FilterGroupForm on_saved=close />
                        </Modal>
                    }
                    .into_any(),
                ),
                Dialog::Update => Some(
                    view! {
                        <Modal title="Редактировать группу фильтров" on_close=close>
                            {match selected_group() {
                                Some(group) => view! { <FilterGroupForm group=group on_saved=close /> }.into_any(),
                                None => view! { <p>"Выберите группу"</p> }.into_any(),
                            }}
                        </Modal>
                    }
                    .into_any(),
                ),
                Dialog::Delete => Some(
                    view! {
                        <ConfirmDialog
                            title="Удалить выбранные группы?"
                            message="После удаления отменить действие будет невозможно"
                            busy=Signal::derive(move || delete.loading())
                            on_confirm=delete_selected
                            on_cancel=close
                        />
                    }
                    .into_any(),
                ),
            }}
        </PageFrame>
    }
}
