//! Управляемая таблица: фильтры в адресе, быстрый поиск, выбор строк
//!
//! ```rust,ignore
//! <ManagementTable
//!     rows=rows
//!     columns=COLUMNS.to_vec()
//!     selected=selected
//!     default_sort="createdAt"
//! />
//! ```

mod state;

pub use state::{is_active, ColumnDef, ManagedRow, TableState};

use std::collections::HashSet;

use leptos::prelude::*;
use thaw::*;

use crate::shared::config::AppConfig;
use crate::shared::filter::{url_sync, Debouncer, FilterOperator, FilterPredicate};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, SearchInput};

#[component]
pub fn ManagementTable<T>(
    /// Все строки
    #[prop(into)]
    rows: Signal<Vec<T>>,
    columns: Vec<ColumnDef>,
    /// Выбранные id строк
    selected: RwSignal<HashSet<String>>,
    /// Фильтры страницы, вливаются в адрес при монтировании
    #[prop(optional)]
    initial_filters: Vec<FilterPredicate>,
    #[prop(optional, into)]
    loading: Signal<bool>,
    /// Поле сортировки по умолчанию (по убыванию)
    #[prop(optional)]
    default_sort: Option<&'static str>,
    #[prop(optional)]
    on_row_click: Option<Callback<String>>,
    /// Кнопки в правой части шапки
    #[prop(optional)]
    header_buttons: Option<ChildrenFn>,
) -> impl IntoView
where
    T: ManagedRow,
{
    let config = use_context::<AppConfig>().unwrap_or_default();
    let columns = StoredValue::new(columns);
    let search_fields = StoredValue::new(
        columns.with_value(|c| {
            c.iter()
                .filter(|c| c.filterable)
                .map(|c| c.field)
                .collect::<Vec<_>>()
        }),
    );

    let state = RwSignal::new(TableState::<T>::new(config.table.page_size, default_sort));
    state.update(|s| s.filters = url_sync::hydrate_filters(&initial_filters));

    let debouncer = Debouncer::new(config.table.filter_debounce_ms);
    let sync_url = move || {
        let filters = state.with_untracked(|s| s.filters.clone());
        debouncer.call(move || {
            if let Err(e) = url_sync::write_filters(&filters) {
                log::warn!("filters not written to URL: {}", e);
            }
        });
    };

    let refresh_view = move || {
        let all = rows.get_untracked();
        search_fields.with_value(|fields| state.update(|s| s.refresh(&all, fields)));
    };

    // Пересчёт при новых данных
    Effect::new(move |_| {
        rows.track();
        refresh_view();
    });

    let first_field = columns.with_value(|c| {
        c.iter()
            .find(|c| c.filterable)
            .map(|c| c.field.to_string())
            .unwrap_or_default()
    });
    let new_field = RwSignal::new(first_field);
    let new_operator = RwSignal::new(FilterOperator::Contains.code().to_string());
    let new_value = RwSignal::new(String::new());
    let filters_expanded = RwSignal::new(false);

    let add_filter = move || {
        let predicate = FilterPredicate::new(
            new_field.get_untracked(),
            new_operator.get_untracked(),
            new_value.get_untracked(),
        );
        state.update(|s| s.set_filter(predicate));
        new_value.set(String::new());
        refresh_view();
        sync_url();
    };

    let remove_filter = move |field: String| {
        state.update(|s| s.clear_filter(&field));
        refresh_view();
        sync_url();
    };

    let on_search = move |query: String| {
        state.update(|s| {
            s.search_query = query;
            s.page = 0;
        });
        refresh_view();
    };

    let toggle_sort = move |field: &'static str| {
        state.update(|s| s.toggle_sort(field));
        refresh_view();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        refresh_view();
    };

    let page_ids = move || {
        state.with(|s| s.items.iter().map(|r| r.row_id()).collect::<Vec<_>>())
    };
    let all_on_page_selected = move || {
        let ids = page_ids();
        !ids.is_empty() && selected.with(|sel| ids.iter().all(|id| sel.contains(id)))
    };
    let toggle_all = move |checked: bool| {
        let ids = page_ids();
        selected.update(|sel| {
            for id in ids {
                if checked {
                    sel.insert(id);
                } else {
                    sel.remove(&id);
                }
            }
        });
    };

    let header_for = move |field: String| {
        columns.with_value(|c| {
            c.iter()
                .find(|c| c.field == field)
                .map(|c| c.header)
                .unwrap_or("")
        })
    };

    view! {
        <div class="management-table">
            <div class="management-table__toolbar">
                <div class="management-table__toolbar-left">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| filters_expanded.update(|e| *e = !*e)
                    >
                        {icon("filter")}
                        " Фильтры"
                        {move || {
                            let count = state.with(|s| s.active_filters().len());
                            (count > 0).then(|| view! { <Badge>{count.to_string()}</Badge> })
                        }}
                    </Button>
                    <SearchInput on_change=Callback::new(on_search) />
                    <span class="management-table__selected">
                        {move || {
                            let count = selected.with(|s| s.len());
                            (count > 0).then(|| format!("Выбрано: {}", count))
                        }}
                    </span>
                </div>
                <div class="management-table__toolbar-right">
                    {header_buttons.as_ref().map(|buttons| buttons())}
                </div>
            </div>

            <Show when=move || filters_expanded.get()>
                <div class="filter-panel-content">
                    <select
                        class="form__select"
                        prop:value=move || new_field.get()
                        on:change=move |ev| new_field.set(event_target_value(&ev))
                    >
                        {columns.with_value(|c| {
                            c.iter()
                                .filter(|c| c.filterable)
                                .map(|c| view! { <option value=c.field>{c.header}</option> })
                                .collect_view()
                        })}
                    </select>
                    <select
                        class="form__select"
                        prop:value=move || new_operator.get()
                        on:change=move |ev| new_operator.set(event_target_value(&ev))
                    >
                        {FilterOperator::all()
                            .into_iter()
                            .map(|op| view! { <option value=op.code()>{op.display_name()}</option> })
                            .collect_view()}
                    </select>
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Значение фильтра"
                        prop:value=move || new_value.get()
                        on:input=move |ev| new_value.set(event_target_value(&ev))
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| add_filter()>
                        "Добавить фильтр"
                    </Button>
                </div>
            </Show>

            <div class="filter-tags">
                <For
                    each=move || state.with(|s| s.active_filters())
                    key=|p| format!("{}:{}:{}", p.field, p.operator, p.value)
                    children=move |p| {
                        let operator = FilterOperator::from_code(&p.operator)
                            .map(|op| op.display_name())
                            .unwrap_or("?");
                        let label = format!("{} {} {}", header_for(p.field.clone()), operator, p.value);
                        let field = p.field.clone();
                        view! {
                            <div class="filter-tag">
                                <span>{label}</span>
                                <span class="filter-tag__remove" on:click=move |_| remove_filter(field.clone())>
                                    {icon("x")}
                                </span>
                            </div>
                        }
                    }
                />
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false class="fixed-checkbox-column">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    prop:checked=all_on_page_selected
                                    on:change=move |ev| toggle_all(event_target_checked(&ev))
                                />
                            </TableHeaderCell>
                            {columns.with_value(|c| {
                                c.iter()
                                    .map(|col| {
                                        let field = col.field;
                                        let header = col.header;
                                        view! {
                                            <TableHeaderCell resizable=false>
                                                <div class="table__sortable-header" on:click=move |_| toggle_sort(field)>
                                                    {header}
                                                    <span>
                                                        {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
                                                    </span>
                                                </div>
                                            </TableHeaderCell>
                                        }
                                    })
                                    .collect_view()
                            })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || state.with(|s| s.items.clone())
                            key=|row| row.row_id()
                            children=move |row| {
                                let id = row.row_id();
                                let id_for_check = id.clone();
                                let id_for_change = id.clone();
                                view! {
                                    <TableRow
                                        class="management-table__row"
                                        on:click=move |_| {
                                            if let Some(cb) = on_row_click {
                                                cb.run(id.clone());
                                            }
                                        }
                                    >
                                        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
                                            <input
                                                type="checkbox"
                                                class="table__checkbox"
                                                prop:checked=move || selected.with(|s| s.contains(&id_for_check))
                                                on:change=move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    let id = id_for_change.clone();
                                                    selected.update(|s| {
                                                        if checked { s.insert(id); } else { s.remove(&id); }
                                                    });
                                                }
                                            />
                                        </TableCell>
                                        {columns.with_value(|c| {
                                            c.iter()
                                                .map(|col| {
                                                    let row = row.clone();
                                                    let field = col.field;
                                                    view! {
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>
                                                                {row.render_cell(field)}
                                                            </TableCellLayout>
                                                        </TableCell>
                                                    }
                                                })
                                                .collect_view()
                                        })}
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
                <Show when=move || !loading.get() && state.with(|s| s.total_count == 0)>
                    <div class="management-table__empty">"Нет данных"</div>
                </Show>
                <Show when=move || loading.get()>
                    <div class="management-table__empty">"Загрузка..."</div>
                </Show>
            </div>

            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    title="Предыдущая страница"
                    disabled=move || state.with(|s| s.page == 0)
                    on:click=move |_| {
                        let page = state.with_untracked(|s| s.page);
                        go_to_page(page.saturating_sub(1));
                    }
                >
                    {icon("chevron-left")}
                </button>
                <span class="pagination-info">
                    {move || state.with(|s| {
                        format!("{} / {} (всего строк: {})", s.page + 1, s.total_pages, s.total_count)
                    })}
                </span>
                <button
                    class="pagination-btn"
                    title="Следующая страница"
                    disabled=move || state.with(|s| s.page + 1 >= s.total_pages)
                    on:click=move |_| {
                        let page = state.with_untracked(|s| s.page);
                        go_to_page(page + 1);
                    }
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}
