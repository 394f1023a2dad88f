use contracts::domain::a001_category::CategoryId;
use contracts::domain::a006_filter_group::FilterGroupDto;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

use super::form::FilterGroupDraft;
use crate::domain::a001_category::api::get_category_list;
use crate::domain::a006_filter_group::api::{create_filter_group, update_filter_group};
use crate::shared::cache::{use_mutation_with_message, use_query};
use crate::shared::forms::TextField;
use crate::shared::icons::icon;
use crate::shared::notification::Notifications;

/// Форма создания (`group == None`) или редактирования группы фильтров
#[component]
pub fn FilterGroupForm(
    #[prop(optional)] group: Option<FilterGroupDto>,
    /// Вызывается после успешного сохранения
    on_saved: Callback<()>,
) -> impl IntoView {
    let initial = group
        .as_ref()
        .map(FilterGroupDraft::from_group)
        .unwrap_or_default();
    let group = StoredValue::new(group);
    let is_update = group.with_value(Option::is_some);

    let categories = use_query(|| Ok(get_category_list()));
    let draft = RwSignal::new(initial);
    let errors = RwSignal::new(FieldErrors::new());
    let save = use_mutation_with_message(if is_update {
        "Произошла ошибка при обновлении группы фильтров"
    } else {
        "Произошла ошибка при создании группы фильтров"
    });
    let notifications = Notifications::use_notifications();

    // название редактируется отдельным сигналом, как в TextField
    let title = RwSignal::new(draft.with_untracked(|d| d.title.clone()));
    Effect::new(move |_| {
        let value = title.get();
        draft.update(|d| d.title = value);
    });

    let error = move |path: String| {
        Signal::derive(move || errors.with(|e| e.get(&path).map(str::to_string)))
    };

    let on_submit = move |_| {
        let current = draft.get_untracked();
        let def = match group.with_value(|g| match g {
            Some(g) => current.validate_update(g).map(|dto| update_filter_group(&dto)),
            None => current.validate_create().map(|dto| create_filter_group(&dto)),
        }) {
            Ok(def) => def,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        save.run(def, move |()| {
            notifications.success(if is_update {
                "Группа фильтров успешно обновлена"
            } else {
                "Группа фильтров успешно создана"
            });
            on_saved.run(());
        });
    };

    view! {
        <div class="form">
            <TextField label="Название" value=title error=error("title".to_string()) />

            <div class="form__group">
                <label class="form__label">"Категория"</label>
                <select
                    class="form__input"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let category = (!value.is_empty()).then(|| CategoryId::new(value));
                        draft.update(|d| d.category_id = category);
                    }
                >
                    <option value="">"Без привязки"</option>
                    {move || {
                        let selected = draft.with(|d| d.category_id.clone());
                        categories
                            .data()
                            .map(|list| list.items)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|category| {
                                let is_selected = selected.as_ref() == Some(&category.id);
                                view! {
                                    <option value=category.id.to_string() selected=is_selected>
                                        {category.title}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <div class="form__group">
                <label class="form__label">"Значения"</label>
                <For
                    each=move || {
                        draft.with(|d| {
                            d.values.iter().enumerate().map(|(i, v)| (i, v.key)).collect::<Vec<_>>()
                        })
                    }
                    key=|(index, key)| (*index, *key)
                    children=move |(index, _)| {
                        let value_error = error(format!("filters.{}.value", index));
                        view! {
                            <div class="filter-value__row">
                                <input
                                    class="form__input"
                                    type="text"
                                    prop:value=move || {
                                        draft.with(|d| {
                                            d.values.get(index).map(|v| v.value.clone()).unwrap_or_default()
                                        })
                                    }
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| d.set_value(index, value));
                                    }
                                />
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    disabled=Signal::derive(move || draft.with(|d| d.values.len() <= 1))
                                    on_click=move |_| {
                                        draft.update(|d| {
                                            d.remove_value(index);
                                        });
                                    }
                                >
                                    {icon("x")}
                                </Button>
                                {move || value_error.get().map(|e| view! { <div class="form__error">{e}</div> })}
                            </div>
                        }
                    }
                />
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| draft.update(FilterGroupDraft::add_value)
                >
                    {icon("plus")}
                    "Добавить значение"
                </Button>
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || save.loading())
                on_click=on_submit
            >
                {if is_update { "Сохранить" } else { "Создать" }}
            </Button>
        </div>
    }
}
