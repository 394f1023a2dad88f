use contracts::domain::a001_category::CategoryId;
use contracts::domain::a002_product::ProductId;
use contracts::domain::a003_preorder::PreorderId;
use contracts::domain::a004_publication::PublicationKind;
use contracts::enums::ShippingCostIncluded;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use super::item_form::VariationItemForm;
use super::view_model::{CreateRequest, PublicationCreateViewModel};
use crate::shared::filter::url_sync::current_params;
use crate::shared::notification::Notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CREATE;

/// Параметры адреса: `?kind=preorder&productId=..&productId=..&preorderId=..`
fn read_request() -> (PublicationKind, CreateRequest) {
    let params = current_params();
    let kind = match params.get("kind") {
        Some("preorder") => PublicationKind::Preorder,
        _ => PublicationKind::Stock,
    };
    let request = CreateRequest {
        product_ids: params
            .get_all("productId")
            .into_iter()
            .filter(|id| !id.is_empty())
            .map(ProductId::from)
            .collect(),
        preorder_id: params.get("preorderId").map(PreorderId::from),
    };
    (kind, request)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn PublicationCreatePage() -> impl IntoView {
    let (kind, request) = read_request();
    let vm = PublicationCreateViewModel::new(kind, request);
    let notifications = Notifications::use_notifications();
    let navigate = StoredValue::new_local(use_navigate());

    let on_publish = move |_| {
        vm.submit(move |id| {
            notifications.success("Публикация создана");
            navigate.with_value(|nav| nav(&format!("/publication/{}", id), Default::default()));
        });
    };

    let kind_button = move |target: PublicationKind| {
        view! {
            <Button
                appearance=Signal::derive(move || {
                    if vm.kind() == target {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Secondary
                    }
                })
                on_click=move |_| vm.set_kind(target)
            >
                {target.display_name()}
            </Button>
        }
    };

    let field_error = move |path: &'static str| {
        move || vm.error(path).map(|e| view! { <div class="form__error">{e}</div> })
    };
    let is_preorder = move || vm.kind() == PublicationKind::Preorder;

    view! {
        <PageFrame
            page_id="publication--create"
            category=PAGE_CAT_CREATE
            title=Signal::derive(|| "Новая публикация".to_string())
        >
            <div class="publication-create">
                <ButtonGroup>
                    {kind_button(PublicationKind::Stock)}
                    {kind_button(PublicationKind::Preorder)}
                </ButtonGroup>

                <section class="form__section">
                    <div class="form__group">
                        <label class="form__label">"Ссылка"</label>
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || vm.draft.with(|d| d.link.clone())
                            on:input=move |ev| vm.set_link(event_target_value(&ev))
                        />
                        {field_error("link")}
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Категория"</label>
                        <select
                            class="form__input"
                            prop:value=move || {
                                vm.draft
                                    .with(|d| d.category_id.as_ref().map(|c| c.to_string()))
                                    .unwrap_or_default()
                            }
                            on:change=move |ev| {
                                let value = non_empty(event_target_value(&ev));
                                vm.set_category(value.map(CategoryId::new));
                            }
                        >
                            <option value="">"—"</option>
                            {move || {
                                let selected = vm.draft.with(|d| d.category_id.clone());
                                vm.categories
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
                        {field_error("categoryId")}
                    </div>

                    <Show when=is_preorder>
                        <div class="form__group">
                            <label class="form__label">"Предзаказ"</label>
                            <select
                                class="form__input"
                                on:change=move |ev| {
                                    let value = non_empty(event_target_value(&ev));
                                    vm.set_preorder(value.map(PreorderId::new));
                                }
                            >
                                <option value="">"—"</option>
                                {move || {
                                    let selected = vm.draft.with(|d| d.preorder_id.clone());
                                    vm.preorders
                                        .data()
                                        .map(|list| list.items)
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|preorder| {
                                            let is_selected = selected.as_ref() == Some(&preorder.id);
                                            view! {
                                                <option value=preorder.id.to_string() selected=is_selected>
                                                    {preorder.title}
                                                </option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                            {field_error("preorderId")}
                        </div>

                        <div class="form__group">
                            <label class="form__label">"Стоимость доставки включена в цену"</label>
                            <select
                                class="form__input"
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.set_shipping(ShippingCostIncluded::from_code(&value));
                                }
                            >
                                <option value="">"—"</option>
                                {ShippingCostIncluded::all()
                                    .into_iter()
                                    .map(|option| {
                                        let is_selected = move || {
                                            vm.draft.with(|d| d.shipping_cost_included == Some(option))
                                        };
                                        view! {
                                            <option value=option.code() selected=is_selected>
                                                {option.display_name()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                            {field_error("shippingCostIncluded")}
                        </div>
                    </Show>
                </section>

                <section class="form__section">
                    <ul class="variation-list">
                        <For
                            each=move || {
                                vm.draft.with(|d| {
                                    d.items
                                        .iter()
                                        .enumerate()
                                        .map(|(index, item)| (index, item.key))
                                        .collect::<Vec<_>>()
                                })
                            }
                            key=|row| *row
                            children=move |(index, _)| view! { <VariationItemForm vm=vm index=index /> }
                        />
                    </ul>
                    {field_error("items")}
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.append_item()>
                        {"Добавить вариацию"}
                    </Button>
                </section>

                <div class="form__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.create.loading())
                        on_click=on_publish
                    >
                        {move || if vm.create.loading() { "Публикация..." } else { "Опубликовать" }}
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}
