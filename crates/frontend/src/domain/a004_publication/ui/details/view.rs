use contracts::domain::a001_category::CategoryId;
use contracts::domain::a004_publication::PublicationKind;
use contracts::enums::ShippingCostIncluded;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::*;

use super::form::HeaderDraft;
use super::variation_card::VariationCard;
use super::view_model::PublicationDetailsViewModel;
use crate::domain::a004_publication::ui::create::form::VariationDraft;
use crate::shared::date_utils::format_datetime;
use crate::shared::forms::IntInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

#[component]
pub fn PublicationDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || params.with(|p| p.get("id").unwrap_or_default()));
    let vm = PublicationDetailsViewModel::new(id);

    let title = Signal::derive(move || {
        vm.publication
            .data()
            .map(|p| format!("Публикация «{}»", p.link))
            .unwrap_or_else(|| "Публикация".to_string())
    });

    view! {
        <PageFrame page_id="publication--detail" category=PAGE_CAT_DETAIL title=title>
            {move || vm.publication.error().map(|e| view! { <div class="error">{e}</div> })}
            <Show
                when=move || vm.publication.data().is_some()
                fallback=|| view! { <div class="loading">"Загрузка..."</div> }
            >
                <HeaderForm vm=vm />
                <section class="form__section">
                    <h2>"Вариации"</h2>
                    <For
                        each=move || vm.item_ids()
                        key=|id| id.clone()
                        children=move |item_id| view! { <VariationCard vm=vm item_id=item_id /> }
                    />
                </section>
                <AddVariationForm vm=vm />
            </Show>
        </PageFrame>
    }
}

/// Заголовочные поля публикации
#[component]
fn HeaderForm(vm: PublicationDetailsViewModel) -> impl IntoView {
    let update = move |f: &dyn Fn(&mut HeaderDraft)| {
        vm.header.update(|h| {
            if let Some(h) = h {
                f(h);
            }
        });
    };
    let error = move |path: &'static str| {
        move || {
            vm.header_errors
                .with(|e| e.get(path).map(str::to_string))
                .map(|e| view! { <div class="form__error">{e}</div> })
        }
    };
    let is_preorder = move || vm.kind() == Some(PublicationKind::Preorder);
    let meta = move || {
        vm.publication.data().map(|p| {
            format!(
                "{} · создана {} · изменена {}",
                p.kind().display_name(),
                format_datetime(&p.meta.created_at),
                format_datetime(&p.meta.updated_at)
            )
        })
    };

    view! {
        <section class="form__section">
            <div class="form__meta">{meta}</div>
            <div class="form__group">
                <label class="form__label">"Ссылка"</label>
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || vm.header.with(|h| h.as_ref().map(|h| h.link.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        update(&|h: &mut HeaderDraft| h.link = value.clone());
                    }
                />
                {error("link")}
            </div>

            <div class="form__group">
                <label class="form__label">"Категория"</label>
                <select
                    class="form__input"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let category = (!value.is_empty()).then(|| CategoryId::new(value));
                        update(&|h: &mut HeaderDraft| h.category_id = category.clone());
                    }
                >
                    {move || {
                        let selected = vm.header.with(|h| h.as_ref().and_then(|h| h.category_id.clone()));
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
                {error("categoryId")}
            </div>

            <Show when=is_preorder>
                <div class="form__group">
                    <label class="form__label">"Стоимость доставки включена в цену"</label>
                    <select
                        class="form__input"
                        on:change=move |ev| {
                            let value = ShippingCostIncluded::from_code(&event_target_value(&ev));
                            update(&|h: &mut HeaderDraft| h.shipping_cost_included = value);
                        }
                    >
                        <option value="">"—"</option>
                        {ShippingCostIncluded::all()
                            .into_iter()
                            .map(|option| {
                                let is_selected = move || {
                                    vm.header.with(|h| {
                                        h.as_ref().is_some_and(|h| h.shipping_cost_included == Some(option))
                                    })
                                };
                                view! {
                                    <option value=option.code() selected=is_selected>
                                        {option.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    {error("shippingCostIncluded")}
                </div>
            </Show>

            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || vm.header_save.loading())
                on_click=move |_| vm.save_header()
            >
                "Сохранить"
            </Button>
        </section>
    }
}

/// Добавление вариации к существующей публикации
#[component]
fn AddVariationForm(vm: PublicationDetailsViewModel) -> impl IntoView {
    let update = move |f: &dyn Fn(&mut VariationDraft)| vm.new_item.update(|d| f(d));
    let error = move |path: &'static str| {
        Signal::derive(move || vm.new_item_errors.with(|e| e.get(path).map(str::to_string)))
    };
    let is_preorder = move || vm.kind() == Some(PublicationKind::Preorder);
    let unlimited = move || vm.new_item.with(|d| d.quantity.unlimited);

    view! {
        <section class="form__section">
            <h2>"Новая вариация"</h2>
            <div class="form__group">
                <label class="form__label">"Продукт"</label>
                <select
                    class="form__input"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let product = vm.addable_products().into_iter().find(|p| p.id.as_str() == value);
                        update(&|d: &mut VariationDraft| d.product = product.clone());
                    }
                >
                    <option value="">"—"</option>
                    {move || {
                        let selected = vm.new_item.with(|d| d.product_id().cloned());
                        vm.addable_products()
                            .into_iter()
                            .map(|product| {
                                let is_selected = selected.as_ref() == Some(&product.id);
                                view! {
                                    <option value=product.id.to_string() selected=is_selected>
                                        {product.title}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                {move || error("product").get().map(|e| view! { <div class="form__error">{e}</div> })}
            </div>

            <div class="variation__row">
                <div class="form__group">
                    <label class="form__label">"Рейтинг"</label>
                    <IntInput
                        value=Signal::derive(move || vm.new_item.with(|d| d.rating.clone()))
                        on_change=Callback::new(move |text: String| update(&|d: &mut VariationDraft| d.rating = text.clone()))
                        error=error("rating")
                    />
                    {move || vm.max_rating_hint().map(|hint| view! { <div class="form__hint">{hint}</div> })}
                </div>
                <div class="form__group">
                    <label class="form__label">"Цена, ₽"</label>
                    <IntInput
                        value=Signal::derive(move || vm.new_item.with(|d| d.price.clone()))
                        on_change=Callback::new(move |text: String| update(&|d: &mut VariationDraft| d.price = text.clone()))
                        error=error("price")
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Количество"</label>
                    <IntInput
                        value=Signal::derive(move || vm.new_item.with(|d| d.quantity.text.clone()))
                        on_change=Callback::new(move |text: String| update(&|d: &mut VariationDraft| d.quantity.text = text.clone()))
                        disabled=Signal::derive(unlimited)
                        error=error("quantity")
                    />
                    <Show when=is_preorder>
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=unlimited
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    update(&|d: &mut VariationDraft| d.quantity.set_unlimited(checked));
                                }
                            />
                            "Количество не ограничено"
                        </label>
                    </Show>
                </div>
            </div>

            <label class="form__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || vm.new_item_active.get()
                    on:change=move |ev| vm.new_item_active.set(event_target_checked(&ev))
                />
                "Сразу опубликовать"
            </label>

            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || vm.new_item_save.loading())
                on_click=move |_| vm.add_variation()
            >
                "Добавить вариацию"
            </Button>
        </section>
    }
}
