use contracts::domain::a004_publication::PublicationKind;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use super::form::VariationDraft;
use super::view_model::PublicationCreateViewModel;
use crate::shared::date_utils::{parse_date_input, to_date_input};
use crate::shared::forms::IntInput;
use crate::shared::icons::icon;

/// Строка списка вариаций
#[component]
pub fn VariationItemForm(vm: PublicationCreateViewModel, index: usize) -> impl IntoView {
    let read = move |f: fn(&VariationDraft) -> String| {
        vm.draft
            .with(|d| d.items.get(index).map(f).unwrap_or_default())
    };
    let error = move |field: &'static str| {
        Signal::derive(move || vm.error(&format!("items.{}.{}", index, field)))
    };
    let is_preorder = move || vm.kind() == PublicationKind::Preorder;
    let is_single = move || vm.draft.with(|d| d.items.is_single());

    let title = move || {
        if is_single() {
            "Товар".to_string()
        } else {
            format!("Вариация {}", index + 1)
        }
    };

    let product_id = move || read(|item| item.product_id().map(|id| id.to_string()).unwrap_or_default());
    let on_product_change = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        let product = vm
            .available_products()
            .into_iter()
            .find(|p| p.id.as_str() == value);
        vm.update_item(index, |item| item.product = product);
    };

    let unlimited = move || vm.draft.with(|d| d.items.get(index).is_some_and(|i| i.quantity.unlimited));
    let price_locked = Signal::derive(move || {
        vm.draft
            .with(|d| d.items.get(index).is_some_and(VariationDraft::price_locked))
    });
    let discount_enabled =
        move || vm.draft.with(|d| d.items.get(index).is_some_and(|i| i.discount.is_enabled()));
    let discount_percentage =
        move || vm.draft.with(|d| d.items.get(index).is_some_and(|i| i.discount.is_percentage()));
    let price_total = move || {
        vm.draft.with(|d| {
            d.items
                .get(index)
                .and_then(VariationDraft::price_after_discount)
        })
    };
    let payment_count = move || vm.draft.with(|d| d.items.get(index).map_or(0, |i| i.credit_payments.len()));

    view! {
        <li
            class="variation"
            class:variation--dragging=move || vm.dragging.get() == Some(index)
            draggable="true"
            on:dragstart=move |_: ev::DragEvent| vm.drag_start(index)
            on:dragover=move |ev: ev::DragEvent| ev.prevent_default()
            on:drop=move |ev: ev::DragEvent| {
                ev.prevent_default();
                vm.drop_on(index);
            }
            on:dragend=move |_: ev::DragEvent| vm.drag_end()
        >
            <span class="variation__handle">{icon("grip")}</span>
            <div class="variation__body">
                <div class="variation__header">
                    <h3>{title}</h3>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        disabled=Signal::derive(is_single)
                        on_click=move |_| vm.remove_item(index)
                    >
                        {icon("trash")}
                    </Button>
                </div>

                <div class="form__group">
                    <label class="form__label">"Продукт"</label>
                    <select class="form__input" prop:value=product_id on:change=on_product_change>
                        <option value="">"—"</option>
                        {move || {
                            let draft = vm.draft.get();
                            vm.available_products()
                                .into_iter()
                                .map(|product| {
                                    let disabled = draft.items.is_option_disabled(&product, index);
                                    let selected = draft
                                        .items
                                        .get(index)
                                        .and_then(VariationDraft::product_id)
                                        == Some(&product.id);
                                    view! {
                                        <option
                                            value=product.id.to_string()
                                            disabled=disabled
                                            selected=selected
                                        >
                                            {product.title.clone()}
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
                            value=Signal::derive(move || read(|i| i.rating.clone()))
                            on_change=Callback::new(move |text| vm.update_item(index, |i| i.rating = text))
                            error=error("rating")
                        />
                        {move || vm.max_rating_hint().map(|hint| view! { <div class="form__hint">{hint}</div> })}
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Цена, ₽"</label>
                        <IntInput
                            value=Signal::derive(move || read(|i| i.price.clone()))
                            on_change=Callback::new(move |text| vm.update_item(index, |i| i.price = text))
                            disabled=price_locked
                            error=error("price")
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Количество"</label>
                        <IntInput
                            value=Signal::derive(move || read(|i| i.quantity.text.clone()))
                            on_change=Callback::new(move |text| vm.update_item(index, |i| i.quantity.text = text))
                            placeholder=String::from("шт.")
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
                                        vm.update_item(index, |i| i.quantity.set_unlimited(checked));
                                    }
                                />
                                "Количество не ограничено"
                            </label>
                        </Show>
                    </div>
                </div>

                <div class="form__group">
                    <label class="form__label">"Скидка"</label>
                    <IntInput
                        value=Signal::derive(move || read(|i| i.discount.text().to_string()))
                        on_change=Callback::new(move |text| vm.update_item(index, |i| i.discount.set_text(text)))
                        placeholder=String::from("-")
                        disabled=Signal::derive(move || !discount_enabled())
                        error=error("discount")
                    />
                    <div class="variation__row">
                        <input
                            type="checkbox"
                            prop:checked=discount_enabled
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                vm.update_item(index, |i| i.discount.set_enabled(checked));
                            }
                        />
                        <span>"₽"</span>
                        <input
                            type="checkbox"
                            class="form__switch"
                            prop:checked=discount_percentage
                            disabled=move || !discount_enabled()
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                vm.update_item(index, |i| i.discount.set_percentage(checked));
                            }
                        />
                        <span>"%"</span>
                        {move || price_total().map(|total| view! { <span>{format!("Итог: {}₽", total)}</span> })}
                    </div>
                </div>

                <Show when=is_preorder>
                    <div class="variation__credit">
                        <Show when=move || payment_count() != 0>
                            <h4>"Платежи рассрочки"</h4>
                        </Show>
                        <For
                            each=move || 0..payment_count()
                            key=|payment| *payment
                            children=move |payment| view! {
                                <CreditPaymentRow vm=vm index=index payment=payment />
                            }
                        />
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| vm.update_item(index, VariationDraft::add_credit_payment)
                        >
                            {move || if payment_count() == 0 { "Товар в рассрочку" } else { "Добавить платеж" }}
                        </Button>
                    </div>
                </Show>
            </div>
        </li>
    }
}

/// Платёж рассрочки: сумма, срок и удаление
#[component]
fn CreditPaymentRow(vm: PublicationCreateViewModel, index: usize, payment: usize) -> impl IntoView {
    let sum = Signal::derive(move || {
        vm.draft.with(|d| {
            d.items
                .get(index)
                .and_then(|i| i.credit_payments.get(payment))
                .map(|p| p.sum.clone())
                .unwrap_or_default()
        })
    });
    let deadline = move || {
        vm.draft.with(|d| {
            d.items
                .get(index)
                .and_then(|i| i.credit_payments.get(payment))
                .and_then(|p| p.deadline.as_ref().map(to_date_input))
                .unwrap_or_default()
        })
    };
    let error = move |field: &'static str| {
        Signal::derive(move || {
            vm.error(&format!("items.{}.creditPayments.{}.{}", index, payment, field))
        })
    };
    let deadline_error = error("deadline");

    view! {
        <div class="variation__row">
            <div class="form__group">
                <label class="form__label">"Сумма, ₽"</label>
                <IntInput
                    value=sum
                    on_change=Callback::new(move |text| {
                        vm.update_item(index, |i| i.set_credit_sum(payment, text))
                    })
                    error=error("sum")
                />
            </div>
            <div class="form__group">
                <label class="form__label">"Срок"</label>
                <input
                    class="form__input"
                    type="date"
                    prop:value=deadline
                    on:change=move |ev| {
                        let value = parse_date_input(&event_target_value(&ev));
                        vm.update_item(index, |i| i.set_credit_deadline(payment, value));
                    }
                />
                {move || deadline_error.get().map(|e| view! { <div class="form__error">{e}</div> })}
            </div>
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| vm.update_item(index, |i| i.remove_credit_payment(payment))
            >
                "Удалить"
            </Button>
        </div>
    }
}
