use contracts::domain::a007_order::{
    OrderDto, OrderEditablePropsDto, OrderUpdateDeliveryDto, OrderUpdateStatusDto,
};
use contracts::enums::{DeliveryService, OrderStatus};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

use super::delivery_form::DeliveryDraft;
use crate::domain::a007_order::api::{
    get_order, get_order_editable, update_order_delivery, update_order_status,
};
use crate::shared::cache::{use_mutation, use_query, QueryHandle};
use crate::shared::date_utils::format_datetime;
use crate::shared::notification::Notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

#[component]
pub fn OrderDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || params.with(|p| p.get("id").unwrap_or_default()));
    let order = use_query(move || get_order(&id.get()));
    let editable = use_query(move || get_order_editable(&id.get()));

    let title = Signal::derive(move || format!("Заказ {}", id.get()));

    view! {
        <PageFrame page_id="order--detail" category=PAGE_CAT_DETAIL title=title>
            {move || order.error().map(|e| view! { <div class="error">{e}</div> })}
            {move || match order.data() {
                None => view! { <div class="loading">"Загрузка..."</div> }.into_any(),
                Some(data) => view! {
                    <OrderSummary order=data.clone() />
                    <StatusEditor order=data.clone() editable=editable />
                    <DeliveryEditor order=data editable=editable />
                }
                .into_any(),
            }}
        </PageFrame>
    }
}

#[component]
fn OrderSummary(order: OrderDto) -> impl IntoView {
    let user_link = format!("/user/{}", order.user.id);
    let total = order.total();
    view! {
        <section class="form__section">
            <div class="form__meta">
                {format!(
                    "Создан {} · изменён {}",
                    format_datetime(&order.meta.created_at),
                    format_datetime(&order.meta.updated_at),
                )}
            </div>
            <div class="form__group">
                <span class="form__label">"Покупатель"</span>
                <A href=user_link>{order.user.email.clone()}</A>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Товар"</th>
                        <th>"Количество"</th>
                        <th>"Сумма, ₽"</th>
                    </tr>
                </thead>
                <tbody>
                    {order
                        .items
                        .into_iter()
                        .map(|item| {
                            view! {
                                <tr>
                                    <td>{item.title}</td>
                                    <td>{item.quantity}</td>
                                    <td>{item.sum}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
            <div class="order__total">{format!("Итого: {}₽", total)}</div>
        </section>
    }
}

/// Смена статуса в пределах разрешённых переходов
#[component]
fn StatusEditor(order: OrderDto, editable: QueryHandle<OrderEditablePropsDto>) -> impl IntoView {
    let current = order.status;
    let order_id = StoredValue::new(order.id);
    let status = RwSignal::new(current);
    let save = use_mutation();
    let notifications = Notifications::use_notifications();

    let options = move || {
        let mut statuses = editable.data().map(|e| e.statuses).unwrap_or_default();
        if !statuses.contains(&current) {
            statuses.insert(0, current);
        }
        statuses
    };
    let can_edit = move || editable.data().is_some_and(|e| !e.statuses.is_empty());

    let on_save = move |_| {
        let dto = OrderUpdateStatusDto {
            id: order_id.get_value(),
            status: status.get_untracked(),
        };
        save.run(update_order_status(&dto), move |()| {
            notifications.success("Статус заказа обновлён");
        });
    };

    view! {
        <section class="form__section">
            <h2>"Статус"</h2>
            <div class="variation__row">
                <select
                    class="form__input"
                    disabled=move || !can_edit()
                    on:change=move |ev| {
                        if let Some(value) = OrderStatus::from_code(&event_target_value(&ev)) {
                            status.set(value);
                        }
                    }
                >
                    {move || {
                        options()
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option value=option.code() selected=move || status.get() == option>
                                        {option.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || status.get() == current || save.loading())
                    on_click=on_save
                >
                    "Сохранить"
                </Button>
            </div>
        </section>
    }
}

#[component]
fn DeliveryEditor(order: OrderDto, editable: QueryHandle<OrderEditablePropsDto>) -> impl IntoView {
    let initial = DeliveryDraft::from_delivery(order.delivery.as_ref().map(|d| &d.delivery));
    let has_delivery = order.delivery.is_some();
    let tracking = order.delivery.as_ref().and_then(|d| d.tracking.clone());
    let order_id = StoredValue::new(order.id);
    let initial = StoredValue::new(initial);

    let draft = RwSignal::new(initial.get_value());
    let errors = RwSignal::new(FieldErrors::new());
    let editing = RwSignal::new(!has_delivery);
    let save = use_mutation();
    let notifications = Notifications::use_notifications();

    let can_edit = move || editable.data().is_some_and(|e| e.delivery);
    let is_dirty = move || initial.with_value(|i| draft.with(|d| d != i));
    let error = move |path: &'static str| {
        move || {
            errors
                .with(|e| e.get(path).map(str::to_string))
                .map(|e| view! { <div class="form__error">{e}</div> })
        }
    };
    let text_input = move |label: &'static str, get: fn(&DeliveryDraft) -> String, set: fn(&mut DeliveryDraft, String)| {
        view! {
            <div class="form__group">
                <label class="form__label">{label}</label>
                <input
                    class="form__input"
                    type="text"
                    disabled=move || !editing.get()
                    prop:value=move || draft.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| set(d, value));
                    }
                />
            </div>
        }
    };

    let on_save = move |_| {
        let delivery = match draft.with_untracked(DeliveryDraft::validate) {
            Ok(delivery) => delivery,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        let dto = OrderUpdateDeliveryDto {
            id: order_id.get_value(),
            delivery,
        };
        save.run(update_order_delivery(&dto), move |()| {
            editing.set(false);
            notifications.success("Доставка обновлена");
        });
    };
    let on_cancel = move |_| {
        draft.set(initial.get_value());
        errors.set(FieldErrors::new());
        editing.set(false);
    };

    view! {
        <section class="form__section">
            <h2>"Адрес и способ доставки"</h2>
            <div class="variation__row">
                {DeliveryService::all()
                    .into_iter()
                    .map(|service| {
                        view! {
                            <label class="form__checkbox">
                                <input
                                    type="radio"
                                    name="delivery-service"
                                    disabled=move || !editing.get()
                                    prop:checked=move || draft.with(|d| d.service == Some(service))
                                    on:change=move |_| draft.update(|d| d.service = Some(service))
                                />
                                {service.display_name()}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            {error("service")}

            <Show when=move || draft.with(|d| d.service.is_some_and(|s| s.requires_point()))>
                {text_input("Адрес пункта выдачи", |d| d.point_address.clone(), |d, v| d.point_address = v)}
                {text_input("Код пункта выдачи", |d| d.point_code.clone(), |d, v| d.point_code = v)}
                {error("point")}
            </Show>

            {tracking.map(|t| {
                view! {
                    <div class="form__group">
                        <span class="form__label">"Трек-номер"</span>
                        <a href=t.link target="_blank">{t.code}</a>
                    </div>
                }
            })}

            <h2>"Получатель"</h2>
            {text_input("Номер телефона", |d| d.phone.clone(), |d, v| d.phone = v)}
            {error("recipient.phone")}
            {text_input("ФИО", |d| d.full_name.clone(), |d, v| d.full_name = v)}
            {error("recipient.fullName")}

            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <Button
                            disabled=Signal::derive(move || !can_edit())
                            on_click=move |_| editing.set(true)
                        >
                            "Изменить"
                        </Button>
                    }
                }
            >
                <div class="variation__row">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !is_dirty() || save.loading() || !can_edit())
                        on_click=on_save
                    >
                        {if has_delivery { "Сохранить" } else { "Подтвердить" }}
                    </Button>
                    <Show when=move || has_delivery>
                        <Button on_click=on_cancel>"Отменить"</Button>
                    </Show>
                </div>
            </Show>
        </section>
    }
}
