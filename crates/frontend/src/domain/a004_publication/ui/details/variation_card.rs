use contracts::domain::a004_publication::PublicationKind;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

use super::form::{deadline_input, CatalogItemEdit};
use super::view_model::PublicationDetailsViewModel;
use crate::domain::a004_publication::api::{
    activate_catalog_item, deactivate_catalog_item, delete_catalog_item, update_catalog_item,
};
use crate::domain::a004_publication::ui::create::form::VariationDraft;
use crate::shared::cache::use_mutation;
use crate::shared::date_utils::parse_date_input;
use crate::shared::forms::IntInput;
use crate::shared::modal::ConfirmDialog;
use crate::shared::notification::Notifications;

/// Карточка вариации с редактированием на месте
#[component]
pub fn VariationCard(vm: PublicationDetailsViewModel, item_id: String) -> impl IntoView {
    let item_id = StoredValue::new(item_id);
    let item = Signal::derive(move || item_id.with_value(|id| vm.item(id)));
    let edit = RwSignal::new(None::<CatalogItemEdit>);
    let errors = RwSignal::new(FieldErrors::new());
    let confirm_delete = RwSignal::new(false);
    let mutation = use_mutation();
    let notifications = Notifications::use_notifications();

    // данные с сервера сбрасывают правки карточки
    Effect::new(move |_| {
        if let Some(item) = item.get() {
            edit.set(Some(CatalogItemEdit::from_item(&item)));
            errors.set(FieldErrors::new());
        }
    });

    let kind = move || vm.kind().unwrap_or(PublicationKind::Stock);
    let publication_id = move || {
        vm.publication
            .state
            .with(|s| s.data.as_ref().map(|p| p.id.to_string()))
            .unwrap_or_default()
    };
    let update_draft = move |f: &dyn Fn(&mut VariationDraft)| {
        edit.update(|e| {
            if let Some(e) = e {
                f(&mut e.draft);
            }
        });
    };
    let read = move |f: fn(&CatalogItemEdit) -> String| edit.with(|e| e.as_ref().map(f).unwrap_or_default());
    let error = move |path: &'static str| Signal::derive(move || errors.with(|e| e.get(path).map(str::to_string)));
    let is_dirty = move || {
        let Some(item) = item.get() else {
            return false;
        };
        edit.with(|e| e.as_ref().is_some_and(|e| e.is_dirty(&item)))
    };

    let on_save = move |_| {
        let (Some(item), Some(current)) = (item.get_untracked(), edit.get_untracked()) else {
            return;
        };
        match current.validate(kind(), &item) {
            Ok(dto) => {
                errors.set(FieldErrors::new());
                mutation.run(update_catalog_item(&publication_id(), &dto), move |()| {
                    notifications.success("Вариация сохранена");
                });
            }
            Err(e) => errors.set(e),
        }
    };
    let on_toggle_active = move |_| {
        let Some(item) = item.get_untracked() else {
            return;
        };
        let pub_id = publication_id();
        let (def, message) = if item.is_active {
            (deactivate_catalog_item(&pub_id, item.id.as_str()), "Вариация скрыта")
        } else {
            (activate_catalog_item(&pub_id, item.id.as_str()), "Вариация опубликована")
        };
        mutation.run(def, move |()| notifications.success(message));
    };
    let on_delete = Callback::new(move |_: ()| {
        let pub_id = publication_id();
        let def = item_id.with_value(|id| delete_catalog_item(&pub_id, id));
        mutation.run(def, move |()| {
            confirm_delete.set(false);
            notifications.success("Вариация удалена");
        });
    });

    let title = move || {
        item.with(|i| i.as_ref().map(|i| i.product.title.clone()))
            .unwrap_or_default()
    };
    let is_active = move || item.with(|i| i.as_ref().is_some_and(|i| i.is_active));
    let payment_count = move || edit.with(|e| e.as_ref().map_or(0, |e| e.draft.credit_payments.len()));

    view! {
        <div class="variation-card" class:variation-card--inactive=move || !is_active()>
            <div class="variation-card__header">
                <h3>{title}</h3>
                {move || {
                    if is_active() {
                        view! { <Badge color=BadgeColor::Success>"Активна"</Badge> }.into_any()
                    } else {
                        view! { <Badge color=BadgeColor::Informative>"Скрыта"</Badge> }.into_any()
                    }
                }}
            </div>

            <div class="variation__row">
                <div class="form__group">
                    <label class="form__label">"Рейтинг"</label>
                    <IntInput
                        value=Signal::derive(move || read(|e| e.draft.rating.clone()))
                        on_change=Callback::new(move |text: String| update_draft(&|d: &mut VariationDraft| d.rating = text.clone()))
                        error=error("rating")
                    />
                    {move || vm.max_rating_hint().map(|hint| view! { <div class="form__hint">{hint}</div> })}
                </div>
                <div class="form__group">
                    <label class="form__label">"Цена, ₽"</label>
                    <IntInput
                        value=Signal::derive(move || read(|e| e.draft.price.clone()))
                        on_change=Callback::new(move |text: String| update_draft(&|d: &mut VariationDraft| d.price = text.clone()))
                        disabled=Signal::derive(move || payment_count() > 0)
                        error=error("price")
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Количество"</label>
                    <IntInput
                        value=Signal::derive(move || read(|e| e.draft.quantity.text.clone()))
                        on_change=Callback::new(move |text: String| update_draft(&|d: &mut VariationDraft| d.quantity.text = text.clone()))
                        disabled=Signal::derive(move || edit.with(|e| e.as_ref().is_some_and(|e| e.draft.quantity.unlimited)))
                        error=error("quantity")
                    />
                    <Show when=move || kind() == PublicationKind::Preorder>
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || edit.with(|e| e.as_ref().is_some_and(|e| e.draft.quantity.unlimited))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    update_draft(&|d: &mut VariationDraft| d.quantity.set_unlimited(checked));
                                }
                            />
                            "Количество не ограничено"
                        </label>
                    </Show>
                </div>
                <div class="form__group">
                    <label class="form__label">"В одни руки"</label>
                    <IntInput
                        value=Signal::derive(move || read(|e| e.quantity_restriction.clone()))
                        on_change=Callback::new(move |text: String| {
                            edit.update(|e| {
                                if let Some(e) = e {
                                    e.quantity_restriction = text;
                                }
                            })
                        })
                        error=error("quantityRestriction")
                    />
                </div>
            </div>

            <div class="form__group">
                <label class="form__label">
                    {move || format!("Скидка, {}", edit.with(|e| e.as_ref().map_or("₽", |e| e.draft.discount.unit())))}
                </label>
                <IntInput
                    value=Signal::derive(move || read(|e| e.draft.discount.text().to_string()))
                    on_change=Callback::new(move |text: String| update_draft(&|d: &mut VariationDraft| d.discount.set_text(text.clone())))
                    disabled=Signal::derive(move || !edit.with(|e| e.as_ref().is_some_and(|e| e.draft.discount.is_enabled())))
                    error=error("discount")
                />
                <div class="variation__row">
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || edit.with(|e| e.as_ref().is_some_and(|e| e.draft.discount.is_enabled()))
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                update_draft(&|d: &mut VariationDraft| d.discount.set_enabled(checked));
                            }
                        />
                        "Скидка"
                    </label>
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || edit.with(|e| e.as_ref().is_some_and(|e| e.draft.discount.is_percentage()))
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                update_draft(&|d: &mut VariationDraft| d.discount.set_percentage(checked));
                            }
                        />
                        "%"
                    </label>
                    {move || {
                        edit.with(|e| e.as_ref().and_then(|e| e.draft.price_after_discount()))
                            .map(|total| view! { <span>{format!("Итог: {}₽", total)}</span> })
                    }}
                </div>
            </div>

            <Show when=move || kind() == PublicationKind::Preorder>
                <div class="variation__credit">
                    <For
                        each=move || 0..payment_count()
                        key=|payment| *payment
                        children=move |payment| {
                            let sum_error = error_at(errors, payment, "sum");
                            let deadline_error = error_at(errors, payment, "deadline");
                            view! {
                                <div class="variation__row">
                                    <IntInput
                                        value=Signal::derive(move || {
                                            edit.with(|e| {
                                                e.as_ref()
                                                    .and_then(|e| e.draft.credit_payments.get(payment))
                                                    .map(|p| p.sum.clone())
                                                    .unwrap_or_default()
                                            })
                                        })
                                        on_change=Callback::new(move |text: String| {
                                            update_draft(&|d: &mut VariationDraft| d.set_credit_sum(payment, text.clone()))
                                        })
                                        error=sum_error
                                    />
                                    <div class="form__group">
                                        <input
                                            class="form__input"
                                            type="date"
                                            prop:value=move || {
                                                edit.with(|e| {
                                                    e.as_ref()
                                                        .and_then(|e| e.draft.credit_payments.get(payment))
                                                        .map(deadline_input)
                                                        .unwrap_or_default()
                                                })
                                            }
                                            on:change=move |ev| {
                                                let value = parse_date_input(&event_target_value(&ev));
                                                update_draft(&|d: &mut VariationDraft| d.set_credit_deadline(payment, value));
                                            }
                                        />
                                        {move || deadline_error.get().map(|e| view! { <div class="form__error">{e}</div> })}
                                    </div>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| update_draft(&|d: &mut VariationDraft| d.remove_credit_payment(payment))
                                    >
                                        "Удалить"
                                    </Button>
                                </div>
                            }
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| update_draft(&|d: &mut VariationDraft| d.add_credit_payment())
                    >
                        {move || if payment_count() == 0 { "Товар в рассрочку" } else { "Добавить платеж" }}
                    </Button>
                </div>
            </Show>

            <div class="variation-card__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !is_dirty() || mutation.loading())
                    on_click=on_save
                >
                    "Сохранить"
                </Button>
                <Button
                    disabled=Signal::derive(move || mutation.loading())
                    on_click=on_toggle_active
                >
                    {move || if is_active() { "Скрыть" } else { "Опубликовать" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| confirm_delete.set(true)
                >
                    "Удалить"
                </Button>
            </div>

            <Show when=move || confirm_delete.get()>
                <ConfirmDialog
                    title="Удаление вариации"
                    message=format!("Удалить вариацию «{}»?", title())
                    busy=Signal::derive(move || mutation.loading())
                    on_confirm=on_delete
                    on_cancel=Callback::new(move |_| confirm_delete.set(false))
                />
            </Show>
        </div>
    }
}

fn error_at(errors: RwSignal<FieldErrors>, payment: usize, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || {
        errors.with(|e| {
            e.get(&format!("creditPayments.{}.{}", payment, field))
                .map(str::to_string)
        })
    })
}
