use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::shared::cache::use_query;
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::users::api::get_user;

/// Карточка пользователя, только просмотр
#[component]
pub fn UserDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || params.with(|p| p.get("id").unwrap_or_default()));
    let user = use_query(move || get_user(&id.get()));

    let title = Signal::derive(move || {
        user.data()
            .map(|u| u.email)
            .unwrap_or_else(|| "Пользователь".to_string())
    });

    view! {
        <PageFrame page_id="user--detail" category=PAGE_CAT_DETAIL title=title>
            {move || user.error().map(|e| view! { <div class="error">{e}</div> })}
            {move || {
                user.data()
                    .map(|u| {
                        view! {
                            <dl class="details">
                                <dt>"Email"</dt>
                                <dd>{u.email}</dd>
                                <dt>"Подтверждён"</dt>
                                <dd>
                                    {if u.verified {
                                        view! { <Badge color=BadgeColor::Success>"Да"</Badge> }.into_any()
                                    } else {
                                        view! { <Badge color=BadgeColor::Informative>"Нет"</Badge> }.into_any()
                                    }}
                                </dd>
                                <dt>"VK ID"</dt>
                                <dd>{u.vk_id.unwrap_or_else(|| "—".to_string())}</dd>
                                <dt>"Создан"</dt>
                                <dd>{format_datetime(&u.meta.created_at)}</dd>
                                <dt>"Обновлен"</dt>
                                <dd>{format_datetime(&u.meta.updated_at)}</dd>
                            </dl>
                        }
                    })
            }}
        </PageFrame>
    }
}
