//! PageFrame: корневая обёртка страницы.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a004_publication--list" category=PAGE_CAT_LIST title="Публикации">
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id в формате `{entity}--{category}`
    page_id: &'static str,
    /// Одна из констант PAGE_CAT_*
    category: &'static str,
    /// Заголовок страницы
    #[prop(optional, into)]
    title: Signal<String>,
    /// Кнопки справа от заголовка
    #[prop(optional)]
    actions: Option<ChildrenFn>,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("PageFrame: unexpected page id '{}'", page_id);
    }
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_CREATE => "page page--create",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            <div class="page__header">
                <h1 class="page__title">{move || title.get()}</h1>
                <div class="page__actions">
                    {actions.as_ref().map(|a| a())}
                </div>
            </div>
            {children()}
        </div>
    }
}
