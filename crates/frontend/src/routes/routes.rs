use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a004_publication::ui::create::PublicationCreatePage;
use crate::domain::a004_publication::ui::details::PublicationDetailsPage;
use crate::domain::a004_publication::ui::list::PublicationListPage;
use crate::domain::a006_filter_group::ui::list::FilterGroupListPage;
use crate::domain::a007_order::ui::details::OrderDetailsPage;
use crate::layout::Shell;
use crate::system::users::ui::details::UserDetailsPage;
use crate::system::users::ui::list::UserListPage;

#[component]
fn NotFound() -> impl IntoView {
    view! { <div class="page"><h1 class="page__title">"Страница не найдена"</h1></div> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/publication" /> } />
                    <Route path=path!("/publication") view=PublicationListPage />
                    <Route path=path!("/publication/create") view=PublicationCreatePage />
                    <Route path=path!("/publication/:id") view=PublicationDetailsPage />
                    <Route path=path!("/filter") view=FilterGroupListPage />
                    <Route path=path!("/user") view=UserListPage />
                    <Route path=path!("/user/:id") view=UserDetailsPage />
                    <Route path=path!("/order/:id") view=OrderDetailsPage />
                </Routes>
            </Shell>
        </Router>
    }
}
