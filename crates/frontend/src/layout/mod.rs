pub mod sidebar;

use leptos::prelude::*;
use sidebar::Sidebar;

use crate::shared::notification::Snackbar;

/// Каркас приложения
///
/// ```text
/// +-----------+------------------------+
/// |  Sidebar  |        Content         |
/// +-----------+------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-body">
                <aside class="left" data-zone="left">
                    <Sidebar />
                </aside>
                <main class="app-main">
                    {children()}
                </main>
            </div>
            <Snackbar />
        </div>
    }
}
