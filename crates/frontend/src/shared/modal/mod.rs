use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Modal(
    /// Заголовок окна
    #[prop(into)]
    title: String,
    /// Закрытие по Escape, клику по подложке или крестику
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Подтверждение необратимого действия
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
    #[prop(optional, into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_cancel>
            <p class="modal-message">{message}</p>
            <div class="modal-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || busy.get())
                    on_click=move |_| on_confirm.run(())
                >
                    "Да"
                </Button>
                <Button on_click=move |_| on_cancel.run(())>
                    "Отмена"
                </Button>
            </div>
        </Modal>
    }
}
