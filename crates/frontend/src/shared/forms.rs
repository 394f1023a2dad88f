//! Общие помощники полей ввода

use leptos::prelude::*;

/// Ввод только цифр: пустая строка допустима, любой другой символ
/// отклоняет правку целиком
pub fn accept_int_input(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}

/// Числовое поле, хранящее текст
///
/// Недопустимая правка не доходит до `on_change`, а в поле
/// возвращается прежнее значение.
#[component]
pub fn IntInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <input
                class="form__input"
                type="text"
                inputmode="numeric"
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    if accept_int_input(&text) {
                        on_change.run(text);
                    } else {
                        let input = event_target::<web_sys::HtmlInputElement>(&ev);
                        input.set_value(&value.get_untracked());
                    }
                }
            />
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

/// Текстовое поле с сообщением об ошибке
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_int_input() {
        assert!(accept_int_input(""));
        assert!(accept_int_input("0123"));
        assert!(!accept_int_input("12a"));
        assert!(!accept_int_input("-5"));
        assert!(!accept_int_input("1.5"));
        assert!(!accept_int_input("١٢"));
    }
}
