use leptos::prelude::*;

/// Native `<select>` for options known only at runtime (customers, accounts...).
/// `options` are `(value, label)` pairs; an empty value means nothing picked.
#[component]
pub fn OptionSelect(
    value: RwSignal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    placeholder: &'static str,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <select
            class="form__select"
            prop:value=move || value.get()
            on:change=move |ev| value.set(event_target_value(&ev))
            disabled=move || disabled.get()
        >
            <option value="" selected=move || value.with(String::is_empty)>{placeholder}</option>
            <For
                each=move || options.get()
                key=|(id, label)| (id.clone(), label.clone())
                children=move |(id, label)| {
                    let id_for_selected = id.clone();
                    view! {
                        <option value=id selected=move || value.with(|v| *v == id_for_selected)>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}
