use crate::shared::date_utils::{parse_input_date, to_input_date};
use chrono::NaiveDate;
use leptos::prelude::*;

/// Native date picker bound to an optional date
#[component]
pub fn DateInput(
    value: RwSignal<Option<NaiveDate>>,
    #[prop(optional)] style: Option<String>,
) -> impl IntoView {
    let default_style = "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; width: 150px;";
    let final_style = style.unwrap_or_else(|| default_style.to_string());

    view! {
        <input
            type="date"
            prop:value=move || to_input_date(value.get())
            on:input=move |ev| value.set(parse_input_date(&event_target_value(&ev)))
            style=final_style
        />
    }
}

/// Native time picker, `HH:MM`
#[component]
pub fn TimeInput(value: RwSignal<String>) -> impl IntoView {
    view! {
        <input
            type="time"
            class="form__time"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

/// Start/end pair used by list filters
#[component]
pub fn DateRangeInput(
    start: RwSignal<Option<NaiveDate>>,
    end: RwSignal<Option<NaiveDate>>,
) -> impl IntoView {
    view! {
        <div class="date-range">
            <DateInput value=start />
            <span class="date-range__separator">"~"</span>
            <DateInput value=end />
        </div>
    }
}
