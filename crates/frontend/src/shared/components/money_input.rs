use crate::shared::money::{input_text, mask_brl_input};
use leptos::prelude::*;
use thaw::*;

/// Text input masked as "R$ 0,00" bound to a value in cents
#[component]
pub fn MoneyInput(
    value: RwSignal<i64>,
    #[prop(optional)]
    placeholder: Option<&'static str>,
    #[prop(into, optional)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let text = RwSignal::new(input_text(value.get_untracked()));

    // typed text -> mask + cents
    Effect::new(move |_| {
        let raw = text.get();
        let (masked, cents) = mask_brl_input(&raw);
        if masked != raw {
            text.set(masked);
        }
        if value.get_untracked() != cents {
            value.set(cents);
        }
    });

    // external resets -> text
    Effect::new(move |_| {
        let cents = value.get();
        let (_, shown) = mask_brl_input(&text.get_untracked());
        if shown != cents {
            text.set(input_text(cents));
        }
    });

    view! {
        <Input
            value=text
            placeholder=placeholder.unwrap_or("R$ 0,00")
            disabled=disabled
        />
    }
}
