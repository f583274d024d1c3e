use crate::shared::icons::icon;
use crate::shared::money::format_brl;
use leptos::prelude::*;

/// Summary card with a money value in cents
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Value in cents (None = loading/error)
    #[prop(into)]
    value: Signal<Option<i64>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let status_class = move || match value.get() {
        Some(v) if v < 0 => "stat-card stat-card--error",
        Some(_) => "stat-card",
        None => "stat-card stat-card--loading",
    };

    let formatted = move || match value.get() {
        Some(v) => format_brl(v),
        None => "-".to_string(),
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
