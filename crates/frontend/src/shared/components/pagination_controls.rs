use crate::shared::icons::icon;
use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;

/// Previous/next controls for lists whose total is unknown.
///
/// "Próxima" stays enabled only while the last fetch filled the page.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    page: Signal<PageRequest>,
    /// Number of rows returned by the last fetch
    #[prop(into)]
    fetched: Signal<usize>,
    on_page_change: Callback<PageRequest>,
    #[prop(into, optional)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page.get_untracked().previous())
                disabled=move || disabled.get() || !page.get().has_previous()
                title="Anterior"
            >
                {icon("chevron-left")}
                " Anterior"
            </button>
            <span class="pagination-info">
                {move || format!("Página {}", page.get().page)}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page.get_untracked().next())
                disabled=move || disabled.get() || !page.get().has_next(fetched.get())
                title="Próxima"
            >
                "Próxima "
                {icon("chevron-right")}
            </button>
        </div>
    }
}
