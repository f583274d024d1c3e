use contracts::domain::a002_product::aggregate::{Product, StockDirection};
use leptos::prelude::*;
use thaw::*;

use super::stock_dialog::{StockDialog, StockTarget};
use crate::domain::a002_product::api;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::modal::use_modal;
use crate::shared::money::format_brl;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Stock grouped by size, then condition
fn sorted(mut products: Vec<Product>) -> Vec<Product> {
    products.sort_by_key(|p| (p.product_type, p.status));
    products
}

#[component]
pub fn ProductsListPage() -> impl IntoView {
    let products = ListResource::<Product>::new();
    let stock_modal = use_modal();
    let target = RwSignal::new(None::<StockTarget>);

    let load_data = move || products.load(|| async { api::fetch_products().await.map(sorted) });

    Effect::new(move |_| load_data());

    let open_dialog = move |product: Product, direction: StockDirection| {
        target.set(Some(StockTarget { product, direction }));
        stock_modal.show();
    };

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Produtos"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || products.loading.get())
                    >
                        {icon("refresh")}
                        " Atualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || products.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="card-grid">
                    <For
                        each=move || products.items.get()
                        key=|p| (p.id.clone(), p.quantity)
                        children=move |p: Product| {
                            let for_increase = p.clone();
                            let for_decrease = p.clone();
                            view! {
                                <Card>
                                    <div class="product-card">
                                        <h3 class="product-card__title">
                                            {format!("{} {}", p.product_type.display_name(), p.status.stock_label())}
                                        </h3>
                                        <p>"Estado: " {p.status.display_name()}</p>
                                        <p>"Tipo: " {p.product_type.display_name()}</p>
                                        <p>"Preço: " {format_brl(p.price)}</p>
                                        <p>"Quantidade: " <strong>{p.quantity}</strong></p>
                                        <Flex gap=FlexGap::Small>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                on_click=move |_| open_dialog(for_increase.clone(), StockDirection::Increase)
                                            >
                                                {icon("plus")}
                                                " Adicionar itens"
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                on_click=move |_| open_dialog(for_decrease.clone(), StockDirection::Decrease)
                                            >
                                                {icon("minus")}
                                                " Remover itens"
                                            </Button>
                                        </Flex>
                                    </div>
                                </Card>
                            }
                        }
                    />
                </div>
            </div>

            <StockDialog modal=stock_modal target=target on_saved=Callback::new(move |_| load_data()) />
        </PageFrame>
    }
}
