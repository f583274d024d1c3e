use contracts::domain::a002_product::aggregate::{
    CollectForm, Product, ProductCatalog, StockDirection,
};
use contracts::enums::ProductType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_product::api;
use crate::shared::list_resource::ListResource;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::toast::use_toast;

/// Registers empty bottles brought back from customers
#[component]
pub fn CollectPage() -> impl IntoView {
    let products = ListResource::<Product>::new();
    let product_type = RwSignal::new(String::new());
    let quantity = RwSignal::new("0".to_string());
    let (saving, set_saving) = signal(false);
    let toast = use_toast();

    Effect::new(move |_| products.load(api::fetch_products));

    let on_collect = move |_| {
        let form = CollectForm {
            product_type: ProductType::from_code(&product_type.get_untracked()),
            quantity: quantity.get_untracked().trim().parse().unwrap_or(0),
        };
        let catalog = ProductCatalog::new(products.items.get_untracked());
        let (product_id, adjustment) = match form.resolve(&catalog) {
            Ok(resolved) => resolved,
            Err(e) => {
                toast.error(e.to_string());
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::adjust_stock(&product_id, StockDirection::Increase, adjustment).await {
                Ok(()) => {
                    toast.success("Vasilhames coletados com sucesso");
                    quantity.set("0".to_string());
                    products.load(api::fetch_products);
                }
                Err(e) => toast.error(e.to_string()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <PageFrame page_id="a002_product--collect" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Coletar vasilhame"</h1>
                </div>
            </div>

            <div class="page__content">
                <Card>
                    <div class="form__group">
                        <Label>"Tipo do vasilhame"</Label>
                        <Select value=product_type>
                            <option value="">"Selecione"</option>
                            <option value="P3">"P3"</option>
                            <option value="P13">"P13"</option>
                            <option value="P20">"P20"</option>
                            <option value="P45">"P45"</option>
                        </Select>
                    </div>
                    <div class="form__group">
                        <Label>"Quantidade"</Label>
                        <Input value=quantity input_type=InputType::Number />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_collect
                        disabled=Signal::derive(move || saving.get() || products.loading.get())
                    >
                        "Coletar vasilhame"
                    </Button>
                </Card>
            </div>
        </PageFrame>
    }
}
