use contracts::domain::a002_product::aggregate::{Product, StockAdjustment, StockDirection};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_product::api;
use crate::shared::modal::ModalController;
use crate::shared::toast::use_toast;

/// Product and direction picked from the stock list
#[derive(Debug, Clone, PartialEq)]
pub struct StockTarget {
    pub product: Product,
    pub direction: StockDirection,
}

fn dialog_title(target: &StockTarget) -> String {
    let verb = match target.direction {
        StockDirection::Increase => "Adicionar itens ao estoque",
        StockDirection::Decrease => "Remover itens do estoque",
    };
    format!(
        "{} {} {}",
        verb,
        target.product.product_type.display_name(),
        target.product.status.stock_label()
    )
}

#[component]
pub fn StockDialog(
    modal: ModalController,
    target: RwSignal<Option<StockTarget>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let quantity = RwSignal::new("0".to_string());
    let error = RwSignal::new(None::<String>);
    let (saving, set_saving) = signal(false);
    let toast = use_toast();

    Effect::new(move |_| {
        if target.with(Option::is_some) {
            quantity.set("0".to_string());
            error.set(None);
        }
    });

    let on_save = move |_| {
        let Some(current) = target.get_untracked() else {
            return;
        };
        let adjustment = match StockAdjustment::parse(&quantity.get_untracked()) {
            Ok(a) => a,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match api::adjust_stock(&current.product.id, current.direction, adjustment).await {
                Ok(()) => {
                    toast.success("Estoque do produto atualizado com sucesso");
                    modal.hide();
                    target.set(None);
                    on_saved.run(());
                }
                Err(e) => toast.error(e.to_string()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <Dialog open=modal.open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || target.get().map(|t| dialog_title(&t)).unwrap_or_default()}
                    </DialogTitle>
                    <DialogContent>
                        <div class="form__group">
                            <Label>"Quantidade"</Label>
                            <Input value=quantity placeholder="quantidade" input_type=InputType::Number />
                            {move || error.get().map(|m| view! { <span class="form__error">{m}</span> })}
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| modal.hide()>
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_save
                            disabled=Signal::derive(move || saving.get())
                        >
                            "Salvar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{ProductStatus, ProductType};

    #[test]
    fn test_title_names_direction_and_product() {
        let target = StockTarget {
            product: Product {
                id: "p1".into(),
                product_type: ProductType::P13,
                status: ProductStatus::Empty,
                price: 0,
                quantity: 3,
            },
            direction: StockDirection::Decrease,
        };
        assert_eq!(dialog_title(&target), "Remover itens do estoque P13 Vazio");
    }
}
