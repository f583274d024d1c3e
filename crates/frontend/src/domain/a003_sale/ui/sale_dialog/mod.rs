//! Composite sale form: customer, product lines, payment method and,
//! for an admin, the deliveryman. Used to create and to edit a sale.

use contracts::domain::a002_product::aggregate::ProductCatalog;
use contracts::domain::a003_sale::aggregate::SaleDraft;
use contracts::enums::{PaymentMethod, ProductStatus, ProductType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_sale::api;
use crate::shared::components::option_select::OptionSelect;
use crate::shared::icons::icon;
use crate::shared::modal::ModalController;
use crate::shared::money::{format_brl, input_text, mask_brl_input};
use crate::shared::toast::{use_toast, ToastService};
use crate::system::auth::context::use_session_user;

/// Loads the option lists the dialog needs; a failed list leaves the select empty
fn load_options(
    toast: ToastService,
    is_admin: bool,
    customers: RwSignal<Vec<(String, String)>>,
    deliverymen: RwSignal<Vec<(String, String)>>,
    catalog: RwSignal<ProductCatalog>,
) {
    spawn_local(async move {
        match api::fetch_all_customers().await {
            Ok(list) => customers.set(list.into_iter().map(|c| (c.id, c.name)).collect()),
            Err(e) => toast.error(e.to_string()),
        }
    });
    spawn_local(async move {
        match api::fetch_catalog().await {
            Ok(c) => catalog.set(c),
            Err(e) => toast.error(e.to_string()),
        }
    });
    if is_admin {
        spawn_local(async move {
            match api::fetch_deliverymen().await {
                Ok(list) => deliverymen.set(list.into_iter().map(|u| (u.id, u.name)).collect()),
                Err(e) => toast.error(e.to_string()),
            }
        });
    }
}

#[component]
pub fn SaleDialog(
    modal: ModalController,
    /// `None` creates a sale, `Some(id)` edits that sale
    #[prop(into)]
    editing_id: Signal<Option<String>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let user = use_session_user();
    let toast = use_toast();

    let draft = RwSignal::new(SaleDraft::default());
    let catalog = RwSignal::new(ProductCatalog::default());
    let customers = RwSignal::new(Vec::<(String, String)>::new());
    let deliverymen = RwSignal::new(Vec::<(String, String)>::new());
    let customer_id = RwSignal::new(String::new());
    let deliveryman_id = RwSignal::new(String::new());
    let payment_method = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);

    let is_admin = Signal::derive(move || user.with(|u| u.as_ref().is_some_and(|u| u.is_admin())));

    // Fresh draft and option lists each time the dialog opens
    Effect::new(move |_| {
        if !modal.open.get() {
            return;
        }
        let editing = editing_id.get_untracked();
        load_options(toast, is_admin.get_untracked(), customers, deliverymen, catalog);
        draft.set(SaleDraft::default());
        customer_id.set(String::new());
        deliveryman_id.set(String::new());
        payment_method.set(String::new());
        if let Some(id) = editing {
            spawn_local(async move {
                match api::fetch_sale(&id).await {
                    Ok(sale) => {
                        let loaded = SaleDraft::from_sale(&sale);
                        customer_id.set(loaded.customer_id.clone());
                        deliveryman_id.set(loaded.deliveryman_id.clone());
                        payment_method.set(
                            loaded.payment_method.map(|m| m.code().to_string()).unwrap_or_default(),
                        );
                        draft.set(loaded);
                    }
                    Err(e) => toast.error(e.to_string()),
                }
            });
        }
    });

    let on_submit = move |_| {
        let Some(session_user) = user.get_untracked() else {
            return;
        };
        let mut current = draft.get_untracked();
        current.customer_id = customer_id.get_untracked();
        current.deliveryman_id = deliveryman_id.get_untracked();
        current.payment_method = PaymentMethod::from_code(&payment_method.get_untracked());
        let request = match current.to_request(&session_user) {
            Ok(r) => r,
            Err(e) => {
                toast.error(e.to_string());
                return;
            }
        };
        let editing = editing_id.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let result = match editing.as_deref() {
                Some(id) => api::update_sale(id, &request).await,
                None => api::create_sale(&request).await,
            };
            match result {
                Ok(()) => {
                    toast.success(if editing.is_some() {
                        "Venda editada com sucesso."
                    } else {
                        "Venda cadastrada com sucesso!"
                    });
                    modal.hide();
                    on_saved.run(());
                }
                Err(e) => toast.error(e.to_string()),
            }
            set_saving.set(false);
        });
    };

    let line_count = move || draft.with(|d| d.lines.len());

    view! {
        <Dialog open=modal.open>
            <DialogSurface class="dialog--wide">
                <DialogBody>
                    <DialogTitle>
                        {move || if editing_id.with(Option::is_some) { "Editar Venda" } else { "Cadastrar Nova Venda" }}
                    </DialogTitle>
                    <DialogContent>
                        <div class="form__group">
                            <Label>"Cliente"</Label>
                            <OptionSelect value=customer_id options=customers placeholder="Selecione um cliente" />
                        </div>

                        <For
                            each=move || 0..line_count()
                            key=|i| *i
                            children=move |index: usize| view! {
                                <SaleLineRow index=index draft=draft catalog=catalog />
                            }
                        />

                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| draft.update(|d| d.add_line())>
                            {icon("plus")}
                            " Adicionar produto"
                        </Button>

                        <div class="form__group">
                            <Label>"Método de pagamento"</Label>
                            <select
                                class="form__select"
                                prop:value=move || payment_method.get()
                                on:change=move |ev| payment_method.set(event_target_value(&ev))
                            >
                                <option value="">"Selecione um método de pagamento"</option>
                                {PaymentMethod::all()
                                    .into_iter()
                                    .map(|m| view! { <option value=m.code()>{m.display_name()}</option> })
                                    .collect_view()}
                            </select>
                        </div>

                        <Show when=move || is_admin.get()>
                            <div class="form__group">
                                <Label>"Entregador"</Label>
                                <OptionSelect value=deliveryman_id options=deliverymen placeholder="Selecione um entregador" />
                            </div>
                        </Show>

                        <div class="sale-form__total">
                            "Total: " <strong>{move || format_brl(draft.with(SaleDraft::total))}</strong>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| modal.hide()>
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_submit
                            disabled=Signal::derive(move || saving.get())
                        >
                            {move || if saving.get() { "Salvando..." } else { "Salvar" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

/// One editable product line of the draft
#[component]
fn SaleLineRow(
    index: usize,
    draft: RwSignal<SaleDraft>,
    catalog: RwSignal<ProductCatalog>,
) -> impl IntoView {
    let line = move || draft.with(|d| d.lines.get(index).cloned());

    let type_code = move || {
        line()
            .and_then(|l| l.product_type)
            .map(|t| t.code().to_string())
            .unwrap_or_default()
    };
    let status_code = move || {
        line()
            .and_then(|l| l.status)
            .map(|s| s.code().to_string())
            .unwrap_or_default()
    };

    let on_type = move |ev: leptos::ev::Event| {
        if let Some(t) = ProductType::from_code(&event_target_value(&ev)) {
            catalog.with_untracked(|c| draft.update(|d| d.select_type(index, t, c)));
        }
    };
    let on_status = move |ev: leptos::ev::Event| {
        if let Some(s) = ProductStatus::from_code(&event_target_value(&ev)) {
            catalog.with_untracked(|c| draft.update(|d| d.select_status(index, s, c)));
        }
    };
    let on_price = move |ev: leptos::ev::Event| {
        let (_, cents) = mask_brl_input(&event_target_value(&ev));
        draft.update(|d| d.set_price(index, cents));
    };

    view! {
        <div class="sale-line">
            <div class="sale-line__row">
                <select class="form__select" prop:value=type_code on:change=on_type>
                    <option value="">"Selecione um produto"</option>
                    {ProductType::sellable()
                        .into_iter()
                        .map(|t| view! { <option value=t.code()>{t.display_name()}</option> })
                        .collect_view()}
                </select>
                <select class="form__select" prop:value=status_code on:change=on_status>
                    <option value="">"Selecione um tipo de venda"</option>
                    {ProductStatus::all()
                        .into_iter()
                        .map(|s| view! { <option value=s.code()>{s.sale_label()}</option> })
                        .collect_view()}
                </select>
                <button
                    class="sale-line__remove"
                    title="Remover produto"
                    on:click=move |_| draft.update(|d| d.remove_line(index))
                >
                    {icon("x")}
                </button>
            </div>
            <div class="sale-line__row">
                <label class="form__label">"Preço"</label>
                <input
                    class="form__input"
                    placeholder="R$ 0,00"
                    prop:value=move || line().map(|l| input_text(l.price)).unwrap_or_default()
                    on:input=on_price
                />
                <label class="form__label">"Quantidade"</label>
                <div class="quantity-input">
                    <button on:click=move |_| draft.update(|d| d.decrement(index))>{icon("minus")}</button>
                    <input
                        type="number"
                        min="0"
                        placeholder="Quantidade"
                        prop:value=move || line().map(|l| l.quantity.to_string()).unwrap_or_default()
                        on:input=move |ev| draft.update(|d| d.set_quantity_input(index, &event_target_value(&ev)))
                    />
                    <button on:click=move |_| draft.update(|d| d.increment(index))>{icon("plus")}</button>
                </div>
                <span class="sale-line__subtotal">
                    {move || line().map(|l| format_brl(l.subtotal())).unwrap_or_default()}
                </span>
            </div>
        </div>
    }
}
