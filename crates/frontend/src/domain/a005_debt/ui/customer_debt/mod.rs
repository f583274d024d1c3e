//! Debts of one customer, reached from the finance screen.

use contracts::domain::a005_debt::aggregate::{CustomerDebtSale, CustomerDebtSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::domain::a001_customer::api as customer_api;
use crate::domain::a005_debt::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::modal::use_modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;

/// What the confirmation dialog will mark
#[derive(Debug, Clone, PartialEq)]
enum MarkTarget {
    Sale(String),
    All,
}

fn page_title(customer_name: Option<&str>) -> String {
    match customer_name {
        Some(name) if !name.is_empty() => format!("Débitos do cliente {}", name),
        _ => "Débitos do cliente".to_string(),
    }
}

#[component]
pub fn CustomerDebtPage() -> impl IntoView {
    let params = use_params_map();
    let customer_id = Memo::new(move |_| params.read().get("customerId").unwrap_or_default());
    let toast = use_toast();

    let customer_name = RwSignal::new(None::<String>);
    let summary = RwSignal::new(None::<CustomerDebtSummary>);
    let (loading, set_loading) = signal(false);
    let refresh = RwSignal::new(0_u32);
    let confirm = use_modal();
    let target = RwSignal::new(None::<MarkTarget>);
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        let id = customer_id.get();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match customer_api::fetch_by_id(&id).await {
                Ok(c) => customer_name.set(Some(c.name)),
                Err(e) => toast.error(e.to_string()),
            }
        });
    });

    Effect::new(move |_| {
        refresh.track();
        let id = customer_id.get();
        if id.is_empty() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_customer_debt(&id).await {
                Ok(found) => summary.set(found),
                Err(e) => toast.error(e.to_string()),
            }
            set_loading.set(false);
        });
    });

    let ask = move |t: MarkTarget| {
        target.set(Some(t));
        confirm.show();
    };

    let on_confirm = Callback::new(move |_| {
        let Some(t) = target.get_untracked() else {
            return;
        };
        let Some(current) = summary.get_untracked() else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            let result = match &t {
                MarkTarget::Sale(id) => api::mark_sale_paid(id).await.map(|_| 1),
                MarkTarget::All => api::mark_all_paid(&current).await,
            };
            match result {
                Ok(_) => {
                    toast.success("Movimentação atualizada com sucesso");
                    confirm.hide();
                    target.set(None);
                }
                Err(e) => toast.error(e.to_string()),
            }
            refresh.update(|n| *n += 1);
            set_busy.set(false);
        });
    });

    let total = Signal::derive(move || summary.with(|s| s.as_ref().map(|s| s.total_debt)));
    let sales = move || summary.with(|s| s.as_ref().map(|s| s.sales.clone()).unwrap_or_default());
    let settled = move || summary.with(|s| s.as_ref().map_or(true, CustomerDebtSummary::is_settled));

    view! {
        <PageFrame page_id="a005_debt--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <A href="/app/finance" attr:class="page__back">
                        {icon("chevron-left")}
                    </A>
                    <h1 class="page__title">{move || page_title(customer_name.get().as_deref())}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ask(MarkTarget::All)
                        disabled=Signal::derive(move || settled() || loading.get())
                    >
                        {icon("check")}
                        " Marcar todas como pago"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard label="Valor a receber" icon_name="wallet" value=total />
                </div>

                <Show when=move || loading.get()>
                    <Spinner />
                </Show>

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Venda"</TableHeaderCell>
                                <TableHeaderCell>"Situação"</TableHeaderCell>
                                <TableHeaderCell>"Ações"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=sales
                                key=|s| (s.id.clone(), s.paid)
                                children=move |sale: CustomerDebtSale| {
                                    let id = sale.id.clone();
                                    let paid = sale.paid;
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{sale.id.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if paid {
                                                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"PAGO"</Badge> }.into_any()
                                                    } else {
                                                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"PENDENTE"</Badge> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {(!paid).then(|| view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| ask(MarkTarget::Sale(id.clone()))
                                                        >
                                                            "Marcar como pago"
                                                        </Button>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || (!loading.get() && sales().is_empty()).then(|| view! {
                        <div class="table__empty">"Nenhum débito em aberto para este cliente."</div>
                    })}
                </div>
            </div>

            <ConfirmDialog
                modal=confirm
                title="Você tem certeza dessa ação ?"
                message="Essa movimentação será definida como paga"
                busy=busy
                on_confirm=on_confirm
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_waits_for_customer_name() {
        assert_eq!(page_title(None), "Débitos do cliente");
        assert_eq!(page_title(Some("Maria")), "Débitos do cliente Maria");
    }
}
