use contracts::domain::a005_debt::aggregate::CustomerDebtSummary;
use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a005_debt::api::{self, CUSTOMER_DEBTS_PER_PAGE};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_cell_money::TableCellMoney;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::modal::use_modal;
use crate::shared::toast::use_toast;

pub(crate) fn debt_detail_path(customer_id: &str) -> String {
    format!("/app/finance/debt/{}", customer_id)
}

/// "Clientes com Dívidas" panel of the finance screen
#[component]
pub fn CustomerDebtsPanel(
    #[prop(into)] refresh: Signal<u32>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let page = RwSignal::new(PageRequest::first(CUSTOMER_DEBTS_PER_PAGE));
    let debts = ListResource::<CustomerDebtSummary>::new();
    let confirm = use_modal();
    let target = RwSignal::new(None::<CustomerDebtSummary>);
    let (busy, set_busy) = signal(false);
    let toast = use_toast();

    Effect::new(move |_| {
        refresh.track();
        let page = page.get();
        debts.load(move || api::fetch_customers_with_debts(page));
    });

    let on_confirm = Callback::new(move |_| {
        let Some(summary) = target.get_untracked() else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            match api::mark_all_paid(&summary).await {
                Ok(_) => {
                    toast.success("Movimentação atualizada com sucesso");
                    confirm.hide();
                    target.set(None);
                    on_changed.run(());
                }
                Err(e) => {
                    toast.error(e.to_string());
                    // part of the sales may already be marked
                    on_changed.run(());
                }
            }
            set_busy.set(false);
        });
    });

    view! {
        <section class="finance__section">
            <h2 class="finance__section-title">"Clientes com Dívidas"</h2>
            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Cliente"</TableHeaderCell>
                            <TableHeaderCell>"Valor a Receber"</TableHeaderCell>
                            <TableHeaderCell>"Ações"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || debts.items.get()
                            key=|d| (d.customer_id.clone(), d.total_debt, d.is_settled())
                            children=move |summary: CustomerDebtSummary| {
                                let settled = summary.is_settled();
                                let href = debt_detail_path(&summary.customer_id);
                                let row = summary.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{summary.customer_name.clone()}</TableCellLayout></TableCell>
                                        <TableCellMoney value=summary.total_debt bold=true />
                                        <TableCell>
                                            <TableCellLayout>
                                                <Flex gap=FlexGap::Small>
                                                    {if settled {
                                                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"PAGO"</Badge> }.into_any()
                                                    } else {
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| {
                                                                    target.set(Some(row.clone()));
                                                                    confirm.show();
                                                                }
                                                            >
                                                                {icon("check")}
                                                                " Marcar todas como pago"
                                                            </Button>
                                                        }.into_any()
                                                    }}
                                                    <A href=href attr:class="table__link">
                                                        {icon("eye")}
                                                        " Ver detalhes"
                                                    </A>
                                                </Flex>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
                {move || (!debts.loading.get() && debts.is_empty()).then(|| view! {
                    <div class="table__empty">"Nenhum cliente com dívidas."</div>
                })}
            </div>
            <PaginationControls
                page=page
                fetched=Signal::derive(move || debts.len())
                on_page_change=Callback::new(move |p| page.set(p))
                disabled=Signal::derive(move || debts.loading.get())
            />

            <ConfirmDialog
                modal=confirm
                title="Você tem certeza dessa ação ?"
                message="Todas as vendas deste cliente serão definidas como pagas"
                busy=busy
                on_confirm=on_confirm
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_path() {
        assert_eq!(debt_detail_path("c42"), "/app/finance/debt/c42");
    }
}
