use contracts::domain::a004_transaction::aggregate::Transaction;
use contracts::enums::TransactionType;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table_cell_money::TableCellMoney;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;

/// Amount with the sign of its direction, for the colored money cell
pub(crate) fn signed_amount(t: &Transaction) -> i64 {
    match t.transaction_type {
        TransactionType::Exit => -t.amount,
        TransactionType::Entry | TransactionType::Transfer => t.amount,
    }
}

fn user_name(t: &Transaction) -> String {
    t.user
        .as_ref()
        .map(|u| u.name.clone())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "-".to_string())
}

/// Ledger table shared by the finance, expense and deliveryman screens.
///
/// Without `on_edit_date` the actions column is hidden.
#[component]
pub fn TransactionsTable(
    transactions: ListResource<Transaction>,
    #[prop(optional)] on_edit_date: Option<Callback<Transaction>>,
    #[prop(optional)] empty_text: Option<&'static str>,
) -> impl IntoView {
    let has_actions = on_edit_date.is_some();

    view! {
        <div class="table-wrapper">
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Tipo de Transação"</TableHeaderCell>
                        <TableHeaderCell>"Categoria"</TableHeaderCell>
                        <TableHeaderCell>"Usuário"</TableHeaderCell>
                        <TableHeaderCell>"Categoria customizada"</TableHeaderCell>
                        <TableHeaderCell>"Valor"</TableHeaderCell>
                        <TableHeaderCell>"Descrição"</TableHeaderCell>
                        <TableHeaderCell>"Data de criação"</TableHeaderCell>
                        {has_actions.then(|| view! { <TableHeaderCell>"Ações"</TableHeaderCell> })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || transactions.items.get()
                        key=|t| (t.id.clone(), t.created_at.clone())
                        children=move |t: Transaction| {
                            let actions = on_edit_date.map(|cb| {
                                let row = t.clone();
                                view! {
                                    <TableCell>
                                        <TableCellLayout>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| cb.run(row.clone())
                                            >
                                                {icon("edit")}
                                                " Alterar data"
                                            </Button>
                                        </TableCellLayout>
                                    </TableCell>
                                }
                            });
                            let transaction_type = t.transaction_type.display_name();
                            let category = t.category.display_name();
                            let user = user_name(&t);
                            let custom_category = t.custom_category_label().to_string();
                            let amount = signed_amount(&t);
                            let description = t.description_label().to_string();
                            let created_at = format_datetime(&t.created_at);
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{transaction_type}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{category}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{user}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{custom_category}</TableCellLayout></TableCell>
                                    <TableCellMoney value=amount color_by_sign=true />
                                    <TableCell><TableCellLayout>{description}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{created_at}</TableCellLayout></TableCell>
                                    {actions}
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
            {move || (!transactions.loading.get() && transactions.is_empty()).then(|| view! {
                <div class="table__empty">{empty_text.unwrap_or("Nenhuma movimentação encontrada.")}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(kind: &str) -> Transaction {
        serde_json::from_str(&format!(
            r#"{{"id":"t1","transactionType":"{}","category":"EXPENSE","amount":1500,"createdAt":"2024-03-15T10:00:00Z"}}"#,
            kind
        ))
        .unwrap()
    }

    #[test]
    fn test_exit_is_negative() {
        assert_eq!(signed_amount(&transaction("EXIT")), -1500);
        assert_eq!(signed_amount(&transaction("ENTRY")), 1500);
    }

    #[test]
    fn test_missing_user_shows_dash() {
        assert_eq!(user_name(&transaction("EXIT")), "-");
    }
}
