use contracts::domain::a007_bank_account::aggregate::BankAccount;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a007_bank_account::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::modal::use_modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;

#[component]
pub fn BankAccountsPage() -> impl IntoView {
    let accounts = ListResource::<BankAccount>::new();
    let confirm = use_modal();
    let target = RwSignal::new(None::<BankAccount>);
    let (deleting, set_deleting) = signal(false);
    let toast = use_toast();

    let reload = move || accounts.load(api::fetch_accounts);
    reload();

    let on_delete = Callback::new(move |_| {
        let Some(account) = target.get_untracked() else {
            return;
        };
        set_deleting.set(true);
        spawn_local(async move {
            match api::delete_account(&account.id).await {
                Ok(()) => {
                    toast.success("Conta deletada com sucesso");
                    confirm.hide();
                    target.set(None);
                    reload();
                }
                Err(e) => toast.error(e.to_string()),
            }
            set_deleting.set(false);
        });
    });

    view! {
        <PageFrame page_id="a007_bank_account--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Contas bancárias"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| reload()>
                        {icon("refresh")}
                        " Atualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || accounts.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Banco"</TableHeaderCell>
                                <TableHeaderCell>"Pagamentos associados"</TableHeaderCell>
                                <TableHeaderCell>"Ações"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || accounts.items.get()
                                key=|a| a.id.clone()
                                children=move |account: BankAccount| {
                                    let labels = account.payment_labels();
                                    let name = account.bank.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Flex gap=FlexGap::Small>
                                                        {labels.into_iter().map(|l| view! {
                                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>{l}</Badge>
                                                        }).collect_view()}
                                                    </Flex>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| {
                                                            target.set(Some(account.clone()));
                                                            confirm.show();
                                                        }
                                                    >
                                                        {icon("delete")}
                                                        " Excluir"
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || (!accounts.loading.get() && accounts.is_empty()).then(|| view! {
                        <div class="table__empty">"Nenhuma conta cadastrada."</div>
                    })}
                </div>
            </div>

            <ConfirmDialog
                modal=confirm
                title="Excluir conta"
                message=move || {
                    target.with(|t| match t {
                        Some(a) => format!("Você tem certeza que deseja excluir a conta {}?", a.bank),
                        None => String::new(),
                    })
                }
                busy=deleting
                on_confirm=on_delete
            />
        </PageFrame>
    }
}
