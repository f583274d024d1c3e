mod state;

use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::modal::use_modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::users::api;
use crate::system::users::ui::create::CreateUserDialog;
use state::create_state;

/// Case-insensitive match on name or email, sorted by name
fn visible_users(users: &[User], query: &str, ascending: bool) -> Vec<User> {
    let query = query.trim().to_lowercase();
    let mut out: Vec<User> = users
        .iter()
        .filter(|u| {
            query.is_empty()
                || u.name.to_lowercase().contains(&query)
                || u.email.to_lowercase().contains(&query)
        })
        .cloned()
        .collect();
    out.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    if !ascending {
        out.reverse();
    }
    out
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let state = create_state();
    let users = ListResource::<User>::new();
    let create_modal = use_modal();
    let search = RwSignal::new(String::new());

    let load_data = move || users.load(api::fetch_users);

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            state.update(|s| s.is_loaded = true);
            load_data();
        }
    });

    Effect::new(move |_| {
        let query = search.get();
        state.update(|s| s.search_query = query);
    });

    let rows = Signal::derive(move || {
        let (query, ascending) = state.with(|s| (s.search_query.clone(), s.sort_ascending));
        users.items.with(|items| visible_users(items, &query, ascending))
    });

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Usuários"</h1>
                    <Badge>{move || rows.get().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| create_modal.show()
                    >
                        {icon("plus")}
                        " Novo usuário"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || users.loading.get())
                    >
                        {icon("refresh")}
                        {move || if users.loading.get() { " Carregando..." } else { " Atualizar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || users.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small>
                            <Input value=search placeholder="Buscar por nome ou email" />
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>
                                    <span
                                        class="table__sortable"
                                        on:click=move |_| state.update(|s| s.sort_ascending = !s.sort_ascending)
                                    >
                                        "Nome"
                                        {move || if state.with(|s| s.sort_ascending) { icon("arrow-up") } else { icon("arrow-down") }}
                                    </span>
                                </TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Perfil"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|u| u.id.clone()
                                children=move |user: User| view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{user.name.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{user.email.clone()}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge>{user.role.display_name()}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || (!users.loading.get() && rows.with(Vec::is_empty)).then(|| view! {
                        <div class="table__empty">"Nenhum usuário encontrado"</div>
                    })}
                </div>
            </div>

            <CreateUserDialog modal=create_modal on_saved=Callback::new(move |_| load_data()) />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Role;

    fn user(name: &str, email: &str) -> User {
        User {
            id: name.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: Role::Deliveryman,
        }
    }

    #[test]
    fn test_search_matches_name_or_email() {
        let all = vec![user("Carla", "c@gas.com"), user("Bruno", "vendas@gas.com")];
        assert_eq!(visible_users(&all, "car", true).len(), 1);
        assert_eq!(visible_users(&all, "VENDAS", true)[0].name, "Bruno");
        assert_eq!(visible_users(&all, "  ", true).len(), 2);
    }

    #[test]
    fn test_sorted_by_name() {
        let all = vec![user("Carla", ""), user("ana", "")];
        let names: Vec<_> = visible_users(&all, "", true).into_iter().map(|u| u.name).collect();
        assert_eq!(names, ["ana", "Carla"]);
        let names: Vec<_> = visible_users(&all, "", false).into_iter().map(|u| u.name).collect();
        assert_eq!(names, ["Carla", "ana"]);
    }
}
