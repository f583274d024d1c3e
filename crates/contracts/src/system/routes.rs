//! Screens of the app and which roles may reach them.
//!
//! Both the sidebar and the route guard read from [`Role::allowed_routes`],
//! so a new role or screen is a compile-time change.

use crate::enums::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Profile,
    Dashboard,
    Users,
    Customers,
    CustomerDetail,
    Finance,
    CustomerDebt,
    Sales,
    Expense,
    Products,
    Supplier,
    BankAccounts,
    Collect,
    Notifications,
    MySales,
    Contract,
}

impl AppRoute {
    /// Navigation path. Detail routes return their parent list.
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Profile => "/app/profile",
            AppRoute::Dashboard => "/app/dashboard",
            AppRoute::Users => "/app/users",
            AppRoute::Customers | AppRoute::CustomerDetail => "/app/customers",
            AppRoute::Finance | AppRoute::CustomerDebt => "/app/finance",
            AppRoute::Sales => "/app/sales",
            AppRoute::Expense => "/app/expense",
            AppRoute::Products => "/app/products",
            AppRoute::Supplier => "/app/supplier",
            AppRoute::BankAccounts => "/app/bank-accounts",
            AppRoute::Collect => "/app/collect",
            AppRoute::Notifications => "/app/notifications",
            AppRoute::MySales => "/app/my-sales",
            AppRoute::Contract => "/app/contract",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Profile => "Perfil",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Users => "Usuários",
            AppRoute::Customers => "Clientes",
            AppRoute::CustomerDetail => "Cliente",
            AppRoute::Finance => "Financeiro",
            AppRoute::CustomerDebt => "Dívidas do cliente",
            AppRoute::Sales => "Vendas",
            AppRoute::Expense => "Despesas",
            AppRoute::Products => "Estoque",
            AppRoute::Supplier => "Fornecedores",
            AppRoute::BankAccounts => "Contas bancárias",
            AppRoute::Collect => "Coletar vasilhame",
            AppRoute::Notifications => "Notificações",
            AppRoute::MySales => "Meu painel",
            AppRoute::Contract => "Contrato",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AppRoute::Profile => "user",
            AppRoute::Dashboard => "dashboard",
            AppRoute::Users => "users",
            AppRoute::Customers | AppRoute::CustomerDetail => "customers",
            AppRoute::Finance | AppRoute::CustomerDebt => "finance",
            AppRoute::Sales => "sales",
            AppRoute::Expense => "expense",
            AppRoute::Products => "products",
            AppRoute::Supplier => "suppliers",
            AppRoute::BankAccounts => "bank",
            AppRoute::Collect => "collect",
            AppRoute::Notifications => "bell",
            AppRoute::MySales => "wallet",
            AppRoute::Contract => "file",
        }
    }

    /// Detail and auxiliary screens stay out of the sidebar
    pub fn in_menu(&self) -> bool {
        !matches!(
            self,
            AppRoute::CustomerDetail
                | AppRoute::CustomerDebt
                | AppRoute::BankAccounts
                | AppRoute::Contract
        )
    }

    /// Matches a location path, ignoring query, fragment and trailing slash
    pub fn from_path(path: &str) -> Option<AppRoute> {
        let clean = path
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let rest = clean.strip_prefix("/app")?;
        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["profile"] => Some(AppRoute::Profile),
            ["dashboard"] => Some(AppRoute::Dashboard),
            ["users"] => Some(AppRoute::Users),
            ["customers"] => Some(AppRoute::Customers),
            ["customers", _] => Some(AppRoute::CustomerDetail),
            ["finance"] => Some(AppRoute::Finance),
            ["finance", "debt", _] => Some(AppRoute::CustomerDebt),
            ["sales"] => Some(AppRoute::Sales),
            ["expense"] => Some(AppRoute::Expense),
            ["products"] => Some(AppRoute::Products),
            ["supplier"] => Some(AppRoute::Supplier),
            ["bank-accounts"] => Some(AppRoute::BankAccounts),
            ["collect"] => Some(AppRoute::Collect),
            ["notifications"] => Some(AppRoute::Notifications),
            ["my-sales"] => Some(AppRoute::MySales),
            ["contract"] => Some(AppRoute::Contract),
            _ => None,
        }
    }
}

impl Role {
    pub fn allowed_routes(&self) -> &'static [AppRoute] {
        match self {
            Role::Admin => &[
                AppRoute::Profile,
                AppRoute::Dashboard,
                AppRoute::Users,
                AppRoute::Customers,
                AppRoute::Finance,
                AppRoute::Sales,
                AppRoute::Expense,
                AppRoute::Products,
                AppRoute::Supplier,
                AppRoute::Collect,
                AppRoute::Notifications,
                AppRoute::CustomerDetail,
                AppRoute::CustomerDebt,
                AppRoute::BankAccounts,
                AppRoute::Contract,
            ],
            Role::Deliveryman => &[
                AppRoute::Profile,
                AppRoute::MySales,
                AppRoute::Collect,
                AppRoute::Contract,
            ],
        }
    }

    /// Sidebar entries in display order
    pub fn menu(&self) -> Vec<AppRoute> {
        self.allowed_routes()
            .iter()
            .copied()
            .filter(AppRoute::in_menu)
            .collect()
    }

    pub fn can_access(&self, route: AppRoute) -> bool {
        self.allowed_routes().contains(&route)
    }

    /// Landing page after sign-in and redirect target for denied routes
    pub fn home(&self) -> &'static str {
        match self {
            Role::Admin => AppRoute::Dashboard.path(),
            Role::Deliveryman => AppRoute::MySales.path(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Allow(AppRoute),
    Redirect(&'static str),
}

pub fn resolve_access(role: Role, path: &str) -> RouteAccess {
    match AppRoute::from_path(path) {
        Some(route) if role.can_access(route) => RouteAccess::Allow(route),
        _ => RouteAccess::Redirect(role.home()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliveryman_is_redirected_from_finance() {
        assert_eq!(
            resolve_access(Role::Deliveryman, "/app/finance"),
            RouteAccess::Redirect("/app/my-sales")
        );
    }

    #[test]
    fn test_admin_is_redirected_from_my_sales() {
        assert_eq!(
            resolve_access(Role::Admin, "/app/my-sales"),
            RouteAccess::Redirect("/app/dashboard")
        );
    }

    #[test]
    fn test_detail_paths_resolve() {
        assert_eq!(
            resolve_access(Role::Admin, "/app/customers/abc?tab=1"),
            RouteAccess::Allow(AppRoute::CustomerDetail)
        );
        assert_eq!(
            resolve_access(Role::Admin, "/app/finance/debt/c-1/"),
            RouteAccess::Allow(AppRoute::CustomerDebt)
        );
    }

    #[test]
    fn test_unknown_path_goes_home() {
        assert_eq!(
            resolve_access(Role::Admin, "/app/unknown"),
            RouteAccess::Redirect("/app/dashboard")
        );
        assert_eq!(AppRoute::from_path("/login"), None);
    }

    #[test]
    fn test_menus() {
        assert_eq!(
            Role::Deliveryman.menu(),
            vec![AppRoute::Profile, AppRoute::MySales, AppRoute::Collect]
        );
        let admin = Role::Admin.menu();
        assert_eq!(admin.len(), 11);
        assert!(!admin.contains(&AppRoute::CustomerDetail));
        assert!(!admin.contains(&AppRoute::MySales));
    }

    #[test]
    fn test_every_menu_path_resolves_to_itself() {
        for role in Role::all() {
            for route in role.menu() {
                assert_eq!(AppRoute::from_path(route.path()), Some(route));
            }
        }
    }
}
