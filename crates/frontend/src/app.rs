use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Sidebar state shared by the header toggle and the sidebar
    provide_context(AppGlobalContext::new());

    // Toaster wraps everything so any page can dispatch
    view! {
        <ConfigProvider>
            <ToasterProvider position=ToastPosition::BottomEnd>
                <AuthProvider>
                    <AppRoutes />
                </AuthProvider>
            </ToasterProvider>
        </ConfigProvider>
    }
}
