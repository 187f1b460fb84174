use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::cart::CartService;
use crate::shared::theme::ThemeProvider;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // App-wide services; pages and dialogs reach them through context.
    provide_context(ToastService::new());
    provide_context(CartService::new());

    view! {
        <ThemeProvider>
            <AuthProvider>
                <AppRoutes/>
                <ToastHost/>
            </AuthProvider>
        </ThemeProvider>
    }
}
