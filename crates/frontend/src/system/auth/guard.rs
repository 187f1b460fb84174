use leptos::prelude::*;

use super::context::use_auth;

/// Gate for the admin area.
/// Shows the fallback for anonymous visitors and signed-in customers.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_admin()
            fallback=|| view! {
                <div class="access-denied">
                    <p>"Access denied. Admin privileges required."</p>
                    <a href="/auth/login">"Sign in"</a>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
