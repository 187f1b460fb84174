use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::shared::icons::icon;
use crate::system::auth::RequireAdmin;

#[component]
fn AdminNavLink(
    href: &'static str,
    icon_name: &'static str,
    label: &'static str,
) -> impl IntoView {
    let location = use_location();
    let is_active = move || location.pathname.get() == href;

    view! {
        <a href=href class="admin__nav-link" class:admin__nav-link--active=is_active>
            {icon(icon_name)}
            <span>{label}</span>
        </a>
    }
}

/// Admin index has no content of its own; it forwards to the products list.
#[component]
pub fn AdminHome() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move |_| {
        navigate(
            "/admin/products",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! { <div class="admin__redirect"></div> }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <div class="admin">
                <aside class="admin__sidebar">
                    <h2 class="admin__title">"Admin Panel"</h2>
                    <nav class="admin__nav">
                        <AdminNavLink href="/admin/products" icon_name="image" label="Products"/>
                        <AdminNavLink
                            href="/admin/categories"
                            icon_name="settings"
                            label="Categories"
                        />
                        <AdminNavLink
                            href="/admin/feedback"
                            icon_name="message"
                            label="User Feedback"
                        />
                    </nav>
                </aside>
                <section class="admin__content">
                    <Outlet/>
                </section>
            </div>
        </RequireAdmin>
    }
}
