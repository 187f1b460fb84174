//! Storefront top bar: brand, navigation, search, theme, cart and the
//! user menu.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::cart::use_cart;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::{do_logout, use_auth};

#[component]
pub fn Navbar() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let cart = use_cart();
    let (search, set_search) = signal(String::new());
    let (menu_open, set_menu_open) = signal(false);
    let navigate = use_navigate();

    let cart_count = cart.count();

    let submit_search = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let term = search.get();
            let trimmed = term.trim();
            if trimmed.is_empty() {
                navigate("/products", NavigateOptions::default());
            } else {
                navigate(
                    &format!("/products?search={}", urlencoding::encode(trimmed)),
                    NavigateOptions::default(),
                );
            }
        }
    };

    let logout = {
        let navigate = navigate.clone();
        move |_| {
            set_menu_open.set(false);
            let navigate = navigate.clone();
            spawn_local(async move {
                do_logout(set_auth_state).await;
                navigate("/", NavigateOptions::default());
            });
        }
    };

    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">"Artisan Haven"</a>

                <nav class="navbar__links">
                    <a href="/">"Home"</a>
                    <a href="/products">"Products"</a>
                </nav>

                <form class="navbar__search" on:submit=submit_search>
                    <input
                        type="search"
                        placeholder="Search handcrafted treasures..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <button type="submit" class="navbar-icon-btn" title="Search">
                        {icon("search")}
                    </button>
                </form>

                <div class="navbar__actions">
                    <ThemeToggle/>

                    <a href="/cart" class="navbar-icon-btn navbar__cart" title="Cart">
                        {icon("cart")}
                        <Show when={move || cart_count.get() > 0}>
                            <span class="navbar__cart-badge">{move || cart_count.get()}</span>
                        </Show>
                    </a>

                    {move || {
                        let state = auth_state.get();
                        match state.user_info.clone() {
                            Some(user) => {
                                let is_admin = state.is_admin();
                                let name = user.name.clone();
                                let email = user.email.clone();
                                let logout = logout.clone();
                                view! {
                                    <div class="navbar__user">
                                        <button
                                            class="navbar-icon-btn"
                                            title="Account"
                                            on:click=move |_| set_menu_open.update(|o| *o = !*o)
                                        >
                                            {icon("user")}
                                        </button>
                                        <Show when=move || menu_open.get()>
                                            {
                                                let name = name.clone();
                                                let email = email.clone();
                                                let logout = logout.clone();
                                                view! {
                                                    <div class="navbar__menu">
                                                        <div class="navbar__menu-label">
                                                            <span class="navbar__menu-name">{name}</span>
                                                            <span class="navbar__menu-email">{email}</span>
                                                        </div>
                                                        <Show when=move || is_admin>
                                                            <a
                                                                href="/admin/products"
                                                                class="navbar__menu-item"
                                                                on:click=move |_| set_menu_open.set(false)
                                                            >
                                                                {icon("settings")}
                                                                "Admin Panel"
                                                            </a>
                                                        </Show>
                                                        <button
                                                            class="navbar__menu-item navbar__menu-item--danger"
                                                            on:click=logout
                                                        >
                                                            {icon("logout")}
                                                            "Logout"
                                                        </button>
                                                    </div>
                                                }
                                            }
                                        </Show>
                                    </div>
                                }
                                .into_any()
                            }
                            None => view! {
                                <a href="/auth/login" class="navbar-icon-btn" title="Sign in">
                                    {icon("user")}
                                </a>
                            }
                            .into_any(),
                        }
                    }}
                </div>
            </div>
        </header>
    }
}
