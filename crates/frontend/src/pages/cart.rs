use leptos::prelude::*;

use crate::shared::cart::use_cart;
use crate::shared::format::format_price;
use crate::shared::icons::icon;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();
    let items = cart.items();
    let total = cart.total();

    view! {
        <div class="page cart-page">
            <div class="page-header">
                <h1>"Your Cart"</h1>
            </div>
            {move || {
                let lines = items.get();
                if lines.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <p>"Your cart is empty."</p>
                            <a href="/products" class="button button--primary">
                                "Browse Products"
                            </a>
                        </div>
                    }
                        .into_any();
                }
                view! {
                    <div class="cart-lines">
                        {lines
                            .into_iter()
                            .map(|line| {
                                let decrease_id = line.product_id.clone();
                                let increase_id = line.product_id.clone();
                                let remove_id = line.product_id.clone();
                                let quantity = line.quantity;
                                view! {
                                    <div class="cart-line">
                                        {match line.image.clone() {
                                            Some(src) => {
                                                view! {
                                                    <img class="cart-line__thumb" src=src alt=line.name.clone()/>
                                                }
                                                    .into_any()
                                            }
                                            None => {
                                                view! {
                                                    <span class="cart-line__thumb cart-line__thumb--empty">
                                                        {icon("image")}
                                                    </span>
                                                }
                                                    .into_any()
                                            }
                                        }}
                                        <div class="cart-line__info">
                                            <span class="cart-line__name">{line.name.clone()}</span>
                                            <span class="cart-line__price">{format_price(line.price)}</span>
                                        </div>
                                        <div class="cart-line__qty">
                                            <button
                                                class="button button--icon"
                                                aria-label="Decrease quantity"
                                                on:click=move |_| {
                                                    cart.set_quantity(&decrease_id, quantity.saturating_sub(1))
                                                }
                                            >
                                                "-"
                                            </button>
                                            <span class="cart-line__count">{quantity}</span>
                                            <button
                                                class="button button--icon"
                                                aria-label="Increase quantity"
                                                on:click=move |_| cart.set_quantity(&increase_id, quantity + 1)
                                            >
                                                "+"
                                            </button>
                                        </div>
                                        <span class="cart-line__subtotal">
                                            {format_price(line.price * quantity as f64)}
                                        </span>
                                        <button
                                            class="button button--icon button--danger"
                                            title="Remove"
                                            on:click=move |_| cart.remove(&remove_id)
                                        >
                                            {icon("trash")}
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="cart-summary">
                            <button class="button button--secondary" on:click=move |_| cart.clear()>
                                "Clear Cart"
                            </button>
                            <div class="cart-summary__total">
                                <span>"Total"</span>
                                <span class="cart-summary__amount">{format_price(total.get_untracked())}</span>
                            </div>
                        </div>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
