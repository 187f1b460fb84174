use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__about">
                    <span class="footer__brand">"Artisan Haven"</span>
                    <p class="footer__tagline">
                        "Discover unique, handcrafted treasures made with love by skilled artisans."
                    </p>
                </div>
                <div class="footer__links">
                    <a href="/products">"Products"</a>
                    <a href="/cart">"Cart"</a>
                </div>
                <span class="footer__copy">"© 2025 Artisan Haven. All rights reserved."</span>
            </div>
        </footer>
    }
}
