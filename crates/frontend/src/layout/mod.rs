pub mod feedback_popup;
pub mod footer;
pub mod navbar;

use leptos::prelude::*;

use self::feedback_popup::FeedbackPopup;
use self::footer::Footer;
use self::navbar::Navbar;

/// Storefront chrome around every routed page.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Navbar/>
            <main class="shell__main">{children()}</main>
            <Footer/>
            <FeedbackPopup/>
        </div>
    }
}
