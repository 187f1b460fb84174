use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::domain::categories::ui::list::CategoryList;
use crate::domain::feedback::ui::list::FeedbackList;
use crate::domain::products::ui::list::ProductList;
use crate::layout::Shell;
use crate::pages::admin::{AdminHome, AdminPage};
use crate::pages::cart::CartPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::products::ProductsPage;
use crate::system::pages::login::LoginPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/auth/login") view=LoginPage/>
                    <ParentRoute path=path!("/admin") view=AdminPage>
                        <Route path=path!("") view=AdminHome/>
                        <Route path=path!("products") view=ProductList/>
                        <Route path=path!("categories") view=CategoryList/>
                        <Route path=path!("feedback") view=FeedbackList/>
                    </ParentRoute>
                </Routes>
            </Shell>
        </Router>
    }
}
