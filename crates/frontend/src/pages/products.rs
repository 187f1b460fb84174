use contracts::domain::category::CategorySummary;
use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use serde::{Deserialize, Serialize};
use thaw::{Button, ButtonAppearance};

use crate::domain::categories::api::fetch_category_summaries;
use crate::domain::products::api::fetch_public_products;
use crate::shared::cart::use_cart;
use crate::shared::format::format_price;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

/// Query string of the catalog page. The navbar writes `search`, the
/// category chips write `category`, and both survive a page reload.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct CatalogQuery {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    search: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    category: String,
}

impl CatalogQuery {
    fn to_href(&self) -> String {
        match serde_qs::to_string(self) {
            Ok(qs) if !qs.is_empty() => format!("/products?{}", qs),
            _ => "/products".to_string(),
        }
    }
}

fn visible_products(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let term = query.search.trim().to_lowercase();
    products
        .iter()
        .filter(|product| {
            query.category.is_empty()
                || product
                    .category
                    .as_ref()
                    .map(|c| c.id.as_str() == query.category)
                    .unwrap_or(false)
        })
        .filter(|product| {
            term.is_empty()
                || product.name.to_lowercase().contains(&term)
                || product.category_name().to_lowercase().contains(&term)
                || product
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use contracts::domain::category::CategoryId;
    use contracts::domain::product::{CategoryRef, ProductId, ProductStatus};

    use super::*;

    fn product(name: &str, category: Option<(&str, &str)>, tags: &[&str]) -> Product {
        Product {
            id: ProductId::new(format!("p-{}", name)),
            name: name.to_string(),
            description: String::new(),
            price: 25.0,
            original_price: None,
            rating: 4.5,
            category: category.map(|(id, label)| CategoryRef {
                id: CategoryId::new(id),
                name: label.to_string(),
            }),
            images: Vec::new(),
            stock: 3,
            sku: String::new(),
            status: ProductStatus::Active,
            features: Vec::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn category_chip_narrows_by_id() {
        let products = vec![
            product("Oak Bowl", Some(("c1", "Woodwork")), &[]),
            product("Wool Scarf", Some(("c2", "Textiles")), &[]),
            product("Mystery Box", None, &[]),
        ];
        let query = CatalogQuery {
            search: String::new(),
            category: "c1".to_string(),
        };
        let visible = visible_products(&products, &query);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Oak Bowl");
    }

    #[test]
    fn search_matches_category_name_and_tags() {
        let products = vec![
            product("Oak Bowl", Some(("c1", "Woodwork")), &["kitchen"]),
            product("Wool Scarf", Some(("c2", "Textiles")), &["winter"]),
        ];
        let by_category = visible_products(
            &products,
            &CatalogQuery {
                search: "textile".to_string(),
                category: String::new(),
            },
        );
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].name, "Wool Scarf");

        let by_tag = visible_products(
            &products,
            &CatalogQuery {
                search: "kitchen".to_string(),
                category: String::new(),
            },
        );
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].name, "Oak Bowl");
    }

    #[test]
    fn empty_query_keeps_everything() {
        let products = vec![
            product("Oak Bowl", None, &[]),
            product("Wool Scarf", None, &[]),
        ];
        let visible = visible_products(&products, &CatalogQuery::default());
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn href_round_trip() {
        assert_eq!(CatalogQuery::default().to_href(), "/products");
        let query = CatalogQuery {
            search: String::new(),
            category: "c7".to_string(),
        };
        assert_eq!(query.to_href(), "/products?category=c7");
        let parsed: CatalogQuery = serde_qs::from_str("search=mug&category=c7")
            .expect("query should parse");
        assert_eq!(parsed.search, "mug");
        assert_eq!(parsed.category, "c7");
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let cart = use_cart();
    let toasts = use_toasts();

    let in_stock = product.in_stock();
    let image = product.first_image().map(|s| s.to_string());
    let category_label = product.category_name().to_string();
    let name = product.name.clone();

    let add_to_cart = {
        let product = product.clone();
        move |_| {
            cart.add(&product);
            toasts.success("Added to cart");
        }
    };

    view! {
        <div class="product-card">
            <div class="product-card__media">
                {match image {
                    Some(src) => view! { <img src=src alt=name.clone()/> }.into_any(),
                    None => {
                        view! { <span class="product-card__placeholder">{icon("image")}</span> }
                            .into_any()
                    }
                }}
            </div>
            <div class="product-card__body">
                <span class="product-card__category">{category_label}</span>
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <div class="product-card__rating">
                    {icon("star")}
                    <span>{format!("{:.1}", product.rating)}</span>
                </div>
                <div class="product-card__price">
                    <span class="price">{format_price(product.price)}</span>
                    {product
                        .original_price
                        .map(|original| {
                            view! {
                                <span class="price price--original">{format_price(original)}</span>
                            }
                        })}
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=!in_stock
                    on_click=add_to_cart
                >
                    {if in_stock { "Add to Cart" } else { "Out of Stock" }}
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let (products, set_products) = signal(Vec::<Product>::new());
    let (categories, set_categories) = signal(Vec::<CategorySummary>::new());
    let (loading, set_loading) = signal(true);
    let toasts = use_toasts();

    let location = use_location();
    let query = Memo::new(move |_| {
        location
            .search
            .with(|raw| serde_qs::from_str::<CatalogQuery>(raw).unwrap_or_default())
    });

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_public_products().await {
                Ok(list) => set_products.set(list),
                Err(err) => {
                    set_products.set(Vec::new());
                    log::error!("Failed to load products: {}", err);
                    toasts.error(&err);
                }
            }
            set_loading.set(false);
        });
    };
    fetch();

    spawn_local(async move {
        match fetch_category_summaries().await {
            Ok(list) => set_categories.set(list),
            Err(err) => log::error!("Failed to load categories: {}", err),
        }
    });

    let visible = Memo::new(move |_| {
        products.with(|list| query.with(|q| visible_products(list, q)))
    });

    let navigate = use_navigate();

    view! {
        <div class="page products-page">
            <div class="page-header">
                <h1>"Our Collection"</h1>
                <p class="page-header__subtitle">
                    "Browse handcrafted goods from independent makers."
                </p>
            </div>

            <div class="category-chips">
                {move || {
                    let navigate = navigate.clone();
                    let current = query.get();
                    let all_query = CatalogQuery {
                        search: current.search.clone(),
                        category: String::new(),
                    };
                    let all_chip = {
                        let navigate = navigate.clone();
                        let href = all_query.to_href();
                        view! {
                            <button
                                class="chip"
                                class:chip--active=current.category.is_empty()
                                on:click=move |_| navigate(&href, NavigateOptions::default())
                            >
                                "All"
                            </button>
                        }
                    };
                    let chips = categories
                        .get()
                        .into_iter()
                        .map(|summary| {
                            let navigate = navigate.clone();
                            let active = summary.id.as_str() == current.category;
                            let href = CatalogQuery {
                                search: current.search.clone(),
                                category: summary.id.to_string(),
                            }
                            .to_href();
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=active
                                    on:click=move |_| navigate(&href, NavigateOptions::default())
                                >
                                    {summary.name}
                                </button>
                            }
                        })
                        .collect_view();
                    view! {
                        {all_chip}
                        {chips}
                    }
                }}
            </div>

            {move || {
                if loading.get() {
                    return view! {
                        <div class="product-grid">
                            {(0..6)
                                .map(|_| {
                                    view! {
                                        <div class="product-card product-card--skeleton">
                                            <div class="skeleton-line skeleton-line--media"></div>
                                            <div class="skeleton-line"></div>
                                            <div class="skeleton-line skeleton-line--short"></div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any();
                }
                let items = visible.get();
                if items.is_empty() {
                    let message = if products.with(|list| list.is_empty()) {
                        "No products available yet."
                    } else {
                        "No products match your search."
                    };
                    return view! { <div class="empty-state"><p>{message}</p></div> }.into_any();
                }
                view! {
                    <div class="product-grid">
                        {items
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product/> })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
