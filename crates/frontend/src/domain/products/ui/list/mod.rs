use contracts::domain::category::CategorySummary;
use contracts::domain::product::{Product, ProductId, ProductStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

use crate::domain::categories::api as categories_api;
use crate::domain::products::api;
use crate::domain::products::ui::details::ProductDetails;
use crate::shared::format::format_price;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, highlight_matches, SearchInput, Searchable};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;

/// A product matches on its name, SKU or category name, so typing a
/// category filters the list down to that category's products.
impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.name.to_lowercase().contains(&f)
            || self.sku.to_lowercase().contains(&f)
            || self.category_name().to_lowercase().contains(&f)
    }
}

#[derive(Clone)]
enum ProductDialog {
    Closed,
    Create,
    Edit(Product),
}

#[component]
pub fn ProductList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Product>>(Vec::new());
    let (categories, set_categories) = signal::<Vec<CategorySummary>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (filter, set_filter) = signal(String::new());
    let (dialog, set_dialog) = signal(ProductDialog::Closed);
    let toasts = use_toasts();

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_admin_products().await {
                Ok(list) => set_items.set(list),
                Err(e) => {
                    set_items.set(Vec::new());
                    log::error!("Failed to load products: {}", e);
                    toasts.error(format!("Failed to load products: {}", e));
                }
            }
            set_loading.set(false);
        });
    };

    // Category options for the dialog; fetched once, not per mutation
    let fetch_categories = move || {
        spawn_local(async move {
            match categories_api::fetch_category_summaries().await {
                Ok(list) => set_categories.set(list),
                Err(e) => log::error!("Failed to load category options: {}", e),
            }
        });
    };

    let handle_delete = move |id: ProductId| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Are you sure you want to delete this product?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_product(&id).await {
                Ok(()) => {
                    toasts.success("Product deleted successfully");
                    fetch();
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    fetch();
    fetch_categories();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Products"</h1>
                    <p class="header__subtitle">"Manage your store inventory"</p>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |value| set_filter.set(value))
                        placeholder="Search products..."
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_dialog.set(ProductDialog::Create)
                    >
                        {icon("plus")}
                        "Add Product"
                    </Button>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Image"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Price"</th>
                            <th class="table__header-cell">"Stock"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() {
                                return (0..6)
                                    .map(|_| view! {
                                        <tr class="table__row">
                                            <td class="table__cell" colspan="7">
                                                <div class="skeleton-line"></div>
                                            </td>
                                        </tr>
                                    })
                                    .collect_view()
                                    .into_any();
                            }

                            let filter_val = filter.get();
                            let rows = filter_list(items.get(), &filter_val);

                            if rows.is_empty() {
                                let message = if filter_val.trim().is_empty() {
                                    "No products yet. Add your first product."
                                } else {
                                    "No products match your search."
                                };
                                return view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--empty" colspan="7">
                                            {message}
                                        </td>
                                    </tr>
                                }
                                .into_any();
                            }

                            rows.into_iter()
                                .map(|product| {
                                    let edit_product = product.clone();
                                    let delete_id = product.id.clone();
                                    let category_name = product.category_name().to_string();
                                    let thumb = match product.first_image() {
                                        Some(src) => view! {
                                            <img class="table-thumb" src=src.to_string() alt=""/>
                                        }
                                        .into_any(),
                                        None => view! {
                                            <span class="table-thumb table-thumb--placeholder">
                                                {icon("image")}
                                            </span>
                                        }
                                        .into_any(),
                                    };
                                    let price = view! {
                                        <span class="price">{format_price(product.price)}</span>
                                        {product.original_price.map(|op| view! {
                                            <span class="price price--original">
                                                {format_price(op)}
                                            </span>
                                        })}
                                    };
                                    let badge = match product.status {
                                        ProductStatus::Active => view! {
                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                                                "active"
                                            </Badge>
                                        }
                                        .into_any(),
                                        ProductStatus::Inactive => view! {
                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                                                "inactive"
                                            </Badge>
                                        }
                                        .into_any(),
                                        ProductStatus::OutOfStock => view! {
                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                                                "out of stock"
                                            </Badge>
                                        }
                                        .into_any(),
                                    };

                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{thumb}</td>
                                            <td class="table__cell">
                                                <div class="cell-primary">
                                                    {highlight_matches(&product.name, &filter_val)}
                                                </div>
                                                <div class="cell-secondary">
                                                    {highlight_matches(&product.sku, &filter_val)}
                                                </div>
                                            </td>
                                            <td class="table__cell">
                                                {highlight_matches(&category_name, &filter_val)}
                                            </td>
                                            <td class="table__cell">{price}</td>
                                            <td class="table__cell">{product.stock}</td>
                                            <td class="table__cell">{badge}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--icon"
                                                    title="Edit"
                                                    on:click=move |_| {
                                                        set_dialog.set(ProductDialog::Edit(edit_product.clone()))
                                                    }
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="button button--icon button--danger"
                                                    title="Delete"
                                                    on:click=move |_| handle_delete(delete_id.clone())
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            {move || {
                let (initial, title) = match dialog.get() {
                    ProductDialog::Closed => return view! { <></> }.into_any(),
                    ProductDialog::Create => (None, "Add Product"),
                    ProductDialog::Edit(product) => (Some(product), "Edit Product"),
                };

                let was_edit = initial.is_some();
                let on_saved: Rc<dyn Fn(())> = Rc::new(move |_| {
                    toasts.success(if was_edit {
                        "Product updated successfully"
                    } else {
                        "Product created successfully"
                    });
                    set_dialog.set(ProductDialog::Closed);
                    fetch();
                });
                let on_cancel: Rc<dyn Fn(())> =
                    Rc::new(move |_| set_dialog.set(ProductDialog::Closed));
                // `Rc` is not `Send`; hand the callbacks to the modal's
                // children (a `Send` closure) through local-storage slots.
                let on_saved = StoredValue::new_local(on_saved);
                let on_cancel = StoredValue::new_local(on_cancel);

                view! {
                    <Modal
                        title=title.to_string()
                        on_close=Callback::new(move |_| set_dialog.set(ProductDialog::Closed))
                    >
                        <ProductDetails
                            initial=initial
                            categories=categories.get_untracked()
                            on_saved=on_saved.get_value()
                            on_cancel=on_cancel.get_value()
                        />
                    </Modal>
                }
                .into_any()
            }}
        </div>
    }
}
