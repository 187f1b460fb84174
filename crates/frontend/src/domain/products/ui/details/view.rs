use contracts::domain::category::CategorySummary;
use contracts::domain::product::{Product, ProductStatus};
use leptos::prelude::*;
use std::rc::Rc;
use web_sys::HtmlInputElement;

use super::view_model::ProductFormVm;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

/// Product form, shared by the add and edit dialogs.
#[component]
pub fn ProductDetails(
    initial: Option<Product>,
    categories: Vec<CategorySummary>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ProductFormVm::new(initial.as_ref());
    let toasts = use_toasts();

    let is_edit = initial.is_some();
    let category_options: Vec<(String, String)> = categories
        .iter()
        .map(|c| (c.id.as_str().to_string(), c.name.clone()))
        .collect();

    let handle_submit = {
        let vm = vm.clone();
        let on_saved = on_saved.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.save_command(on_saved.clone());
        }
    };

    let vm_clone = vm.clone();

    view! {
        <form class="details-form" on:submit=handle_submit>
            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="form-error">{e}</div> })
            }

            <div class="form-row">
                <div class="form-group">
                    <label for="product-name">"Name"</label>
                    <input
                        type="text"
                        id="product-name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.draft.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.draft.update(|d| d.name = event_target_value(&ev))
                        }
                        placeholder="e.g. Walnut Serving Bowl"
                    />
                </div>

                <div class="form-group">
                    <label for="product-sku">"SKU"</label>
                    <input
                        type="text"
                        id="product-sku"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.draft.get().sku
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.draft.update(|d| d.sku = event_target_value(&ev))
                        }
                        placeholder="WB-01"
                    />
                </div>
            </div>

            <div class="form-group">
                <label for="product-description">"Description"</label>
                <textarea
                    id="product-description"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.draft.get().description
                    }
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| vm.draft.update(|d| d.description = event_target_value(&ev))
                    }
                    rows="3"
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="product-price">"Price"</label>
                    <input
                        type="number"
                        id="product-price"
                        step="0.01"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.draft.get().price
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.draft.update(|d| d.price = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="product-original-price">"Original Price"</label>
                    <input
                        type="number"
                        id="product-original-price"
                        step="0.01"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.draft.get().original_price
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.draft.update(|d| d.original_price = event_target_value(&ev))
                            }
                        }
                    />
                    <span class="form-hint">"Leave blank when the product is not on sale."</span>
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="product-category">"Category"</label>
                    <select
                        id="product-category"
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.draft.update(|d| d.category = event_target_value(&ev))
                        }
                    >
                        <option
                            value=""
                            prop:selected={
                                let vm = vm_clone.clone();
                                move || vm.draft.get().category.is_empty()
                            }
                        >
                            "Select a category"
                        </option>
                        {category_options
                            .into_iter()
                            .map(|(id, name)| {
                                let vm = vm_clone.clone();
                                let option_id = id.clone();
                                view! {
                                    <option
                                        value=id
                                        prop:selected=move || vm.draft.get().category == option_id
                                    >
                                        {name}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="product-status">"Status"</label>
                    <select
                        id="product-status"
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.draft.update(|d| {
                                    d.status = ProductStatus::from_str(&value)
                                        .unwrap_or(ProductStatus::Active);
                                });
                            }
                        }
                    >
                        <option
                            value="active"
                            prop:selected={
                                let vm = vm_clone.clone();
                                move || vm.draft.get().status == ProductStatus::Active
                            }
                        >
                            "Active"
                        </option>
                        <option
                            value="inactive"
                            prop:selected={
                                let vm = vm_clone.clone();
                                move || vm.draft.get().status == ProductStatus::Inactive
                            }
                        >
                            "Inactive"
                        </option>
                        <option
                            value="out_of_stock"
                            prop:selected={
                                let vm = vm_clone.clone();
                                move || vm.draft.get().status == ProductStatus::OutOfStock
                            }
                        >
                            "Out of Stock"
                        </option>
                    </select>
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="product-stock">"Stock"</label>
                    <input
                        type="number"
                        id="product-stock"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.draft.get().stock
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.draft.update(|d| d.stock = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="product-rating">"Rating"</label>
                    <input
                        type="number"
                        id="product-rating"
                        step="0.1"
                        min="0"
                        max="5"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.draft.get().rating
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.draft.update(|d| d.rating = event_target_value(&ev))
                        }
                    />
                </div>
            </div>

            <div class="form-group">
                <label>"Images"</label>
                <input
                    type="file"
                    id="product-images"
                    accept="image/*"
                    multiple
                    style="display: none;"
                    on:change={
                        let vm = vm_clone.clone();
                        move |ev| {
                            if vm.uploading.get_untracked() {
                                return;
                            }
                            let input: HtmlInputElement = event_target(&ev);
                            if let Some(list) = input.files() {
                                let files: Vec<web_sys::File> =
                                    (0..list.length()).filter_map(|i| list.get(i)).collect();
                                vm.upload_images(files, toasts);
                            }
                            // Allow re-picking the same files
                            input.set_value("");
                        }
                    }
                />
                <div class="image-grid">
                    {
                        let vm = vm_clone.clone();
                        move || {
                            let vm = vm.clone();
                            vm.draft
                                .get()
                                .images
                                .into_iter()
                                .enumerate()
                                .map(|(index, url)| {
                                    let vm = vm.clone();
                                    view! {
                                        <div class="image-preview">
                                            <img src=url alt=""/>
                                            <button
                                                type="button"
                                                class="button button--icon image-preview__remove"
                                                on:click=move |_| vm.remove_image(index)
                                            >
                                                {icon("x")}
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }
                    }
                    <label for="product-images" class="button button--secondary upload-button">
                        {icon("image")}
                        {
                            let vm = vm_clone.clone();
                            move || if vm.uploading.get() { "Uploading..." } else { "Add Images" }
                        }
                    </label>
                </div>
            </div>

            <div class="form-group">
                <label for="product-features">"Features"</label>
                <textarea
                    id="product-features"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.draft.get().features
                    }
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| vm.draft.update(|d| d.features = event_target_value(&ev))
                    }
                    rows="3"
                    placeholder="One feature per line"
                />
            </div>

            <div class="form-group">
                <label for="product-tags">"Tags"</label>
                <input
                    type="text"
                    id="product-tags"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.draft.get().tags
                    }
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| vm.draft.update(|d| d.tags = event_target_value(&ev))
                    }
                    placeholder="Comma separated, e.g. wood, kitchen, gift"
                />
            </div>

            <div class="form-actions">
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    class="button button--primary"
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.saving.get() || vm.uploading.get()
                    }
                >
                    {
                        let vm = vm_clone.clone();
                        move || {
                            if vm.saving.get() {
                                "Saving..."
                            } else if is_edit {
                                "Update Product"
                            } else {
                                "Add Product"
                            }
                        }
                    }
                </button>
            </div>
        </form>
    }
}
