use contracts::domain::category::{Category, CategoryStatus};
use leptos::prelude::*;
use std::rc::Rc;
use web_sys::HtmlInputElement;

use super::draft::NO_PARENT;
use super::view_model::CategoryFormVm;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

/// Category form, shared by the add and edit dialogs.
/// `categories` supplies the parent options; only root categories other
/// than the one being edited qualify.
#[component]
pub fn CategoryDetails(
    initial: Option<Category>,
    categories: Vec<Category>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = CategoryFormVm::new(initial.as_ref());
    let toasts = use_toasts();

    let is_edit = initial.is_some();
    let editing_id = initial.as_ref().map(|c| c.id.clone());
    let parent_options: Vec<(String, String)> = categories
        .iter()
        .filter(|c| c.is_root() && Some(&c.id) != editing_id.as_ref())
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

            <div class="form-group">
                <label for="category-name">"Name"</label>
                <input
                    type="text"
                    id="category-name"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.draft.get().name
                    }
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| vm.set_name(event_target_value(&ev))
                    }
                    placeholder="e.g. Ceramics"
                />
            </div>

            <div class="form-group">
                <label for="category-slug">"Slug"</label>
                <input
                    type="text"
                    id="category-slug"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.draft.get().slug
                    }
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| vm.draft.update(|d| d.slug = event_target_value(&ev))
                    }
                    placeholder="ceramics"
                />
                <span class="form-hint">"Used in the store URL. Follows the name for new categories."</span>
            </div>

            <div class="form-group">
                <label for="category-description">"Description"</label>
                <textarea
                    id="category-description"
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

            <div class="form-group">
                <label>"Image"</label>
                <input
                    type="file"
                    id="category-image"
                    accept="image/*"
                    style="display: none;"
                    on:change={
                        let vm = vm_clone.clone();
                        move |ev| {
                            if vm.uploading.get_untracked() {
                                return;
                            }
                            let input: HtmlInputElement = event_target(&ev);
                            if let Some(file) = input.files().and_then(|f| f.get(0)) {
                                vm.upload_image(file, toasts);
                            }
                            // Allow re-picking the same file
                            input.set_value("");
                        }
                    }
                />
                {
                    let vm = vm_clone.clone();
                    move || {
                        let image = vm.draft.get().image;
                        if image.is_empty() {
                            view! {
                                <label for="category-image" class="button button--secondary upload-button">
                                    {icon("image")}
                                    {
                                        let vm = vm.clone();
                                        move || if vm.uploading.get() { "Uploading..." } else { "Upload Image" }
                                    }
                                </label>
                            }
                            .into_any()
                        } else {
                            let vm = vm.clone();
                            view! {
                                <div class="image-preview">
                                    <img src=image alt="Category image"/>
                                    <button
                                        type="button"
                                        class="button button--icon image-preview__remove"
                                        on:click=move |_| vm.remove_image()
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            }
                            .into_any()
                        }
                    }
                }
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="category-parent">"Parent Category"</label>
                    <select
                        id="category-parent"
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.draft.update(|d| d.parent = event_target_value(&ev))
                        }
                    >
                        <option
                            value=NO_PARENT
                            prop:selected={
                                let vm = vm_clone.clone();
                                move || vm.draft.get().parent == NO_PARENT
                            }
                        >
                            "None (top level)"
                        </option>
                        {parent_options
                            .into_iter()
                            .map(|(id, name)| {
                                let vm = vm_clone.clone();
                                let option_id = id.clone();
                                view! {
                                    <option
                                        value=id
                                        prop:selected=move || vm.draft.get().parent == option_id
                                    >
                                        {name}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="category-status">"Status"</label>
                    <select
                        id="category-status"
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.draft.update(|d| {
                                    d.status = CategoryStatus::from_str(&value)
                                        .unwrap_or(CategoryStatus::Active);
                                });
                            }
                        }
                    >
                        <option
                            value="active"
                            prop:selected={
                                let vm = vm_clone.clone();
                                move || vm.draft.get().status == CategoryStatus::Active
                            }
                        >
                            "Active"
                        </option>
                        <option
                            value="inactive"
                            prop:selected={
                                let vm = vm_clone.clone();
                                move || vm.draft.get().status == CategoryStatus::Inactive
                            }
                        >
                            "Inactive"
                        </option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="category-sort-order">"Sort Order"</label>
                    <input
                        type="number"
                        id="category-sort-order"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.draft.get().sort_order
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.draft.update(|d| d.sort_order = event_target_value(&ev))
                        }
                    />
                </div>
            </div>

            <div class="form-group">
                <label for="category-seo-title">"SEO Title"</label>
                <input
                    type="text"
                    id="category-seo-title"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.draft.get().seo_title
                    }
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| vm.draft.update(|d| d.seo_title = event_target_value(&ev))
                    }
                />
            </div>

            <div class="form-group">
                <label for="category-seo-description">"SEO Description"</label>
                <textarea
                    id="category-seo-description"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.draft.get().seo_description
                    }
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| vm.draft.update(|d| d.seo_description = event_target_value(&ev))
                    }
                    rows="2"
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
                                "Update Category"
                            } else {
                                "Add Category"
                            }
                        }
                    }
                </button>
            </div>
        </form>
    }
}
