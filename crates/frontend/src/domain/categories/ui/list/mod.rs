use contracts::domain::category::{Category, CategoryId, CategoryStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

use crate::domain::categories::api;
use crate::domain::categories::ui::details::CategoryDetails;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, highlight_matches, SearchInput, Searchable};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;

impl Searchable for Category {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.name.to_lowercase().contains(&f) || self.slug.to_lowercase().contains(&f)
    }
}

#[derive(Clone)]
enum CategoryDialog {
    Closed,
    Create,
    Edit(Category),
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Category>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (filter, set_filter) = signal(String::new());
    let (dialog, set_dialog) = signal(CategoryDialog::Closed);
    let toasts = use_toasts();

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_admin_categories().await {
                Ok(list) => set_items.set(list),
                Err(e) => {
                    set_items.set(Vec::new());
                    log::error!("Failed to load categories: {}", e);
                    toasts.error(format!("Failed to load categories: {}", e));
                }
            }
            set_loading.set(false);
        });
    };

    let handle_delete = move |id: CategoryId| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Are you sure you want to delete this category?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_category(&id).await {
                Ok(()) => {
                    toasts.success("Category deleted successfully");
                    fetch();
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Categories"</h1>
                    <p class="header__subtitle">"Organize your store catalog"</p>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |value| set_filter.set(value))
                        placeholder="Search categories..."
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_dialog.set(CategoryDialog::Create)
                    >
                        {icon("plus")}
                        "Add Category"
                    </Button>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Image"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Parent"</th>
                            <th class="table__header-cell">"Products"</th>
                            <th class="table__header-cell">"Sort Order"</th>
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
                                    "No categories yet. Add your first category."
                                } else {
                                    "No categories match your search."
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
                                .map(|category| {
                                    let edit_category = category.clone();
                                    let delete_id = category.id.clone();
                                    let parent_name = category
                                        .parent
                                        .as_ref()
                                        .map(|p| p.name.clone())
                                        .unwrap_or_else(|| "-".to_string());
                                    let thumb = match category.image.clone().filter(|i| !i.is_empty()) {
                                        Some(src) => view! {
                                            <img class="table-thumb" src=src alt=""/>
                                        }
                                        .into_any(),
                                        None => view! {
                                            <span class="table-thumb table-thumb--placeholder">
                                                {icon("image")}
                                            </span>
                                        }
                                        .into_any(),
                                    };
                                    let badge = match category.status {
                                        CategoryStatus::Active => view! {
                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                                                "active"
                                            </Badge>
                                        }
                                        .into_any(),
                                        CategoryStatus::Inactive => view! {
                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                                                "inactive"
                                            </Badge>
                                        }
                                        .into_any(),
                                    };

                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{thumb}</td>
                                            <td class="table__cell">
                                                <div class="cell-primary">
                                                    {highlight_matches(&category.name, &filter_val)}
                                                </div>
                                                <div class="cell-secondary">
                                                    {highlight_matches(&category.slug, &filter_val)}
                                                </div>
                                            </td>
                                            <td class="table__cell">{parent_name}</td>
                                            <td class="table__cell">{category.product_count}</td>
                                            <td class="table__cell">{category.sort_order}</td>
                                            <td class="table__cell">{badge}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--icon"
                                                    title="Edit"
                                                    on:click=move |_| {
                                                        set_dialog.set(CategoryDialog::Edit(edit_category.clone()))
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
                    CategoryDialog::Closed => return view! { <></> }.into_any(),
                    CategoryDialog::Create => (None, "Add Category"),
                    CategoryDialog::Edit(category) => (Some(category), "Edit Category"),
                };

                let was_edit = initial.is_some();
                let on_saved: Rc<dyn Fn(())> = Rc::new(move |_| {
                    toasts.success(if was_edit {
                        "Category updated successfully"
                    } else {
                        "Category created successfully"
                    });
                    set_dialog.set(CategoryDialog::Closed);
                    fetch();
                });
                let on_cancel: Rc<dyn Fn(())> =
                    Rc::new(move |_| set_dialog.set(CategoryDialog::Closed));
                // `Rc` is not `Send`; hand the callbacks to the modal's
                // children (a `Send` closure) through local-storage slots.
                let on_saved = StoredValue::new_local(on_saved);
                let on_cancel = StoredValue::new_local(on_cancel);

                view! {
                    <Modal
                        title=title.to_string()
                        on_close=Callback::new(move |_| set_dialog.set(CategoryDialog::Closed))
                    >
                        <CategoryDetails
                            initial=initial
                            categories=items.get_untracked()
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
