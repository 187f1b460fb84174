/// List helpers shared by the admin pages (client-side search, highlight, search box)
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Trait for list rows that support text search
pub trait Searchable {
    /// Returns true when the row matches the search text
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Filters a list by the search text. An empty filter keeps every row.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Highlights occurrences of the filter inside the text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    if filter.trim().is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    if !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(view! {
            <span style="background-color: #ff9800; color: white; padding: 1px 2px; border-radius: 2px; font-weight: 500;">
                {text[actual_pos..match_end].to_string()}
            </span>
        }.into_any());

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (for the active-state styling)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new filter after the debounce delay
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local state for the input, ahead of the debounce
    let (input_value, set_input_value) = signal(String::new());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Cancel the previous timer if one is pending
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        let window = web_sys::window().expect("no window");
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                300,
            )
            .expect("setTimeout failed");

        closure.forget();
        debounce_timeout.set_value(Some(timeout_id));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        name: String,
        sku: String,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            let f = filter.to_lowercase();
            self.name.to_lowercase().contains(&f) || self.sku.to_lowercase().contains(&f)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Walnut Bowl".into(),
                sku: "WB-01".into(),
            },
            Row {
                name: "Ceramic Vase".into(),
                sku: "CV-02".into(),
            },
        ]
    }

    #[test]
    fn test_empty_filter_keeps_all_rows() {
        assert_eq!(filter_list(rows(), "").len(), 2);
        assert_eq!(filter_list(rows(), "   ").len(), 2);
    }

    #[test]
    fn test_filter_applies_from_first_character() {
        let filtered = filter_list(rows(), "w");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Walnut Bowl");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let filtered = filter_list(rows(), "cERaM");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].sku, "CV-02");
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(filter_list(rows(), "zzz").is_empty());
    }
}
