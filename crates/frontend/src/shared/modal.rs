use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Dialog shell used by the admin forms and the feedback popup.
/// Closes on the X button, the overlay and the Escape key.
#[component]
pub fn Modal(
    /// Title shown in the header
    title: String,
    /// Callback when the dialog should close
    on_close: Callback<()>,
    /// Dialog content
    children: Children,
) -> impl IntoView {
    // Close on Escape; the listener is removed when the dialog unmounts
    let escape_closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Escape" {
                on_close.run(());
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("keydown", escape_closure.as_ref().unchecked_ref());
    }

    // `Closure` is not `Send`; park it in a local-storage slot so the
    // cleanup closure only captures the `Send` handle. The slot is dropped
    // (freeing the closure) right after the cleanup runs.
    let escape_closure = StoredValue::new_local(escape_closure);
    on_cleanup(move || {
        escape_closure.try_with_value(|escape_closure| {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    escape_closure.as_ref().unchecked_ref(),
                );
            }
        });
    });

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    // Keep clicks inside the dialog from reaching the overlay
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=handle_close>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
