//! Floating feedback widget shown on every storefront page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::feedback::api;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

#[component]
pub fn FeedbackPopup() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (message, set_message) = signal(String::new());
    let (sending, set_sending) = signal(false);
    let toasts = use_toasts();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = message.get().trim().to_string();
        if text.is_empty() {
            return;
        }
        set_sending.set(true);
        spawn_local(async move {
            match api::submit_feedback(text).await {
                Ok(()) => {
                    toasts.success("Thanks for your feedback!");
                    set_message.set(String::new());
                    set_open.set(false);
                }
                Err(e) => toasts.error(e),
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="feedback-popup">
            <Show when=move || open.get()>
                <form class="feedback-popup__panel" on:submit=submit>
                    <label for="feedback-message">"Tell us what you think"</label>
                    <textarea
                        id="feedback-message"
                        rows="3"
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                        placeholder="Your feedback..."
                    />
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || sending.get()
                    >
                        {move || if sending.get() { "Sending..." } else { "Send" }}
                    </button>
                </form>
            </Show>
            <button
                class="feedback-popup__toggle"
                title="Leave feedback"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {icon("message")}
            </button>
        </div>
    }
}
