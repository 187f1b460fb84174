use contracts::system::feedback::Feedback;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::feedback::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::toast::use_toasts;

/// Read-only wall of visitor feedback for the admin area.
#[component]
pub fn FeedbackList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Feedback>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let toasts = use_toasts();

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_feedbacks().await {
                Ok(list) => set_items.set(list),
                Err(e) => {
                    set_items.set(Vec::new());
                    log::error!("Failed to load feedback: {}", e);
                    toasts.error(format!("Failed to load feedback: {}", e));
                }
            }
            set_loading.set(false);
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"User Feedback"</h1>
                    <p class="header__subtitle">"What visitors are telling you"</p>
                </div>
            </div>

            {move || {
                if loading.get() {
                    return (0..3)
                        .map(|_| view! {
                            <div class="feedback-card">
                                <div class="skeleton-line"></div>
                            </div>
                        })
                        .collect_view()
                        .into_any();
                }

                let list = items.get();
                if list.is_empty() {
                    return view! {
                        <div class="empty-state">"No feedback available."</div>
                    }
                    .into_any();
                }

                list.into_iter()
                    .map(|feedback| view! {
                        <div class="feedback-card">
                            <p class="feedback-card__message">{feedback.message}</p>
                            <span class="feedback-card__date">
                                {format_datetime(&feedback.created_at)}
                            </span>
                        </div>
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
