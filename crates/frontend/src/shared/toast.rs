//! App-wide toast notifications.
//!
//! `ToastService` lives in the root context; any component can push a
//! success or error message and it disappears on its own after a few
//! seconds. `ToastHost` renders the stack in a fixed corner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Error);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    fn push(&self, message: String, kind: ToastKind) {
        let id = Uuid::new_v4();
        self.toasts.update(|list| list.push(Toast { id, message, kind }));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    expect_context::<ToastService>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toast-stack">
            {move || {
                service
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let intent = match toast.kind {
                            ToastKind::Success => MessageBarIntent::Success,
                            ToastKind::Error => MessageBarIntent::Error,
                        };
                        let id = toast.id;
                        view! {
                            <div class="toast-item" on:click=move |_| service.dismiss(id)>
                                <MessageBar intent=intent>
                                    <span>{toast.message.clone()}</span>
                                </MessageBar>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
