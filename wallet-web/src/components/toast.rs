//! Transient notification, dismissed automatically after a few seconds

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::utils::constants::TOAST_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }
}

/// Renders `message` while it is set. Each new message starts its own
/// timer; a timer only clears the message it was started for.
#[component]
pub fn Toast(message: RwSignal<Option<ToastMessage>>) -> impl IntoView {
    Effect::new(move |_| {
        if let Some(shown) = message.get() {
            spawn_local(async move {
                TimeoutFuture::new(TOAST_DURATION_MS).await;
                message.try_update(|current| {
                    if current.as_ref() == Some(&shown) {
                        *current = None;
                    }
                });
            });
        }
    });

    move || {
        message.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
            };
            view! {
                <div class=class role="alert" on:click=move |_| message.set(None)>
                    {toast.text}
                </div>
            }
        })
    }
}
