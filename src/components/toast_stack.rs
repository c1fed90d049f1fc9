//! Top-right stack of auto-dismissing notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any component can call [`show_notice`] with the app-wide
//! `RwSignal<ToastState>`; the stack renders whatever is in that signal.
//! Each toast removes itself after the configured timeout or on click.

#[cfg(test)]
#[path = "toast_stack_test.rs"]
mod toast_stack_test;

use catalog::Notice;
use leptos::prelude::*;

use crate::state::toast::{ToastState, toast_class};

/// Push `notice` and schedule its removal after `timeout_ms`.
///
/// Returns the toast id, or `None` if the stack has been disposed.
pub fn show_notice(toasts: RwSignal<ToastState>, notice: Notice, timeout_ms: u32) -> Option<u64> {
    let id = toasts.try_update(|t| t.push(notice))?;
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(timeout_ms, move || {
            expire_notice(toasts, id);
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = timeout_ms;
    }
    Some(id)
}

/// Remove toast `id`; `false` when it was already dismissed or the stack
/// is gone. Shared by the auto-dismiss timer and click-to-dismiss.
pub fn expire_notice(toasts: RwSignal<ToastState>, id: u64) -> bool {
    toasts.try_update(|t| t.dismiss(id)).unwrap_or(false)
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <Show when=move || !toasts.with(ToastState::is_empty)>
            <div class="toast-stack" role="status" aria-live="polite">
                {move || {
                    toasts
                        .get()
                        .items
                        .into_iter()
                        .map(|toast| {
                            let id = toast.id;
                            view! {
                                <div
                                    class=toast_class(toast.severity)
                                    title="Dismiss"
                                    on:click=move |_| {
                                        expire_notice(toasts, id);
                                    }
                                >
                                    {toast.message}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Show>
    }
}
