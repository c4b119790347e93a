//! Toast notification components
//!
//! Provides toast-style notifications for success and error feedback after
//! contact form submissions.

use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// Default auto-dismiss delay in milliseconds
const AUTO_DISMISS_MS: u32 = 5000;

/// Notification severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A single toast message
#[derive(Clone, Debug)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Toast {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(AUTO_DISMISS_MS),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(AUTO_DISMISS_MS),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(AUTO_DISMISS_MS),
        }
    }
}

/// Toast item with unique ID for tracking
#[derive(Clone, Debug)]
pub struct ToastItem {
    pub id: u64,
    pub toast: Toast,
}

/// Notifications container component
/// Place this once near the page root to show toasts
#[component]
pub fn NotificationsContainer(
    /// Signal containing the list of toasts
    notifications: RwSignal<VecDeque<ToastItem>>,
) -> impl IntoView {
    view! {
        <div class="fixed top-4 right-4 z-[60] flex flex-col gap-2 max-w-sm">
            {move || {
                notifications.get().into_iter().map(|item| {
                    let id = item.id;
                    let toast = item.toast.clone();
                    let notifications_signal = notifications;

                    view! {
                        <ToastView toast=toast id=id notifications=notifications_signal />
                    }
                }).collect_view()
            }}
        </div>
    }
}

/// Single toast component
#[component]
fn ToastView(
    toast: Toast,
    id: u64,
    notifications: RwSignal<VecDeque<ToastItem>>,
) -> impl IntoView {
    let (is_visible, _set_is_visible) = signal(true);
    let (is_exiting, _set_is_exiting) = signal(false);

    // Auto-dismiss if specified
    if let Some(_ms) = toast.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                // Wait for exit animation
                TimeoutFuture::new(300).await;
                _set_is_visible.set(false);
                notifications.update(|n| {
                    n.retain(|i| i.id != id);
                });
            });
        }
    }

    let (bg_class, border_class, icon_class) = match toast.kind {
        ToastKind::Success => ("bg-green-500/10", "border-green-500/30", "text-green-500"),
        ToastKind::Error => ("bg-red-500/10", "border-red-500/30", "text-red-500"),
        ToastKind::Info => ("bg-blue-500/10", "border-blue-500/30", "text-blue-500"),
    };

    let icon_path = match toast.kind {
        ToastKind::Success => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        ToastKind::Error => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ToastKind::Info => "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
    };

    let title = toast.title.clone();
    let message = toast.message.clone();
    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border backdrop-blur-sm shadow-lg transition-all duration-300 {} {}",
        bg_class, border_class
    );

    view! {
        <Show when=move || is_visible.get()>
            <div
                class=container_class.clone()
                style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
            >
                <div class=icon_class>
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
                    </svg>
                </div>
                <div class="flex-1 min-w-0">
                    <h4 class="text-sm font-medium text-theme-primary">{title.clone()}</h4>
                    <p class="text-xs text-theme-secondary mt-0.5">{message.clone()}</p>
                </div>
                <button
                    class="text-theme-muted hover:text-theme-primary transition-colors"
                    on:click=move |_| {
                        notifications.update(|n| {
                            n.retain(|i| i.id != id);
                        });
                    }
                >
                    <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                    </svg>
                </button>
            </div>
        </Show>
    }
}

/// Hook to manage toasts
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<ToastItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<VecDeque<ToastItem>> {
        self.notifications
    }

    /// Add a toast
    pub fn notify(&self, toast: Toast) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notifications.update(|n| {
            n.push_back(ToastItem { id, toast });

            // Remove oldest if we exceed max
            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }

    /// Add a success toast
    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Toast::success(title, message));
    }

    /// Add an error toast
    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Toast::error(title, message));
    }

    /// Add an info toast
    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Toast::info(title, message));
    }

    /// Clear all toasts
    pub fn clear(&self) {
        self.notifications.set(VecDeque::new());
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for NotificationManager {
    fn clone(&self) -> Self {
        Self {
            notifications: self.notifications,
            next_id: self.next_id,
        }
    }
}

impl Copy for NotificationManager {}
