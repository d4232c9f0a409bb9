use crate::actions::{Notification, NotificationLevel, NotificationSink};
use crate::components::Icon;
use dioxus::prelude::*;

const TOAST_LIFETIME_MS: u64 = 4000;

#[cfg(not(target_arch = "wasm32"))]
async fn toast_delay_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(target_arch = "wasm32")]
async fn toast_delay_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Banner queue shared through context. Each banner dismisses itself.
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Notifier {
    pub fn new(toasts: Signal<Vec<Toast>>, next_id: Signal<u64>) -> Self {
        Self { toasts, next_id }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        (self.toasts)()
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|toast| toast.id != id);
    }
}

impl NotificationSink for Notifier {
    fn notify(&self, notification: Notification) {
        let mut next_id = self.next_id;
        let id = next_id();
        next_id.set(id + 1);

        let mut toasts = self.toasts;
        toasts.write().push(Toast { id, notification });

        let notifier = *self;
        spawn(async move {
            toast_delay_ms(TOAST_LIFETIME_MS).await;
            notifier.dismiss(id);
        });
    }
}

fn toast_class(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "border-sky-500/40 bg-sky-500/10 text-sky-200",
        NotificationLevel::Success => "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
        NotificationLevel::Warning => "border-amber-500/40 bg-amber-500/10 text-amber-200",
        NotificationLevel::Error => "border-red-500/40 bg-red-500/10 text-red-200",
    }
}

#[component]
pub fn ToastStack() -> Element {
    let notifier = use_context::<Notifier>();

    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 max-w-sm w-full",
            for toast in notifier.toasts() {
                div {
                    key: "{toast.id}",
                    class: "flex items-start gap-3 px-4 py-3 rounded-xl border backdrop-blur-xl shadow-lg {toast_class(toast.notification.level)}",
                    p { class: "flex-1 text-sm", "{toast.notification.message}" }
                    button {
                        class: "opacity-70 hover:opacity-100",
                        aria_label: "Dismiss",
                        onclick: {
                            let id = toast.id;
                            move |_| notifier.dismiss(id)
                        },
                        Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                    }
                }
            }
        }
    }
}
