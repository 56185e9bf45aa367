use std::time::Duration;

use dioxus::prelude::*;

use offsite_cost_calculator::util::generate_id;

const TOAST_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Time on screen. Roster warnings list people by name, so they stay up
    /// longer than confirmations.
    pub fn dismiss_after(self) -> Duration {
        match self {
            ToastKind::Info | ToastKind::Success => Duration::from_secs(5),
            ToastKind::Warning => Duration::from_secs(10),
            ToastKind::Error => Duration::from_secs(12),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let text = message.into();
    toasts.with_mut(|entries| {
        if entries.len() >= TOAST_LIMIT {
            entries.remove(0);
        }
        entries.push(ToastMessage::new(kind, text));
    });
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let views = toasts()
        .into_iter()
        .map(ToastView::from)
        .collect::<Vec<_>>();

    if views.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "toasts",
            ul { class: "toasts__list",
                for view in views {
                    ToastCard { key: "{view.id}", view: view.clone(), toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(view: ToastView, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toast_id = view.id.clone();
    let dismiss_after = view.dismiss_after;
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(dismiss_after).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    rsx! {
        li {
            class: "toast {view.modifier}",
            span { class: "toast__icon", "{view.icon}" }
            p { class: "toast__text", "{view.text}" }
            button {
                class: "toast__dismiss",
                onclick: move |_| {
                    let target = view.id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct ToastView {
    id: String,
    text: String,
    modifier: &'static str,
    icon: &'static str,
    dismiss_after: Duration,
}

impl From<ToastMessage> for ToastView {
    fn from(message: ToastMessage) -> Self {
        let (modifier, icon) = match message.kind {
            ToastKind::Info => ("toast--info", "ℹ️"),
            ToastKind::Success => ("toast--success", "✅"),
            ToastKind::Warning => ("toast--warning", "⚠️"),
            ToastKind::Error => ("toast--error", "⛔"),
        };

        ToastView {
            dismiss_after: message.kind.dismiss_after(),
            id: message.id,
            text: message.text,
            modifier,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_and_errors_outlast_confirmations() {
        assert!(ToastKind::Warning.dismiss_after() > ToastKind::Success.dismiss_after());
        assert!(ToastKind::Error.dismiss_after() >= ToastKind::Warning.dismiss_after());
        assert_eq!(
            ToastView::from(ToastMessage::new(ToastKind::Warning, "2 people")).dismiss_after,
            Duration::from_secs(10)
        );
    }
}
