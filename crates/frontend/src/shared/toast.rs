//! Transient notifications shown in the corner of the screen.

use std::time::Duration;

use leptos::prelude::*;
use thaw::{Toast, ToastIntent, ToastOptions, ToastTitle, ToasterInjection};

const DISMISS_AFTER: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn intent(&self) -> ToastIntent {
        match self {
            ToastKind::Success => ToastIntent::Success,
            ToastKind::Error => ToastIntent::Error,
            ToastKind::Info => ToastIntent::Info,
        }
    }
}

/// Dispatches into the `ToasterProvider` mounted at the app root
#[derive(Clone, Copy)]
pub struct ToastService {
    toaster: ToasterInjection,
}

impl ToastService {
    pub fn push(&self, kind: ToastKind, text: impl Into<String>) {
        let text = text.into();
        if kind == ToastKind::Error {
            log::warn!("{}", text);
        }
        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{text}</ToastTitle>
                    </Toast>
                }
            },
            ToastOptions::default()
                .with_intent(kind.intent())
                .with_timeout(DISMISS_AFTER),
        );
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(ToastKind::Info, text);
    }
}

pub fn use_toast() -> ToastService {
    ToastService {
        toaster: ToasterInjection::expect_context(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_maps_to_toaster_intent() {
        assert!(matches!(ToastKind::Success.intent(), ToastIntent::Success));
        assert!(matches!(ToastKind::Error.intent(), ToastIntent::Error));
        assert!(matches!(ToastKind::Info.intent(), ToastIntent::Info));
    }
}
