use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            title: "Error".into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

pub trait Toaster: Send + Sync {
    fn show(&self, toast: Toast);
}

/// Keeps every toast shown, in order.
#[derive(Debug, Default)]
pub struct ToastLog {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Toaster for ToastLog {
    fn show(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Default => tracing::info!(title = %toast.title, "{}", toast.description),
            ToastVariant::Destructive => tracing::warn!(title = %toast.title, "{}", toast.description),
        }
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }
}
