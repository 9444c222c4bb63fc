//! Global state management

use dioxus::prelude::*;

/// How long a toast stays up before dismissing itself (web only)
#[cfg(feature = "web")]
const TOAST_TIMEOUT_MS: u32 = 4_000;

/// Oldest toasts are dropped beyond this
const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-50 border-green-200 text-green-800",
            ToastKind::Error => "bg-red-50 border-red-200 text-red-800",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "\u{2705}", // ✅
            ToastKind::Error => "\u{26A0}",   // ⚠
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Bounded, ordered list of visible notifications
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }

        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Toast notifications shared by every page
#[derive(Clone, Copy)]
pub struct ToastState {
    pub queue: Signal<ToastQueue>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            queue: Signal::new(ToastQueue::default()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let mut queue = self.queue;
        let id = queue.write().push(kind, message);

        #[cfg(feature = "web")]
        {
            let state = *self;
            spawn_forever(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
                state.dismiss(id);
            });
        }

        #[cfg(not(feature = "web"))]
        let _ = id;
    }
}

/// Hook to access toast notifications
pub fn use_toast() -> ToastState {
    use_context::<ToastState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_keep_insertion_order() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Success, "Blog created successfully");
        queue.push(ToastKind::Error, "Delete failed");

        let messages: Vec<_> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["Blog created successfully", "Delete failed"]);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "one");
        let second = queue.push(ToastKind::Success, "two");

        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);

        // Dismissing twice is harmless
        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut queue = ToastQueue::default();
        for i in 0..MAX_TOASTS + 2 {
            queue.push(ToastKind::Error, format!("error {}", i));
        }

        assert_eq!(queue.toasts().len(), MAX_TOASTS);
        assert_eq!(queue.toasts()[0].message, "error 2");
    }
}
