use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Type of the notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// Message notification to show.
#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
}

impl Notification {
    /// Creates new [`Notification`] instance.
    fn new(text: String, kind: NotificationKind) -> Self {
        Self { text, kind }
    }
}

/// Notifications sink that view failures and informational messages are reported to.
#[derive(Debug, Clone)]
pub struct NotificationSink {
    messages: UnboundedSender<Notification>,
}

impl NotificationSink {
    /// Creates new [`NotificationSink`] instance together with its receiving end.
    pub fn channel() -> (Self, UnboundedReceiver<Notification>) {
        let (messages, receiver) = unbounded_channel();
        (Self { messages }, receiver)
    }

    /// Reports an informational message.
    pub fn show_info(&self, text: impl Into<String>) {
        let _ = self.messages.send(Notification::new(text.into(), NotificationKind::Info));
    }

    /// Reports an error message.
    pub fn show_error(&self, text: impl Into<String>) {
        let _ = self.messages.send(Notification::new(text.into(), NotificationKind::Error));
    }
}
