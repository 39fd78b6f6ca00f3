//! Notifications
//!
//! Transient, user-facing messages raised next to cart actions. They are
//! purely additive to the UI and never feed back into cart state.

use std::{fmt, time::Duration};

use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

pub mod cart;

/// Visual category of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// An action completed.
    Success,

    /// An action failed.
    Error,

    /// Something is in progress.
    Loading,

    /// Anything else.
    Custom,
}

impl MessageKind {
    /// Lowercase name, suitable for CSS classes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Loading => "loading",
            Self::Custom => "custom",
        }
    }
}

/// Unique identifier of a message.
///
/// Built from a version 7 UUID: a millisecond timestamp followed by random bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    /// The identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A pending or displayed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Identifier used to hide the message
    pub id: MessageId,

    /// Visual category
    pub kind: MessageKind,

    /// Text shown to the user
    pub content: String,

    /// Explicit display time; the kind default applies when absent
    pub duration: Option<Duration>,
}

/// Default display times, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationDefaults {
    /// Success messages
    pub success_ms: u64,

    /// Error messages
    pub error_ms: u64,

    /// Loading messages
    pub loading_ms: u64,

    /// Custom messages
    pub custom_ms: u64,

    /// The checkout progress message
    pub checkout_ms: u64,
}

impl Default for NotificationDefaults {
    fn default() -> Self {
        Self {
            success_ms: 2_000,
            error_ms: 2_000,
            loading_ms: 2_000,
            custom_ms: 1_000,
            checkout_ms: 3_000,
        }
    }
}

impl NotificationDefaults {
    /// Display time for `kind` when a message does not set one.
    pub fn duration_for(&self, kind: MessageKind) -> Duration {
        Duration::from_millis(match kind {
            MessageKind::Success => self.success_ms,
            MessageKind::Error => self.error_ms,
            MessageKind::Loading => self.loading_ms,
            MessageKind::Custom => self.custom_ms,
        })
    }

    /// Display time of the checkout progress message.
    pub fn checkout(&self) -> Duration {
        Duration::from_millis(self.checkout_ms)
    }
}

/// Queue of pending messages.
#[derive(Debug, Default)]
pub struct Notifier {
    defaults: NotificationDefaults,
    messages: Vec<Message>,
}

impl Notifier {
    /// Create an empty queue using `defaults` for unspecified durations.
    #[must_use]
    pub fn new(defaults: NotificationDefaults) -> Self {
        Self {
            defaults,
            messages: Vec::new(),
        }
    }

    /// Queue a message and return its identifier.
    pub fn notify(
        &mut self,
        kind: MessageKind,
        content: impl Into<String>,
        duration: Option<Duration>,
    ) -> MessageId {
        let id = MessageId::generate();
        let content = content.into();

        debug!(%id, kind = kind.as_str(), %content, "notify");

        self.messages.push(Message {
            id: id.clone(),
            kind,
            content,
            duration,
        });

        id
    }

    /// Queue a success message with the default duration.
    pub fn success(&mut self, content: impl Into<String>) -> MessageId {
        self.notify(MessageKind::Success, content, None)
    }

    /// Queue an error message with the default duration.
    pub fn error(&mut self, content: impl Into<String>) -> MessageId {
        self.notify(MessageKind::Error, content, None)
    }

    /// Queue a loading message.
    pub fn loading(&mut self, content: impl Into<String>, duration: Option<Duration>) -> MessageId {
        self.notify(MessageKind::Loading, content, duration)
    }

    /// Remove a message. Unknown ids are ignored.
    pub fn hide(&mut self, id: &MessageId) {
        self.messages.retain(|message| &message.id != id);
    }

    /// Remove every message.
    pub fn clear_all(&mut self) {
        self.messages.clear();
    }

    /// Pending messages, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Look up a pending message.
    pub fn get(&self, id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|message| &message.id == id)
    }

    /// How long `message` should stay on screen. A missing or zero
    /// duration falls back to the default for its kind.
    pub fn display_duration(&self, message: &Message) -> Duration {
        message
            .duration
            .filter(|duration| !duration.is_zero())
            .unwrap_or_else(|| self.defaults.duration_for(message.kind))
    }

    /// Configured defaults.
    pub fn defaults(&self) -> &NotificationDefaults {
        &self.defaults
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    #[test]
    fn notify_queues_message_with_fresh_id() {
        let mut notifier = Notifier::default();

        let id = notifier.notify(MessageKind::Custom, "hello", None);

        assert_eq!(notifier.messages().len(), 1);
        assert_eq!(notifier.get(&id).map(|m| m.content.as_str()), Some("hello"));
    }

    #[test]
    fn ids_are_unique_within_a_session() {
        let mut notifier = Notifier::default();

        let ids: FxHashSet<MessageId> = (0..1_000)
            .map(|n| notifier.success(format!("message {n}")))
            .collect();

        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn default_durations_follow_kind() {
        let mut notifier = Notifier::default();

        let success = notifier.success("ok");
        let custom = notifier.notify(MessageKind::Custom, "fyi", None);
        let explicit = notifier.loading("wait", Some(Duration::from_secs(3)));

        let duration_of = |id: &MessageId| {
            notifier
                .get(id)
                .map(|message| notifier.display_duration(message))
        };

        assert_eq!(duration_of(&success), Some(Duration::from_millis(2_000)));
        assert_eq!(duration_of(&custom), Some(Duration::from_millis(1_000)));
        assert_eq!(duration_of(&explicit), Some(Duration::from_secs(3)));
    }

    #[test]
    fn zero_duration_uses_kind_default() {
        let mut notifier = Notifier::default();

        let error = notifier.error("oops");
        let zeroed = notifier.notify(MessageKind::Error, "oops again", Some(Duration::ZERO));

        let duration_of = |id: &MessageId| {
            notifier
                .get(id)
                .map(|message| notifier.display_duration(message))
        };

        assert_eq!(duration_of(&zeroed), Some(Duration::from_millis(2_000)));
        assert_eq!(duration_of(&zeroed), duration_of(&error));
    }

    #[test]
    fn hide_is_idempotent_and_ignores_unknown_ids() {
        let mut notifier = Notifier::default();
        let keep = notifier.success("keep");
        let drop = notifier.error("drop");

        notifier.hide(&drop);
        notifier.hide(&drop);
        notifier.hide(&MessageId::generate());

        assert_eq!(notifier.messages().len(), 1);
        assert!(notifier.get(&keep).is_some());
    }

    #[test]
    fn clear_all_is_idempotent() {
        let mut notifier = Notifier::default();
        notifier.success("a");
        notifier.error("b");

        notifier.clear_all();
        notifier.clear_all();

        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn kind_names() {
        assert_eq!(MessageKind::Success.as_str(), "success");
        assert_eq!(MessageKind::Loading.as_str(), "loading");
    }
}
