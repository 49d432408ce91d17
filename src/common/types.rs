use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Session identity of the logged-in account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
}

/// Author identity embedded in each persisted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub id: u32,
    pub name: String,
}

/// Domain model representing one chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub content: String,
    /// ISO-8601 UTC with millisecond precision.
    pub timestamp: String,
}

impl ChatMessage {
    /// Build a message authored by `user`. The send instant supplies both
    /// the id and the timestamp field.
    pub fn new(user: &User, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            sender: Sender {
                id: user.id,
                name: user.name.clone(),
            },
            content,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            name: "Nabil".to_string(),
        }
    }

    #[test]
    fn new_message_carries_sender_and_content() {
        let message = ChatMessage::new(&user(), "hello".to_string());
        assert_eq!(message.sender.id, 1);
        assert_eq!(message.sender.name, "Nabil");
        assert_eq!(message.content, "hello");
        assert!(!message.id.is_empty());
    }

    #[test]
    fn timestamp_is_iso8601_utc() {
        let message = ChatMessage::new(&user(), "hi".to_string());
        let parsed = chrono::DateTime::parse_from_rfc3339(&message.timestamp);
        assert!(parsed.is_ok(), "unparsable timestamp: {}", message.timestamp);
        assert!(message.timestamp.ends_with('Z'));
    }

    #[test]
    fn serialized_shape_matches_stored_format() {
        let message = ChatMessage {
            id: "1756461072345".to_string(),
            sender: Sender {
                id: 2,
                name: "Ahmed".to_string(),
            },
            content: "hey".to_string(),
            timestamp: "2026-08-29T10:11:12.345Z".to_string(),
        };

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1756461072345",
                "sender": { "id": 2, "name": "Ahmed" },
                "content": "hey",
                "timestamp": "2026-08-29T10:11:12.345Z",
            })
        );

        let back: ChatMessage = serde_json::from_value(json).unwrap();
        assert_eq!(back, message);
    }
}
