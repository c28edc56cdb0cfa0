//! Conversation list entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named thread of question/answer exchanges as shown in the sidebar list
///
/// The backend serializes conversation summaries in camelCase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Opaque server-issued identifier
    pub id: String,

    /// Display title of the conversation
    pub title: String,

    /// Preview of the most recent message
    pub last_message: String,

    /// When the most recent message was exchanged
    pub last_message_timestamp: DateTime<Utc>,

    /// Number of unread messages
    pub unread_count: u32,

    /// Whether the conversation has multiple participants
    pub is_group: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_wire_shape() {
        let json = r#"{
            "id": "conv-1",
            "title": "Travel plans",
            "lastMessage": "See you in Nairobi",
            "lastMessageTimestamp": "2025-01-15T10:30:00+00:00",
            "unreadCount": 2,
            "isGroup": false,
            "createdAt": "2025-01-10T08:00:00+00:00",
            "updatedAt": "2025-01-15T10:30:00+00:00"
        }"#;

        let conversation: Conversation = serde_json::from_str(json).unwrap();
        assert_eq!(conversation.id, "conv-1");
        assert_eq!(conversation.last_message, "See you in Nairobi");
        assert_eq!(conversation.unread_count, 2);
        assert!(!conversation.is_group);
    }

    #[test]
    fn test_serialize_round_trip_keeps_camel_case() {
        let json = r#"{
            "id": "c",
            "title": "t",
            "lastMessage": "m",
            "lastMessageTimestamp": "2025-01-15T10:30:00Z",
            "unreadCount": 0,
            "isGroup": true,
            "createdAt": "2025-01-15T10:30:00Z",
            "updatedAt": "2025-01-15T10:30:00Z"
        }"#;
        let conversation: Conversation = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&conversation).unwrap();
        assert!(value.get("lastMessage").is_some());
        assert!(value.get("last_message").is_none());
    }
}
