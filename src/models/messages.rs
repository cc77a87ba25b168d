use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::board::{GroupId, GroupTexts};

/// Sent once to a client right after it connects.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InitMessage {
    pub group_id: Option<GroupId>,
    pub group_texts: GroupTexts,
    pub combined_text: String,
}

/// A client asking to replace its group's fragment.
///
/// `text` stays untyped so a non-string payload can be told apart from an
/// unparseable frame.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GroupUpdateMessage {
    pub group_id: String,
    #[serde(default)]
    pub text: Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupUpdatedMessage {
    pub group_id: GroupId,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CombinedUpdatedMessage {
    pub text: String,
}

#[derive(Deserialize, Debug)]
#[serde(tag = "type")]
pub enum ReceivedMessage {
    #[serde(rename = "group:update")]
    GroupUpdate(GroupUpdateMessage),
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum SendMessage {
    #[serde(rename = "init")]
    Init(InitMessage),
    #[serde(rename = "group:updated")]
    GroupUpdated(GroupUpdatedMessage),
    #[serde(rename = "combined:updated")]
    CombinedUpdated(CombinedUpdatedMessage),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_frame_parses_with_any_text_value() {
        let msg: ReceivedMessage =
            serde_json::from_value(json!({"type": "group:update", "groupId": "g1", "text": 42}))
                .unwrap();
        let ReceivedMessage::GroupUpdate(update) = msg;
        assert_eq!(update.group_id, "g1");
        assert_eq!(update.text, json!(42));

        let msg: ReceivedMessage =
            serde_json::from_value(json!({"type": "group:update", "groupId": "g1"})).unwrap();
        let ReceivedMessage::GroupUpdate(update) = msg;
        assert!(update.text.is_null());
    }

    #[test]
    fn unknown_frame_type_is_an_error() {
        let parsed = serde_json::from_value::<ReceivedMessage>(json!({"type": "ping"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn combined_updated_wire_shape() {
        let msg = SendMessage::CombinedUpdated(CombinedUpdatedMessage {
            text: "Hello\n\nWorld".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"type": "combined:updated", "text": "Hello\n\nWorld"})
        );
    }
}
