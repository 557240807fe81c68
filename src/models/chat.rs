use serde::de::IgnoredAny;
use serde::{ Deserialize, Deserializer, Serialize };

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationRequest {
    pub system_prompt: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationResponse {
    #[serde(default)]
    pub conversation_id: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply to one chat turn. Only `response` is read by the checks; the
/// server also echoes the conversation id and the history it now holds.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_history")]
    pub history: Vec<ChatMessage>,
}

/// Keeps the well-formed `{role, content}` entries and drops everything else.
/// A history that is not an array at all reads as empty.
fn lenient_history<'de, D>(deserializer: D) -> Result<Vec<ChatMessage>, D::Error>
    where D: Deserializer<'de>
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry {
        Message(ChatMessage),
        Other(IgnoredAny),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum History {
        Entries(Vec<Entry>),
        Other(IgnoredAny),
    }

    let messages = match History::deserialize(deserializer)? {
        History::Entries(entries) =>
            entries
                .into_iter()
                .filter_map(|entry| match entry {
                    Entry::Message(message) => Some(message),
                    Entry::Other(_) => None,
                })
                .collect(),
        History::Other(_) => Vec::new(),
    };
    Ok(messages)
}
