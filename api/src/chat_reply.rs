use serde::{Deserialize, Serialize};

/// Body of every `/chat` answer. Failures use the same shape with status 500.
#[derive(Debug, Deserialize, Serialize)]
pub struct ChatReply {
    pub reply: String,
}
