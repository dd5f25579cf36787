use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ItemId);
id_newtype!(OrderId);
id_newtype!(MessageId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Picking,
    Packed,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    /// Orders that still need warehouse work.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::Picking | Self::Packed)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Picking => "Picking",
            Self::Packed => "Packed",
            Self::Shipped => "Shipped",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in the assistant conversation. Ids are assigned by the chat
/// session store in append order; they never travel over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub message_id: MessageId,
    pub content: String,
    pub role: ChatRole,
    pub sent_at: DateTime<Utc>,
}
