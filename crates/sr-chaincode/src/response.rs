use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Outcome of one invocation, as returned to the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub tx_id: String,
    /// [`Response::OK`] or [`Response::ERROR`].
    pub status: u16,
    /// Error message; empty on success.
    pub message: String,
    pub payload: String,
}

impl Response {
    pub const OK: u16 = 200;
    pub const ERROR: u16 = 500;

    pub fn success(tx_id: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            tx_id: tx_id.into(),
            status: Self::OK,
            message: String::new(),
            payload: payload.into(),
        }
    }

    pub fn error(tx_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            tx_id: tx_id.into(),
            status: Self::ERROR,
            message: message.into(),
            payload: String::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Self::OK
    }

    /// Decode a JSON payload.
    pub fn json_payload<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.payload)
    }
}
