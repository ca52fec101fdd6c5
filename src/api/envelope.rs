use serde::{Deserialize, Serialize};

use crate::http::response::StatusCode;

/// The JSON body every structured response carries:
/// `{"code": <status>, "data": <payload>}`.
///
/// `status_code` is always the status written on the HTTP status line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    #[serde(rename = "code")]
    pub status_code: u16,
    #[serde(rename = "data")]
    pub payload: T,
}

impl<T: Serialize> ResponseEnvelope<T> {
    pub fn new(status: StatusCode, payload: T) -> Self {
        Self {
            status_code: status.as_u16(),
            payload,
        }
    }

    /// Compact JSON followed by a single `\n`.
    pub fn to_json_line(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = serde_json::to_vec(self)?;
        buf.push(b'\n');
        Ok(buf)
    }
}
