//! Standard response envelope: `{ type, data, message }`.

use crate::model::Kurban;
use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeType {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: EnvelopeType,
    /// Only set on successful reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Kurban>>,
    #[serde(default)]
    pub message: String,
}

impl Envelope {
    pub fn rows(data: Vec<Kurban>) -> Self {
        Envelope {
            kind: EnvelopeType::Success,
            data: Some(data),
            message: String::new(),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Envelope {
            kind: EnvelopeType::Success,
            data: None,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Envelope {
            kind: EnvelopeType::Error,
            data: None,
            message: message.into(),
        }
    }
}

pub fn success_many(data: Vec<Kurban>) -> (StatusCode, Json<Envelope>) {
    (StatusCode::OK, Json(Envelope::rows(data)))
}

pub fn success_one(record: Kurban) -> (StatusCode, Json<Envelope>) {
    (StatusCode::OK, Json(Envelope::rows(vec![record])))
}

pub fn success_message(status: StatusCode, message: &str) -> (StatusCode, Json<Envelope>) {
    (status, Json(Envelope::message(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn write_envelope_has_no_data_key() {
        let v = serde_json::to_value(Envelope::message("data inserted")).unwrap();
        assert_eq!(v, json!({ "type": "success", "message": "data inserted" }));
    }

    #[test]
    fn read_envelope_keeps_empty_data() {
        let v = serde_json::to_value(Envelope::rows(Vec::new())).unwrap();
        assert_eq!(v, json!({ "type": "success", "data": [], "message": "" }));
    }

    #[test]
    fn record_serializes_type_key() {
        let rec = Kurban {
            id: 1,
            name: "Sapi".into(),
            kind: "Besar".into(),
            weight: 300,
            price: 15_000_000,
        };
        let v = serde_json::to_value(Envelope::rows(vec![rec])).unwrap();
        assert_eq!(
            v["data"][0],
            json!({ "id": 1, "name": "Sapi", "type": "Besar", "weight": 300, "price": 15000000 })
        );
    }
}
