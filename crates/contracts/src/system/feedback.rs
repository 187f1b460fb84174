use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feedback entry as listed by the admin screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "_id")]
    pub id: String,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Body of a feedback submission from the storefront popup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFeedback {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "_id": "88c1",
            "message": "Love the walnut bowls",
            "createdAt": "2025-11-03T09:15:00Z"
        }"#;
        let fb: Feedback = serde_json::from_str(json).unwrap();
        assert_eq!(fb.id, "88c1");
        assert_eq!(fb.created_at.to_rfc3339(), "2025-11-03T09:15:00+00:00");
    }
}
