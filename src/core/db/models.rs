//! Database row models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored contact form submission
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub brief: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_submission_serialization() {
        let submission = ContactSubmission {
            id: Uuid::nil(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            brief: "We need a private AI deployment.".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&submission).unwrap();

        assert!(json.contains("Jane Doe"));
        assert!(json.contains("jane@example.com"));
        assert!(json.contains("created_at"));
    }
}
