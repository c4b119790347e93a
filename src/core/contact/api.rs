//! Contact API endpoints
//!
//! - POST /api/contact - Validate, email and store a contact form submission
//! - GET /api/contact-submissions - List stored submissions
//! - GET /api/health - Database connectivity probe

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::contact::email::{ContactNotifier, EmailNotifier};
use crate::core::contact::validation::{
    ContactInput, FieldError, ValidatedContact, validate_contact,
};
use crate::core::db::models::ContactSubmission;
use crate::core::db::repositories::{ContactRepository, ContactStore};

/// Message returned to the client after a successful submission
pub const SUBMIT_SUCCESS_MESSAGE: &str =
    "Contact form submitted successfully! We'll get back to you within 24 hours.";

/// Contact API state containing the repository and email notifier
#[derive(Clone)]
pub struct ContactApiState {
    pub contact_repo: ContactRepository,
    pub notifier: EmailNotifier,
}

/// Contact API error types
#[derive(Debug, thiserror::Error)]
pub enum ContactApiError {
    #[error("Invalid form data")]
    Validation(Vec<FieldError>),

    #[error("Failed to send email notification")]
    EmailDelivery,

    #[error("Failed to submit contact form")]
    Storage,

    #[error("Failed to fetch submissions")]
    Listing,
}

/// Error body shape shared by every failure response
#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

impl IntoResponse for ContactApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ContactApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ContactApiError::EmailDelivery | ContactApiError::Storage | ContactApiError::Listing => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = self.to_string();
        let errors = match self {
            ContactApiError::Validation(errors) => Some(errors),
            _ => None,
        };

        let body = ErrorResponse {
            success: false,
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}

/// Response for a successful submission
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub id: Uuid,
    pub message: String,
}

/// Create the contact API router
pub fn contact_api_router(state: ContactApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/api/contact", post(submit_contact_handler))
        .route("/api/contact-submissions", get(list_submissions_handler))
        .with_state(state)
}

/// POST /api/contact
/// Validate the submission, send the notification email, then store it
async fn submit_contact_handler(
    State(state): State<Arc<ContactApiState>>,
    Json(input): Json<ContactInput>,
) -> Result<Json<SubmitResponse>, ContactApiError> {
    let submission = process_submission(&state.notifier, &state.contact_repo, &input).await?;

    tracing::info!("Contact submission stored: {}", submission.id);

    Ok(Json(SubmitResponse {
        success: true,
        id: submission.id,
        message: SUBMIT_SUCCESS_MESSAGE.to_string(),
    }))
}

/// GET /api/contact-submissions
/// List stored submissions in insertion order
async fn list_submissions_handler(
    State(state): State<Arc<ContactApiState>>,
) -> Result<Json<Vec<ContactSubmission>>, ContactApiError> {
    let submissions = state.contact_repo.list().await.map_err(|err| {
        tracing::error!("Failed to fetch submissions: {}", err);
        ContactApiError::Listing
    })?;

    Ok(Json(submissions))
}

/// Create the health check router
pub fn health_router(pool: PgPool) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .with_state(pool)
}

/// GET /api/health
/// Probe database connectivity; 200 when reachable, 503 otherwise
async fn health_handler(State(pool): State<PgPool>) -> StatusCode {
    match crate::core::db::health_check(&pool).await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            tracing::error!("Health check failed: {}", err);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// Run a submission through the full pipeline: validate, notify, persist.
///
/// The email is sent before anything is written; a failed delivery aborts
/// the submission and nothing is stored.
pub async fn process_submission<N, S>(
    notifier: &N,
    store: &S,
    input: &ContactInput,
) -> Result<ContactSubmission, ContactApiError>
where
    N: ContactNotifier + Sync,
    S: ContactStore + Sync,
{
    let contact: ValidatedContact = validate_contact(input).map_err(ContactApiError::Validation)?;

    if !notifier.send_contact_email(&contact).await {
        return Err(ContactApiError::EmailDelivery);
    }

    store.create(&contact).await.map_err(|err| {
        tracing::error!("Failed to store contact submission: {}", err);
        ContactApiError::Storage
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::db::repositories::ContactRepositoryError;
    use chrono::Utc;
    use std::sync::Mutex;

    /// Notifier that records what it was asked to send
    struct MockNotifier {
        succeed: bool,
        sent: Mutex<Vec<String>>,
    }

    impl MockNotifier {
        fn new(succeed: bool) -> Self {
            Self {
                succeed,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent_to(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl ContactNotifier for MockNotifier {
        async fn send_contact_email(&self, contact: &ValidatedContact) -> bool {
            self.sent.lock().unwrap().push(contact.email().to_string());
            self.succeed
        }
    }

    /// In-memory store standing in for the database
    struct MemoryStore {
        fail: bool,
        rows: Mutex<Vec<ContactSubmission>>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                fail: false,
                rows: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                rows: Mutex::new(Vec::new()),
            }
        }

        fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    impl ContactStore for MemoryStore {
        async fn create(
            &self,
            contact: &ValidatedContact,
        ) -> Result<ContactSubmission, ContactRepositoryError> {
            if self.fail {
                return Err(ContactRepositoryError::DatabaseError(
                    sqlx::Error::PoolClosed,
                ));
            }

            let submission = ContactSubmission {
                id: Uuid::new_v4(),
                name: contact.name().to_string(),
                email: contact.email().to_string(),
                brief: contact.brief().to_string(),
                created_at: Utc::now(),
            };

            self.rows.lock().unwrap().push(submission.clone());
            Ok(submission)
        }

        async fn list(&self) -> Result<Vec<ContactSubmission>, ContactRepositoryError> {
            if self.fail {
                return Err(ContactRepositoryError::DatabaseError(
                    sqlx::Error::PoolClosed,
                ));
            }
            Ok(self.rows.lock().unwrap().clone())
        }
    }

    fn valid_input() -> ContactInput {
        ContactInput {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            brief: "We need a private AI deployment.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submission_pipeline_success() {
        let notifier = MockNotifier::new(true);
        let store = MemoryStore::new();

        let submission = process_submission(&notifier, &store, &valid_input())
            .await
            .unwrap();

        assert_eq!(submission.name, "Jane Doe");
        assert_eq!(submission.email, "jane@example.com");
        assert_eq!(notifier.sent_to(), vec!["jane@example.com".to_string()]);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_skips_notifier_and_store() {
        let notifier = MockNotifier::new(true);
        let store = MemoryStore::new();
        let input = ContactInput {
            name: "J".to_string(),
            email: "nope".to_string(),
            brief: "short".to_string(),
        };

        let err = process_submission(&notifier, &store, &input)
            .await
            .unwrap_err();

        match err {
            ContactApiError::Validation(errors) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(notifier.sent_to().is_empty());
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_email_failure_aborts_before_store() {
        let notifier = MockNotifier::new(false);
        let store = MemoryStore::new();

        let err = process_submission(&notifier, &store, &valid_input())
            .await
            .unwrap_err();

        assert!(matches!(err, ContactApiError::EmailDelivery));
        assert_eq!(notifier.sent_to().len(), 1);
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_after_email_success() {
        let notifier = MockNotifier::new(true);
        let store = MemoryStore::failing();

        let err = process_submission(&notifier, &store, &valid_input())
            .await
            .unwrap_err();

        assert!(matches!(err, ContactApiError::Storage));
        // The email already went out; only persistence failed
        assert_eq!(notifier.sent_to().len(), 1);
    }

    #[tokio::test]
    async fn test_list_returns_submissions_in_order() {
        let notifier = MockNotifier::new(true);
        let store = MemoryStore::new();

        let first = process_submission(&notifier, &store, &valid_input())
            .await
            .unwrap();
        let second = process_submission(
            &notifier,
            &store,
            &ContactInput {
                name: "John Smith".to_string(),
                email: "john@example.org".to_string(),
                brief: "Interested in on-prem model hosting.".to_string(),
            },
        )
        .await
        .unwrap();

        assert_ne!(first.id, second.id);

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
    }

    /// Pool that never connects; validation failures respond before any query
    fn lazy_pool() -> PgPool {
        sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost:1/unreachable")
            .unwrap()
    }

    #[tokio::test]
    async fn test_post_with_missing_field_returns_structured_400() {
        use axum::body::Body;
        use axum::http::Request;
        use tower::ServiceExt;

        let router = contact_api_router(ContactApiState {
            contact_repo: ContactRepository::new(lazy_pool()),
            notifier: EmailNotifier::new("SG.test-key"),
        });

        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"email":"jane@example.com","brief":"We need a private AI deployment."}"#,
            ))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["errors"][0]["field"], "name");
    }

    #[tokio::test]
    async fn test_health_route_reports_unreachable_database() {
        use axum::body::Body;
        use axum::http::Request;
        use tower::ServiceExt;

        let router = health_router(lazy_pool());

        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_validation_error_response_is_400_with_errors() {
        let err = ContactApiError::Validation(vec![FieldError::new(
            "email",
            "Please enter a valid email address",
        )]);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_email_delivery_error_response_is_500() {
        let response = ContactApiError::EmailDelivery.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_error_response_is_500() {
        let response = ContactApiError::Storage.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactApiError::Validation(vec![]).to_string(),
            "Invalid form data"
        );
        assert_eq!(
            ContactApiError::EmailDelivery.to_string(),
            "Failed to send email notification"
        );
        assert_eq!(
            ContactApiError::Storage.to_string(),
            "Failed to submit contact form"
        );
        assert_eq!(
            ContactApiError::Listing.to_string(),
            "Failed to fetch submissions"
        );
    }

    #[test]
    fn test_error_body_omits_errors_when_absent() {
        let body = ErrorResponse {
            success: false,
            message: "Failed to send email notification".to_string(),
            errors: None,
        };

        let json = serde_json::to_string(&body).unwrap();

        assert!(json.contains("\"success\":false"));
        assert!(!json.contains("errors"));
    }

    #[test]
    fn test_submit_response_serialization() {
        let response = SubmitResponse {
            success: true,
            id: Uuid::nil(),
            message: SUBMIT_SUCCESS_MESSAGE.to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"success\":true"));
        assert!(json.contains("within 24 hours"));
    }
}
