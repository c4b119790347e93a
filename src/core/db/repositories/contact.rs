//! Contact submission repository
//!
//! Stores and lists contact form submissions for record keeping.

use sqlx::PgPool;

use crate::core::contact::validation::ValidatedContact;
use crate::core::db::models::ContactSubmission;

/// Contact repository error types
#[derive(Debug, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Persistence seam for contact submissions.
///
/// The API layer is generic over this so the submission pipeline can be
/// exercised without a running database.
pub trait ContactStore {
    fn create(
        &self,
        contact: &ValidatedContact,
    ) -> impl std::future::Future<Output = Result<ContactSubmission, ContactRepositoryError>> + Send;

    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ContactSubmission>, ContactRepositoryError>> + Send;
}

/// PostgreSQL-backed contact repository
#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    /// Create a new contact repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ContactStore for ContactRepository {
    async fn create(
        &self,
        contact: &ValidatedContact,
    ) -> Result<ContactSubmission, ContactRepositoryError> {
        let submission = sqlx::query_as::<_, ContactSubmission>(
            r#"
            INSERT INTO contact_submissions (name, email, brief)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, brief, created_at
            "#,
        )
        .bind(contact.name())
        .bind(contact.email())
        .bind(contact.brief())
        .fetch_one(&self.pool)
        .await?;

        Ok(submission)
    }

    async fn list(&self) -> Result<Vec<ContactSubmission>, ContactRepositoryError> {
        let submissions = sqlx::query_as::<_, ContactSubmission>(
            r#"
            SELECT id, name, email, brief, created_at
            FROM contact_submissions
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }
}
