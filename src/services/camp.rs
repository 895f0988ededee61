//! Camp catalog service
//!
//! CRUD over camps plus the read paths the public site uses: the popular
//! listing and case-insensitive name search with a fixed set of sort keys.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Camp, CampSort, CampUpsertRequest};

/// Camps listed by the popular endpoint, top N by participant count.
const POPULAR_LIMIT: i64 = 6;

#[derive(Clone)]
pub struct CampService {
    db_pool: PgPool,
}

impl CampService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    pub async fn create_camp(&self, request: CampUpsertRequest) -> Result<Camp, ApiError> {
        let now = Utc::now();
        let camp = sqlx::query_as::<_, Camp>(
            r#"
            INSERT INTO camps (
                id, name, image, fee, scheduled_at, location,
                healthcare_professional, participant_count, description,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, 0, $8, $9, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(&request.image)
        .bind(request.fee)
        .bind(request.scheduled_at)
        .bind(&request.location)
        .bind(&request.healthcare_professional)
        .bind(&request.description)
        .bind(now)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(camp)
    }

    pub async fn list_camps(&self) -> Result<Vec<Camp>, ApiError> {
        let camps = sqlx::query_as::<_, Camp>("SELECT * FROM camps ORDER BY created_at DESC")
            .fetch_all(&self.db_pool)
            .await?;

        Ok(camps)
    }

    /// Top camps by participant count; ties stay in natural row order.
    pub async fn popular_camps(&self) -> Result<Vec<Camp>, ApiError> {
        let camps = sqlx::query_as::<_, Camp>(
            "SELECT * FROM camps ORDER BY participant_count DESC LIMIT $1",
        )
        .bind(POPULAR_LIMIT)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(camps)
    }

    /// Case-insensitive substring match on camp name, optionally sorted.
    ///
    /// The sort key is a closed enum resolved at the boundary; its ORDER BY
    /// text never comes from the request.
    pub async fn search_camps(
        &self,
        term: Option<&str>,
        sort: Option<CampSort>,
    ) -> Result<Vec<Camp>, ApiError> {
        let pattern = format!("%{}%", escape_like(term.unwrap_or("")));
        let sql = match sort {
            Some(key) => format!(
                "SELECT * FROM camps WHERE name ILIKE $1 ORDER BY {}",
                key.order_clause()
            ),
            None => "SELECT * FROM camps WHERE name ILIKE $1".to_string(),
        };

        let camps = sqlx::query_as::<_, Camp>(&sql)
            .bind(pattern)
            .fetch_all(&self.db_pool)
            .await?;

        Ok(camps)
    }

    pub async fn get_camp(&self, id: Uuid) -> Result<Camp, ApiError> {
        let camp = sqlx::query_as::<_, Camp>("SELECT * FROM camps WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("camp {} not found", id)))?;

        Ok(camp)
    }

    /// Full-row update of the organizer-editable fields. The participant
    /// counter is not touched here; only the registration flow moves it.
    pub async fn update_camp(
        &self,
        id: Uuid,
        request: CampUpsertRequest,
    ) -> Result<Camp, ApiError> {
        let camp = sqlx::query_as::<_, Camp>(
            r#"
            UPDATE camps
            SET name = $1, image = $2, fee = $3, scheduled_at = $4,
                location = $5, healthcare_professional = $6, description = $7,
                updated_at = $8
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.image)
        .bind(request.fee)
        .bind(request.scheduled_at)
        .bind(&request.location)
        .bind(&request.healthcare_professional)
        .bind(&request.description)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("camp {} not found", id)))?;

        Ok(camp)
    }

    pub async fn delete_camp(&self, id: Uuid) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM camps WHERE id = $1")
            .bind(id)
            .execute(&self.db_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("camp {} not found", id)));
        }

        Ok(())
    }
}

/// Escape LIKE metacharacters so a search term matches literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("cam"), "cam");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
