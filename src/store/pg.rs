//! Direct Postgres backend.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use time::OffsetDateTime;
use uuid::Uuid;

use super::{CatalogRows, DiseaseOption, HealthStore, NewSubmission, StoreError, Submission};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn submission_from_row(row: &PgRow) -> Result<Submission, sqlx::Error> {
    Ok(Submission {
        id: row.try_get("id")?,
        full_name: row.try_get("full_name")?,
        age: row.try_get("age")?,
        gender: row.try_get("gender")?,
        height: row.try_get("height")?,
        weight: row.try_get("weight")?,
        contact_number: row.try_get("contact_number")?,
        email: row.try_get("email")?,
        existing_disease: row.try_get("existing_disease")?,
        symptoms: row.try_get("symptoms")?,
        lifestyle: row.try_get("lifestyle")?,
        suggestions: row.try_get("suggestions")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait::async_trait]
impl HealthStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn insert_submission(&self, new: &NewSubmission) -> Result<Submission, StoreError> {
        let row = sqlx::query(
            "INSERT INTO health_submissions \
                 (full_name, age, gender, height, weight, contact_number, email, existing_disease, symptoms, lifestyle, suggestions) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING id, created_at",
        )
        .bind(&new.full_name)
        .bind(new.age)
        .bind(&new.gender)
        .bind(new.height)
        .bind(new.weight)
        .bind(&new.contact_number)
        .bind(&new.email)
        .bind(&new.existing_disease)
        .bind(&new.symptoms)
        .bind(&new.lifestyle)
        .bind(&new.suggestions)
        .fetch_one(&self.pool)
        .await?;

        let id: Uuid = row.try_get("id")?;
        let created_at: OffsetDateTime = row.try_get("created_at")?;
        Ok(Submission::from_new(new, id, created_at))
    }

    async fn list_submissions(&self) -> Result<Vec<Submission>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, full_name, age, gender, height, weight, contact_number, email, \
                    existing_disease, symptoms, lifestyle, suggestions, created_at \
             FROM health_submissions ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| submission_from_row(row).map_err(StoreError::from))
            .collect()
    }

    async fn list_disease_options(&self) -> Result<Vec<DiseaseOption>, StoreError> {
        let rows = sqlx::query_as::<_, (String, String, String)>(
            "SELECT id, name_en, name_hi FROM diseases ORDER BY position ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name_en, name_hi)| DiseaseOption { id, name_en, name_hi })
            .collect())
    }

    async fn seed_catalog(&self, catalog: &CatalogRows) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        for disease in &catalog.diseases {
            sqlx::query(
                "INSERT INTO diseases (id, name_en, name_hi, description_en, description_hi, position) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 ON CONFLICT (id) DO UPDATE SET \
                     name_en = EXCLUDED.name_en, name_hi = EXCLUDED.name_hi, \
                     description_en = EXCLUDED.description_en, description_hi = EXCLUDED.description_hi, \
                     position = EXCLUDED.position",
            )
            .bind(disease.id)
            .bind(disease.name_en)
            .bind(disease.name_hi)
            .bind(disease.description_en)
            .bind(disease.description_hi)
            .bind(disease.position)
            .execute(&mut *tx)
            .await?;
        }

        for remedy in &catalog.remedies {
            sqlx::query(
                "INSERT INTO remedies (id, title_en, title_hi) VALUES ($1, $2, $3) \
                 ON CONFLICT (id) DO UPDATE SET title_en = EXCLUDED.title_en, title_hi = EXCLUDED.title_hi",
            )
            .bind(remedy.id)
            .bind(remedy.title_en)
            .bind(remedy.title_hi)
            .execute(&mut *tx)
            .await?;
        }

        for herb in &catalog.herbs {
            sqlx::query(
                "INSERT INTO herbs (name_en, name_hi, use_en, use_hi) VALUES ($1, $2, $3, $4) \
                 ON CONFLICT (name_en) DO UPDATE SET \
                     name_hi = EXCLUDED.name_hi, use_en = EXCLUDED.use_en, use_hi = EXCLUDED.use_hi",
            )
            .bind(herb.name_en)
            .bind(herb.name_hi)
            .bind(herb.use_en)
            .bind(herb.use_hi)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

#[cfg(all(test, feature = "live-db-tests"))]
#[path = "pg_test.rs"]
mod tests;
