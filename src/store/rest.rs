//! Hosted PostgREST backend (Supabase-style `/rest/v1` endpoints).
//!
//! Every request carries the project key both as `apikey` and as a bearer
//! token. Responses are read as text first so error bodies survive into
//! `StoreError::Response`.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{CatalogRows, DiseaseOption, HealthStore, NewSubmission, StoreError, Submission};

const REST_PREFIX: &str = "/rest/v1";
const CONNECT_TIMEOUT_SECS: u64 = 10;

const SUBMISSIONS_TABLE: &str = "health_submissions";
const DISEASES_TABLE: &str = "diseases";
const REMEDIES_TABLE: &str = "remedies";
const HERBS_TABLE: &str = "herbs";

pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(base_url: &str, api_key: String, timeout_secs: u64) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| StoreError::Http(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string(), api_key })
    }

    async fn get_json<T: DeserializeOwned>(&self, table: &str, query: &str) -> Result<T, StoreError> {
        let request = self.http.get(table_url(&self.base_url, table, query));
        let text = self.send(request).await?;
        decode(&text)
    }

    async fn post_json(
        &self,
        table: &str,
        query: &str,
        prefer: &str,
        body: &impl Serialize,
    ) -> Result<String, StoreError> {
        let request = self
            .http
            .post(table_url(&self.base_url, table, query))
            .header("Prefer", prefer)
            .json(body);
        self.send(request).await
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, StoreError> {
        let response = request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;
        if !status.is_success() {
            return Err(StoreError::Response { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

pub(crate) fn table_url(base_url: &str, table: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{base_url}{REST_PREFIX}/{table}")
    } else {
        format!("{base_url}{REST_PREFIX}/{table}?{query}")
    }
}

pub(crate) fn decode<T: DeserializeOwned>(text: &str) -> Result<T, StoreError> {
    serde_json::from_str(text).map_err(|e| StoreError::Decode(e.to_string()))
}

/// `return=representation` answers with an array holding the inserted row.
pub(crate) fn first_row(text: &str) -> Result<Submission, StoreError> {
    let mut rows: Vec<Submission> = decode(text)?;
    if rows.is_empty() {
        return Err(StoreError::Decode("insert returned no rows".into()));
    }
    Ok(rows.swap_remove(0))
}

#[async_trait::async_trait]
impl HealthStore for RestStore {
    fn backend(&self) -> &'static str {
        "rest"
    }

    async fn insert_submission(&self, new: &NewSubmission) -> Result<Submission, StoreError> {
        let text = self
            .post_json(SUBMISSIONS_TABLE, "", "return=representation", &[new])
            .await?;
        first_row(&text)
    }

    async fn list_submissions(&self) -> Result<Vec<Submission>, StoreError> {
        self.get_json(SUBMISSIONS_TABLE, "select=*&order=created_at.desc")
            .await
    }

    async fn list_disease_options(&self) -> Result<Vec<DiseaseOption>, StoreError> {
        self.get_json(DISEASES_TABLE, "select=id,name_en,name_hi&order=position.asc")
            .await
    }

    async fn seed_catalog(&self, catalog: &CatalogRows) -> Result<(), StoreError> {
        const MERGE: &str = "resolution=merge-duplicates,return=minimal";
        self.post_json(DISEASES_TABLE, "on_conflict=id", MERGE, &catalog.diseases)
            .await?;
        self.post_json(REMEDIES_TABLE, "on_conflict=id", MERGE, &catalog.remedies)
            .await?;
        self.post_json(HERBS_TABLE, "on_conflict=name_en", MERGE, &catalog.herbs)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "rest_test.rs"]
mod tests;
