//! Admin dashboard support: password gate, sessions, filtering and CSV export.
//!
//! ARCHITECTURE
//! ============
//! The password lives only in server config and is held as a SHA-256 digest.
//! A successful login mints a random token kept in an in-memory map with an
//! expiry; the token travels in an http-only cookie.
//!
//! TRADE-OFFS
//! ==========
//! Sessions do not survive a restart.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::content;
use crate::store::Submission;

pub const ALL_DISEASES: &str = "all";
const SESSION_PURGE_INTERVAL_SECS: u64 = 600;
const CSV_HEADER: &str = "Date,Name,Age,Gender,Email,Disease,Symptoms,Lifestyle";

// =============================================================================
// PASSWORD GATE
// =============================================================================

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

/// Admin password check. `None` means admin access is switched off.
#[derive(Clone)]
pub struct AdminGate {
    password_digest: Option<[u8; 32]>,
}

impl AdminGate {
    #[must_use]
    pub fn new(password: Option<&str>) -> Self {
        Self { password_digest: password.map(digest) }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.password_digest.is_some()
    }

    /// Compare digests so the candidate length does not short-circuit.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        let Some(expected) = &self.password_digest else {
            return false;
        };
        let actual = digest(candidate);
        expected
            .iter()
            .zip(actual.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

// =============================================================================
// SESSIONS
// =============================================================================

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Live admin sessions keyed by token.
#[derive(Clone)]
pub struct AdminSessions {
    ttl: Duration,
    tokens: Arc<RwLock<HashMap<String, Instant>>>,
}

impl AdminSessions {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, tokens: Arc::new(RwLock::new(HashMap::new())) }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn create(&self) -> String {
        self.create_at(Instant::now()).await
    }

    pub(crate) async fn create_at(&self, now: Instant) -> String {
        let token = generate_token();
        self.tokens
            .write()
            .await
            .insert(token.clone(), now + self.ttl);
        token
    }

    pub async fn validate(&self, token: &str) -> bool {
        self.validate_at(token, Instant::now()).await
    }

    /// Expired tokens are removed on lookup.
    pub(crate) async fn validate_at(&self, token: &str, now: Instant) -> bool {
        let expires_at = self.tokens.read().await.get(token).copied();
        match expires_at {
            Some(at) if at > now => true,
            Some(_) => {
                self.tokens.write().await.remove(token);
                false
            }
            None => false,
        }
    }

    pub async fn revoke(&self, token: &str) {
        self.tokens.write().await.remove(token);
    }

    /// Drop every expired token and return how many were removed.
    pub async fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now()).await
    }

    pub(crate) async fn purge_expired_at(&self, now: Instant) -> usize {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, expires_at| *expires_at > now);
        before - tokens.len()
    }
}

/// Periodically drop expired admin sessions.
pub fn spawn_session_purge_task(sessions: AdminSessions) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(SESSION_PURGE_INTERVAL_SECS)).await;
            let removed = sessions.purge_expired().await;
            if removed > 0 {
                tracing::debug!(removed, "expired admin sessions purged");
            }
        }
    })
}

// =============================================================================
// FILTERING
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionFilter {
    #[serde(default)]
    pub disease: Option<String>,
    #[serde(default, rename = "q")]
    pub search: Option<String>,
}

impl SubmissionFilter {
    #[must_use]
    pub fn matches(&self, row: &Submission) -> bool {
        let disease_ok = match self.disease.as_deref().map(str::trim) {
            None | Some("" | ALL_DISEASES) => true,
            Some(id) => row.existing_disease.as_deref() == Some(id),
        };
        if !disease_ok {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                row.full_name.to_lowercase().contains(&term) || row.email.to_lowercase().contains(&term)
            }
        }
    }

    #[must_use]
    pub fn apply(&self, rows: Vec<Submission>) -> Vec<Submission> {
        rows.into_iter().filter(|row| self.matches(row)).collect()
    }
}

/// Display name for a stored disease id.
#[must_use]
pub fn disease_label(id: Option<&str>) -> String {
    match id {
        Some(id) if !id.is_empty() => content::find_disease(id)
            .map_or_else(|| id.to_string(), |d| d.name.en.to_string()),
        _ => "None".to_string(),
    }
}

/// A submission row as shown on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionView {
    #[serde(flatten)]
    pub submission: Submission,
    pub disease_label: String,
}

impl From<Submission> for SubmissionView {
    fn from(submission: Submission) -> Self {
        let disease_label = disease_label(submission.existing_disease.as_deref());
        Self { submission, disease_label }
    }
}

// =============================================================================
// CSV EXPORT
// =============================================================================

fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_line(row: &Submission) -> String {
    [
        format_date(row.created_at.date()),
        csv_field(&row.full_name),
        row.age.to_string(),
        csv_field(&row.gender),
        csv_field(&row.email),
        csv_field(row.existing_disease.as_deref().unwrap_or_default()),
        csv_field(&row.symptoms.replace(',', ";")),
        csv_field(&row.lifestyle),
    ]
    .join(",")
}

/// Header line followed by one line per row, without line terminators.
fn csv_lines(rows: &[Submission]) -> impl Iterator<Item = String> + '_ {
    std::iter::once(CSV_HEADER.to_string()).chain(rows.iter().map(csv_line))
}

/// Full CSV document: lines joined with `\n`, no trailing newline.
#[must_use]
pub fn render_csv(rows: &[Submission]) -> String {
    csv_lines(rows).collect::<Vec<_>>().join("\n")
}

#[must_use]
pub fn export_filename(date: Date) -> String {
    format!("health_submissions_{}.csv", format_date(date))
}

#[must_use]
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
