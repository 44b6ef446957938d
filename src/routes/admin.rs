//! Admin routes: login/logout and the submissions dashboard.

use axum::extract::{FromRef, Query, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

use crate::services::admin::{self, SubmissionFilter, SubmissionView};
use crate::state::AppState;
use crate::store::Submission;

pub(crate) const COOKIE_NAME: &str = "admin_session";

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

// =============================================================================
// ADMIN EXTRACTOR
// =============================================================================

/// A request carrying a live admin session cookie.
/// Use as a handler parameter to require admin access.
pub struct AdminUser;

impl<S> axum::extract::FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        if !app_state.admin.is_enabled() {
            return Err(error_body(StatusCode::SERVICE_UNAVAILABLE, "Admin access is not configured"));
        }

        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() || !app_state.sessions.validate(token).await {
            return Err(error_body(StatusCode::UNAUTHORIZED, "Not signed in"));
        }

        Ok(Self)
    }
}

// =============================================================================
// LOGIN / LOGOUT
// =============================================================================

#[derive(Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub password: String,
}

fn session_cookie(state: &AppState, token: String) -> Cookie<'static> {
    let max_age = time::Duration::try_from(state.sessions.ttl()).unwrap_or(time::Duration::hours(8));
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(state.cookie_secure)
        .max_age(max_age)
        .build()
}

/// `POST /api/admin/login`: exchange the admin password for a session cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(body): Json<LoginBody>) -> Response {
    if !state.admin.is_enabled() {
        return error_body(StatusCode::SERVICE_UNAVAILABLE, "Admin access is not configured");
    }
    if !state.admin.verify(&body.password) {
        tracing::warn!("admin login rejected");
        return error_body(StatusCode::UNAUTHORIZED, "Invalid password");
    }

    let token = state.sessions.create().await;
    tracing::info!("admin session created");
    let jar = jar.add(session_cookie(&state, token));
    (jar, Json(serde_json::json!({ "ok": true }))).into_response()
}

/// `POST /api/admin/logout`: revoke the session and clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(token) = jar.get(COOKIE_NAME).map(Cookie::value) {
        state.sessions.revoke(token).await;
    }
    let removal = Cookie::build((COOKIE_NAME, "")).path("/").build();
    (jar.remove(removal), Json(serde_json::json!({ "ok": true }))).into_response()
}

// =============================================================================
// SUBMISSIONS
// =============================================================================

#[derive(Serialize)]
pub struct SubmissionsResponse {
    /// Rows stored in total, before filtering.
    pub total: usize,
    pub count: usize,
    pub submissions: Vec<SubmissionView>,
}

async fn filtered_submissions(state: &AppState, filter: &SubmissionFilter) -> Result<(usize, Vec<Submission>), Response> {
    let Some(store) = state.store() else {
        return Err(error_body(StatusCode::SERVICE_UNAVAILABLE, "No submission store configured"));
    };
    let rows = store.list_submissions().await.map_err(|e| {
        tracing::error!(error = %e, backend = store.backend(), "failed to list submissions");
        error_body(StatusCode::BAD_GATEWAY, "Failed to fetch submissions")
    })?;
    let total = rows.len();
    Ok((total, filter.apply(rows)))
}

/// `GET /api/admin/submissions`: filtered submissions, newest first.
pub async fn list_submissions(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(filter): Query<SubmissionFilter>,
) -> Result<Json<SubmissionsResponse>, Response> {
    let (total, rows) = filtered_submissions(&state, &filter).await?;
    Ok(Json(SubmissionsResponse {
        total,
        count: rows.len(),
        submissions: rows.into_iter().map(SubmissionView::from).collect(),
    }))
}

/// `GET /api/admin/submissions.csv`: CSV download of the filtered rows.
/// Answers 204 when nothing matches.
pub async fn export_csv(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(filter): Query<SubmissionFilter>,
) -> Result<Response, Response> {
    let (_, rows) = filtered_submissions(&state, &filter).await?;
    if rows.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let body = admin::render_csv(&rows);
    let filename = admin::export_filename(admin::today());

    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8"),
            (CONTENT_DISPOSITION, &format!("attachment; filename=\"{filename}\"")),
        ],
        body,
    )
        .into_response())
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
