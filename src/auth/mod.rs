//! HTTP Basic auth against the users table
//!
//! Passwords are stored as salted argon2 hashes. A missing or invalid
//! `Authorization` header yields 401 with a `WWW-Authenticate: Basic`
//! challenge (via `AppError`), never a redirect.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use base64::Engine;

use crate::db;
use crate::error::AppError;
use crate::state::AppState;

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::password_hash::SaltString;
    use argon2::password_hash::rand_core::OsRng;
    use argon2::{Argon2, PasswordHasher};
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Middleware enforcing Basic auth on everything behind it.
/// Pass-through when auth is not configured.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !state.auth_enabled {
        return Ok(next.run(request).await);
    }

    let (username, password) = parse_basic_header(&request).ok_or_else(AppError::unauthorized)?;

    let user = db::users::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(AppError::unauthorized)?;

    if !verify_password(&password, &user.password_hash) {
        tracing::warn!(username = %username, "rejected basic auth attempt");
        return Err(AppError::unauthorized());
    }

    Ok(next.run(request).await)
}

fn parse_basic_header(request: &Request) -> Option<(String, String)> {
    let header = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}
