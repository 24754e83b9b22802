//! Employee page and form handlers
//!
//! GET  /           — team overview
//! GET  /employees  — management page
//! POST /employee            — create, 303 → /employees
//! POST /employee/{id}        — rename, 404 when absent
//! POST /employee/{id}/delete — delete, 404 when absent

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

#[derive(Deserialize)]
pub struct EmployeeForm {
    pub name: Option<String>,
}

impl EmployeeForm {
    /// Trimmed, non-empty name or a validation error
    fn name(&self) -> AppResult<&str> {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(AppError::validation("name must not be empty")),
        }
    }
}

pub async fn overview(State(state): State<AppState>) -> AppResult<Html<String>> {
    let employees = db::employees::list(&state.pool).await?;
    Ok(views::overview_page(&employees))
}

pub async fn manage(State(state): State<AppState>) -> AppResult<Html<String>> {
    let employees = db::employees::list(&state.pool).await?;
    Ok(views::employees_page(&employees))
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<EmployeeForm>,
) -> AppResult<Redirect> {
    let name = form.name()?;
    let id = db::employees::create(&state.pool, name).await?;
    tracing::info!(id, "employee created");
    Ok(Redirect::to("/employees"))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<EmployeeForm>,
) -> AppResult<Redirect> {
    let name = form.name()?;
    if db::employees::update(&state.pool, id, name).await? == 0 {
        return Err(AppError::not_found("employee"));
    }
    Ok(Redirect::to("/employees"))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Redirect> {
    if db::employees::delete(&state.pool, id).await? == 0 {
        return Err(AppError::not_found("employee"));
    }
    tracing::info!(id, "employee deleted");
    Ok(Redirect::to("/employees"))
}
