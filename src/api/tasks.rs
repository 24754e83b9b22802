//! Task JSON endpoints
//!
//! GET  /tasks             — JSON task list
//! POST /task              — create, 303 → /tasks
//! POST /task/{id}/delete  — delete, 404 when absent

use axum::Form;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::Redirect;
use serde::Deserialize;

use crate::db;
use crate::db::tasks::Task;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TaskForm {
    pub employee_id: Option<String>,
    pub task: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    Ok(Json(db::tasks::list(&state.pool).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<TaskForm>,
) -> AppResult<Redirect> {
    let employee_id: i64 = form
        .employee_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("employee_id is required"))?
        .parse()
        .map_err(|_| AppError::validation("employee_id must be an integer"))?;
    let task = match form.task.as_deref().map(str::trim) {
        Some(task) if !task.is_empty() => task,
        _ => return Err(AppError::validation("task must not be empty")),
    };

    let id = db::tasks::create(&state.pool, employee_id, task).await?;
    tracing::info!(id, employee_id, "task created");
    Ok(Redirect::to("/tasks"))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Redirect> {
    if db::tasks::delete(&state.pool, id).await? == 0 {
        return Err(AppError::not_found("task"));
    }
    Ok(Redirect::to("/tasks"))
}
