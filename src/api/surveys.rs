//! Survey page and form handlers
//!
//! GET  /surveys?employee_id=   — list, optional employee filter
//! GET  /survey/{id}            — blank form for an employee
//! GET  /survey/{id}/details    — single survey, joined with employee
//! POST /survey                 — submit, validated before any write
//! POST /survey/{id}/delete     — delete, 404 when absent

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::db;
use crate::db::surveys::NewSurvey;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// The filter select submits `employee_id=` when "all" is chosen, so the
/// value arrives as a string and is parsed here
#[derive(Deserialize)]
pub struct ListQuery {
    pub employee_id: Option<String>,
}

impl ListQuery {
    fn filter(&self) -> AppResult<Option<i64>> {
        match self.employee_id.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| AppError::validation("employee_id must be an integer")),
            None => Ok(None),
        }
    }
}

/// Raw form payload; everything optional so validation happens here with a
/// structured error instead of an extractor rejection
#[derive(Deserialize)]
pub struct SurveyForm {
    pub employee_id: Option<String>,
    pub manager_name: Option<String>,
    pub week_date: Option<String>,
    pub avg_bill: Option<String>,
    pub target_reached: Option<String>,
    pub shelf_bar_sales: Option<String>,
    pub actions_done: Option<String>,
    pub development_goals: Option<String>,
    pub new_products_sales: Option<String>,
    pub foreign_orders: Option<String>,
    pub salary_costs: Option<String>,
    pub losses_analysis: Option<String>,
    pub promo_sales: Option<String>,
    pub team_status: Option<String>,
    pub weekly_meetings: Option<String>,
    pub staffing_needs: Option<String>,
    pub delivery_integrators: Option<String>,
    pub general_topics: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl SurveyForm {
    fn validate(self) -> AppResult<NewSurvey> {
        let employee_id: i64 = non_empty(self.employee_id)
            .ok_or_else(|| AppError::validation("employee_id is required"))?
            .parse()
            .map_err(|_| AppError::validation("employee_id must be an integer"))?;
        let manager_name = non_empty(self.manager_name)
            .ok_or_else(|| AppError::validation("manager_name must not be empty"))?;
        let week_date = non_empty(self.week_date)
            .ok_or_else(|| AppError::validation("week_date is required"))?;
        NaiveDate::parse_from_str(&week_date, "%Y-%m-%d").map_err(|_| {
            AppError::validation("week_date must be a calendar date (YYYY-MM-DD)")
        })?;

        Ok(NewSurvey {
            employee_id,
            manager_name,
            week_date,
            avg_bill: non_empty(self.avg_bill),
            target_reached: non_empty(self.target_reached),
            shelf_bar_sales: non_empty(self.shelf_bar_sales),
            actions_done: non_empty(self.actions_done),
            development_goals: non_empty(self.development_goals),
            new_products_sales: non_empty(self.new_products_sales),
            foreign_orders: non_empty(self.foreign_orders),
            salary_costs: non_empty(self.salary_costs),
            losses_analysis: non_empty(self.losses_analysis),
            promo_sales: non_empty(self.promo_sales),
            team_status: non_empty(self.team_status),
            weekly_meetings: non_empty(self.weekly_meetings),
            staffing_needs: non_empty(self.staffing_needs),
            delivery_integrators: non_empty(self.delivery_integrators),
            general_topics: non_empty(self.general_topics),
        })
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Html<String>> {
    let filter = query.filter()?;
    let surveys = db::surveys::list(&state.pool, filter).await?;
    let employees = db::employees::list(&state.pool).await?;
    Ok(views::surveys_page(&surveys, &employees, filter))
}

pub async fn new_form(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> AppResult<Html<String>> {
    let employee = db::employees::find(&state.pool, employee_id)
        .await?
        .ok_or_else(|| AppError::not_found("employee"))?;
    Ok(views::survey_form_page(&employee))
}

pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let survey = db::surveys::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("survey"))?;
    Ok(views::survey_details_page(&survey))
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<SurveyForm>,
) -> AppResult<Redirect> {
    let survey = form.validate()?;
    let id = db::surveys::create(&state.pool, &survey).await?;
    tracing::info!(id, employee_id = survey.employee_id, "survey submitted");
    Ok(Redirect::to("/surveys"))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Redirect> {
    if db::surveys::delete(&state.pool, id).await? == 0 {
        return Err(AppError::not_found("survey"));
    }
    tracing::info!(id, "survey deleted");
    Ok(Redirect::to("/surveys"))
}
