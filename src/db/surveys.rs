//! Survey storage
//!
//! Surveys are written once per submission and never updated in place.
//! Reads join the owning employee with LEFT JOIN semantics: a survey whose
//! employee was deleted still appears, with `employee_name` null.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::util::now_millis;

/// A stored survey joined with the owning employee's name
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Survey {
    pub id: i64,
    pub employee_id: Option<i64>,
    pub employee_name: Option<String>,
    pub manager_name: String,
    pub week_date: String,
    pub created_at: i64,
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

/// A validated survey submission, ready to insert
#[derive(Debug, Clone, Default)]
pub struct NewSurvey {
    pub employee_id: i64,
    pub manager_name: String,
    pub week_date: String,
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

const JOINED_SELECT: &str = "SELECT s.*, e.name AS employee_name
     FROM surveys s
     LEFT JOIN employees e ON s.employee_id = e.id";

/// List surveys most-recent-first, optionally filtered by employee
pub async fn list(
    pool: &SqlitePool,
    employee_id: Option<i64>,
) -> Result<Vec<Survey>, sqlx::Error> {
    match employee_id {
        Some(id) => {
            sqlx::query_as(&format!(
                "{JOINED_SELECT} WHERE s.employee_id = ? ORDER BY s.created_at DESC, s.id DESC"
            ))
            .bind(id)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as(&format!(
                "{JOINED_SELECT} ORDER BY s.created_at DESC, s.id DESC"
            ))
            .fetch_all(pool)
            .await
        }
    }
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Survey>, sqlx::Error> {
    sqlx::query_as(&format!("{JOINED_SELECT} WHERE s.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a survey and return its surrogate id
pub async fn create(pool: &SqlitePool, survey: &NewSurvey) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO surveys (
            employee_id, manager_name, week_date, created_at,
            avg_bill, target_reached, shelf_bar_sales, actions_done,
            development_goals, new_products_sales, foreign_orders, salary_costs,
            losses_analysis, promo_sales, team_status, weekly_meetings,
            staffing_needs, delivery_integrators, general_topics
        ) VALUES (?,?,?,?,?,?,?,?,?,?,?,?,?,?,?,?,?,?,?)",
    )
    .bind(survey.employee_id)
    .bind(&survey.manager_name)
    .bind(&survey.week_date)
    .bind(now_millis())
    .bind(&survey.avg_bill)
    .bind(&survey.target_reached)
    .bind(&survey.shelf_bar_sales)
    .bind(&survey.actions_done)
    .bind(&survey.development_goals)
    .bind(&survey.new_products_sales)
    .bind(&survey.foreign_orders)
    .bind(&survey.salary_costs)
    .bind(&survey.losses_analysis)
    .bind(&survey.promo_sales)
    .bind(&survey.team_status)
    .bind(&survey.weekly_meetings)
    .bind(&survey.staffing_needs)
    .bind(&survey.delivery_integrators)
    .bind(&survey.general_topics)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Delete a survey; returns rows affected
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM surveys WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM surveys")
        .fetch_one(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{employees, test_pool};

    fn sample(employee_id: i64) -> NewSurvey {
        NewSurvey {
            employee_id,
            manager_name: "Jan".into(),
            week_date: "2024-01-08".into(),
            avg_bill: Some("120".into()),
            target_reached: Some("yes".into()),
            team_status: Some("stable".into()),
            ..NewSurvey::default()
        }
    }

    #[tokio::test]
    async fn filter_returns_only_matching_employee() {
        let pool = test_pool().await;
        let anna = employees::create(&pool, "Anna").await.unwrap();
        let jan = employees::create(&pool, "Jan").await.unwrap();
        create(&pool, &sample(anna)).await.unwrap();
        create(&pool, &sample(jan)).await.unwrap();

        let filtered = list(&pool, Some(anna)).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].employee_id, Some(anna));

        let all = list(&pool, None).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn deleting_employee_orphans_survey_with_null_name() {
        let pool = test_pool().await;
        let anna = employees::create(&pool, "Anna Kowalska").await.unwrap();
        create(&pool, &sample(anna)).await.unwrap();

        let joined = list(&pool, Some(anna)).await.unwrap();
        assert_eq!(joined[0].employee_name.as_deref(), Some("Anna Kowalska"));
        assert_eq!(joined[0].avg_bill.as_deref(), Some("120"));

        employees::delete(&pool, anna).await.unwrap();

        let orphaned = list(&pool, Some(anna)).await.unwrap();
        assert_eq!(orphaned.len(), 1);
        assert_eq!(orphaned[0].employee_name, None);
    }

    #[tokio::test]
    async fn list_is_most_recent_first() {
        let pool = test_pool().await;
        let id = employees::create(&pool, "Anna").await.unwrap();
        let first = create(&pool, &sample(id)).await.unwrap();
        let second = create(&pool, &sample(id)).await.unwrap();
        let all = list(&pool, None).await.unwrap();
        assert_eq!(all[0].id, second);
        assert_eq!(all[1].id, first);
    }

    #[tokio::test]
    async fn find_and_delete_by_id() {
        let pool = test_pool().await;
        let anna = employees::create(&pool, "Anna").await.unwrap();
        let id = create(&pool, &sample(anna)).await.unwrap();

        let survey = find(&pool, id).await.unwrap().expect("survey exists");
        assert_eq!(survey.manager_name, "Jan");
        assert_eq!(survey.week_date, "2024-01-08");

        assert_eq!(delete(&pool, id).await.unwrap(), 1);
        assert!(find(&pool, id).await.unwrap().is_none());
        assert_eq!(delete(&pool, id).await.unwrap(), 0);
    }
}
