use axum::Json;
use axum::extract::Path;

use crate::recommendations;

pub async fn for_employee(Path(employee_id): Path<i64>) -> Json<Vec<&'static str>> {
    Json(recommendations::for_employee(employee_id))
}
