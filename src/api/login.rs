use axum::response::Html;

use crate::views;

pub async fn login_page() -> Html<String> {
    views::login_page()
}
