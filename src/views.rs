//! Server-rendered HTML pages
//!
//! Deliberately thin: plain string building over the typed records coming
//! out of the db layer. No template engine, no client-side state.

use axum::response::Html;

use crate::db::employees::Employee;
use crate::db::surveys::Survey;

/// Narrative survey fields: (column name, form label)
const NARRATIVE_FIELDS: [(&str, &str); 15] = [
    ("avg_bill", "Średni rachunek"),
    ("target_reached", "Realizacja targetu"),
    ("shelf_bar_sales", "Sprzedaż z półki barowej"),
    ("actions_done", "Zrealizowane akcje"),
    ("development_goals", "Cele rozwojowe"),
    ("new_products_sales", "Sprzedaż nowości"),
    ("foreign_orders", "Zamówienia zagraniczne"),
    ("salary_costs", "Koszty wynagrodzeń"),
    ("losses_analysis", "Analiza strat"),
    ("promo_sales", "Sprzedaż promocyjna"),
    ("team_status", "Status zespołu"),
    ("weekly_meetings", "Spotkania tygodniowe"),
    ("staffing_needs", "Potrzeby kadrowe"),
    ("delivery_integrators", "Integratorzy dostaw"),
    ("general_topics", "Tematy ogólne"),
];

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"pl\">\n<head><meta charset=\"utf-8\">\
         <title>{title} — Team Manager</title></head>\n<body>\n\
         <nav><a href=\"/\">Start</a> | <a href=\"/employees\">Pracownicy</a> | \
         <a href=\"/surveys\">Ankiety</a></nav>\n<h1>{title}</h1>\n{body}\n</body>\n</html>",
        title = escape(title),
    ))
}

pub fn overview_page(employees: &[Employee]) -> Html<String> {
    let mut body = String::from("<ul>");
    for e in employees {
        body.push_str(&format!(
            "<li>{} — <a href=\"/survey/{}\">nowa ankieta</a></li>",
            escape(&e.name),
            e.id
        ));
    }
    body.push_str("</ul>");
    layout("Przegląd zespołu", &body)
}

pub fn employees_page(employees: &[Employee]) -> Html<String> {
    let mut body = String::from(
        "<form method=\"post\" action=\"/employee\">\
         <input name=\"name\" placeholder=\"Imię i nazwisko\">\
         <button type=\"submit\">Dodaj</button></form>\n<table>",
    );
    for e in employees {
        body.push_str(&format!(
            "<tr><td>{id}</td><td>{name}</td>\
             <td><form method=\"post\" action=\"/employee/{id}/delete\">\
             <button type=\"submit\">Usuń</button></form></td></tr>",
            id = e.id,
            name = escape(&e.name),
        ));
    }
    body.push_str("</table>");
    layout("Zarządzanie pracownikami", &body)
}

pub fn surveys_page(
    surveys: &[Survey],
    employees: &[Employee],
    filter: Option<i64>,
) -> Html<String> {
    let mut body = String::from(
        "<form method=\"get\" action=\"/surveys\"><select name=\"employee_id\">\
         <option value=\"\">— wszyscy —</option>",
    );
    for e in employees {
        let selected = if filter == Some(e.id) { " selected" } else { "" };
        body.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>",
            e.id,
            escape(&e.name)
        ));
    }
    body.push_str("</select><button type=\"submit\">Filtruj</button></form>\n<table>");
    for s in surveys {
        let employee = s.employee_name.as_deref().unwrap_or("(usunięty)");
        body.push_str(&format!(
            "<tr><td>{week}</td><td>{employee}</td><td>{manager}</td>\
             <td><a href=\"/survey/{id}/details\">szczegóły</a></td>\
             <td><form method=\"post\" action=\"/survey/{id}/delete\">\
             <button type=\"submit\">Usuń</button></form></td></tr>",
            week = escape(&s.week_date),
            employee = escape(employee),
            manager = escape(&s.manager_name),
            id = s.id,
        ));
    }
    body.push_str("</table>");
    layout("Ankiety tygodniowe", &body)
}

pub fn survey_form_page(employee: &Employee) -> Html<String> {
    let mut body = format!(
        "<form method=\"post\" action=\"/survey\">\
         <input type=\"hidden\" name=\"employee_id\" value=\"{}\">\
         <label>Manager <input name=\"manager_name\" required></label><br>\
         <label>Tydzień <input name=\"week_date\" type=\"date\" required></label><br>",
        employee.id
    );
    for (name, label) in NARRATIVE_FIELDS {
        body.push_str(&format!(
            "<label>{label} <textarea name=\"{name}\"></textarea></label><br>"
        ));
    }
    body.push_str("<button type=\"submit\">Zapisz ankietę</button></form>");
    layout(&format!("Ankieta: {}", employee.name), &body)
}

pub fn survey_details_page(survey: &Survey) -> Html<String> {
    let employee = survey.employee_name.as_deref().unwrap_or("(usunięty)");
    let mut body = format!(
        "<dl><dt>Pracownik</dt><dd>{}</dd>\
         <dt>Manager</dt><dd>{}</dd>\
         <dt>Tydzień</dt><dd>{}</dd>",
        escape(employee),
        escape(&survey.manager_name),
        escape(&survey.week_date),
    );
    let values = [
        &survey.avg_bill,
        &survey.target_reached,
        &survey.shelf_bar_sales,
        &survey.actions_done,
        &survey.development_goals,
        &survey.new_products_sales,
        &survey.foreign_orders,
        &survey.salary_costs,
        &survey.losses_analysis,
        &survey.promo_sales,
        &survey.team_status,
        &survey.weekly_meetings,
        &survey.staffing_needs,
        &survey.delivery_integrators,
        &survey.general_topics,
    ];
    for ((_, label), value) in NARRATIVE_FIELDS.iter().zip(values) {
        if let Some(value) = value {
            body.push_str(&format!("<dt>{label}</dt><dd>{}</dd>", escape(value)));
        }
    }
    body.push_str("</dl>");
    layout(&format!("Ankieta #{}", survey.id), &body)
}

pub fn login_page() -> Html<String> {
    layout(
        "Logowanie",
        "<p>Dostęp wymaga danych HTTP Basic. Przeglądarka zapyta o nie przy \
         pierwszym wejściu na chronioną stronę.</p>\
         <p><a href=\"/\">Przejdź do aplikacji</a></p>",
    )
}
