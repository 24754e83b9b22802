//! Canned recommendation provider
//!
//! Placeholder for a future rules engine: returns a fixed advisory list,
//! independent of the employee and of stored data. Keep it trivial.

pub fn for_employee(_employee_id: i64) -> Vec<&'static str> {
    vec![
        "Przeprowadź dodatkowe szkolenie baristów",
        "Zaktualizuj plakaty promocyjne na półce",
        "Omów wyniki sprzedaży w kolejnym 1on1",
    ]
}
