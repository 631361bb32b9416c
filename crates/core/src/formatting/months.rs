use crate::errors::{Result, ValidationError};

pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Spanish name of a month number. Out-of-range numbers yield an empty string.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("")
}

/// Like [`month_name`], but rejects months outside 1..=12.
pub fn month_name_strict(month: u32) -> Result<&'static str> {
    match month_name(month) {
        "" => Err(ValidationError::MonthOutOfRange(month).into()),
        name => Ok(name),
    }
}

/// "Marzo 2025"; an out-of-range month leaves only the year.
pub fn period_label(month: u32, year: i32) -> String {
    match month_name(month) {
        "" => year.to_string(),
        name => format!("{} {}", name, year),
    }
}
