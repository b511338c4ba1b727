//! Spanish long-form dates for document headers.

use time::OffsetDateTime;

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Format a date the way the documents expect: "12 de agosto de 2026".
pub fn format_date_es(date: time::Date) -> String {
    let month = MONTHS_ES[date.month() as usize - 1];
    format!("{} de {} de {}", date.day(), month, date.year())
}

/// Today's date in document form. Only consulted when the caller did not
/// supply an explicit date override.
pub fn today_es() -> String {
    format_date_es(OffsetDateTime::now_utc().date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Date, Month};

    #[test]
    fn test_format_date_es() {
        let date = Date::from_calendar_date(2026, Month::August, 25).unwrap();
        assert_eq!(format_date_es(date), "25 de agosto de 2026");
    }

    #[test]
    fn test_single_digit_day_not_padded() {
        let date = Date::from_calendar_date(2026, Month::January, 3).unwrap();
        assert_eq!(format_date_es(date), "3 de enero de 2026");
    }

    #[test]
    fn test_today_es_is_nonempty() {
        assert!(today_es().contains(" de "));
    }
}
