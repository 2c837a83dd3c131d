use chrono::{Datelike, Days, Months, NaiveDate};

/// Format a date in the canonical `YYYY-MM-DD` form.
pub(crate) fn format_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Parse a `YYYY-MM-DD` string.
///
/// The first three `-`separated fields are read as integers and anything
/// after them is ignored. Months and days out of range roll over into the
/// neighbouring month or year, so `2024-02-30` is the 1st of March. Only
/// missing or non-numeric fields make the string invalid.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('-').map(|part| part.trim().parse::<i64>().ok());
    let (Some(Some(year)), Some(Some(month)), Some(Some(day))) =
        (parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    let january = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, 1, 1)?;
    let month_offset = month.checked_sub(1)?;
    let months = Months::new(u32::try_from(month_offset.unsigned_abs()).ok()?);
    let first = if month_offset >= 0 {
        january.checked_add_months(months)?
    } else {
        january.checked_sub_months(months)?
    };

    let day_offset = day.checked_sub(1)?;
    let days = Days::new(day_offset.unsigned_abs());
    if day_offset >= 0 {
        first.checked_add_days(days)
    } else {
        first.checked_sub_days(days)
    }
}
