// ==========================================
// Sorare MLB Optimizer - game week derivation
// ==========================================
// Weekly contests run Friday through Thursday. The week label is
// "<start>_to_<end>" in ISO dates; daily contests are labeled by the
// calendar date alone.
// ==========================================

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

/// Game week containing `date`: the most recent Friday (inclusive)
/// through the following Thursday.
pub fn game_week_for(date: NaiveDate) -> String {
    let days_since_friday = (date.weekday().num_days_from_monday() + 7
        - Weekday::Fri.num_days_from_monday())
        % 7;
    let start = date - Duration::days(days_since_friday as i64);
    let end = start + Duration::days(6);
    format!("{}_to_{}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"))
}

/// Label for today's weekly game week.
pub fn current_game_week() -> String {
    game_week_for(Local::now().date_naive())
}

/// Daily contest label for `date`.
pub fn daily_game_week_for(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Label for today's daily contests.
pub fn current_daily_game_week() -> String {
    daily_game_week_for(Local::now().date_naive())
}
