use chrono::NaiveDate;

/// Local calendar date, used for submission dates and sample events.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
