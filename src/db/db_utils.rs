//! Column conversion helpers shared by the row mappers.

use crate::errors::AppError;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::types::Type;

pub const DATE_FMT: &str = "%Y-%m-%d";
/// Whole seconds are written as `HH:MM:SS`; a fraction is appended only when present.
pub const TIME_FMT: &str = "%H:%M:%S%.f";

/// Wrap a domain error so it can travel through `query_map`.
pub(crate) fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(err))
}

pub(crate) fn parse_date(col: usize, s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT)
        .map_err(|_| conversion_error(col, AppError::InvalidDate(s.to_string())))
}

pub(crate) fn parse_time(col: usize, s: &str) -> rusqlite::Result<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_FMT)
        .map_err(|_| conversion_error(col, AppError::InvalidTime(s.to_string())))
}

pub(crate) fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

pub(crate) fn format_time(t: &NaiveTime) -> String {
    t.format(TIME_FMT).to_string()
}

/// Unwrap a domain error previously boxed by [`conversion_error`].
pub(crate) fn lift(err: rusqlite::Error) -> AppError {
    match err {
        rusqlite::Error::FromSqlConversionFailure(_, _, inner) => match inner.downcast::<AppError>()
        {
            Ok(app) => *app,
            Err(other) => AppError::Serialization(other.to_string()),
        },
        other => AppError::Db(other),
    }
}
