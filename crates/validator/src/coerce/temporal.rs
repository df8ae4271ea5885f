//! Date, date-time and time-of-day coercion.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use paramguard_value::Value;

use crate::config::ValidatorConfig;

pub(super) fn to_date(raw: &Value, format: Option<&str>, config: &ValidatorConfig) -> Option<Value> {
    match raw {
        Value::String(s) => {
            let s = s.trim();
            let date = match format {
                Some(format) => NaiveDate::parse_from_str(s, format).ok(),
                None => parse_date(s, config),
            };
            date.map(Value::Date)
        }
        Value::DateTime(dt) => Some(Value::Date(dt.date_naive())),
        _ => None,
    }
}

pub(super) fn to_datetime(
    raw: &Value,
    format: Option<&str>,
    config: &ValidatorConfig,
) -> Option<Value> {
    match raw {
        Value::String(s) => {
            let s = s.trim();
            let datetime = match format {
                Some(format) => parse_datetime_with(s, format),
                None => parse_datetime(s, config),
            };
            datetime.map(Value::DateTime)
        }
        Value::Date(date) => Some(Value::DateTime(midnight_utc(*date))),
        _ => None,
    }
}

pub(super) fn to_time(raw: &Value, format: Option<&str>, config: &ValidatorConfig) -> Option<Value> {
    match raw {
        Value::String(s) => {
            let s = s.trim();
            let time = match format {
                Some(format) => NaiveTime::parse_from_str(s, format).ok(),
                None => config
                    .time_formats
                    .iter()
                    .find_map(|format| NaiveTime::parse_from_str(s, format).ok())
                    .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.time())),
            };
            time.map(Value::Time)
        }
        Value::DateTime(dt) => Some(Value::Time(dt.time())),
        _ => None,
    }
}

fn parse_date(s: &str, config: &ValidatorConfig) -> Option<NaiveDate> {
    config
        .date_formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// A pattern with an offset specifier parses as-is; otherwise the result is
/// naive and taken as UTC. Date-only patterns land on midnight.
fn parse_datetime_with(s: &str, format: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(s, format)
        .ok()
        .or_else(|| naive_utc(NaiveDateTime::parse_from_str(s, format).ok()?))
        .or_else(|| Some(midnight_utc(NaiveDate::parse_from_str(s, format).ok()?)))
}

fn parse_datetime(s: &str, config: &ValidatorConfig) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_rfc2822(s))
        .ok()
        .or_else(|| {
            config
                .datetime_formats
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
                .and_then(naive_utc)
        })
        .or_else(|| parse_date(s, config).map(midnight_utc))
}

fn naive_utc(naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    Some(naive.and_utc().fixed_offset())
}

fn midnight_utc(date: NaiveDate) -> DateTime<FixedOffset> {
    date.and_time(NaiveTime::MIN).and_utc().fixed_offset()
}
