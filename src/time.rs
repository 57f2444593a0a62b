//! # Epoch timestamp parsing
//!
//! The OEM feed timestamps its state vectors in a day-of-year form
//! (`2025-074T11:34:54.000Z`, UTC). This module converts those strings into
//! [`hifitime::Epoch`] values so epochs can be compared and subtracted. A
//! calendar-date form (`2025-03-15T11:34:54.000Z`) is accepted as well.
//!
//! Parse failures are per-record errors surfaced as
//! [`TrackerError::InvalidEpochFormat`]; callers decide whether to skip the
//! record or propagate.

use hifitime::{Epoch, TimeScale};

use crate::tracker_errors::TrackerError;

/// Cumulative day count at the start of each month (non-leap year).
const MONTH_START: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Convert a one-based day-of-year into a (month, day) pair.
///
/// Arguments
/// ---------
/// * `year`: the calendar year (drives the leap-day rule)
/// * `doy`: day of year, `1..=365` (`366` on leap years)
///
/// Return
/// ------
/// * `(month, day)` with both components one-based, or an
///   [`TrackerError::InvalidEpochFormat`] if `doy` is out of range.
fn month_day_from_doy(year: i32, doy: u16) -> Result<(u8, u8), TrackerError> {
    if doy == 0 || doy > days_in_year(year) {
        return Err(TrackerError::InvalidEpochFormat(format!(
            "day of year {doy} out of range for {year}"
        )));
    }

    let leap_shift = |month: usize| -> u16 {
        // February 29 pushes every later month boundary by one day.
        if is_leap_year(year) && month >= 2 {
            1
        } else {
            0
        }
    };

    let month = (1..12)
        .rev()
        .find(|&m| doy > MONTH_START[m] + leap_shift(m))
        .unwrap_or(0);

    let day = doy - MONTH_START[month] - leap_shift(month);
    Ok((month as u8 + 1, day as u8))
}

fn invalid(raw: &str) -> TrackerError {
    TrackerError::InvalidEpochFormat(raw.to_string())
}

/// Parse an OEM feed timestamp into an [`Epoch`] (UTC).
///
/// Accepted forms:
/// * `YYYY-DDDTHH:MM:SS.sssZ` — day-of-year, as emitted by the NASA feed
/// * `YYYY-MM-DDTHH:MM:SS.sssZ` — calendar date
///
/// The trailing `Z` is optional. Sub-second digits are kept to nanosecond
/// resolution (the feed itself carries milliseconds).
///
/// Return
/// ------
/// * The parsed [`Epoch`], or [`TrackerError::InvalidEpochFormat`] carrying
///   the offending string.
pub fn parse_epoch(raw: &str) -> Result<Epoch, TrackerError> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('Z').unwrap_or(trimmed);

    let (date_part, time_part) = trimmed.split_once('T').ok_or_else(|| invalid(raw))?;

    let date_fields: Vec<&str> = date_part.split('-').collect();
    let (year, month, day) = match date_fields.as_slice() {
        [year, doy] => {
            let year: i32 = year.parse().map_err(|_| invalid(raw))?;
            let doy: u16 = doy.parse().map_err(|_| invalid(raw))?;
            let (month, day) = month_day_from_doy(year, doy)?;
            (year, month, day)
        }
        [year, month, day] => {
            let year: i32 = year.parse().map_err(|_| invalid(raw))?;
            let month: u8 = month.parse().map_err(|_| invalid(raw))?;
            let day: u8 = day.parse().map_err(|_| invalid(raw))?;
            if month == 0 || month > 12 || day == 0 || day > days_in_month(year, month) {
                return Err(invalid(raw));
            }
            (year, month, day)
        }
        _ => return Err(invalid(raw)),
    };

    let mut clock = time_part.splitn(3, ':');
    let hour: u8 = clock
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| invalid(raw))?;
    let minute: u8 = clock
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| invalid(raw))?;
    let seconds: f64 = clock
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| invalid(raw))?;

    if hour > 23 || minute > 59 || !(0.0..60.0).contains(&seconds) {
        return Err(invalid(raw));
    }

    let second = seconds.trunc() as u8;
    let nanos = ((seconds - second as f64) * 1e9).round().min(999_999_999.0) as u32;

    Ok(Epoch::from_gregorian(
        year,
        month,
        day,
        hour,
        minute,
        second,
        nanos,
        TimeScale::UTC,
    ))
}
