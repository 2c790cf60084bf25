// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar conversion in both directions.
//!
//! - [`convert`] breaks epoch seconds down into [`CalendarFields`] under a
//!   [`Zone`] (the `gmtime` / `localtime` direction).
//! - [`CivilComponents`] carries a broken-down wall-clock reading and
//!   [`resolve_local`] turns it into epoch seconds under the local rule (the
//!   `mktime` direction), normalizing out-of-range components on the way.
//!
//! ```
//! use civtime::{calendar, FixedOffset, Zone};
//!
//! let fields = calendar::convert::<FixedOffset<0>>(946_684_800, Zone::Utc).unwrap();
//! assert_eq!((fields.year, fields.month, fields.day), (2000, 1, 1));
//! assert_eq!(fields.weekday, 6); // Saturday
//! ```

use super::error::TimeError;
use super::zone::{LocalZone, Zone, ZoneOffset};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

// ═══════════════════════════════════════════════════════════════════════════
// Broken-down fields
// ═══════════════════════════════════════════════════════════════════════════

/// Human-oriented decomposition of an instant under one zone.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CalendarFields {
    pub year: i32,
    /// 1 = January.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Days since Sunday, `0..=6`.
    pub weekday: u32,
    /// Days since 1 January, `0..=365`.
    pub yearday: u32,
    pub is_dst: bool,
}

impl CalendarFields {
    fn from_naive(wall: &NaiveDateTime, is_dst: bool) -> Self {
        Self {
            year: wall.year(),
            month: wall.month(),
            day: wall.day(),
            hour: wall.hour(),
            minute: wall.minute(),
            second: wall.second(),
            weekday: wall.weekday().num_days_from_sunday(),
            yearday: wall.ordinal0(),
            is_dst,
        }
    }
}

/// Derive calendar fields for `seconds` since the epoch.
///
/// `Zone::Utc` applies no offset; `Zone::Local` asks `L` for the offset and DST
/// flag in effect at that instant. Fails when the offset is unavailable or the
/// shifted value falls outside the representable calendar range.
pub fn convert<L: LocalZone>(seconds: i64, zone: Zone) -> Result<CalendarFields, TimeError> {
    let offset = match zone {
        Zone::Utc => ZoneOffset::UTC,
        Zone::Local => L::offset_at(seconds).ok_or_else(|| {
            TimeError::invalid(format!("no local offset for {seconds} s since the epoch"))
        })?,
    };
    let wall = seconds
        .checked_add(i64::from(offset.utc_offset))
        .and_then(|shifted| DateTime::from_timestamp(shifted, 0))
        .ok_or_else(|| {
            TimeError::invalid(format!("{seconds} s since the epoch is out of range"))
        })?;
    Ok(CalendarFields::from_naive(&wall.naive_utc(), offset.is_dst))
}

// ═══════════════════════════════════════════════════════════════════════════
// Civil components → epoch
// ═══════════════════════════════════════════════════════════════════════════

/// A wall-clock reading as supplied by a caller, before flooring.
///
/// Components are floats because callers may pass any numeric value; each one
/// is floored before use. Out-of-range values roll over into the next larger
/// unit (month 13 is January of the following year, day 0 is the last day of
/// the previous month, and so on). `microsecond` is carried but not used for
/// the epoch computation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CivilComponents {
    pub year: f64,
    pub month: f64,
    pub day: f64,
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
    pub microsecond: f64,
}

impl CivilComponents {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        year: f64,
        month: f64,
        day: f64,
        hour: f64,
        minute: f64,
        second: f64,
        microsecond: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
        }
    }

    /// Midnight on 1 January of `year`; override fields with struct update syntax.
    ///
    /// ```
    /// use civtime::CivilComponents;
    ///
    /// let c = CivilComponents { month: 6.0, day: 15.0, ..CivilComponents::year(2024.0) };
    /// assert_eq!(c.hour, 0.0);
    /// ```
    pub const fn year(year: f64) -> Self {
        Self::new(year, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Floor every component and normalize into a calendar date-time.
    pub fn to_naive(&self) -> Result<NaiveDateTime, TimeError> {
        let year = floor_component(self.year, "year")?;
        let month = floor_component(self.month, "month")? - 1;
        let day = floor_component(self.day, "day")? - 1;
        let hour = floor_component(self.hour, "hour")?;
        let minute = floor_component(self.minute, "minute")?;
        let second = floor_component(self.second, "second")?;

        let out_of_range = || TimeError::invalid(format!("{self:?} is out of range"));

        let year = year
            .checked_add(month.div_euclid(12))
            .and_then(|y| i32::try_from(y).ok())
            .ok_or_else(out_of_range)?;
        // rem_euclid(12) is in 0..12, so the cast is lossless.
        let month = month.rem_euclid(12) as u32 + 1;

        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(out_of_range)?;
        let delta = [
            TimeDelta::try_days(day),
            TimeDelta::try_hours(hour),
            TimeDelta::try_minutes(minute),
            TimeDelta::try_seconds(second),
        ]
        .into_iter()
        .try_fold(TimeDelta::zero(), |acc, part| acc.checked_add(&part?))
        .ok_or_else(out_of_range)?;
        first.checked_add_signed(delta).ok_or_else(out_of_range)
    }
}

fn floor_component(value: f64, name: &str) -> Result<i64, TimeError> {
    let floored = value.floor();
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
    if !floored.is_finite() || floored < i64::MIN as f64 || floored >= i64::MAX as f64 {
        return Err(TimeError::invalid(format!("{name} component {value} is not usable")));
    }
    Ok(floored as i64)
}

/// Epoch seconds of a local wall-clock reading under rule `L`.
pub fn resolve_local<L: LocalZone>(wall: &NaiveDateTime) -> Result<i64, TimeError> {
    L::offset_for_local(wall)
        .and_then(|offset| wall.and_utc().timestamp().checked_sub(i64::from(offset)))
        .ok_or_else(|| TimeError::invalid(format!("{wall} has no local epoch value")))
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::FixedOffset;

    type Gmt = FixedOffset<0>;
    type Est = FixedOffset<-18_000>;

    #[test]
    fn epoch_is_a_thursday() {
        let f = convert::<Gmt>(0, Zone::Utc).unwrap();
        assert_eq!(
            f,
            CalendarFields {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
                second: 0,
                weekday: 4,
                yearday: 0,
                is_dst: false,
            }
        );
    }

    #[test]
    fn local_applies_the_rule_offset() {
        let f = convert::<Est>(0, Zone::Local).unwrap();
        assert_eq!((f.year, f.month, f.day, f.hour), (1969, 12, 31, 19));
        assert_eq!(f.weekday, 3);
        assert_eq!(f.yearday, 364);

        // The UTC tag ignores the local rule entirely.
        let f = convert::<Est>(0, Zone::Utc).unwrap();
        assert_eq!((f.year, f.hour), (1970, 0));
    }

    #[test]
    fn leap_year_last_day_has_yearday_365() {
        // 2000-12-31T12:00:00Z
        let f = convert::<Gmt>(978_264_000, Zone::Utc).unwrap();
        assert_eq!((f.month, f.day, f.yearday), (12, 31, 365));
    }

    #[test]
    fn negative_seconds_are_valid() {
        let f = convert::<Gmt>(-1, Zone::Utc).unwrap();
        assert_eq!((f.year, f.month, f.day), (1969, 12, 31));
        assert_eq!((f.hour, f.minute, f.second), (23, 59, 59));
    }

    #[test]
    fn unrepresentable_seconds_are_reported() {
        assert!(convert::<Gmt>(i64::MAX, Zone::Utc)
            .unwrap_err()
            .is_invalid_instant());
        assert!(convert::<FixedOffset<1>>(i64::MAX, Zone::Local).is_err());
    }

    #[test]
    fn components_normalize_like_mktime() {
        let wall = CivilComponents::new(2000.0, 13.0, 1.0, 0.0, 0.0, 0.0, 0.0)
            .to_naive()
            .unwrap();
        assert_eq!(wall.to_string(), "2001-01-01 00:00:00");

        let wall = CivilComponents::new(2001.0, 3.0, 0.0, 24.0, 0.0, 0.0, 0.0)
            .to_naive()
            .unwrap();
        assert_eq!(wall.to_string(), "2001-03-01 00:00:00");

        let wall = CivilComponents::new(2000.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0)
            .to_naive()
            .unwrap();
        assert_eq!(wall.to_string(), "1999-11-30 23:59:00");
    }

    #[test]
    fn components_are_floored() {
        let wall = CivilComponents::new(1999.9, 2.7, 3.2, 4.9, 5.5, 6.99, 0.0)
            .to_naive()
            .unwrap();
        assert_eq!(wall.to_string(), "1999-02-03 04:05:06");
    }

    #[test]
    fn unusable_components_fail() {
        let c = CivilComponents {
            day: f64::NAN,
            ..CivilComponents::year(2000.0)
        };
        assert!(c.to_naive().unwrap_err().is_invalid_instant());
        assert!(CivilComponents::year(1e12).to_naive().is_err());
    }

    #[test]
    fn resolve_local_subtracts_the_offset() {
        let wall = CivilComponents::year(1970.0).to_naive().unwrap();
        assert_eq!(resolve_local::<Gmt>(&wall).unwrap(), 0);
        assert_eq!(resolve_local::<Est>(&wall).unwrap(), 18_000);
        assert_eq!(resolve_local::<FixedOffset<3600>>(&wall).unwrap(), -3600);
    }
}
