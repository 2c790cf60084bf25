// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! `asctime`-style rendering.
//!
//! Layout: `Wdy Mon DD HH:MM:SS [UTC ]YYYY`, built from the cached calendar
//! fields and the zone tag. The name tables are fixed English abbreviations,
//! independent of locale.

use super::instant::Time;
use super::zone::{LocalZone, Zone};
use std::fmt;

/// Indexed by weekday, Sunday = 0.
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Indexed by month - 1.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl<L: LocalZone> Time<L> {
    /// The display string, same as `to_string()`.
    pub fn asctime(&self) -> String {
        self.to_string()
    }
}

impl<L: LocalZone> fmt::Display for Time<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.calendar();
        // Field ranges are guaranteed by the calendar conversion.
        let weekday = WEEKDAY_NAMES[c.weekday as usize % 7];
        let month = MONTH_NAMES[(c.month as usize + 11) % 12];
        let utc = if self.zone() == Zone::Utc { "UTC " } else { "" };
        write!(
            f,
            "{weekday} {month} {:02} {:02}:{:02}:{:02} {utc}{}",
            c.day, c.hour, c.minute, c.second, c.year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CivilComponents;
    use crate::zone::FixedOffset;

    type Gmt = Time<FixedOffset<0>>;

    #[test]
    fn utc_values_carry_the_marker() {
        let t = Gmt::from_civil(CivilComponents::year(2000.0)).unwrap();
        assert_eq!(t.to_string(), "Sat Jan 01 00:00:00 UTC 2000");
        assert_eq!(t.asctime(), t.to_string());
    }

    #[test]
    fn local_values_omit_the_marker() {
        let t = Time::<FixedOffset<-18_000>>::from_raw_seconds(0.0).unwrap();
        assert_eq!(t.to_string(), "Wed Dec 31 19:00:00 1969");
    }

    #[test]
    fn fields_are_zero_padded() {
        // 2024-03-05T07:08:09Z
        let t = Gmt::from_raw_seconds(1_709_622_489.0).unwrap();
        assert_eq!(t.to_string(), "Tue Mar 05 07:08:09 2024");
    }

    #[test]
    fn every_weekday_name_is_used() {
        let names: Vec<String> = (0..7)
            .map(|day| {
                let t = Gmt::from_raw_seconds(f64::from(day) * 86_400.0).unwrap();
                t.to_string()[..3].to_owned()
            })
            .collect();
        assert_eq!(names, ["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"]);
    }
}
