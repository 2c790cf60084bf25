// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Zone tags and local-time rules.
//!
//! A [`Time`](crate::Time) carries a runtime [`Zone`] tag choosing between UTC
//! and *local* display, and a compile-time marker `L: LocalZone` saying what
//! "local" means.
//!
//! | Marker | Local rule |
//! |--------|------------|
//! | [`SystemZone`] | Host zone configuration, via `chrono::Local` |
//! | [`FixedOffset<N>`] | Constant offset of `N` seconds east of UTC, no DST |

use chrono::{
    DateTime, Datelike, FixedOffset as UtcOffset, Local, LocalResult, NaiveDate, NaiveDateTime,
    TimeDelta, TimeZone,
};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════
// Zone tag
// ═══════════════════════════════════════════════════════════════════════════

/// Which interpretation a [`Time`](crate::Time) uses for its calendar fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Zone {
    /// The local rule named by the instant's `L` marker.
    Local,
    /// Coordinated Universal Time, zero offset, never DST.
    Utc,
}

impl Zone {
    /// The zone name reported by [`Time::zone_name`](crate::Time::zone_name).
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Zone::Local => "LOCAL",
            Zone::Utc => "UTC",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// LocalZone trait
// ═══════════════════════════════════════════════════════════════════════════

/// Offset and DST state in effect at some instant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ZoneOffset {
    /// Seconds east of UTC (local = UTC + offset).
    pub utc_offset: i32,
    pub is_dst: bool,
}

impl ZoneOffset {
    pub const UTC: Self = Self::new(0, false);

    #[inline]
    pub const fn new(utc_offset: i32, is_dst: bool) -> Self {
        Self { utc_offset, is_dst }
    }

    /// Classify `utc_offset` against the offsets in effect on 1 January and
    /// 1 July of the same year.
    ///
    /// The smaller of the two is the standard offset; anything above it is
    /// daylight saving. This holds in both hemispheres.
    #[inline]
    pub fn against_standard(utc_offset: i32, january: i32, july: i32) -> Self {
        Self::new(utc_offset, utc_offset > january.min(july))
    }
}

/// Marker trait for local-time rules.
///
/// A rule answers two questions:
///
/// 1. What offset (and DST flag) applies at a given UTC second count? Used
///    when deriving local calendar fields.
/// 2. Which offsets can a given local wall-clock reading have? Used when
///    resolving civil components back into epoch seconds.
///
/// `offset_at` returns `None` when the platform cannot represent the value.
/// `local_offsets` returns [`LocalResult::None`] for a reading skipped by a
/// forward transition and [`LocalResult::Ambiguous`] for one repeated by a
/// backward transition.
pub trait LocalZone: Copy + Clone + fmt::Debug + 'static {
    fn offset_at(utc_seconds: i64) -> Option<ZoneOffset>;

    fn local_offsets(local: &NaiveDateTime) -> LocalResult<UtcOffset>;

    /// The single offset used for `local`.
    ///
    /// A repeated reading resolves to the earlier instant. A skipped reading
    /// uses the offset in effect a day before, i.e. before the transition.
    fn offset_for_local(local: &NaiveDateTime) -> Option<i32> {
        earliest_offset(Self::local_offsets(local)).or_else(|| {
            let before = local.checked_sub_signed(TimeDelta::try_days(1)?)?;
            earliest_offset(Self::local_offsets(&before))
        })
    }
}

/// Offset of the earliest instant a local reading can denote.
///
/// The same wall clock maps to `local - offset`, so the larger offset gives
/// the earlier instant whatever order the candidates come in.
fn earliest_offset(candidates: LocalResult<UtcOffset>) -> Option<i32> {
    match candidates {
        LocalResult::Single(offset) => Some(offset.local_minus_utc()),
        LocalResult::Ambiguous(a, b) => Some(a.local_minus_utc().max(b.local_minus_utc())),
        LocalResult::None => None,
    }
}

// ---------------------------------------------------------------------------
// Host zone
// ---------------------------------------------------------------------------

/// The host's configured local zone.
///
/// Results depend on the machine's zone configuration and are not portable.
/// chrono exposes offsets but no DST flag, so the flag comes from
/// [`ZoneOffset::against_standard`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SystemZone;

impl SystemZone {
    fn offset_of(utc: &NaiveDateTime) -> i32 {
        Local.offset_from_utc_datetime(utc).local_minus_utc()
    }

    fn january_and_july(year: i32) -> Option<(i32, i32)> {
        let january = NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)?;
        let july = NaiveDate::from_ymd_opt(year, 7, 1)?.and_hms_opt(0, 0, 0)?;
        Some((Self::offset_of(&january), Self::offset_of(&july)))
    }
}

impl LocalZone for SystemZone {
    fn offset_at(utc_seconds: i64) -> Option<ZoneOffset> {
        let utc = DateTime::from_timestamp(utc_seconds, 0)?.naive_utc();
        let (january, july) = Self::january_and_july(utc.year())?;
        Some(ZoneOffset::against_standard(Self::offset_of(&utc), january, july))
    }

    fn local_offsets(local: &NaiveDateTime) -> LocalResult<UtcOffset> {
        Local.offset_from_local_datetime(local)
    }
}

// ---------------------------------------------------------------------------
// Fixed offset
// ---------------------------------------------------------------------------

/// A constant local offset of `SECONDS` east of UTC, without DST.
///
/// `FixedOffset<0>` makes "local" coincide with UTC, which keeps tests and
/// examples independent of the host configuration.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FixedOffset<const SECONDS: i32>;

impl<const SECONDS: i32> LocalZone for FixedOffset<SECONDS> {
    #[inline]
    fn offset_at(_utc_seconds: i64) -> Option<ZoneOffset> {
        Some(ZoneOffset::new(SECONDS, false))
    }

    fn local_offsets(_local: &NaiveDateTime) -> LocalResult<UtcOffset> {
        UtcOffset::east_opt(SECONDS).map_or(LocalResult::None, LocalResult::Single)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_names() {
        assert_eq!(Zone::Utc.name(), "UTC");
        assert_eq!(Zone::Local.name(), "LOCAL");
        assert_eq!(format!("{}", Zone::Utc), "UTC");
    }

    #[test]
    fn fixed_offset_ignores_instant() {
        type Cet = FixedOffset<3600>;
        assert_eq!(Cet::offset_at(0), Some(ZoneOffset::new(3600, false)));
        assert_eq!(Cet::offset_at(i64::MIN), Some(ZoneOffset::new(3600, false)));
        let noon = NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(Cet::offset_for_local(&noon), Some(3600));
    }

    fn offset(seconds: i32) -> UtcOffset {
        UtcOffset::east_opt(seconds).unwrap()
    }

    fn wall(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    /// America/New_York around the 2024 transitions.
    #[derive(Debug, Copy, Clone)]
    struct NewYork;

    impl LocalZone for NewYork {
        fn offset_at(_utc_seconds: i64) -> Option<ZoneOffset> {
            None
        }

        fn local_offsets(local: &NaiveDateTime) -> LocalResult<UtcOffset> {
            let (est, edt) = (offset(-18_000), offset(-14_400));
            if (wall(3, 10, 2, 0)..wall(3, 10, 3, 0)).contains(local) {
                LocalResult::None
            } else if (wall(11, 3, 1, 0)..wall(11, 3, 2, 0)).contains(local) {
                LocalResult::Ambiguous(est, edt)
            } else if (wall(3, 10, 3, 0)..wall(11, 3, 1, 0)).contains(local) {
                LocalResult::Single(edt)
            } else {
                LocalResult::Single(est)
            }
        }
    }

    #[test]
    fn earliest_offset_prefers_the_larger_candidate() {
        let (est, edt) = (offset(-18_000), offset(-14_400));
        assert_eq!(earliest_offset(LocalResult::Ambiguous(est, edt)), Some(-14_400));
        assert_eq!(earliest_offset(LocalResult::Ambiguous(edt, est)), Some(-14_400));
        assert_eq!(earliest_offset(LocalResult::Single(est)), Some(-18_000));
        assert_eq!(earliest_offset(LocalResult::None), None);
    }

    #[test]
    fn repeated_reading_resolves_to_the_earlier_instant() {
        // 01:30 on 2024-11-03 happens twice; EDT comes first.
        assert_eq!(NewYork::offset_for_local(&wall(11, 3, 1, 30)), Some(-14_400));
    }

    #[test]
    fn skipped_reading_uses_the_offset_before_the_transition() {
        // 02:30 on 2024-03-10 never happens; EST was in effect before.
        assert_eq!(NewYork::offset_for_local(&wall(3, 10, 2, 30)), Some(-18_000));
    }

    #[test]
    fn unambiguous_readings_use_their_offset() {
        assert_eq!(NewYork::offset_for_local(&wall(7, 4, 12, 0)), Some(-14_400));
        assert_eq!(NewYork::offset_for_local(&wall(12, 25, 12, 0)), Some(-18_000));
    }

    #[test]
    fn dst_is_measured_against_the_smaller_solstice_offset() {
        // Northern hemisphere: standard in January.
        assert!(ZoneOffset::against_standard(-14_400, -18_000, -14_400).is_dst);
        assert!(!ZoneOffset::against_standard(-18_000, -18_000, -14_400).is_dst);
        // Southern hemisphere: standard in July.
        assert!(ZoneOffset::against_standard(39_600, 39_600, 36_000).is_dst);
        assert!(!ZoneOffset::against_standard(36_000, 39_600, 36_000).is_dst);
        // No DST at all.
        assert_eq!(
            ZoneOffset::against_standard(19_800, 19_800, 19_800),
            ZoneOffset::new(19_800, false)
        );
    }

    #[test]
    fn system_zone_offset_is_plausible() {
        let offset = SystemZone::offset_at(0).expect("epoch is representable");
        assert!(offset.utc_offset.abs() <= 14 * 3600);
    }

    #[test]
    fn system_zone_rejects_unrepresentable_seconds() {
        assert_eq!(SystemZone::offset_at(i64::MAX), None);
    }
}
