// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Zone-tagged civil instant.
//!
//! [`Time<L>`] is the core type of the crate. It stores whole seconds plus a
//! microsecond fraction since 1970-01-01T00:00:00, a runtime [`Zone`] tag, and
//! the calendar fields derived from both. The compile-time marker
//! `L: LocalZone` names the rule used when the tag is [`Zone::Local`].
//!
//! Values are immutable: every constructor, zone switch and arithmetic
//! operation goes through one builder that recomputes the calendar fields, so
//! the cached fields can never be stale.
//!
//! Equality and ordering look at the absolute instant only; the zone tag is a
//! display choice.
//!
//! ```
//! use civtime::{FixedOffset, Time, Zone};
//! use qtty::Seconds;
//!
//! type Gmt = Time<FixedOffset<0>>;
//!
//! let t = Gmt::from_raw_seconds(946_684_800.25).unwrap().to_utc().unwrap();
//! assert_eq!(t.to_string(), "Sat Jan 01 00:00:00 UTC 2000");
//! assert_eq!(t.microseconds(), 250_000);
//!
//! let later = t.checked_add(Seconds::new(90.0)).unwrap();
//! assert_eq!(later.minute(), 1);
//! assert_eq!(later.zone(), Zone::Utc);
//! assert!(later > t);
//! ```

use super::calendar::{self, CalendarFields, CivilComponents};
use super::clock::{Clock, SystemClock};
use super::error::TimeError;
use super::zone::{LocalZone, SystemZone, Zone};
use qtty::Seconds;
use std::any::{type_name, TypeId};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Sub};

const MICROS_PER_SECOND: f64 = 1.0e6;

// ═══════════════════════════════════════════════════════════════════════════
// Time<L>
// ═══════════════════════════════════════════════════════════════════════════

/// An instant since the epoch, tagged UTC or local under rule `L`.
#[derive(Debug, Copy, Clone)]
pub struct Time<L: LocalZone = SystemZone> {
    seconds: i64,
    microseconds: u32,
    zone: Zone,
    calendar: CalendarFields,
    _local: PhantomData<L>,
}

/// Argument accepted by [`Time::at`].
#[derive(Debug, Copy, Clone)]
pub enum At<L: LocalZone = SystemZone> {
    /// Seconds since the epoch, possibly fractional.
    Seconds(f64),
    /// An existing instant; its whole seconds and zone are taken over.
    Instant(Time<L>),
}

impl<L: LocalZone> From<f64> for At<L> {
    fn from(seconds: f64) -> Self {
        At::Seconds(seconds)
    }
}

impl<L: LocalZone> From<Time<L>> for At<L> {
    fn from(time: Time<L>) -> Self {
        At::Instant(time)
    }
}

impl<L: LocalZone> Time<L> {
    fn build(seconds: i64, microseconds: u32, zone: Zone) -> Result<Self, TimeError> {
        debug_assert!(microseconds < 1_000_000);
        let calendar = calendar::convert::<L>(seconds, zone).inspect_err(|err| {
            tracing::debug!(seconds, %zone, %err, "calendar conversion failed");
        })?;
        Ok(Self {
            seconds,
            microseconds,
            zone,
            calendar,
            _local: PhantomData,
        })
    }

    // ── constructors ──────────────────────────────────────────────────

    /// Current wall-clock time from the system clock, tagged local.
    ///
    /// Only whole seconds are sampled; [`microseconds`](Self::microseconds)
    /// is always zero.
    pub fn now() -> Result<Self, TimeError> {
        Self::now_from(SystemClock)
    }

    /// Current time according to `clock`, tagged local.
    pub fn now_from(clock: impl Clock) -> Result<Self, TimeError> {
        let seconds = clock.unix_seconds();
        tracing::trace!(seconds, "read wall clock");
        Self::build(seconds, 0, Zone::Local)
    }

    /// Build from a count of **microseconds** since the epoch, tagged local.
    ///
    /// The sub-second part is discarded: `seconds = floor(value / 1e6)` and
    /// the fraction is zero. Compare [`from_raw_seconds`](Self::from_raw_seconds),
    /// which reads its argument as seconds and keeps the fraction.
    pub fn from_raw_microseconds(value: f64) -> Result<Self, TimeError> {
        let seconds = floor_seconds(value / MICROS_PER_SECOND)?;
        Self::build(seconds, 0, Zone::Local)
    }

    /// Build from a count of **seconds** since the epoch, tagged local.
    #[inline]
    pub fn from_raw_seconds(value: f64) -> Result<Self, TimeError> {
        Self::from_raw_seconds_in(value, Zone::Local)
    }

    /// Build from a count of seconds since the epoch with an explicit zone tag.
    ///
    /// `seconds = floor(value)` and the remainder is rounded to the nearest
    /// microsecond, carrying into `seconds` when it rounds up to a full second.
    pub fn from_raw_seconds_in(value: f64, zone: Zone) -> Result<Self, TimeError> {
        let mut seconds = floor_seconds(value)?;
        let mut micros = ((value - value.floor()) * MICROS_PER_SECOND).round() as u32;
        if micros >= 1_000_000 {
            seconds = seconds
                .checked_add(1)
                .ok_or_else(|| TimeError::invalid(format!("{value} s is out of range")))?;
            micros -= 1_000_000;
        }
        Self::build(seconds, micros, zone)
    }

    /// Build from either a seconds value or another instant.
    ///
    /// An instant argument contributes its whole seconds and its zone tag;
    /// its microsecond fraction is not carried over. A number is read as
    /// seconds and tagged local. `None`, NaN and infinities are rejected with
    /// [`TimeError::Argument`].
    pub fn at(arg: Option<At<L>>) -> Result<Self, TimeError> {
        match arg {
            None => Err(TimeError::Argument("need at least one argument".into())),
            Some(At::Instant(other)) => Self::from_raw_seconds_in(other.seconds as f64, other.zone),
            Some(At::Seconds(value)) if !value.is_finite() => {
                Err(TimeError::Argument(format!("{value} is not a usable time value")))
            }
            Some(At::Seconds(value)) => Self::from_raw_seconds_in(value, Zone::Local),
        }
    }

    /// Build from civil components, tagged UTC.
    ///
    /// The components are resolved to epoch seconds through the **local**
    /// rule `L`, yet the result is tagged [`Zone::Utc`]. Under a non-zero
    /// local offset the UTC fields therefore differ from the components
    /// passed in. Results before the epoch are rejected even though
    /// negative instants are otherwise valid.
    pub fn from_civil(components: CivilComponents) -> Result<Self, TimeError> {
        let wall = components.to_naive()?;
        let seconds = calendar::resolve_local::<L>(&wall)?;
        if seconds < 0 {
            tracing::debug!(%wall, seconds, "civil time resolves before the epoch");
            return Err(TimeError::invalid(format!(
                "{wall} resolves to {seconds} s, before the epoch"
            )));
        }
        Self::build(seconds, 0, Zone::Utc)
    }

    /// Duplicate `source` in full, provided it is the same kind of value.
    ///
    /// Instants under a different local rule are rejected with
    /// [`TimeError::WrongKind`] because their cached local fields were derived
    /// under that other rule.
    pub fn copy_of<M: LocalZone>(source: &Time<M>) -> Result<Self, TimeError> {
        if TypeId::of::<M>() != TypeId::of::<L>() {
            return Err(TimeError::WrongKind {
                expected: type_name::<Self>(),
                found: type_name::<Time<M>>(),
            });
        }
        Ok(Self {
            seconds: source.seconds,
            microseconds: source.microseconds,
            zone: source.zone,
            calendar: source.calendar,
            _local: PhantomData,
        })
    }

    // ── zone switching ────────────────────────────────────────────────

    /// The same instant, tagged local.
    #[inline]
    pub fn to_local(&self) -> Result<Self, TimeError> {
        self.with_zone(Zone::Local)
    }

    /// The same instant, tagged UTC.
    #[inline]
    pub fn to_utc(&self) -> Result<Self, TimeError> {
        self.with_zone(Zone::Utc)
    }

    /// The same instant under `zone`, with calendar fields recomputed.
    pub fn with_zone(&self, zone: Zone) -> Result<Self, TimeError> {
        Self::build(self.seconds, self.microseconds, zone)
    }

    // ── arithmetic ────────────────────────────────────────────────────

    /// `self + delta`, keeping the zone tag.
    ///
    /// The sum is formed in floating point and rebuilt with
    /// [`from_raw_seconds_in`](Self::from_raw_seconds_in), so precision degrades
    /// for instants far from the epoch.
    pub fn checked_add(&self, delta: Seconds) -> Result<Self, TimeError> {
        Self::from_raw_seconds_in(delta.value() + self.to_f(), self.zone)
    }

    /// `self - delta`, keeping the zone tag.
    pub fn checked_sub(&self, delta: Seconds) -> Result<Self, TimeError> {
        Self::from_raw_seconds_in(self.to_f() - delta.value(), self.zone)
    }

    // ── comparison ────────────────────────────────────────────────────

    /// Instant equality. `None` stands for an operand that is not a `Time`
    /// and compares unequal.
    #[inline]
    pub fn equals(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// Three-way comparison on `(seconds, microseconds)`. `None` stands for an
    /// operand that is not a `Time` and has no ordering.
    #[inline]
    pub fn compare(&self, other: Option<&Self>) -> Option<Ordering> {
        other.map(|other| self.cmp(other))
    }

    /// `true` if `min <= self <= max`.
    #[inline]
    pub fn between(&self, min: &Self, max: &Self) -> bool {
        self >= min && self <= max
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Whole seconds since the epoch.
    #[inline]
    pub const fn to_i(&self) -> i64 {
        self.seconds
    }

    /// Seconds since the epoch including the fraction.
    #[inline]
    pub fn to_f(&self) -> f64 {
        self.seconds as f64 + f64::from(self.microseconds) / MICROS_PER_SECOND
    }

    /// [`to_f`](Self::to_f) as a typed quantity.
    #[inline]
    pub fn as_seconds(&self) -> Seconds {
        Seconds::new(self.to_f())
    }

    /// Sub-second fraction, `0..=999_999`.
    #[inline]
    pub const fn microseconds(&self) -> u32 {
        self.microseconds
    }

    /// The zone tag the calendar fields were derived under.
    #[inline]
    pub const fn zone(&self) -> Zone {
        self.zone
    }

    /// `"UTC"` or `"LOCAL"`.
    #[inline]
    pub const fn zone_name(&self) -> &'static str {
        self.zone.name()
    }

    /// `true` when tagged [`Zone::Utc`].
    #[inline]
    pub const fn is_utc(&self) -> bool {
        matches!(self.zone, Zone::Utc)
    }

    /// Whether the local rule reported daylight saving for this instant.
    /// Always `false` for UTC-tagged values.
    #[inline]
    pub const fn is_dst(&self) -> bool {
        self.calendar.is_dst
    }

    /// All calendar fields at once.
    #[inline]
    pub const fn calendar(&self) -> &CalendarFields {
        &self.calendar
    }

    /// Calendar year, e.g. `2024`.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.calendar.year
    }

    /// Month, `1..=12`.
    #[inline]
    pub const fn month(&self) -> u32 {
        self.calendar.month
    }

    /// Day of the month, `1..=31`.
    #[inline]
    pub const fn day(&self) -> u32 {
        self.calendar.day
    }

    /// Hour of the day, `0..=23`.
    #[inline]
    pub const fn hour(&self) -> u32 {
        self.calendar.hour
    }

    /// Minute of the hour, `0..=59`.
    #[inline]
    pub const fn minute(&self) -> u32 {
        self.calendar.minute
    }

    /// Second of the minute, `0..=59`.
    #[inline]
    pub const fn second(&self) -> u32 {
        self.calendar.second
    }

    /// Days since Sunday, `0..=6`.
    #[inline]
    pub const fn weekday(&self) -> u32 {
        self.calendar.weekday
    }

    /// Days since 1 January, `0..=365`.
    #[inline]
    pub const fn yearday(&self) -> u32 {
        self.calendar.yearday
    }
}

fn floor_seconds(value: f64) -> Result<i64, TimeError> {
    let floored = value.floor();
    if !floored.is_finite() || floored < i64::MIN as f64 || floored >= i64::MAX as f64 {
        return Err(TimeError::invalid(format!("{value} s is out of range")));
    }
    Ok(floored as i64)
}

// ═══════════════════════════════════════════════════════════════════════════
// Arithmetic
// ═══════════════════════════════════════════════════════════════════════════

impl<L: LocalZone> Add<Seconds> for Time<L> {
    type Output = Result<Self, TimeError>;
    #[inline]
    fn add(self, rhs: Seconds) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl<L: LocalZone> Sub<Seconds> for Time<L> {
    type Output = Result<Self, TimeError>;
    #[inline]
    fn sub(self, rhs: Seconds) -> Self::Output {
        self.checked_sub(rhs)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Comparison traits
// ═══════════════════════════════════════════════════════════════════════════

impl<L: LocalZone> Time<L> {
    #[inline]
    fn key(&self) -> (i64, u32) {
        (self.seconds, self.microseconds)
    }
}

impl<L: LocalZone, M: LocalZone> PartialEq<Time<M>> for Time<L> {
    #[inline]
    fn eq(&self, other: &Time<M>) -> bool {
        self.key() == other.key()
    }
}

impl<L: LocalZone> Eq for Time<L> {}

impl<L: LocalZone, M: LocalZone> PartialOrd<Time<M>> for Time<L> {
    #[inline]
    fn partial_cmp(&self, other: &Time<M>) -> Option<Ordering> {
        Some(self.key().cmp(&other.key()))
    }
}

impl<L: LocalZone> Ord for Time<L> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<L: LocalZone> Hash for Time<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
