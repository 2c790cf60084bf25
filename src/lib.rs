// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil Time
//!
//! This crate provides a small civil-time value: an instant counted in seconds
//! and microseconds since 1970-01-01T00:00:00, tagged for display either in
//! UTC or in the observer's local zone, with its calendar fields always in
//! sync.
//!
//! # Core types
//!
//! - [`Time<L>`] — immutable instant parameterised by a [`LocalZone`] marker.
//! - [`CivilTime`] — type alias for `Time<SystemZone>`, the host's local zone.
//! - [`Zone`] — runtime tag: [`Zone::Local`] or [`Zone::Utc`].
//! - [`CalendarFields`] — year, month, day, time of day, weekday, year-day, DST.
//! - [`CivilComponents`] — wall-clock input for [`Time::from_civil`].
//! - [`TimeError`] — argument, invalid-instant and wrong-kind failures.
//!
//! # Local rules
//!
//! | Marker | Local rule |
//! |--------|------------|
//! | [`SystemZone`] | Host zone configuration |
//! | [`FixedOffset<N>`] | `N` seconds east of UTC, no DST |
//!
//! # Construction paths
//!
//! Two raw constructors read their argument in **different units** and must
//! not be confused:
//!
//! - [`Time::from_raw_microseconds`] — microseconds, fraction discarded.
//! - [`Time::from_raw_seconds`] — seconds, fraction kept to the microsecond.
//!
//! ```
//! use civtime::{FixedOffset, Time};
//!
//! type Gmt = Time<FixedOffset<0>>;
//!
//! let a = Gmt::from_raw_microseconds(1_000_000.0).unwrap();
//! let b = Gmt::from_raw_seconds(1.5).unwrap();
//! assert_eq!((a.to_i(), a.microseconds()), (1, 0));
//! assert_eq!((b.to_i(), b.microseconds()), (1, 500_000));
//! assert!(a < b);
//! ```

pub mod calendar;
mod clock;
mod error;
mod format;
pub(crate) mod instant;
mod zone;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{CalendarFields, CivilComponents};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::TimeError;
pub use format::{MONTH_NAMES, WEEKDAY_NAMES};
pub use instant::{At, Time};
pub use zone::{FixedOffset, LocalZone, SystemZone, Zone, ZoneOffset};

/// Civil time in the host's configured local zone.
///
/// This is a type alias for [`Time<SystemZone>`].
pub type CivilTime = Time<SystemZone>;
