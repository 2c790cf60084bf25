// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock sources for [`Time::now_from`](crate::Time::now_from).

use chrono::Utc;

/// A source of the current wall-clock time, in whole seconds since the epoch.
pub trait Clock {
    fn unix_seconds(&self) -> i64;
}

/// The host system clock, read through `chrono::Utc::now()`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn unix_seconds(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock frozen at a given second count.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    #[inline]
    fn unix_seconds(&self) -> i64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn unix_seconds(&self) -> i64 {
        (**self).unix_seconds()
    }
}
