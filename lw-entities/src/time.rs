use std::{
    fmt,
    ops::{Add, Sub},
};

use ::time::{
    error::ComponentRange, format_description::well_known::Rfc3339, Duration, OffsetDateTime,
    UtcOffset,
};

pub use ::time::Duration as TimeSpan;

const NANOS_PER_MILLI: i128 = 1_000_000;

/// A point in time with millisecond precision, always kept in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        let now = OffsetDateTime::now_utc();
        let nanos = now.unix_timestamp_nanos();
        OffsetDateTime::from_unix_timestamp_nanos(nanos - nanos.rem_euclid(NANOS_PER_MILLI))
            .map(Self)
            .unwrap_or(Self(now))
    }

    pub fn try_from_millis(millis: i64) -> Result<Self, ComponentRange> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * NANOS_PER_MILLI).map(Self)
    }

    pub fn try_from_secs(secs: i64) -> Result<Self, ComponentRange> {
        OffsetDateTime::from_unix_timestamp(secs).map(Self)
    }

    pub fn into_millis(self) -> i64 {
        // Always in range: the year is limited to +/-9999
        (self.0.unix_timestamp_nanos() / NANOS_PER_MILLI) as i64
    }

    pub fn into_secs(self) -> i64 {
        self.0.unix_timestamp()
    }

    pub fn to_offset(self, offset: UtcOffset) -> OffsetDateTime {
        self.0.to_offset(offset)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.to_offset(UtcOffset::UTC))
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs)
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        Self(self.0 - rhs)
    }
}

impl Sub for Timestamp {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let formatted = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}
