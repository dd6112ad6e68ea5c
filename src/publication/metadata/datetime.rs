//! UTC date and time for package document metadata.
//!
//! Package documents carry `dc:date` and `dcterms:modified` values formatted
//! as `YYYY-MM-DDTHH:MM:SSZ` (zero-padded, no fractional seconds). This type
//! keeps just enough calendar to produce that.

use std::fmt::Display;

/// A UTC calendar date and time.
///
/// # Examples
/// ```
/// use bindery::publication::metadata::datetime::DateTime;
///
/// let datetime = DateTime::new(2023, 2, 26, 11, 0, 0);
/// assert_eq!("2023-02-26T11:00:00Z", datetime.to_string());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    year: i16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl DateTime {
    /// Construct a datetime from its parts.
    ///
    /// # Clamping
    /// - year: `[-9999, 9999]`, month: `[1, 12]`, day: `[1, 31]`
    /// - hour: `[0, 23]`, minute/second: `[0, 59]`
    pub fn new(year: i16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year: year.clamp(-9999, 9999),
            month: month.clamp(1, 12),
            day: day.clamp(1, 31),
            hour: hour.min(23),
            minute: minute.min(59),
            second: second.min(59),
        }
    }

    /// The current date and UTC time.
    pub fn now() -> Self {
        let epoch_time = match std::time::UNIX_EPOCH.elapsed() {
            Ok(after_epoch) => after_epoch.as_secs() as i64,
            // Handle times before the UNIX epoch (1970-01-01T00:00:00Z)
            Err(before_epoch) => -(before_epoch.duration().as_secs() as i64),
        };

        Self::from_unix(epoch_time)
    }

    /// The date and UTC time of the given UNIX epoch timestamp.
    ///
    /// # Examples
    /// ```
    /// use bindery::publication::metadata::datetime::DateTime;
    ///
    /// let datetime = DateTime::from_unix(1677409200);
    /// assert_eq!("2023-02-26T11:00:00Z", datetime.to_string());
    /// ```
    pub fn from_unix(secs: i64) -> Self {
        let days_since_epoch = secs.div_euclid(86400) as i32;
        let secs_of_day = secs.rem_euclid(86400) as u32;

        let second = (secs_of_day % 60) as u8;
        let minute = ((secs_of_day / 60) % 60) as u8;
        let hour = (secs_of_day / 3600) as u8;

        // Civil-from-days (Howard Hinnant's algorithm),
        // epoch shifted from 1970-01-01 to 0000-03-01.
        let z = days_since_epoch + 719468;
        let era = (if z >= 0 { z } else { z - 146096 }) / 146097;
        let doe = (z - era * 146097) as u32;
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
        let year = yoe as i32 + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        let year = if month <= 2 { year + 1 } else { year };

        Self::new(year as i16, month, day, hour, minute, second)
    }

    pub fn year(&self) -> i16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}
