use std::io::Write;

/// Wall-clock instant captured once per record, second precision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stamp {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    /// Offset from UTC in seconds
    offset: i32,
}

/// Correct Gregorian Y-M-D from days since 1970-01-01 (no deps).
#[inline]
#[cfg_attr(feature = "localtime", allow(dead_code))]
const fn civil_from_days_utc(days_since_unix_epoch: i64) -> (i32, u8, u8) {
    // Howard Hinnant's algorithm
    let z = days_since_unix_epoch + 719_468; // days since 0000-03-01
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0,399]
    let yd = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * yd + 2) / 153; // [0, 11]
    let d = yd - (153 * mp + 2) / 5 + 1; // [1, 31]
    let m = mp + 3 - 12 * (mp / 10); // [1, 12]
    let y = 100 * era + yoe + (m <= 2) as i64;
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    (y as i32, m as u8, d as u8)
}

impl Stamp {
    /// Split seconds since the Unix epoch into UTC calendar fields.
    #[cfg_attr(feature = "localtime", allow(dead_code))]
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    pub const fn from_unix_utc(secs: i64) -> Self {
        let days = secs.div_euclid(86_400);
        let sod = secs.rem_euclid(86_400);
        let (year, month, day) = civil_from_days_utc(days);
        Self {
            year,
            month,
            day,
            hour: (sod / 3_600) as u8,
            minute: (sod % 3_600 / 60) as u8,
            second: (sod % 60) as u8,
            offset: 0,
        }
    }

    #[cfg(not(feature = "localtime"))]
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Self::from_unix_utc(i64::try_from(secs).unwrap_or(i64::MAX))
    }

    // Local time via `time`. The offset cannot always be read once other
    // threads are running; those records fall back to UTC.
    #[cfg(feature = "localtime")]
    pub fn now() -> Self {
        let now: time::OffsetDateTime = std::time::SystemTime::now().into();
        let now =
            now.to_offset(time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC));
        Self {
            year: now.year(),
            month: now.month().into(),
            day: now.day(),
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
            offset: now.offset().whole_seconds(),
        }
    }

    /// `[2024/1/5 9:3:7]`
    pub fn write_plain(&self, mut w: impl Write) {
        let _ = write!(
            w,
            "[{}/{}/{} {}:{}:{}]",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        );
    }

    /// RFC 3339, e.g. `2024-01-05T09:03:07Z` or `2024-01-05T09:03:07+05:30`.
    pub fn rfc3339(&self) -> String {
        let mut out = format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        );
        if self.offset == 0 {
            out.push('Z');
        } else {
            let sign = if self.offset < 0 { '-' } else { '+' };
            let abs = self.offset.unsigned_abs();
            out.push_str(&format!("{sign}{:02}:{:02}", abs / 3_600, abs % 3_600 / 60));
        }
        out
    }
}
