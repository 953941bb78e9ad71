// Capture schedule and snapshot URL formatting
use chrono::{DateTime, Duration, FixedOffset, Timelike};

/// Radar imagery is published on Hong Kong civil time.
pub fn hong_kong_offset() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("UTC+8 is a valid offset")
}

/// Snapshots are published every six minutes.
const MINUTE_MARKS: [u32; 10] = [0, 6, 12, 18, 24, 30, 36, 42, 48, 54];
const HOURS_BACK: i64 = 3;

/// Snapshot timestamps covering the trailing three hours, newest first.
/// Every entry sits on a six-minute mark and is no later than `now`; `now`
/// is injected so the schedule is a pure function of its input.
pub fn capture_times(now: DateTime<FixedOffset>) -> Vec<DateTime<FixedOffset>> {
    let mut times = Vec::with_capacity(MINUTE_MARKS.len() * HOURS_BACK as usize);
    for hour_offset in 0..HOURS_BACK {
        let hour = (now - Duration::hours(hour_offset))
            .with_minute(0)
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
            .expect("truncating to the hour keeps the time valid");
        for minute in MINUTE_MARKS {
            let timestamp = hour + Duration::minutes(minute as i64);
            if timestamp <= now {
                times.push(timestamp);
            }
        }
    }
    times.sort_unstable_by(|a, b| b.cmp(a));
    times.dedup();
    times
}

/// Snapshot URL for one timestamp: zero-padded `%Y%m%d%H%M` between the
/// configured base and suffix.
pub fn frame_url(base_url: &str, suffix: &str, timestamp: DateTime<FixedOffset>) -> String {
    format!("{}{}{}", base_url, timestamp.format("%Y%m%d%H%M"), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn hkt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<FixedOffset> {
        hong_kong_offset()
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_capture_times_descending_unique_and_bounded() {
        let now = hkt(2024, 3, 1, 12, 34, 56);
        let times = capture_times(now);

        assert!(!times.is_empty());
        for window in times.windows(2) {
            assert!(window[0] > window[1], "must be strictly descending");
        }
        for t in &times {
            assert!(*t <= now);
            assert!(MINUTE_MARKS.contains(&t.minute()));
            assert_eq!(t.second(), 0);
        }
    }

    #[test]
    fn test_capture_times_excludes_future_marks_in_current_hour() {
        let now = hkt(2024, 3, 1, 12, 10, 0);
        let times = capture_times(now);

        // Current hour contributes only 12:00 and 12:06; the two earlier
        // hours contribute all ten marks each.
        assert_eq!(times.len(), 2 + 10 + 10);
        assert_eq!(times[0], hkt(2024, 3, 1, 12, 6, 0));
        assert_eq!(times[1], hkt(2024, 3, 1, 12, 0, 0));
        assert_eq!(*times.last().unwrap(), hkt(2024, 3, 1, 10, 0, 0));
    }

    #[test]
    fn test_capture_times_on_exact_mark_includes_it() {
        let now = hkt(2024, 3, 1, 12, 30, 0);
        let times = capture_times(now);
        assert_eq!(times[0], now);
    }

    #[test]
    fn test_frame_url_format() {
        let url = frame_url(
            "https://www.hko.gov.hk/wxinfo/radars/rad_064_png/2d064nradar_",
            ".jpg",
            hkt(2024, 3, 1, 12, 30, 0),
        );
        assert_eq!(
            url,
            "https://www.hko.gov.hk/wxinfo/radars/rad_064_png/2d064nradar_202403011230.jpg"
        );
    }

    #[test]
    fn test_frame_url_zero_pads() {
        let url = frame_url("base_", ".jpg", hkt(2024, 1, 2, 3, 6, 0));
        assert_eq!(url, "base_202401020306.jpg");
    }
}
