use chrono::{NaiveDateTime, Timelike};

/// Rotation of each hand in degrees, clockwise from twelve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl HandAngles {
    pub fn at<T: Timelike>(time: &T) -> Self {
        let hours = f64::from(time.hour() % 12);
        let minutes = f64::from(time.minute());
        // leap seconds show up as nanosecond >= 1e9
        let seconds = f64::from(time.second());
        let millis = f64::from(time.nanosecond().min(999_999_999) / 1_000_000);

        Self {
            hours: hours * 30.0 + minutes * 0.5,
            minutes: minutes * 6.0 + seconds * 0.1,
            seconds: seconds * 6.0 + millis * 0.006,
        }
    }
}

/// `hh:mm:ss AM` on a twelve hour dial.
pub fn digital_time<T: Timelike>(time: &T) -> String {
    let (pm, hour) = time.hour12();
    format!(
        "{:02}:{:02}:{:02} {}",
        hour,
        time.minute(),
        time.second(),
        if pm { "PM" } else { "AM" }
    )
}

/// `Oct 16, 2026`
pub fn short_date(time: &NaiveDateTime) -> String {
    time.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 6)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    #[test]
    fn hands_sweep_continuously() {
        let angles = HandAngles::at(&at(15, 30, 45, 500));
        assert_eq!(angles.hours, 3.0 * 30.0 + 30.0 * 0.5);
        assert!((angles.minutes - (180.0 + 4.5)).abs() < 1e-9);
        assert!((angles.seconds - (270.0 + 3.0)).abs() < 1e-9);
    }

    #[test]
    fn midnight_and_noon_read_twelve() {
        assert_eq!(digital_time(&at(0, 5, 9, 0)), "12:05:09 AM");
        assert_eq!(digital_time(&at(12, 0, 0, 0)), "12:00:00 PM");
        assert_eq!(digital_time(&at(23, 59, 59, 999)), "11:59:59 PM");
        assert_eq!(HandAngles::at(&at(12, 0, 0, 0)).hours, 0.0);
    }

    #[test]
    fn date_is_short_us_style() {
        assert_eq!(short_date(&at(9, 0, 0, 0)), "Oct 6, 2026");
    }
}
