use chrono::{Datelike, NaiveDate, NaiveDateTime};
use thiserror::Error;

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Error, PartialEq)]
pub enum CalendarError {
    #[error("Please select a day")]
    NoDaySelected,
    #[error("invalid date {year}-{month}-{day} {hour}:{minute}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },
}

/// A calendar page. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.name(), self.year)
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next();
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(following)) => (following - first).num_days() as u32,
            _ => 0,
        }
    }

    /// Empty cells before day 1 in a Sunday-first grid.
    pub fn leading_blanks(&self) -> u32 {
        self.first_day()
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Grid cells row by row, `None` for padding.
    pub fn grid(&self) -> Vec<Option<u32>> {
        let mut cells: Vec<Option<u32>> = (0..self.leading_blanks()).map(|_| None).collect();
        cells.extend((1..=self.days_in_month()).map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
    }
}

pub fn hour_options() -> Vec<String> {
    (0..24).map(|h| format!("{:02}", h)).collect()
}

pub fn minute_options() -> Vec<String> {
    (0..60).map(|m| format!("{:02}", m)).collect()
}

/// State of the contact page day/time picker.
#[derive(Debug, Clone, PartialEq)]
pub struct DayTimePicker {
    month: CalendarMonth,
    selected_day: Option<u32>,
    hour: u32,
    minute: u32,
}

impl DayTimePicker {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            month: CalendarMonth::containing(today),
            selected_day: None,
            hour: 12,
            minute: 0,
        }
    }

    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    pub fn selected_day(&self) -> Option<u32> {
        self.selected_day
    }

    pub fn hour(&self) -> String {
        format!("{:02}", self.hour)
    }

    pub fn minute(&self) -> String {
        format!("{:02}", self.minute)
    }

    pub fn prev_month(&mut self) {
        self.month = self.month.prev();
        self.selected_day = None;
    }

    pub fn next_month(&mut self) {
        self.month = self.month.next();
        self.selected_day = None;
    }

    /// Ignores days outside the current month.
    pub fn select_day(&mut self, day: u32) {
        if (1..=self.month.days_in_month()).contains(&day) {
            self.selected_day = Some(day);
        }
    }

    /// Accepts the zero-padded option values; anything unparsable or out
    /// of range leaves the hour unchanged.
    pub fn set_hour(&mut self, value: &str) {
        if let Ok(hour) = value.parse::<u32>() {
            if hour < 24 {
                self.hour = hour;
            }
        }
    }

    pub fn set_minute(&mut self, value: &str) {
        if let Ok(minute) = value.parse::<u32>() {
            if minute < 60 {
                self.minute = minute;
            }
        }
    }

    pub fn submit(&self) -> Result<NaiveDateTime, CalendarError> {
        let day = self.selected_day.ok_or(CalendarError::NoDaySelected)?;
        NaiveDate::from_ymd_opt(self.month.year, self.month.month, day)
            .and_then(|date| date.and_hms_opt(self.hour, self.minute, 0))
            .ok_or(CalendarError::InvalidDate {
                year: self.month.year,
                month: self.month.month,
                day,
                hour: self.hour,
                minute: self.minute,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_lengths_follow_leap_years() {
        assert_eq!(CalendarMonth::new(2024, 2).days_in_month(), 29);
        assert_eq!(CalendarMonth::new(2023, 2).days_in_month(), 28);
        assert_eq!(CalendarMonth::new(1900, 2).days_in_month(), 28);
        assert_eq!(CalendarMonth::new(2000, 2).days_in_month(), 29);
        assert_eq!(CalendarMonth::new(2026, 12).days_in_month(), 31);
        assert_eq!(CalendarMonth::new(2026, 4).days_in_month(), 30);
    }

    #[test]
    fn navigation_wraps_across_years() {
        let jan = CalendarMonth::new(2026, 1);
        assert_eq!(jan.prev(), CalendarMonth::new(2025, 12));
        assert_eq!(jan.prev().next(), jan);
        assert_eq!(CalendarMonth::new(2026, 12).next().title(), "January 2027");
    }

    #[test]
    fn grid_pads_to_full_weeks() {
        // October 2026 starts on a Thursday
        let october = CalendarMonth::new(2026, 10);
        assert_eq!(october.leading_blanks(), 4);

        let grid = october.grid();
        assert_eq!(grid.len() % 7, 0);
        assert_eq!(grid[..4], [None::<u32>; 4]);
        assert_eq!(grid[4], Some(1));
        assert_eq!(grid.iter().flatten().count(), 31);
    }

    #[test]
    fn submit_requires_a_day() {
        let picker = DayTimePicker::new(date(2026, 10, 16));
        assert_eq!(picker.submit(), Err(CalendarError::NoDaySelected));
        assert_eq!(CalendarError::NoDaySelected.to_string(), "Please select a day");
    }

    #[test]
    fn submit_combines_day_and_time() {
        let mut picker = DayTimePicker::new(date(2026, 10, 16));
        assert_eq!(picker.hour(), "12");
        assert_eq!(picker.minute(), "00");

        picker.select_day(20);
        picker.set_hour("09");
        picker.set_minute("45");
        picker.set_hour("24");
        picker.set_minute("nope");

        let selected = picker.submit().unwrap();
        assert_eq!(selected, date(2026, 10, 20).and_hms_opt(9, 45, 0).unwrap());
    }

    #[test]
    fn hour_change_reports_the_padded_hour() {
        let mut picker = DayTimePicker::new(date(2026, 10, 16));
        picker.set_hour("7");
        assert_eq!(picker.hour(), "07");
        picker.set_hour("31");
        assert_eq!(picker.hour(), "07");
    }

    #[test]
    fn changing_month_clears_selection() {
        let mut picker = DayTimePicker::new(date(2026, 1, 31));
        picker.select_day(31);
        picker.next_month();
        assert_eq!(picker.selected_day(), None);
        assert_eq!(picker.month().title(), "February 2026");

        picker.select_day(31);
        assert_eq!(picker.selected_day(), None);

        picker.prev_month();
        picker.prev_month();
        assert_eq!(picker.month(), CalendarMonth::new(2025, 12));
    }

    #[test]
    fn options_are_zero_padded() {
        let hours = hour_options();
        assert_eq!(hours.len(), 24);
        assert_eq!(hours[0], "00");
        assert_eq!(hours[23], "23");
        assert_eq!(minute_options()[5], "05");
    }
}
