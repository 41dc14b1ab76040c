use std::{fmt::Display, str::FromStr};
use thiserror::Error;

const DAY_MILLIS: i64 = 1000 * 60 * 60 * 24;

/// How far ahead of a `CalendarEvent` a reminder is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderWindow {
    OneDay,
    ThreeDays,
    SevenDays,
}

impl ReminderWindow {
    /// Classifies the time left until an event starts. Upper bounds are inclusive,
    /// so exactly 24 hours left is still `OneDay`. Events that already started or
    /// are more than seven days away get no window.
    pub fn classify(timediff_millis: i64) -> Option<Self> {
        if timediff_millis < 0 {
            None
        } else if timediff_millis <= DAY_MILLIS {
            Some(Self::OneDay)
        } else if timediff_millis <= 3 * DAY_MILLIS {
            Some(Self::ThreeDays)
        } else if timediff_millis <= 7 * DAY_MILLIS {
            Some(Self::SevenDays)
        } else {
            None
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        match days {
            1 => Some(Self::OneDay),
            3 => Some(Self::ThreeDays),
            7 => Some(Self::SevenDays),
            _ => None,
        }
    }

    pub fn days(&self) -> u32 {
        match self {
            Self::OneDay => 1,
            Self::ThreeDays => 3,
            Self::SevenDays => 7,
        }
    }

    /// Position of this window in a `ReminderDays` vector
    fn index(&self) -> usize {
        match self {
            Self::SevenDays => 0,
            Self::ThreeDays => 1,
            Self::OneDay => 2,
        }
    }
}

impl Display for ReminderWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.days() {
            1 => write!(f, "1 day"),
            days => write!(f, "{} days", days),
        }
    }
}

/// The kind of reminder, which decides both the settings that apply
/// and how the reminder message is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderCategory {
    Site,
    User,
    Course,
    Group,
}

impl ReminderCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Site => "site",
            Self::User => "user",
            Self::Course => "course",
            Self::Group => "group",
        }
    }
}

/// Which `ReminderWindow`s are turned on for a `ReminderCategory`.
///
/// Stored the same way as the host settings: three flags ordered as
/// seven days, three days and one day ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderDays([bool; 3]);

impl ReminderDays {
    pub fn new(seven_days: bool, three_days: bool, one_day: bool) -> Self {
        Self([seven_days, three_days, one_day])
    }

    pub fn all() -> Self {
        Self([true; 3])
    }

    pub fn none() -> Self {
        Self([false; 3])
    }

    pub fn is_enabled(&self, window: ReminderWindow) -> bool {
        self.0[window.index()]
    }
}

impl Default for ReminderDays {
    fn default() -> Self {
        Self::all()
    }
}

impl Display for ReminderDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let flags: Vec<&str> = self
            .0
            .iter()
            .map(|enabled| if *enabled { "1" } else { "0" })
            .collect();
        write!(f, "{}", flags.join(","))
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseReminderDaysError {
    #[error("Expected 3 reminder day flags, found {0}")]
    InvalidLength(usize),
    #[error("Reminder day flag number {0} is empty")]
    EmptyFlag(usize),
}

impl FromStr for ReminderDays {
    type Err = ParseReminderDaysError;

    /// Accepts both `"1,0,1"` and `"101"`. A flag of `0` disables the
    /// window, every other value enables it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let flags: Vec<String> = if s.contains(',') {
            s.split(',').map(|flag| flag.trim().to_string()).collect()
        } else {
            s.chars().map(|c| c.to_string()).collect()
        };
        if flags.len() != 3 {
            return Err(ParseReminderDaysError::InvalidLength(flags.len()));
        }

        let mut days = [false; 3];
        for (i, flag) in flags.iter().enumerate() {
            if flag.is_empty() {
                return Err(ParseReminderDaysError::EmptyFlag(i + 1));
            }
            days[i] = flag != "0";
        }
        Ok(Self(days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 1000 * 60 * 60;

    #[test]
    fn classifies_windows_on_exact_boundaries() {
        assert_eq!(ReminderWindow::classify(0), Some(ReminderWindow::OneDay));
        assert_eq!(ReminderWindow::classify(2 * HOUR), Some(ReminderWindow::OneDay));
        assert_eq!(ReminderWindow::classify(24 * HOUR), Some(ReminderWindow::OneDay));
        assert_eq!(
            ReminderWindow::classify(24 * HOUR + 1000),
            Some(ReminderWindow::ThreeDays)
        );
        assert_eq!(
            ReminderWindow::classify(72 * HOUR),
            Some(ReminderWindow::ThreeDays)
        );
        assert_eq!(
            ReminderWindow::classify(72 * HOUR + 1000),
            Some(ReminderWindow::SevenDays)
        );
        assert_eq!(
            ReminderWindow::classify(168 * HOUR),
            Some(ReminderWindow::SevenDays)
        );
        assert_eq!(ReminderWindow::classify(168 * HOUR + 1000), None);
    }

    #[test]
    fn past_events_get_no_window() {
        assert_eq!(ReminderWindow::classify(-1), None);
        assert_eq!(ReminderWindow::classify(-5 * HOUR), None);
    }

    #[test]
    fn window_days_roundtrip() {
        for window in &[
            ReminderWindow::OneDay,
            ReminderWindow::ThreeDays,
            ReminderWindow::SevenDays,
        ] {
            assert_eq!(ReminderWindow::from_days(window.days()), Some(*window));
        }
        assert_eq!(ReminderWindow::from_days(2), None);
        assert_eq!(ReminderWindow::OneDay.to_string(), "1 day");
        assert_eq!(ReminderWindow::SevenDays.to_string(), "7 days");
    }

    #[test]
    fn parses_reminder_days() {
        let days = "1,0,1".parse::<ReminderDays>().unwrap();
        assert!(days.is_enabled(ReminderWindow::SevenDays));
        assert!(!days.is_enabled(ReminderWindow::ThreeDays));
        assert!(days.is_enabled(ReminderWindow::OneDay));

        assert_eq!("110".parse::<ReminderDays>(), Ok(ReminderDays::new(true, true, false)));
        assert_eq!(" 0, 0 ,0 ".parse::<ReminderDays>(), Ok(ReminderDays::none()));
        assert_eq!(ReminderDays::new(true, false, true).to_string(), "1,0,1");
    }

    #[test]
    fn rejects_invalid_reminder_days() {
        assert_eq!(
            "1,1".parse::<ReminderDays>(),
            Err(ParseReminderDaysError::InvalidLength(2))
        );
        assert_eq!(
            "1111".parse::<ReminderDays>(),
            Err(ParseReminderDaysError::InvalidLength(4))
        );
        assert_eq!(
            "1,,1".parse::<ReminderDays>(),
            Err(ParseReminderDaysError::EmptyFlag(2))
        );
    }
}
