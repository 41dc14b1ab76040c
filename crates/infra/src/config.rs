use chrono_tz::Tz;
use lms_reminders_domain::{ReminderCategory, ReminderDays};
use std::{
    fmt::{Debug, Display},
    str::FromStr,
};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Reminder windows turned on for site events
    pub site_reminder_days: ReminderDays,
    /// Reminder windows turned on for user events
    pub user_reminder_days: ReminderDays,
    /// Reminder windows turned on for course events and due dates
    pub course_reminder_days: ReminderDays,
    /// Reminder windows turned on for group events
    pub group_reminder_days: ReminderDays,
    /// When set, a reminder found in the sent reminders log is not sent again.
    /// Turning it off makes the job log the duplicate and still send it.
    pub enforce_sent_log: bool,
    /// Seconds between each run of the send reminders job
    pub cron_interval_secs: u64,
    /// Timezone used for reminder messages that do not have a single
    /// recipient with a known timezone
    pub default_timezone: Tz,
}

impl Config {
    /// Creates the `Config` from environment variables, falling back to
    /// the defaults for missing or invalid values.
    pub fn new() -> Self {
        let defaults = Self::default();
        let cron_interval_secs =
            parse_env_var("REMINDERS_CRON_INTERVAL_SECS", defaults.cron_interval_secs);
        Self {
            site_reminder_days: parse_env_var("REMINDERS_SITE_RDAYS", defaults.site_reminder_days),
            user_reminder_days: parse_env_var("REMINDERS_USER_RDAYS", defaults.user_reminder_days),
            course_reminder_days: parse_env_var(
                "REMINDERS_COURSE_RDAYS",
                defaults.course_reminder_days,
            ),
            group_reminder_days: parse_env_var(
                "REMINDERS_GROUP_RDAYS",
                defaults.group_reminder_days,
            ),
            enforce_sent_log: parse_env_var("REMINDERS_ENFORCE_SENT_LOG", defaults.enforce_sent_log),
            cron_interval_secs: if cron_interval_secs == 0 {
                warn!(
                    "REMINDERS_CRON_INTERVAL_SECS can not be 0, falling back to {} seconds.",
                    defaults.cron_interval_secs
                );
                defaults.cron_interval_secs
            } else {
                cron_interval_secs
            },
            default_timezone: parse_env_var("REMINDERS_DEFAULT_TIMEZONE", defaults.default_timezone),
        }
    }

    pub fn reminder_days(&self, category: ReminderCategory) -> &ReminderDays {
        match category {
            ReminderCategory::Site => &self.site_reminder_days,
            ReminderCategory::User => &self.user_reminder_days,
            ReminderCategory::Course => &self.course_reminder_days,
            ReminderCategory::Group => &self.group_reminder_days,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_reminder_days: ReminderDays::all(),
            user_reminder_days: ReminderDays::all(),
            course_reminder_days: ReminderDays::all(),
            group_reminder_days: ReminderDays::all(),
            enforce_sent_log: true,
            cron_interval_secs: 5 * 60,
            default_timezone: Tz::UTC,
        }
    }
}

fn parse_env_var<T>(name: &str, default: T) -> T
where
    T: FromStr + Debug,
    T::Err: Display,
{
    match std::env::var(name) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(
                    "The given {}: {} is not valid ({}), falling back to the default: {:?}.",
                    name, value, e, default
                );
                default
            }
        },
        Err(_) => default,
    }
}
