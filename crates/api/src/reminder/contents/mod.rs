mod course;
mod group;
mod site;
mod user;

use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use lms_reminders_domain::{
    CalendarEvent, EventKind, MessageFormat, Principal, Recipients, ReminderCategory,
    ReminderMessage, ReminderWindow,
};
use super::send_event_reminders::SkipReason;
use lms_reminders_infra::RemindersContext;
use tracing::error;

/// Component name every reminder message is sent from
pub const REMINDERS_COMPONENT: &str = "local_reminders";

/// Builds the `ReminderMessage` for a `CalendarEvent` with the builder that
/// matches the kind of event.
///
/// Gives the reason to skip the event if the user, course or group it belongs
/// to does not exist, if nobody would receive the message, or if the event
/// kind is unknown.
pub async fn build_reminder_message(
    event: &CalendarEvent,
    window: ReminderWindow,
    from: &Principal,
    ctx: &RemindersContext,
) -> Result<ReminderMessage, SkipReason> {
    let timezone = ctx.config.default_timezone;
    match &event.kind {
        EventKind::Site => Ok(site::build(event, window, from, timezone)),
        EventKind::User { user_id } => {
            let user = ctx
                .repos
                .users
                .find(user_id)
                .await
                .ok_or(SkipReason::SubjectNotFound)?;
            Ok(user::build(event, window, &user, from))
        }
        EventKind::Course { course_id } => {
            let course = ctx
                .repos
                .courses
                .find(course_id)
                .await
                .ok_or(SkipReason::SubjectNotFound)?;
            Ok(course::build(event, window, &course, from, timezone))
        }
        EventKind::Group { group_id } => {
            let group = ctx
                .repos
                .groups
                .find(group_id)
                .await
                .ok_or(SkipReason::SubjectNotFound)?;
            let roles = ctx
                .repos
                .groups
                .find_members_by_role(&group.id, &group.course_id)
                .await
                .map_err(|e| {
                    error!("Unable to find members of group {}. Err: {:?}", group.id, e);
                    SkipReason::NoRecipients
                })?;
            group::build(event, window, &group, roles, from, timezone)
                .ok_or(SkipReason::NoRecipients)
        }
        EventKind::Unknown { event_type } => {
            Err(SkipReason::UnknownEventType(event_type.clone()))
        }
    }
}

/// Text content shared by all kinds of reminders
struct ReminderContent<'a> {
    event: &'a CalendarEvent,
    window: ReminderWindow,
    /// Short label shown in the subject, e.g. the course short name
    label: String,
    /// Extra line describing where the event belongs, e.g. `("Course", "Algorithms")`
    context: Option<(&'static str, String)>,
    /// Timezone the start time is presented in
    timezone: Tz,
}

impl<'a> ReminderContent<'a> {
    fn subject(&self) -> String {
        format!("[{}] Reminder: {}", self.label, self.event.name)
    }

    fn intro(&self) -> String {
        format!(
            "This is a reminder that the event below starts within {}.",
            self.window
        )
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        let mut details = vec![(
            "When",
            format_timestamp(self.event.start_ts, self.timezone),
        )];
        if let Some(duration) = format_duration(self.event.duration) {
            details.push(("Duration", duration));
        }
        if let Some((name, value)) = &self.context {
            details.push((*name, value.clone()));
        }
        details
    }

    fn full_message(&self) -> String {
        let mut lines = vec![self.event.name.clone(), String::new(), self.intro(), String::new()];
        for (name, value) in self.details() {
            lines.push(format!("{}: {}", name, value));
        }
        if !self.event.description.trim().is_empty() {
            lines.push(String::new());
            lines.push(self.event.description.trim().to_string());
        }
        lines.join("\n")
    }

    fn full_message_html(&self) -> String {
        let mut html = format!(
            "<p>{}</p><h3>{}</h3>",
            html_escape(&self.intro()),
            html_escape(&self.event.name)
        );
        for (name, value) in self.details() {
            html.push_str(&format!(
                "<p><strong>{}:</strong> {}</p>",
                name,
                html_escape(&value)
            ));
        }
        if !self.event.description.trim().is_empty() {
            html.push_str(&format!(
                "<div>{}</div>",
                html_escape(self.event.description.trim())
            ));
        }
        html
    }

    fn into_message(
        self,
        category: ReminderCategory,
        from: &Principal,
        recipients: Recipients,
    ) -> ReminderMessage {
        ReminderMessage {
            component: REMINDERS_COMPONENT.into(),
            name: format!("reminders_{}", category.as_str()),
            user_from: from.clone(),
            recipients,
            subject: self.subject(),
            full_message: self.full_message(),
            full_message_format: MessageFormat::Plain,
            full_message_html: self.full_message_html(),
            notification: true,
        }
    }
}

fn format_timestamp(timestamp_millis: i64, timezone: Tz) -> String {
    match Utc.timestamp_millis_opt(timestamp_millis).single() {
        Some(date) => date
            .with_timezone(&timezone)
            .format("%A, %d %B %Y, %H:%M %Z")
            .to_string(),
        None => timestamp_millis.to_string(),
    }
}

fn format_duration(duration_millis: i64) -> Option<String> {
    let minutes = duration_millis / (1000 * 60);
    if minutes <= 0 {
        return None;
    }
    let plural = |value: i64, unit: &str| {
        if value == 1 {
            format!("1 {}", unit)
        } else {
            format!("{} {}s", value, unit)
        }
    };
    let (hours, minutes) = (minutes / 60, minutes % 60);
    let duration = match (hours, minutes) {
        (0, minutes) => plural(minutes, "minute"),
        (hours, 0) => plural(hours, "hour"),
        (hours, minutes) => format!("{} {}", plural(hours, "hour"), plural(minutes, "minute")),
    };
    Some(duration)
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
