use super::ReminderContent;
use chrono_tz::Tz;
use lms_reminders_domain::{
    CalendarEvent, Course, Principal, Recipients, ReminderCategory, ReminderMessage,
    ReminderWindow,
};

/// Course events go to the whole course. Expanding the course into its
/// participants is left to the message transport.
pub fn build(
    event: &CalendarEvent,
    window: ReminderWindow,
    course: &Course,
    from: &Principal,
    timezone: Tz,
) -> ReminderMessage {
    ReminderContent {
        event,
        window,
        label: course.short_name.clone(),
        context: Some(("Course", course.full_name.clone())),
        timezone,
    }
    .into_message(
        ReminderCategory::Course,
        from,
        Recipients::Course(course.id.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_reminders_domain::EventKind;

    #[test]
    fn builds_course_wide_message() {
        let course = Course::new("ALG", "Algorithms and Data Structures");
        let event = CalendarEvent::new(
            "Assignment 2 due",
            0,
            EventKind::Course {
                course_id: course.id.clone(),
            },
        );
        let message = build(
            &event,
            ReminderWindow::ThreeDays,
            &course,
            &Principal::noreply(),
            Tz::UTC,
        );

        assert_eq!(message.recipients, Recipients::Course(course.id.clone()));
        assert_eq!(message.name, "reminders_course");
        assert_eq!(message.subject, "[ALG] Reminder: Assignment 2 due");
        assert!(message
            .full_message
            .contains("Course: Algorithms and Data Structures"));
    }
}
