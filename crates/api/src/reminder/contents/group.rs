use super::ReminderContent;
use chrono_tz::Tz;
use lms_reminders_domain::{
    CalendarEvent, Group, GroupRoleMembers, Principal, Recipients, ReminderCategory,
    ReminderMessage, ReminderWindow,
};

/// Group events are sent to every member of every role in the group. A member
/// with several roles is listed, and thereby notified, once per role.
///
/// Returns `None` when the group has no members.
pub fn build(
    event: &CalendarEvent,
    window: ReminderWindow,
    group: &Group,
    roles: Vec<GroupRoleMembers>,
    from: &Principal,
    timezone: Tz,
) -> Option<ReminderMessage> {
    let members: Vec<_> = roles.into_iter().flat_map(|role| role.members).collect();
    if members.is_empty() {
        return None;
    }
    let message = ReminderContent {
        event,
        window,
        label: group.name.clone(),
        context: Some(("Group", group.name.clone())),
        timezone,
    }
    .into_message(ReminderCategory::Group, from, Recipients::Members(members));
    Some(message)
}
