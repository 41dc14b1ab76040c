use super::contents::build_reminder_message;
use crate::shared::usecase::UseCase;
use lms_reminders_domain::{
    CalendarEvent, Principal, Recipients, ReminderWindow, SentReminderKey, ID,
    REMINDERS_LOG_CATEGORY, SENT_REMINDER_LOG_ACTION,
};
use lms_reminders_infra::{AuditLogQuery, RemindersContext};
use std::collections::HashSet;
use tracing::{error, info, warn};

/// How far ahead upcoming events are looked up
pub const REMINDERS_LOOKAHEAD_MILLIS: i64 = 1000 * 60 * 60 * 24 * 7;
/// Max number of events handled in one run of the job
pub const MAX_REMINDERS_FOR_CRON_CYCLE: usize = 100;
/// How far back the sent reminders log is read
pub const SENT_LOG_CUTOFF_MILLIS: i64 = 1000 * 60 * 60 * 48;

/// Sends a reminder for every upcoming `CalendarEvent` that has entered
/// one of its `ReminderWindow`s.
#[derive(Debug, Default)]
pub struct SendEventRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

/// Why no reminder was sent for an event
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The event has started or is more than seven days away
    OutOfWindow,
    AlreadySent(ReminderWindow),
    UnknownEventType(String),
    /// Reminders for this window are turned off for the event category
    Disabled(ReminderWindow),
    /// The user, course or group of the event does not exist
    SubjectNotFound,
    /// Nobody would receive the reminder, e.g. a group without members
    NoRecipients,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReminderOutcome {
    Sent {
        window: ReminderWindow,
        recipients: Recipients,
    },
    Skipped(SkipReason),
    /// The message transport rejected the reminder
    Failed(String),
}

/// What happened to each event handled in a run
#[derive(Debug, Default)]
pub struct RemindersReport {
    pub outcomes: Vec<(ID, ReminderOutcome)>,
}

impl RemindersReport {
    pub fn outcome(&self, event_id: &ID) -> Option<&ReminderOutcome> {
        self.outcomes
            .iter()
            .find(|(id, _)| id == event_id)
            .map(|(_, outcome)| outcome)
    }

    pub fn sent(&self) -> usize {
        self.count(|o| matches!(o, ReminderOutcome::Sent { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ReminderOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ReminderOutcome::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&ReminderOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| predicate(o)).count()
    }
}

/// Reads the reminders sent during the last 48 hours. The job can still run
/// without them, so a failed lookup only gives an empty set.
async fn find_sent_reminders(now: i64, ctx: &RemindersContext) -> HashSet<SentReminderKey> {
    let query = AuditLogQuery {
        category: REMINDERS_LOG_CATEGORY.into(),
        action: SENT_REMINDER_LOG_ACTION.into(),
        since: now - SENT_LOG_CUTOFF_MILLIS,
    };
    match ctx.repos.audit_log.find(&query).await {
        Ok(entries) => entries
            .iter()
            .filter_map(SentReminderKey::from_entry)
            .collect(),
        Err(e) => {
            error!("Unable to read the sent reminders log: {:?}", e);
            HashSet::new()
        }
    }
}

async fn find_sender(ctx: &RemindersContext) -> Principal {
    match ctx.repos.users.find_admin().await {
        Some(admin) => Principal::from(&admin),
        None => {
            warn!("No admin user found, reminders are sent from the no-reply user");
            Principal::noreply()
        }
    }
}

async fn remind_event(
    event: &CalendarEvent,
    now: i64,
    sent_reminders: &HashSet<SentReminderKey>,
    from: &Principal,
    ctx: &RemindersContext,
) -> ReminderOutcome {
    let window = match ReminderWindow::classify(event.start_ts - now) {
        Some(window) => window,
        None => return ReminderOutcome::Skipped(SkipReason::OutOfWindow),
    };

    let key = SentReminderKey::new(event.id.clone(), window);
    if sent_reminders.contains(&key) {
        if ctx.config.enforce_sent_log {
            return ReminderOutcome::Skipped(SkipReason::AlreadySent(window));
        }
        warn!(
            "Reminder for event {} was already sent {} ahead, sending it again",
            event.id, window
        );
    }

    let category = match event.kind.category() {
        Some(category) => category,
        None => {
            warn!(
                "Event {} has unknown event type: {}",
                event.id,
                event.kind.event_type()
            );
            return ReminderOutcome::Skipped(SkipReason::UnknownEventType(
                event.kind.event_type().to_string(),
            ));
        }
    };

    if !ctx.config.reminder_days(category).is_enabled(window) {
        return ReminderOutcome::Skipped(SkipReason::Disabled(window));
    }

    let message = match build_reminder_message(event, window, from, ctx).await {
        Ok(message) => message,
        Err(reason) => {
            info!(
                "Skipping event {} of type {}: {:?}",
                event.id,
                event.kind.event_type(),
                reason
            );
            return ReminderOutcome::Skipped(reason);
        }
    };

    if let Err(e) = ctx.services.message_sender.send(&message).await {
        error!(
            "Failed to send reminder for event {} to {}: {:?}",
            event.id, message.recipients, e
        );
        return ReminderOutcome::Failed(e.to_string());
    }

    let entry = key.to_entry(ctx.sys.get_timestamp_millis());
    if let Err(e) = ctx.repos.audit_log.insert(&entry).await {
        error!(
            "Reminder for event {} was sent but could not be logged: {:?}",
            event.id, e
        );
    }

    ReminderOutcome::Sent {
        window,
        recipients: message.recipients,
    }
}

#[async_trait::async_trait]
impl UseCase for SendEventRemindersUseCase {
    type Response = RemindersReport;

    type Errors = UseCaseError;

    const NAME: &'static str = "SendEventReminders";

    async fn execute(&mut self, ctx: &RemindersContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();
        let mut events = ctx
            .repos
            .events
            .find_upcoming(now, REMINDERS_LOOKAHEAD_MILLIS, MAX_REMINDERS_FOR_CRON_CYCLE)
            .await
            .map_err(|e| {
                error!("Unable to fetch upcoming events: {:?}", e);
                UseCaseError::StorageError
            })?;
        events.truncate(MAX_REMINDERS_FOR_CRON_CYCLE);

        let mut report = RemindersReport::default();
        if events.is_empty() {
            info!("No upcoming events to send reminders for");
            return Ok(report);
        }

        let sent_reminders = find_sent_reminders(now, ctx).await;
        let from = find_sender(ctx).await;

        for event in &events {
            let outcome = remind_event(event, now, &sent_reminders, &from, ctx).await;
            report.outcomes.push((event.id.clone(), outcome));
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_reminders_domain::{
        AuditLogEntry, Course, EventKind, Group, GroupRoleMembers, ReminderDays, User,
    };
    use lms_reminders_infra::{
        setup_context_inmemory, IAuditLogRepo, IEventRepo, IGroupRepo, InMemoryMessageSender,
        StaticTimeSys,
    };
    use std::sync::Arc;

    const HOUR: i64 = 1000 * 60 * 60;
    // Mon Feb 22 2021 09:30:00 UTC
    const NOW: i64 = 1613986200000;

    struct TestContext {
        ctx: RemindersContext,
        sender: Arc<InMemoryMessageSender>,
    }

    fn setup() -> TestContext {
        let mut ctx = setup_context_inmemory();
        ctx.sys = Arc::new(StaticTimeSys(NOW));
        let sender = Arc::new(InMemoryMessageSender::new());
        ctx.services.message_sender = sender.clone();
        TestContext { ctx, sender }
    }

    async fn insert_event(ctx: &RemindersContext, start_in: i64, kind: EventKind) -> CalendarEvent {
        let event = CalendarEvent::new("Upcoming", NOW + start_in, kind);
        ctx.repos.events.insert(&event).await.unwrap();
        event
    }

    async fn run(ctx: &RemindersContext) -> RemindersReport {
        SendEventRemindersUseCase::default()
            .execute(ctx)
            .await
            .unwrap()
    }

    async fn sent_log(ctx: &RemindersContext) -> Vec<SentReminderKey> {
        let query = AuditLogQuery {
            category: REMINDERS_LOG_CATEGORY.into(),
            action: SENT_REMINDER_LOG_ACTION.into(),
            since: 0,
        };
        ctx.repos
            .audit_log
            .find(&query)
            .await
            .unwrap()
            .iter()
            .filter_map(SentReminderKey::from_entry)
            .collect()
    }

    #[tokio::test]
    async fn sends_site_reminder_and_logs_it() {
        let TestContext { ctx, sender } = setup();
        let event = insert_event(&ctx, 2 * HOUR, EventKind::Site).await;

        let report = run(&ctx).await;

        assert_eq!(
            report.outcome(&event.id),
            Some(&ReminderOutcome::Sent {
                window: ReminderWindow::OneDay,
                recipients: Recipients::Broadcast
            })
        );
        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipients, Recipients::Broadcast);
        assert_eq!(
            sent_log(&ctx).await,
            vec![SentReminderKey::new(event.id, ReminderWindow::OneDay)]
        );
    }

    #[tokio::test]
    async fn uses_window_of_exact_boundaries() {
        let TestContext { ctx, sender } = setup();
        let one_day = insert_event(&ctx, 24 * HOUR, EventKind::Site).await;
        let three_days = insert_event(&ctx, 72 * HOUR, EventKind::Site).await;
        let seven_days = insert_event(&ctx, 168 * HOUR, EventKind::Site).await;

        let report = run(&ctx).await;

        let window_of = |id: &ID| match report.outcome(id) {
            Some(ReminderOutcome::Sent { window, .. }) => Some(*window),
            _ => None,
        };
        assert_eq!(window_of(&one_day.id), Some(ReminderWindow::OneDay));
        assert_eq!(window_of(&three_days.id), Some(ReminderWindow::ThreeDays));
        assert_eq!(window_of(&seven_days.id), Some(ReminderWindow::SevenDays));
        assert_eq!(sender.sent().len(), 3);
    }

    #[tokio::test]
    async fn skips_events_that_have_started() {
        let TestContext { ctx, sender } = setup();
        let mut event = CalendarEvent::new("Ongoing", NOW - HOUR, EventKind::Site);
        event.duration = 2 * HOUR;
        ctx.repos.events.insert(&event).await.unwrap();

        let report = run(&ctx).await;

        assert_eq!(
            report.outcome(&event.id),
            Some(&ReminderOutcome::Skipped(SkipReason::OutOfWindow))
        );
        assert!(sender.sent().is_empty());
        assert!(sent_log(&ctx).await.is_empty());
    }

    #[tokio::test]
    async fn skips_disabled_windows() {
        let TestContext { mut ctx, sender } = setup();
        ctx.config.site_reminder_days = ReminderDays::new(true, true, false);
        let event = insert_event(&ctx, 2 * HOUR, EventKind::Site).await;

        let report = run(&ctx).await;

        assert_eq!(
            report.outcome(&event.id),
            Some(&ReminderOutcome::Skipped(SkipReason::Disabled(
                ReminderWindow::OneDay
            )))
        );
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn sends_user_reminder_to_owner() {
        let TestContext { ctx, sender } = setup();
        let user = User::new("alice");
        ctx.repos.users.insert(&user).await.unwrap();
        let event = insert_event(
            &ctx,
            50 * HOUR,
            EventKind::User {
                user_id: user.id.clone(),
            },
        )
        .await;

        let report = run(&ctx).await;

        assert_eq!(
            report.outcome(&event.id),
            Some(&ReminderOutcome::Sent {
                window: ReminderWindow::ThreeDays,
                recipients: Recipients::User(user.id.clone())
            })
        );
        assert_eq!(sender.sent()[0].name, "reminders_user");
    }

    #[tokio::test]
    async fn skips_user_event_of_missing_user() {
        let TestContext { ctx, sender } = setup();
        let event = insert_event(&ctx, 2 * HOUR, EventKind::User { user_id: ID::new() }).await;

        let report = run(&ctx).await;

        assert_eq!(
            report.outcome(&event.id),
            Some(&ReminderOutcome::Skipped(SkipReason::SubjectNotFound))
        );
        assert!(sender.sent().is_empty());
        assert!(sent_log(&ctx).await.is_empty());
    }

    #[tokio::test]
    async fn skips_course_event_of_missing_course() {
        let TestContext { ctx, sender } = setup();
        let event = insert_event(
            &ctx,
            100 * HOUR,
            EventKind::Course {
                course_id: ID::new(),
            },
        )
        .await;

        let report = run(&ctx).await;

        assert_eq!(
            report.outcome(&event.id),
            Some(&ReminderOutcome::Skipped(SkipReason::SubjectNotFound))
        );
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn sends_course_reminder_to_course() {
        let TestContext { ctx, sender } = setup();
        let course = Course::new("ALG", "Algorithms");
        ctx.repos.courses.insert(&course).await.unwrap();
        let event = insert_event(
            &ctx,
            2 * HOUR,
            EventKind::Course {
                course_id: course.id.clone(),
            },
        )
        .await;

        run(&ctx).await;

        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipients, Recipients::Course(course.id));
        assert_eq!(sent[0].subject, "[ALG] Reminder: Upcoming");
        assert_eq!(sent_log(&ctx).await.len(), 1);
        assert_eq!(sent_log(&ctx).await[0].event_id, event.id);
    }

    #[tokio::test]
    async fn sends_group_reminder_to_members_of_all_roles() {
        let TestContext { ctx, sender } = setup();
        let course = Course::new("ALG", "Algorithms");
        let group = Group::new(course.id.clone(), "Lab 1");
        ctx.repos.courses.insert(&course).await.unwrap();
        ctx.repos.groups.insert(&group).await.unwrap();
        let (teacher, student) = (ID::new(), ID::new());
        let groups = &ctx.repos.groups;
        groups.add_member(&group.id, &teacher, "editingteacher").await.unwrap();
        groups.add_member(&group.id, &student, "student").await.unwrap();
        groups.add_member(&group.id, &teacher, "student").await.unwrap();
        let event = insert_event(
            &ctx,
            2 * HOUR,
            EventKind::Group {
                group_id: group.id.clone(),
            },
        )
        .await;

        let report = run(&ctx).await;

        assert_eq!(
            report.outcome(&event.id),
            Some(&ReminderOutcome::Sent {
                window: ReminderWindow::OneDay,
                recipients: Recipients::Members(vec![teacher.clone(), student, teacher])
            })
        );
        assert_eq!(sender.sent().len(), 1);
    }

    #[tokio::test]
    async fn skips_unknown_event_types() {
        let TestContext { ctx, sender } = setup();
        let event = insert_event(
            &ctx,
            2 * HOUR,
            EventKind::Unknown {
                event_type: "quiz".into(),
            },
        )
        .await;

        let report = run(&ctx).await;

        assert_eq!(
            report.outcome(&event.id),
            Some(&ReminderOutcome::Skipped(SkipReason::UnknownEventType(
                "quiz".into()
            )))
        );
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn does_not_send_the_same_reminder_twice() {
        let TestContext { ctx, sender } = setup();
        let event = insert_event(&ctx, 2 * HOUR, EventKind::Site).await;

        assert_eq!(run(&ctx).await.sent(), 1);
        let report = run(&ctx).await;

        assert_eq!(
            report.outcome(&event.id),
            Some(&ReminderOutcome::Skipped(SkipReason::AlreadySent(
                ReminderWindow::OneDay
            )))
        );
        assert_eq!(sender.sent().len(), 1);
        assert_eq!(sent_log(&ctx).await.len(), 1);
    }

    #[tokio::test]
    async fn sends_reminder_again_when_sent_log_is_not_enforced() {
        let TestContext { mut ctx, sender } = setup();
        ctx.config.enforce_sent_log = false;
        insert_event(&ctx, 2 * HOUR, EventKind::Site).await;

        assert_eq!(run(&ctx).await.sent(), 1);
        assert_eq!(run(&ctx).await.sent(), 1);

        assert_eq!(sender.sent().len(), 2);
        assert_eq!(sent_log(&ctx).await.len(), 2);
    }

    #[tokio::test]
    async fn sends_reminder_for_each_window() {
        let TestContext { mut ctx, sender } = setup();
        let event = insert_event(&ctx, 60 * HOUR, EventKind::Site).await;
        assert_eq!(run(&ctx).await.sent(), 1);

        // Two days later the event is in the one day window
        ctx.sys = Arc::new(StaticTimeSys(NOW + 48 * HOUR));
        let report = run(&ctx).await;

        assert!(matches!(
            report.outcome(&event.id),
            Some(ReminderOutcome::Sent {
                window: ReminderWindow::OneDay,
                ..
            })
        ));
        assert_eq!(sender.sent().len(), 2);
    }

    #[tokio::test]
    async fn failed_send_is_not_logged() {
        let TestContext { ctx, sender } = setup();
        sender.set_failing(true);
        let event = insert_event(&ctx, 2 * HOUR, EventKind::Site).await;

        let report = run(&ctx).await;

        assert!(matches!(
            report.outcome(&event.id),
            Some(ReminderOutcome::Failed(_))
        ));
        assert_eq!(report.failed(), 1);
        assert!(sent_log(&ctx).await.is_empty());

        // The reminder is sent once the transport is back
        sender.set_failing(false);
        assert_eq!(run(&ctx).await.sent(), 1);
    }

    #[tokio::test]
    async fn failed_event_does_not_stop_the_run() {
        let TestContext { ctx, sender } = setup();
        insert_event(&ctx, HOUR, EventKind::User { user_id: ID::new() }).await;
        insert_event(&ctx, 2 * HOUR, EventKind::Site).await;
        insert_event(&ctx, 200 * HOUR, EventKind::Site).await;

        let report = run(&ctx).await;

        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.sent(), 1);
        assert_eq!(sender.sent().len(), 1);
    }

    #[tokio::test]
    async fn sends_from_admin_or_noreply() {
        let TestContext { ctx, sender } = setup();
        insert_event(&ctx, 2 * HOUR, EventKind::Site).await;
        run(&ctx).await;
        assert_eq!(sender.sent()[0].user_from, Principal::noreply());

        let TestContext { ctx, sender } = setup();
        let mut admin = User::new("admin");
        admin.is_admin = true;
        ctx.repos.users.insert(&admin).await.unwrap();
        insert_event(&ctx, 2 * HOUR, EventKind::Site).await;
        run(&ctx).await;
        assert_eq!(sender.sent()[0].user_from, Principal::from(&admin));
    }

    #[tokio::test]
    async fn handles_at_most_one_batch_of_events_per_run() {
        let TestContext { ctx, sender } = setup();
        for i in 0..150 {
            insert_event(&ctx, HOUR + i * 1000, EventKind::Site).await;
        }

        let report = run(&ctx).await;

        assert_eq!(report.outcomes.len(), MAX_REMINDERS_FOR_CRON_CYCLE);
        assert_eq!(sender.sent().len(), MAX_REMINDERS_FOR_CRON_CYCLE);
    }

    #[tokio::test]
    async fn empty_calendar_gives_empty_report() {
        let TestContext { ctx, sender } = setup();
        let report = run(&ctx).await;
        assert!(report.outcomes.is_empty());
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn skips_group_without_members() {
        let TestContext { ctx, sender } = setup();
        let course = Course::new("ALG", "Algorithms");
        let group = Group::new(course.id.clone(), "Lab 1");
        ctx.repos.courses.insert(&course).await.unwrap();
        ctx.repos.groups.insert(&group).await.unwrap();
        let event = insert_event(
            &ctx,
            HOUR,
            EventKind::Group {
                group_id: group.id.clone(),
            },
        )
        .await;

        let report = run(&ctx).await;

        assert_eq!(
            report.outcome(&event.id),
            Some(&ReminderOutcome::Skipped(SkipReason::NoRecipients))
        );
        assert!(sender.sent().is_empty());
        assert!(sent_log(&ctx).await.is_empty());

        // Once the group has members the reminder goes out in the same window
        let student = ID::new();
        ctx.repos
            .groups
            .add_member(&group.id, &student, "student")
            .await
            .unwrap();
        let report = run(&ctx).await;
        assert_eq!(
            report.outcome(&event.id),
            Some(&ReminderOutcome::Sent {
                window: ReminderWindow::OneDay,
                recipients: Recipients::Members(vec![student])
            })
        );
    }

    struct UnreachableMembersGroupRepo {
        group: Group,
    }

    #[async_trait::async_trait]
    impl IGroupRepo for UnreachableMembersGroupRepo {
        async fn insert(&self, _group: &Group) -> anyhow::Result<()> {
            Ok(())
        }

        async fn find(&self, _group_id: &ID) -> Option<Group> {
            Some(self.group.clone())
        }

        async fn add_member(
            &self,
            _group_id: &ID,
            _user_id: &ID,
            _role: &str,
        ) -> anyhow::Result<()> {
            Ok(())
        }

        async fn find_members_by_role(
            &self,
            _group_id: &ID,
            _course_id: &ID,
        ) -> anyhow::Result<Vec<GroupRoleMembers>> {
            Err(anyhow::anyhow!("Connection reset"))
        }
    }

    #[tokio::test]
    async fn failed_group_member_lookup_is_not_sent_or_logged() {
        let TestContext { mut ctx, sender } = setup();
        let group = Group::new(ID::new(), "Lab 1");
        let event = insert_event(
            &ctx,
            HOUR,
            EventKind::Group {
                group_id: group.id.clone(),
            },
        )
        .await;
        ctx.repos.groups = Arc::new(UnreachableMembersGroupRepo { group });

        let report = run(&ctx).await;

        assert_eq!(
            report.outcome(&event.id),
            Some(&ReminderOutcome::Skipped(SkipReason::NoRecipients))
        );
        assert!(sender.sent().is_empty());
        assert!(sent_log(&ctx).await.is_empty());
    }

    struct FailingAuditLogRepo {
        fail_reads: bool,
        fail_writes: bool,
    }

    #[async_trait::async_trait]
    impl IAuditLogRepo for FailingAuditLogRepo {
        async fn insert(&self, _entry: &AuditLogEntry) -> anyhow::Result<()> {
            if self.fail_writes {
                return Err(anyhow::anyhow!("Audit log is read only"));
            }
            Ok(())
        }

        async fn find(&self, _query: &AuditLogQuery) -> anyhow::Result<Vec<AuditLogEntry>> {
            if self.fail_reads {
                return Err(anyhow::anyhow!("Audit log is unavailable"));
            }
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn sends_reminders_when_sent_log_can_not_be_read() {
        let TestContext { mut ctx, sender } = setup();
        ctx.repos.audit_log = Arc::new(FailingAuditLogRepo {
            fail_reads: true,
            fail_writes: false,
        });
        let event = insert_event(&ctx, 2 * HOUR, EventKind::Site).await;

        let report = run(&ctx).await;

        assert_eq!(
            report.outcome(&event.id),
            Some(&ReminderOutcome::Sent {
                window: ReminderWindow::OneDay,
                recipients: Recipients::Broadcast
            })
        );
        assert_eq!(sender.sent().len(), 1);
    }

    #[tokio::test]
    async fn reminder_is_sent_even_if_it_can_not_be_logged() {
        let TestContext { mut ctx, sender } = setup();
        ctx.repos.audit_log = Arc::new(FailingAuditLogRepo {
            fail_reads: false,
            fail_writes: true,
        });
        let event = insert_event(&ctx, 2 * HOUR, EventKind::Site).await;

        let report = run(&ctx).await;

        assert_eq!(
            report.outcome(&event.id),
            Some(&ReminderOutcome::Sent {
                window: ReminderWindow::OneDay,
                recipients: Recipients::Broadcast
            })
        );
        assert_eq!(report.failed(), 0);
        assert_eq!(sender.sent().len(), 1);

        // Without a log entry the next run has nothing to dedup against
        assert_eq!(run(&ctx).await.sent(), 1);
        assert_eq!(sender.sent().len(), 2);
    }

    struct FailingEventRepo {}

    #[async_trait::async_trait]
    impl IEventRepo for FailingEventRepo {
        async fn insert(&self, _event: &CalendarEvent) -> anyhow::Result<()> {
            Ok(())
        }

        async fn find_upcoming(
            &self,
            _now: i64,
            _lookahead: i64,
            _limit: usize,
        ) -> anyhow::Result<Vec<CalendarEvent>> {
            Err(anyhow::anyhow!("Connection refused"))
        }
    }

    #[tokio::test]
    async fn failed_calendar_fetch_aborts_the_run() {
        let TestContext { mut ctx, sender } = setup();
        ctx.repos.events = Arc::new(FailingEventRepo {});

        let res = SendEventRemindersUseCase::default().execute(&ctx).await;

        assert!(matches!(res, Err(UseCaseError::StorageError)));
        assert!(sender.sent().is_empty());
    }
}
