use crate::{
    error::NotifierError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use event_notifier_api_structs::dispatch_reminders::*;
use event_notifier_domain::{
    create_notification_tasks, DispatchResult, DispatchStatus, NotificationTask,
    NotificationWindow, ReminderMessage, Tz,
};
use event_notifier_infra::{ConfigError, Email, NotifierContext};
use tracing::{error, info, warn};

pub async fn dispatch_reminders_controller(
    ctx: web::Data<NotifierContext>,
) -> Result<HttpResponse, NotifierError> {
    let usecase = DispatchRemindersUseCase {
        trigger: DispatchTrigger::Http,
    };

    execute(usecase, &ctx)
        .await
        .map(|processed| HttpResponse::Ok().json(APIResponse::new(processed)))
        .map_err(NotifierError::from)
}

/// CORS preflight, the headers themselves are added to every response
pub async fn dispatch_reminders_preflight_controller() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DispatchTrigger {
    Http,
    JobScheduler,
}

/// Emails the owners of all `Event`s that are about to start or end
#[derive(Debug)]
pub struct DispatchRemindersUseCase {
    pub trigger: DispatchTrigger,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    Configuration(ConfigError),
    StorageError(String),
}

impl From<UseCaseError> for NotifierError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Configuration(e) => Self::Misconfigured(e.to_string()),
            UseCaseError::StorageError(e) => {
                Self::InternalError(format!("Unable to query events: {}", e))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DispatchRemindersUseCase {
    type Response = Vec<DispatchResult>;

    type Error = UseCaseError;

    const NAME: &'static str = "DispatchReminders";

    async fn execute(&mut self, ctx: &NotifierContext) -> Result<Self::Response, Self::Error> {
        // Fail before touching any collaborator
        let credentials = ctx
            .config
            .credentials
            .validate()
            .map_err(UseCaseError::Configuration)?;

        let settings = &ctx.config.dispatcher;
        let window = NotificationWindow::compute(
            ctx.sys.get_timestamp_millis(),
            settings.lookahead_minutes,
            settings.buffer_seconds,
        );

        let (starting, ending) = futures::try_join!(
            ctx.repos.events.find_by_start_time(&window),
            ctx.repos.events.find_by_end_time(&window),
        )
        .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        let tasks = create_notification_tasks(&window, starting, ending);
        let task_count = tasks.len();

        // Sequential to keep the order of the results and to go easy on the email provider
        let mut processed = Vec::with_capacity(task_count);
        for task in &tasks {
            if let Some(result) =
                dispatch_reminder(task, &credentials.mail_from, &settings.timezone, ctx).await
            {
                processed.push(result);
            }
        }

        let failed = processed
            .iter()
            .filter(|r| r.status == DispatchStatus::Failed)
            .count();
        info!(
            "Dispatch run ({:?}) for window [{}, {}]: {} tasks, {} attempted, {} failed",
            self.trigger,
            window.start(),
            window.end(),
            task_count,
            processed.len(),
            failed
        );

        Ok(processed)
    }
}

/// `None` when there is nobody to send the reminder to
async fn dispatch_reminder(
    task: &NotificationTask,
    from: &str,
    timezone: &Tz,
    ctx: &NotifierContext,
) -> Option<DispatchResult> {
    let user = match ctx.repos.users.find(&task.event.user_id).await {
        Some(user) => user,
        None => {
            warn!(
                "Skipping {} reminder for event {}: owner {} was not found",
                task.edge, task.event.id, task.event.user_id
            );
            return None;
        }
    };
    let recipient = match user.deliverable_email() {
        Some(email) => email.to_string(),
        None => {
            warn!(
                "Skipping {} reminder for event {}: owner {} has no email",
                task.edge, task.event.id, user.id
            );
            return None;
        }
    };

    let message = ReminderMessage::new(task, timezone);
    let email = Email {
        from: from.to_string(),
        to: recipient.clone(),
        subject: message.subject,
        text: message.text,
        html: message.html,
    };

    match ctx.mailer.send(&email).await {
        Ok(()) => Some(DispatchResult::sent(task, &recipient)),
        Err(e) => {
            error!(
                "Unable to send {} reminder for event {}: {:?}",
                task.edge, task.event.id, e
            );
            Some(DispatchResult::failed(task, &recipient, e.to_string()))
        }
    }
}
