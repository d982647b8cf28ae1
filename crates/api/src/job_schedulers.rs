use crate::{
    notification::dispatch_reminders::{DispatchRemindersUseCase, DispatchTrigger},
    shared::usecase::execute,
};
use actix_web::rt::time::{interval, sleep_until, Instant};
use event_notifier_infra::NotifierContext;
use std::time::Duration;

/// Seconds until the start of the next whole minute, in `1..=60`
pub fn get_start_delay(now_ts: i64) -> u64 {
    let secs_into_minute = (now_ts / 1000).rem_euclid(60) as u64;
    60 - secs_into_minute
}

/// Runs the reminder dispatch at the start of every minute
pub fn start_dispatch_reminders_job(ctx: NotifierContext) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let start = Instant::now() + Duration::from_secs(get_start_delay(now));

        sleep_until(start).await;
        let mut minutely_interval = interval(Duration::from_secs(60));
        loop {
            minutely_interval.tick().await;
            // A slow run must not delay the next tick
            actix_web::rt::spawn(dispatch_reminders(ctx.clone()));
        }
    });
}

async fn dispatch_reminders(ctx: NotifierContext) {
    let usecase = DispatchRemindersUseCase {
        trigger: DispatchTrigger::JobScheduler,
    };
    // Failures are logged by `execute`
    let _ = execute(usecase, &ctx).await;
}
