use chrono::{TimeZone, Utc};
use event_notifier_api::Application;
use event_notifier_infra::{
    Config, Credentials, InMemoryEventRepo, InMemoryMailer, InMemoryUserRepo, NotifierContext,
    Repos, StaticTimeSys,
};
use event_notifier_sdk::NotifierSDK;
use std::sync::Arc;

pub struct TestApp {
    pub events: Arc<InMemoryEventRepo>,
    pub users: Arc<InMemoryUserRepo>,
    pub mailer: Arc<InMemoryMailer>,
}

/// 2024-01-01T10:00:00Z, the window of a run is then [10:01:30, 10:02:30]
pub fn now() -> i64 {
    at(10, 0, 0)
}

pub fn at(h: u32, m: u32, s: u32) -> i64 {
    Utc.with_ymd_and_hms(2024, 1, 1, h, m, s)
        .unwrap()
        .timestamp_millis()
}

pub fn credentials() -> Credentials {
    Credentials {
        event_store_url: Some("postgres://localhost:5432/notifier".into()),
        event_store_service_key: Some("service-key".into()),
        mail_api_key: Some("key-123".into()),
        mail_domain: Some("mg.example.com".into()),
        mail_from: Some("reminders@mg.example.com".into()),
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, NotifierSDK, String) {
    spawn_app_with(credentials()).await
}

pub async fn spawn_app_with(credentials: Credentials) -> (TestApp, NotifierSDK, String) {
    let mut config = Config::default();
    config.port = 0; // Random port
    config.run_job_scheduler = false;
    config.credentials = credentials;

    let events = Arc::new(InMemoryEventRepo::new());
    let users = Arc::new(InMemoryUserRepo::new());
    let mailer = Arc::new(InMemoryMailer::new());
    let mut ctx = NotifierContext::create_inmemory(config);
    ctx.repos = Repos {
        events: events.clone(),
        users: users.clone(),
    };
    ctx.mailer = mailer.clone();
    ctx.sys = Arc::new(StaticTimeSys(now()));

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp {
        events,
        users,
        mailer,
    };
    let sdk = NotifierSDK::new(address.clone());
    (app, sdk, address)
}
