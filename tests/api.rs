mod helpers;

use event_notifier_domain::{Event, User};
use event_notifier_sdk::{APIErrorVariant, DispatchStatus, EventEdge};
use helpers::setup::{at, credentials, spawn_app, spawn_app_with, TestApp};

fn insert_owner(app: &TestApp, email: &str) -> User {
    let user = User::new(Some(email.into()));
    app.users.insert(&user);
    user
}

fn insert_event(app: &TestApp, owner: &User, start_ts: i64, end_ts: i64) -> Event {
    let event = Event::new(owner.id.clone(), "Quarterly planning", start_ts, end_ts);
    app.events.insert(&event);
    event
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_dispatch_without_events() {
    let (app, sdk, _) = spawn_app().await;
    let res = sdk
        .notification
        .dispatch()
        .await
        .expect("Expected dispatch to succeed");
    assert!(res.success);
    assert!(res.processed.is_empty());
    assert!(app.mailer.sent().is_empty());
}

#[actix_web::main]
#[test]
async fn test_dispatch_notifies_owners() {
    let (app, sdk, _) = spawn_app().await;
    let ada = insert_owner(&app, "ada@example.com");
    let grace = insert_owner(&app, "grace@example.com");
    let starting = insert_event(&app, &ada, at(10, 2, 0), at(11, 0, 0));
    let ending = insert_event(&app, &grace, at(9, 0, 0), at(10, 1, 30));
    // Too far into the future
    insert_event(&app, &ada, at(10, 5, 0), at(11, 0, 0));

    let res = sdk
        .notification
        .dispatch()
        .await
        .expect("Expected dispatch to succeed");
    assert!(res.success);
    assert_eq!(res.processed.len(), 2);

    assert_eq!(res.processed[0].event_id, starting.id);
    assert_eq!(res.processed[0].edge, EventEdge::Start);
    assert_eq!(res.processed[0].status, DispatchStatus::Sent);
    assert_eq!(
        res.processed[0].recipient_email.as_deref(),
        Some("ada@example.com")
    );
    assert!(res.processed[0].error.is_none());

    assert_eq!(res.processed[1].event_id, ending.id);
    assert_eq!(res.processed[1].edge, EventEdge::End);
    assert_eq!(
        res.processed[1].recipient_email.as_deref(),
        Some("grace@example.com")
    );

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].subject, "Reminder: Quarterly planning is starting soon");
    assert_eq!(sent[1].subject, "Reminder: Quarterly planning is ending soon");
    assert!(sent.iter().all(|e| e.from == "reminders@mg.example.com"));
}

#[actix_web::main]
#[test]
async fn test_dispatch_accepts_get() {
    let (_, _, address) = spawn_app().await;
    let res = reqwest::get(&format!("{}/api/v1/notifications/dispatch", address))
        .await
        .expect("Expected request to be sent");
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let body = res.json::<serde_json::Value>().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "success": true, "processed": [] })
    );
}

#[actix_web::main]
#[test]
async fn test_dispatch_with_missing_configuration() {
    let mut creds = credentials();
    creds.event_store_url = None;
    let (app, sdk, _) = spawn_app_with(creds).await;
    let owner = insert_owner(&app, "ada@example.com");
    insert_event(&app, &owner, at(10, 2, 0), at(11, 0, 0));

    let err = sdk
        .notification
        .dispatch()
        .await
        .expect_err("Expected dispatch to fail");
    match err.variant {
        APIErrorVariant::UnexpectedStatusCode(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("Unexpected error variant: {:?}", other),
    }
    assert!(err.message.contains("EVENT_STORE_URL"));
    assert!(app.mailer.sent().is_empty());
}

#[actix_web::main]
#[test]
async fn test_preflight_allows_any_origin() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk
        .notification
        .preflight()
        .await
        .expect("Expected preflight to succeed");
    assert_eq!(res.allow_origin.as_deref(), Some("*"));
    assert_eq!(
        res.allow_headers.as_deref(),
        Some("authorization, x-client-info, apikey, content-type")
    );
}
