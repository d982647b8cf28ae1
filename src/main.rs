mod telemetry;

use event_notifier_api::Application;
use event_notifier_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("event_notifier".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context()
        .await
        .expect("Event store and mailer configuration to be valid");

    let app = Application::new(context).await?;
    app.start().await
}
