mod error;
mod job_schedulers;
mod notification;
mod shared;
mod status;

use actix_web::{dev::Server, middleware, web, App, HttpServer};
use event_notifier_infra::NotifierContext;
use job_schedulers::start_dispatch_reminders_job;
use std::net::TcpListener;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    notification::configure_routes(cfg);
    status::configure_routes(cfg);
}

/// The dispatch endpoint is called by schedulers and browsers alike
fn cors_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add((
            "Access-Control-Allow-Headers",
            "authorization, x-client-info, apikey, content-type",
        ))
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: NotifierContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: NotifierContext) {
        if context.config.run_job_scheduler {
            start_dispatch_reminders_job(context);
        } else {
            info!("In process job scheduler is disabled, waiting for external triggers");
        }
    }

    async fn configure_server(context: NotifierContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let ctx = web::Data::new(context);

        let server = HttpServer::new(move || {
            App::new()
                .wrap(cors_headers())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(ctx.clone())
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
