use orgreminders_api::Application;
use orgreminders_infra::{Config, OrgRemindersContext};
use orgreminders_sdk::OrgRemindersSDK;

pub struct TestApp {
    pub config: Config,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, OrgRemindersSDK, String) {
    let mut ctx = OrgRemindersContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.run_reminder_job = false;

    let config = ctx.config.clone();
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

    let app = TestApp { config };
    let sdk = OrgRemindersSDK::new(address.clone());
    (app, sdk, address)
}
