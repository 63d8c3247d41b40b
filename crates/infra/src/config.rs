use orgreminders_utils::create_random_secret;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret code that has to be sent in the `orgreminders-cron-secret`
    /// header to trigger the reminder sweep over HTTP
    pub cron_secret_code: String,
    /// Port for the application to run on
    pub port: usize,
    /// Domain of the sender addresses of outgoing mail,
    /// e.g. `Choir Reminders <Choir@{mail_domain}>`
    pub mail_domain: String,
    /// When unset messages are only logged
    pub smtp: Option<SmtpConfig>,
    /// Whether the minutely reminder job runs inside the server process.
    /// Turn it off when an external scheduler calls the cron endpoint.
    pub run_reminder_job: bool,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl SmtpConfig {
    fn from_env() -> Option<Self> {
        let host = std::env::var("SMTP_HOST").ok()?;
        let default_port = 587;
        let port = match std::env::var("SMTP_PORT") {
            Ok(port) => port.parse::<u16>().unwrap_or_else(|_| {
                warn!(
                    "The given SMTP_PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port
            }),
            Err(_) => default_port,
        };
        Some(Self {
            host,
            port,
            username: std::env::var("SMTP_USERNAME").ok(),
            password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

impl Config {
    pub fn new() -> Self {
        let cron_secret_code = match std::env::var("CRON_SECRET_CODE") {
            Ok(code) => code,
            Err(_) => {
                info!("Did not find CRON_SECRET_CODE environment variable. Going to create one.");
                let code = create_random_secret(16);
                info!("Secret code for triggering reminders was generated and set to: {}", code);
                code
            }
        };
        let default_port = 5000;
        let port = match std::env::var("PORT") {
            Ok(port) => port.parse::<usize>().unwrap_or_else(|_| {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port
            }),
            Err(_) => default_port,
        };
        let mail_domain =
            std::env::var("MAIL_SENDER_DOMAIN").unwrap_or_else(|_| "orgreminders.local".into());
        let smtp = SmtpConfig::from_env();
        if smtp.is_none() {
            info!("Did not find SMTP_HOST environment variable. Outgoing messages will only be logged.");
        }
        let run_reminder_job = !matches!(
            std::env::var("REMINDER_JOB").as_deref(),
            Ok("off") | Ok("false") | Ok("0")
        );

        Self {
            cron_secret_code,
            port,
            mail_domain,
            smtp,
            run_reminder_job,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
