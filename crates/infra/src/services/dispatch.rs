use crate::config::SmtpConfig;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use orgreminders_domain::OutboundMessage;
use tracing::info;

/// Hands outgoing messages to a mail transport. Text reminders are sent as
/// mail to the carriers' text gateways, so both channels go through here.
#[async_trait::async_trait]
pub trait IMessageDispatcher: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> anyhow::Result<()>;
}

pub struct SmtpDispatcher {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpDispatcher {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?.port(config.port);
        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }
        Ok(Self {
            transport: builder.build(),
        })
    }
}

fn parse_mailboxes(addresses: &[String]) -> anyhow::Result<Vec<Mailbox>> {
    addresses
        .iter()
        .map(|address| {
            address
                .parse::<Mailbox>()
                .map_err(|e| anyhow::Error::msg(format!("Invalid address {}: {}", address, e)))
        })
        .collect()
}

fn build_message(message: &OutboundMessage) -> anyhow::Result<Message> {
    let sender = parse_mailboxes(std::slice::from_ref(&message.sender))?;
    let mut builder = Message::builder().subject(message.subject.clone());
    for from in sender {
        builder = builder.from(from);
    }
    for to in parse_mailboxes(&message.to)? {
        builder = builder.to(to);
    }
    for bcc in parse_mailboxes(&message.bcc)? {
        builder = builder.bcc(bcc);
    }

    let email = match &message.html_body {
        Some(html) if message.text_body.is_empty() => {
            builder.singlepart(SinglePart::html(html.clone()))?
        }
        Some(html) => builder.multipart(MultiPart::alternative_plain_html(
            message.text_body.clone(),
            html.clone(),
        ))?,
        None => builder
            .header(ContentType::TEXT_PLAIN)
            .body(message.text_body.clone())?,
    };
    Ok(email)
}

#[async_trait::async_trait]
impl IMessageDispatcher for SmtpDispatcher {
    async fn send(&self, message: &OutboundMessage) -> anyhow::Result<()> {
        let email = build_message(message)?;
        self.transport.send(email).await?;
        info!(
            subject = %message.subject,
            recipients = message.to.len() + message.bcc.len(),
            "message delivered"
        );
        Ok(())
    }
}

/// Used when no SMTP server is configured. Messages are only logged.
pub struct TracingDispatcher {}

#[async_trait::async_trait]
impl IMessageDispatcher for TracingDispatcher {
    async fn send(&self, message: &OutboundMessage) -> anyhow::Result<()> {
        info!(
            sender = %message.sender,
            to = ?message.to,
            bcc = ?message.bcc,
            subject = %message.subject,
            "message not delivered, no SMTP server configured"
        );
        Ok(())
    }
}
