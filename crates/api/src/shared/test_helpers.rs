use chrono::{DateTime, Utc};
use orgreminders_domain::OutboundMessage;
use orgreminders_infra::{IMessageDispatcher, ISys, OrgRemindersContext};
use std::sync::{Arc, Mutex};

pub struct StaticTimeSys(pub DateTime<Utc>);

impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

/// Keeps every message it is asked to send
#[derive(Default)]
pub struct RecordingDispatcher {
    sent: Mutex<Vec<OutboundMessage>>,
    failing: bool,
}

impl RecordingDispatcher {
    pub fn failing() -> Self {
        Self {
            sent: Default::default(),
            failing: true,
        }
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl IMessageDispatcher for RecordingDispatcher {
    async fn send(&self, message: &OutboundMessage) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(message.clone());
        if self.failing {
            Err(anyhow::Error::msg("smtp server unavailable"))
        } else {
            Ok(())
        }
    }
}

pub fn setup_context(now: DateTime<Utc>, dispatcher: Arc<RecordingDispatcher>) -> OrgRemindersContext {
    let mut ctx = OrgRemindersContext::create_inmemory();
    ctx.sys = Arc::new(StaticTimeSys(now));
    ctx.dispatcher = dispatcher;
    ctx.config.mail_domain = "example.com".into();
    ctx
}
