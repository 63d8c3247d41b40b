use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use orgreminders_domain::{Event, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<Event>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

fn by_due(mut events: Vec<Event>) -> Vec<Event> {
    events.sort_by(|a, b| a.due.cmp(&b.due));
    events
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, e: &Event) -> anyhow::Result<()> {
        insert(e, &self.events);
        Ok(())
    }

    async fn save(&self, e: &Event) -> anyhow::Result<()> {
        save(e, &self.events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<Event> {
        find(event_id, &self.events)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Event>> {
        Ok(by_due(find_by(&self.events, |_| true)))
    }

    async fn find_active(&self, since: DateTime<Utc>) -> anyhow::Result<Vec<Event>> {
        Ok(by_due(find_by(&self.events, |e| e.due >= since)))
    }

    async fn find_by_org(
        &self,
        org_name: &str,
        since: Option<DateTime<Utc>>,
    ) -> anyhow::Result<Vec<Event>> {
        let res = find_by(&self.events, |e| {
            e.belongs_to(org_name) && since.map(|since| e.due >= since).unwrap_or(true)
        });
        Ok(by_due(res))
    }
}
