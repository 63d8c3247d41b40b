use super::IEventRepo;
use crate::repos::shared::postgres::from_millis;
use chrono::{DateTime, Utc};
use orgreminders_domain::{Event, Schedule, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    orgs: Vec<String>,
    created: i64,
    saved: i64,
    due: i64,
    title: String,
    email_message: String,
    text_message: String,
    submitter: String,
    email_enabled: bool,
    text_enabled: bool,
    schedule_name: String,
    schedule_offsets: Vec<String>,
}

impl TryFrom<EventRaw> for Event {
    type Error = anyhow::Error;

    fn try_from(e: EventRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: e.event_uid.into(),
            orgs: e.orgs,
            created: from_millis(e.created)?,
            saved: from_millis(e.saved)?,
            due: from_millis(e.due)?,
            title: e.title,
            email_message: e.email_message,
            text_message: e.text_message,
            submitter: e.submitter,
            email_enabled: e.email_enabled,
            text_enabled: e.text_enabled,
            schedule: Schedule::from_tokens(e.schedule_name, e.schedule_offsets.iter()),
        })
    }
}

fn into_events(rows: Vec<EventRaw>) -> anyhow::Result<Vec<Event>> {
    rows.into_iter().map(Event::try_from).collect()
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn insert(&self, e: &Event) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO events(event_uid, orgs, created, saved, due, title, email_message,
                text_message, submitter, email_enabled, text_enabled, schedule_name, schedule_offsets)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(e.id.inner_ref())
        .bind(&e.orgs)
        .bind(e.created.timestamp_millis())
        .bind(e.saved.timestamp_millis())
        .bind(e.due.timestamp_millis())
        .bind(&e.title)
        .bind(&e.email_message)
        .bind(&e.text_message)
        .bind(&e.submitter)
        .bind(e.email_enabled)
        .bind(e.text_enabled)
        .bind(&e.schedule.name)
        .bind(e.schedule.tokens())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, e: &Event) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE events SET
                orgs = $2,
                saved = $3,
                due = $4,
                title = $5,
                email_message = $6,
                text_message = $7,
                submitter = $8,
                email_enabled = $9,
                text_enabled = $10,
                schedule_name = $11,
                schedule_offsets = $12
            WHERE event_uid = $1
            "#,
        )
        .bind(e.id.inner_ref())
        .bind(&e.orgs)
        .bind(e.saved.timestamp_millis())
        .bind(e.due.timestamp_millis())
        .bind(&e.title)
        .bind(&e.email_message)
        .bind(&e.text_message)
        .bind(&e.submitter)
        .bind(e.email_enabled)
        .bind(e.text_enabled)
        .bind(&e.schedule.name)
        .bind(e.schedule.tokens())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<Event> {
        let event: EventRaw = match sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events AS e
            WHERE e.event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(event) => event,
            Err(_) => return None,
        };
        match Event::try_from(event) {
            Ok(event) => Some(event),
            Err(e) => {
                error!("Unable to read stored event {}: {:?}", event_id, e);
                None
            }
        }
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Event>> {
        let events = sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events
            ORDER BY due
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        into_events(events)
    }

    async fn find_active(&self, since: DateTime<Utc>) -> anyhow::Result<Vec<Event>> {
        let events = sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events AS e
            WHERE e.due >= $1
            ORDER BY e.due
            "#,
        )
        .bind(since.timestamp_millis())
        .fetch_all(&self.pool)
        .await?;
        into_events(events)
    }

    async fn find_by_org(
        &self,
        org_name: &str,
        since: Option<DateTime<Utc>>,
    ) -> anyhow::Result<Vec<Event>> {
        let since = since.map(|s| s.timestamp_millis()).unwrap_or(i64::MIN);
        let events = sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events AS e
            WHERE $1 = ANY(e.orgs) AND e.due >= $2
            ORDER BY e.due
            "#,
        )
        .bind(org_name)
        .bind(since)
        .fetch_all(&self.pool)
        .await?;
        into_events(events)
    }
}
