use super::IOrganizationRepo;
use crate::repos::shared::postgres::from_millis;
use orgreminders_domain::{Organization, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresOrganizationRepo {
    pool: PgPool,
}

impl PostgresOrganizationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct OrganizationRaw {
    organization_uid: Uuid,
    name: String,
    description: String,
    active: bool,
    created: i64,
    saved: i64,
    expires: i64,
    time_zone: String,
    administrators: Vec<String>,
}

impl TryFrom<OrganizationRaw> for Organization {
    type Error = anyhow::Error;

    fn try_from(o: OrganizationRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: o.organization_uid.into(),
            name: o.name,
            description: o.description,
            active: o.active,
            created: from_millis(o.created)?,
            saved: from_millis(o.saved)?,
            expires: from_millis(o.expires)?,
            time_zone: o.time_zone,
            administrators: o.administrators,
        })
    }
}

fn into_organization(raw: OrganizationRaw) -> Option<Organization> {
    match Organization::try_from(raw) {
        Ok(org) => Some(org),
        Err(e) => {
            error!("Unable to read stored organization: {:?}", e);
            None
        }
    }
}

#[async_trait::async_trait]
impl IOrganizationRepo for PostgresOrganizationRepo {
    async fn insert(&self, org: &Organization) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO organizations(organization_uid, name, description, active, created,
                saved, expires, time_zone, administrators)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(org.id.inner_ref())
        .bind(&org.name)
        .bind(&org.description)
        .bind(org.active)
        .bind(org.created.timestamp_millis())
        .bind(org.saved.timestamp_millis())
        .bind(org.expires.timestamp_millis())
        .bind(&org.time_zone)
        .bind(&org.administrators)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, org: &Organization) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE organizations SET
                description = $2,
                active = $3,
                saved = $4,
                expires = $5,
                time_zone = $6,
                administrators = $7
            WHERE organization_uid = $1
            "#,
        )
        .bind(org.id.inner_ref())
        .bind(&org.description)
        .bind(org.active)
        .bind(org.saved.timestamp_millis())
        .bind(org.expires.timestamp_millis())
        .bind(&org.time_zone)
        .bind(&org.administrators)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, org_id: &ID) -> Option<Organization> {
        let raw = sqlx::query_as::<_, OrganizationRaw>(
            r#"
            SELECT * FROM organizations AS o
            WHERE o.organization_uid = $1
            "#,
        )
        .bind(org_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        .ok()?;
        into_organization(raw)
    }

    async fn find_by_name(&self, name: &str) -> Option<Organization> {
        let raw = sqlx::query_as::<_, OrganizationRaw>(
            r#"
            SELECT * FROM organizations AS o
            WHERE o.name = $1
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .ok()?;
        into_organization(raw)
    }

    async fn find_by_administrator(&self, email: &str) -> anyhow::Result<Vec<Organization>> {
        let orgs = sqlx::query_as::<_, OrganizationRaw>(
            r#"
            SELECT * FROM organizations AS o
            WHERE $1 = ANY(o.administrators)
            ORDER BY o.name
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        orgs.into_iter().map(Organization::try_from).collect()
    }
}
