use super::IMemberRepo;
use orgreminders_domain::{Member, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresMemberRepo {
    pool: PgPool,
}

impl PostgresMemberRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MemberRaw {
    member_uid: Uuid,
    name: String,
    email: String,
    cell: String,
    carrier: String,
    text_address: String,
    email_on: bool,
    text_on: bool,
    orgs: Vec<String>,
    web_user: bool,
}

impl From<MemberRaw> for Member {
    fn from(m: MemberRaw) -> Self {
        Self {
            id: m.member_uid.into(),
            name: m.name,
            email: m.email,
            cell: m.cell,
            carrier: m.carrier,
            text_address: m.text_address,
            email_on: m.email_on,
            text_on: m.text_on,
            orgs: m.orgs,
            web_user: m.web_user,
        }
    }
}

#[async_trait::async_trait]
impl IMemberRepo for PostgresMemberRepo {
    async fn insert(&self, member: &Member) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO members(member_uid, name, email, cell, carrier, text_address,
                email_on, text_on, orgs, web_user)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(member.id.inner_ref())
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.cell)
        .bind(&member.carrier)
        .bind(&member.text_address)
        .bind(member.email_on)
        .bind(member.text_on)
        .bind(&member.orgs)
        .bind(member.web_user)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, member: &Member) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE members SET
                name = $2,
                email = $3,
                cell = $4,
                carrier = $5,
                text_address = $6,
                email_on = $7,
                text_on = $8,
                orgs = $9,
                web_user = $10
            WHERE member_uid = $1
            "#,
        )
        .bind(member.id.inner_ref())
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.cell)
        .bind(&member.carrier)
        .bind(&member.text_address)
        .bind(member.email_on)
        .bind(member.text_on)
        .bind(&member.orgs)
        .bind(member.web_user)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, member_id: &ID) -> Option<Member> {
        sqlx::query_as::<_, MemberRaw>(
            r#"
            SELECT * FROM members AS m
            WHERE m.member_uid = $1
            "#,
        )
        .bind(member_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        .ok()
        .map(|m| m.into())
    }

    async fn find_by_email(&self, email: &str) -> Option<Member> {
        sqlx::query_as::<_, MemberRaw>(
            r#"
            SELECT * FROM members AS m
            WHERE m.email = $1
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .ok()
        .map(|m| m.into())
    }

    async fn find_by_org(&self, org_name: &str) -> anyhow::Result<Vec<Member>> {
        let members = sqlx::query_as::<_, MemberRaw>(
            r#"
            SELECT * FROM members AS m
            WHERE $1 = ANY(m.orgs)
            ORDER BY m.name
            "#,
        )
        .bind(org_name)
        .fetch_all(&self.pool)
        .await?;
        Ok(members.into_iter().map(|m| m.into()).collect())
    }
}
