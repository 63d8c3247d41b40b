use crate::{
    date::format_local_datetime, event::Event, member::Member, organization::Organization,
    reminder::Channel,
};
use chrono_tz::Tz;
use itertools::Itertools;
use minijinja::{context, Environment};

const EVENT_SUMMARY_TEMPLATE: &str = "event_summary.html";

const EVENT_SUMMARY: &str = r#"The following event was just saved: <br><br>
<label>Event Title: </label>{{ title }}<br>
<label>When Due: </label>{{ due|safe }}<br>
<label>Organization(s): </label>{{ orgs|join(", ") }}<br>
<label>Email enabled: </label>{{ email_enabled }}<br>
<label>Text Enabled: </label>{{ text_enabled }}<br>
<label>Reminders: </label>{{ reminders|join(", ") }}<br>
<label>Email Message: </label><br><div class="msgbody">{{ email_message|safe }}</div><br>
<label>Text Message: </label><br><div class="msgbody"><pre>{{ text_message }}</pre></div><br>"#;

/// A message ready to be handed over to a mail transport
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub sender: String,
    pub to: Vec<String>,
    pub bcc: Vec<String>,
    pub subject: String,
    pub text_body: String,
    pub html_body: Option<String>,
}

/// `"Choir Practice Reminders <Choir_Practice@example.com>"`
pub fn org_sender(org_name: &str, mail_domain: &str) -> String {
    format!(
        "{} Reminders <{}@{}>",
        org_name,
        org_name.replace(' ', "_"),
        mail_domain
    )
}

/// Addresses of the members who want reminders on `channel`, without duplicates
pub fn recipients(members: &[Member], channel: Channel) -> Vec<String> {
    members
        .iter()
        .filter_map(|member| match channel {
            Channel::Email if member.email_on => Some(member.email.clone()),
            Channel::Text if member.text_on => Some(member.text_address.clone()),
            _ => None,
        })
        .filter(|address| !address.is_empty())
        .unique()
        .collect()
}

impl OutboundMessage {
    /// The reminder for `event` sent to the members of `org` on `channel`.
    /// `None` when nobody in the organization listens on that channel.
    pub fn reminder(
        org: &Organization,
        event: &Event,
        channel: Channel,
        members: &[Member],
        mail_domain: &str,
    ) -> Option<Self> {
        let bcc = recipients(members, channel);
        if bcc.is_empty() {
            return None;
        }
        let html_body = match channel {
            Channel::Email => Some(event.email_message.clone()),
            Channel::Text => None,
        };
        Some(Self {
            sender: org_sender(&org.name, mail_domain),
            to: Vec::new(),
            bcc,
            subject: event.title.clone(),
            text_body: event.text_message.clone(),
            html_body,
        })
    }

    /// Summary of a saved event for the user who submitted it, with the
    /// due time shown in `tz`
    pub fn submitter_notice(
        event: &Event,
        subject_prefix: &str,
        tz: &Tz,
        mail_domain: &str,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            sender: format!("orgreminders@{}", mail_domain),
            to: vec![event.submitter.clone()],
            bcc: Vec::new(),
            subject: format!("{}{}", subject_prefix, event.title),
            text_body: String::new(),
            html_body: Some(render_event_summary(event, tz)?),
        })
    }
}

/// User text is escaped, the e-mail message is HTML already
fn render_event_summary(event: &Event, tz: &Tz) -> anyhow::Result<String> {
    let mut env = Environment::new();
    env.add_template(EVENT_SUMMARY_TEMPLATE, EVENT_SUMMARY)?;
    let html = env.get_template(EVENT_SUMMARY_TEMPLATE)?.render(context! {
        title => event.title,
        due => format_local_datetime(&event.due, tz),
        orgs => event.orgs,
        email_enabled => event.email_enabled,
        text_enabled => event.text_enabled,
        reminders => event.schedule.tokens(),
        email_message => event.email_message,
        text_message => event.text_message,
    })?;
    Ok(html)
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn member(email: &str, email_on: bool, text_address: &str, text_on: bool) -> Member {
        Member {
            email: email.into(),
            email_on,
            text_address: text_address.into(),
            text_on,
            ..Default::default()
        }
    }

    fn setup() -> (Organization, Event) {
        let now = Utc::now();
        let org = Organization::new("Choir Practice", "UTC", now);
        let mut event = Event::new(now, now);
        event.title = "Concert".into();
        event.email_message = "<b>Bring music</b>".into();
        event.text_message = "Bring music".into();
        event.submitter = "lead@example.com".into();
        (org, event)
    }

    #[test]
    fn it_builds_the_sender_from_the_org_name() {
        assert_eq!(
            org_sender("Choir Practice", "example.com"),
            "Choir Practice Reminders <Choir_Practice@example.com>"
        );
    }

    #[test]
    fn it_selects_recipients_per_channel_without_duplicates() {
        let members = vec![
            member("a@example.com", true, "1@vtext.com", false),
            member("b@example.com", false, "2@vtext.com", true),
            member("a@example.com", true, "", true),
            member("c@example.com", true, "2@vtext.com", true),
        ];
        assert_eq!(
            recipients(&members, Channel::Email),
            vec!["a@example.com", "c@example.com"]
        );
        assert_eq!(recipients(&members, Channel::Text), vec!["2@vtext.com"]);
    }

    #[test]
    fn email_reminders_carry_both_bodies() {
        let (org, event) = setup();
        let members = vec![member("a@example.com", true, "", false)];
        let msg = OutboundMessage::reminder(&org, &event, Channel::Email, &members, "example.com")
            .unwrap();
        assert_eq!(msg.subject, "Concert");
        assert_eq!(msg.bcc, vec!["a@example.com"]);
        assert!(msg.to.is_empty());
        assert_eq!(msg.html_body.as_deref(), Some("<b>Bring music</b>"));
        assert_eq!(msg.text_body, "Bring music");
    }

    #[test]
    fn text_reminders_are_plain_text() {
        let (org, event) = setup();
        let members = vec![member("a@example.com", false, "1@vtext.com", true)];
        let msg = OutboundMessage::reminder(&org, &event, Channel::Text, &members, "example.com")
            .unwrap();
        assert_eq!(msg.bcc, vec!["1@vtext.com"]);
        assert_eq!(msg.html_body, None);
    }

    #[test]
    fn no_message_without_recipients() {
        let (org, event) = setup();
        let members = vec![member("a@example.com", false, "1@vtext.com", false)];
        assert!(
            OutboundMessage::reminder(&org, &event, Channel::Email, &members, "example.com")
                .is_none()
        );
    }

    #[test]
    fn submitter_notice_escapes_user_text() {
        let (_, mut event) = setup();
        event.title = "<script>".into();
        event.text_message = "Tom & Jerry".into();
        let msg = OutboundMessage::submitter_notice(
            &event,
            "Event Saved: ",
            &chrono_tz::UTC,
            "example.com",
        )
        .unwrap();
        assert_eq!(msg.to, vec!["lead@example.com"]);
        assert_eq!(msg.subject, "Event Saved: <script>");
        let body = msg.html_body.unwrap();
        assert!(body.contains("&lt;script&gt;"));
        assert!(!body.contains("<script>"));
        assert!(body.contains("<pre>Tom &amp; Jerry</pre>"));
        assert!(body.contains("<div class=\"msgbody\"><b>Bring music</b></div>"));
    }

    #[test]
    fn submitter_notice_shows_due_in_the_org_zone() {
        let (_, mut event) = setup();
        event.due = Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
        event.orgs = vec!["Choir".into(), "Band".into()];
        event.schedule.add_offset("1d");
        event.schedule.add_offset("2h");
        let msg = OutboundMessage::submitter_notice(
            &event,
            "Event Saved: ",
            &chrono_tz::Europe::Oslo,
            "example.com",
        )
        .unwrap();
        let body = msg.html_body.unwrap();
        assert!(body.contains("<label>When Due: </label>03/10/2024 9:00am<br>"));
        assert!(body.contains("<label>Organization(s): </label>Choir, Band<br>"));
        assert!(body.contains("<label>Reminders: </label>1d, 2h<br>"));
        assert!(body.contains("<label>Email enabled: </label>false<br>"));
    }
}
