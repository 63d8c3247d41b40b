use crate::{event::Event, schedule::Schedule};
use chrono::{prelude::*, Duration};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The ways a reminder can be delivered to the members of an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Text,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Text => "text",
        }
    }

    /// Channels switched on for the event, e-mail first
    pub fn enabled_for(event: &Event) -> Vec<Channel> {
        let mut channels = Vec::with_capacity(2);
        if event.email_enabled {
            channels.push(Self::Email);
        }
        if event.text_enabled {
            channels.push(Self::Text);
        }
        channels
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drops seconds and sub-seconds
pub fn truncate_to_minute<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<Tz> {
    let seconds = dt.timestamp().rem_euclid(60);
    let nanos = i64::from(dt.timestamp_subsec_nanos());
    dt.clone() - Duration::seconds(seconds) - Duration::nanoseconds(nanos)
}

/// Strictly earlier than now. A due instant equal to now is not overdue.
pub fn is_overdue<Tz: TimeZone>(due: &DateTime<Tz>, now: &DateTime<Tz>) -> bool {
    due < now
}

/// Whether any trigger time of the schedule falls in the same minute as `now`
pub fn is_reminder_due<Tz: TimeZone>(
    schedule: &Schedule,
    due: &DateTime<Tz>,
    now: &DateTime<Tz>,
) -> bool {
    let now_minute = truncate_to_minute(now);
    schedule
        .trigger_times(due)
        .values()
        .any(|remind_at| truncate_to_minute(remind_at) == now_minute)
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono_tz::{America::Chicago, Europe::Oslo, UTC};

    fn schedule(tokens: &[&str]) -> Schedule {
        Schedule::from_tokens("test", tokens.iter())
    }

    #[test]
    fn it_truncates_to_the_minute() {
        let dt = Chicago
            .with_ymd_and_hms(2024, 3, 10, 6, 59, 59)
            .unwrap()
            .with_nanosecond(999_999_999)
            .unwrap();
        assert_eq!(
            truncate_to_minute(&dt),
            Chicago.with_ymd_and_hms(2024, 3, 10, 6, 59, 0).unwrap()
        );
    }

    #[test]
    fn due_equal_to_now_is_not_overdue() {
        let due = UTC.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        assert!(!is_overdue(&due, &due));
        assert!(is_reminder_due(&schedule(&["0m"]), &due, &due));
        assert!(!is_reminder_due(&schedule(&[]), &due, &due));
    }

    #[test]
    fn one_second_past_due_is_overdue() {
        let due = UTC.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        let now = due + Duration::seconds(1);
        assert!(is_overdue(&due, &now));
        assert!(!is_overdue(&due, &(due - Duration::seconds(1))));
    }

    #[test]
    fn it_matches_offsets_at_minute_resolution() {
        let due = Oslo.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        let reminders = schedule(&["1d", "2h"]);
        let at = |d, h, m, s| Oslo.with_ymd_and_hms(2024, 3, d, h, m, s).unwrap();

        assert!(is_reminder_due(&reminders, &due, &at(9, 9, 0, 0)));
        assert!(is_reminder_due(&reminders, &due, &at(9, 9, 0, 42)));
        assert!(is_reminder_due(&reminders, &due, &at(10, 7, 0, 0)));
        assert!(is_reminder_due(&reminders, &due, &at(10, 7, 0, 59)));
        assert!(!is_reminder_due(&reminders, &due, &at(10, 6, 59, 0)));
        assert!(!is_reminder_due(&reminders, &due, &at(10, 6, 59, 59)));
        assert!(!is_reminder_due(&reminders, &due, &at(10, 7, 1, 0)));
        assert!(!is_reminder_due(&reminders, &due, &at(9, 9, 1, 0)));
    }

    #[test]
    fn the_decision_is_stable_within_a_minute() {
        let due = UTC.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        let reminders = schedule(&["2h", "bad"]);
        let start = UTC.with_ymd_and_hms(2024, 3, 10, 7, 0, 0).unwrap();
        assert!(is_reminder_due(&reminders, &due, &start));
        for secs in 1..60 {
            let later = start + Duration::seconds(secs);
            assert!(is_reminder_due(&reminders, &due, &later));
        }
        assert!(!is_reminder_due(&reminders, &due, &(start + Duration::seconds(60))));
    }

    #[test]
    fn it_lists_enabled_channels() {
        let now = Utc::now();
        let mut event = Event::new(now, now);
        assert!(Channel::enabled_for(&event).is_empty());
        event.text_enabled = true;
        assert_eq!(Channel::enabled_for(&event), vec![Channel::Text]);
        event.email_enabled = true;
        assert_eq!(
            Channel::enabled_for(&event),
            vec![Channel::Email, Channel::Text]
        );
    }
}
