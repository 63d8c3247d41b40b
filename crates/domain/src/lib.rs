mod date;
mod event;
mod member;
mod message;
mod organization;
pub mod reminder;
mod schedule;
mod shared;

pub use chrono_tz::Tz;
pub use date::{format_local_datetime, parse_local_datetime};
pub use event::{start_of_day, Event};
pub use member::{text_address, Carrier, Member};
pub use message::{org_sender, recipients, OutboundMessage};
pub use organization::{parse_timezone, InvalidTimeZoneError, Organization};
pub use reminder::Channel;
pub use schedule::{InvalidOffsetError, OffsetUnit, ReminderOffset, Schedule, ScheduleOffset};
pub use shared::entity::{Entity, InvalidIDError, ID};
