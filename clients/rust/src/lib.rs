mod base;
mod event;
mod member;
mod organization;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use event::EventClient;
pub use event::{CreateEventInput, UpdateEventInput};
use member::MemberClient;
pub use member::{CreateMemberInput, UpdateMemberInput};
use organization::OrganizationClient;
pub use organization::{CreateOrganizationInput, UpdateOrganizationInput};
pub use orgreminders_domain::ID;
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use orgreminders_api_structs::dtos::EventDTO as Event;
pub use orgreminders_api_structs::dtos::MemberDTO as Member;
pub use orgreminders_api_structs::dtos::OrganizationDTO as Organization;
pub use orgreminders_api_structs::dtos::ScheduleDTO as Schedule;

/// Org Reminders Server SDK
///
/// The SDK contains methods for interacting with the Org Reminders server
/// API.
#[derive(Clone)]
pub struct OrgRemindersSDK {
    pub event: EventClient,
    pub member: MemberClient,
    pub organization: OrganizationClient,
    pub status: StatusClient,
}

impl OrgRemindersSDK {
    pub fn new<T: Into<String>>(address: T) -> Self {
        let base = Arc::new(BaseClient::new(address.into()));
        let event = EventClient::new(base.clone());
        let member = MemberClient::new(base.clone());
        let organization = OrganizationClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            event,
            member,
            organization,
            status,
        }
    }
}
