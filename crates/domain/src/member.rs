use crate::shared::entity::{Entity, ID};
use std::str::FromStr;

/// Mobile carrier whose e-mail to text gateway delivers text reminders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carrier {
    Att,
    Sprint,
    Verizon,
    TMobile,
}

impl Carrier {
    pub fn gateway_domain(&self) -> &'static str {
        match self {
            Self::Att => "txt.att.net",
            Self::Sprint => "messaging.sprintpcs.com",
            Self::Verizon => "vtext.com",
            Self::TMobile => "tmomail.net",
        }
    }
}

impl FromStr for Carrier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "att" => Ok(Self::Att),
            "sprint" => Ok(Self::Sprint),
            "verizon" => Ok(Self::Verizon),
            "tmobile" => Ok(Self::TMobile),
            _ => Err(()),
        }
    }
}

/// The text gateway address for a cell number, e.g. `5551234567@vtext.com`.
/// Empty when the carrier is unknown.
pub fn text_address(cell: &str, carrier: &str) -> String {
    match carrier.parse::<Carrier>() {
        Ok(carrier) => {
            let number: String = cell.chars().filter(|c| c.is_ascii_digit()).collect();
            format!("{}@{}", number, carrier.gateway_domain())
        }
        Err(_) => String::new(),
    }
}

/// A person receiving the reminders of the organizations listed in `orgs`
#[derive(Debug, Clone, Default)]
pub struct Member {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub cell: String,
    pub carrier: String,
    pub text_address: String,
    pub email_on: bool,
    pub text_on: bool,
    pub orgs: Vec<String>,
    /// Web users may sign in and manage the organizations they administrate
    pub web_user: bool,
}

impl Member {
    pub fn set_cell(&mut self, cell: impl Into<String>, carrier: impl Into<String>) {
        self.cell = cell.into();
        self.carrier = carrier.into();
        self.text_address = text_address(&self.cell, &self.carrier);
    }

    pub fn belongs_to(&self, org_name: &str) -> bool {
        self.orgs.iter().any(|org| org == org_name)
    }
}

impl Entity for Member {
    fn id(&self) -> &ID {
        &self.id
    }
}
