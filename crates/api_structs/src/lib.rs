mod event;
mod member;
mod organization;
mod status;

pub mod dtos {
    pub use crate::event::dtos::*;
    pub use crate::member::dtos::*;
    pub use crate::organization::dtos::*;
}

pub use crate::event::api::*;
pub use crate::member::api::*;
pub use crate::organization::api::*;
pub use crate::status::api::*;
