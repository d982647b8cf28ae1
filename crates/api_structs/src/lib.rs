mod error;
mod notification;
mod status;

pub mod dtos {
    pub use crate::notification::dtos::*;
}

pub use crate::error::*;
pub use crate::notification::api::*;
pub use crate::status::api::*;
