mod event;
mod notification;
mod notification_window;
mod reminder_message;
mod shared;
mod user;

pub use chrono_tz::Tz;
pub use event::Event;
pub use notification::{
    create_notification_tasks, DispatchResult, DispatchStatus, EventEdge, NotificationTask,
};
pub use notification_window::NotificationWindow;
pub use reminder_message::{format_local_time, ReminderMessage};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::User;
