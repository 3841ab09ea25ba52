pub mod effects;
pub mod notification;

pub use effects::Effect;
pub use notification::{Notification, NotificationKind};
