//! Domain entities - Core business objects with no external dependencies

pub mod user;
pub mod notification;
pub mod command;
pub mod trade;

pub use user::User;
pub use notification::{Notification, NotificationField};
pub use command::{CommandOption, CommandSpec, TRADE_COMMAND};
pub use trade::TradeRequest;
