//! Business rules - Pure validation functions

pub mod server_link;

pub use server_link::{is_valid_server_link, SERVER_LINK_PATTERN};
