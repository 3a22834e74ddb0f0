mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{handle_customers, handle_session};
