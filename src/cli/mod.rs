//! CLI domain: parse and route only.
//! No domain orchestration; the route table dispatches to the export driver.

mod parse;
mod route;

pub use parse::{Cli, Commands};
pub use route::{map_error, run};
