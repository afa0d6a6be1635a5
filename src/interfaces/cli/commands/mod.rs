//! CLI command implementations

mod add;
mod config_gen;
mod list;
mod visit;

pub use add::add_link;
pub use config_gen::config_generate;
pub use list::{format_link_line, list_links};
pub use visit::visit_link;
