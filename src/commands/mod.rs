pub mod check;
pub mod config;
mod context;
pub mod init;

pub use check::run_check;
pub use config::{run_config, run_config_show_impl, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
