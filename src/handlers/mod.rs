pub mod config;
pub mod setup;
pub mod table;

pub use config::{check_config, config_create, config_list, effective_api_key};
pub use setup::init_config_file;
