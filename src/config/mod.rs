pub mod config;

pub use config::{config_path, get_access_token, get_api_url, load_config, save_config, Config};
