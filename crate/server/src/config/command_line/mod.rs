mod clap_config;
pub use clap_config::ClapConfig;

mod main_db_config;
pub use main_db_config::MainDbConfig;

mod http_config;
pub use http_config::HttpConfig;

mod idp_auth_config;
pub use idp_auth_config::IdpAuthConfig;
