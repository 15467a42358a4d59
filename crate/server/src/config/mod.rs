mod command_line;
pub use command_line::{ClapConfig, HttpConfig, IdpAuthConfig, MainDbConfig};

mod params;
pub use params::{IdpParams, ServerParams};
