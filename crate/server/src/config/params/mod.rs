mod idp_params;
pub use idp_params::IdpParams;

mod server_params;
pub use server_params::ServerParams;
