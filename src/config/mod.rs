// Route file configuration

pub mod route_settings;
pub mod routes;

pub use route_settings::RouteSettings;
pub use routes::{load_routes, validate_routes, DEFAULT_CONFIG_FILE};
