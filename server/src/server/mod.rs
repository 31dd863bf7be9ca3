mod flight_server;
pub use flight_server::FlightServer;

mod server_config;
pub use server_config::ServerConfig;
