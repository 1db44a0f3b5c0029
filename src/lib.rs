pub mod brief;
pub mod config;
pub mod credentials;
pub mod deliverables;
pub mod errors;
pub mod logging;
pub mod orchestrator;
pub mod roster;
pub mod server;
pub mod team_config;
