//! CLI command implementations.
//!
//! | Module   | Commands handled |
//! |----------|------------------|
//! | `run`    | `Run`            |
//! | `serve`  | `Serve`          |
//! | `agents` | `Agents`         |
//! | `config` | `InitConfig`     |

pub mod agents;
pub mod config;
pub mod run;
pub mod serve;

pub use agents::cmd_agents;
pub use config::cmd_init_config;
pub use run::cmd_run;
pub use serve::cmd_serve;
