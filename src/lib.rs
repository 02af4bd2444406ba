pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;
pub mod store;

pub use cli::*;
pub use commands::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use services::doctor::*;
pub use services::evaluator::*;
pub use services::output::*;
pub use services::policy::*;
pub use services::snapshot::*;
pub use services::storage::*;
pub use services::verify::*;
pub use store::*;
