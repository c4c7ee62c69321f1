pub mod error;
pub mod feature_flags;
pub mod config;

// Domain records and hardcoded sample data
pub mod models;
pub mod catalog;

// Simulated flows
pub mod notice;
pub mod session;
pub mod credentials;
pub mod recorder;
pub mod credits;
pub mod actions;
pub mod search;

pub use error::*;
pub use feature_flags::*;
pub use config::*;
pub use models::*;
pub use notice::*;
pub use session::*;
pub use credentials::*;
pub use recorder::*;
pub use credits::*;
pub use actions::*;
pub use search::*;
