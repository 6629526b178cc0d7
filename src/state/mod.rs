pub mod session;
pub mod stats;

pub use session::{GameSession, SessionAction, Status};
pub use stats::SessionStats;
