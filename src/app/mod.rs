pub mod commands;
pub mod session;

pub use commands::Command;
pub use session::Session;
