mod command_result;
mod context;
pub mod extract;
pub mod init;
pub mod lookup;
pub mod status;
pub mod sync;

pub use command_result::*;
pub use context::CommandContext;
