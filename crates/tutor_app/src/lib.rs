mod error;
mod services;
mod session;
mod system_prompt;
mod turn;

pub use error::*;
pub use services::*;
pub use session::*;
pub use system_prompt::*;
pub use turn::*;
