mod attachment;
mod conversation;
mod error;
mod generation;
mod message;

pub use attachment::*;
pub use conversation::*;
pub use error::*;
pub use generation::*;
pub use message::*;
