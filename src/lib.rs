pub mod board;
pub mod error;
pub mod search;
pub mod session;

pub use error::{Error, Result};
pub use session::Session;
