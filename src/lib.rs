pub mod card;
pub mod error;
pub mod session;
pub mod set;

pub use card::{Card, SetList};
pub use error::Error;
pub use session::Session;
pub use set::Set;
