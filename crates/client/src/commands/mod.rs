//! Command implementations.
//!
//! Each command owns its arguments and runs against a loaded session.

mod add;
mod list;
mod remove;
mod teams;

pub use add::Add;
pub use list::List;
pub use remove::Remove;
pub use teams::Teams;
