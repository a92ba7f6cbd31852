pub mod service;

pub use service::{UserDeleteResult, UsersService};
