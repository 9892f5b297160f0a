pub mod configuration;
pub mod deployment;
pub mod user;

pub use configuration::*;
pub use deployment::*;
pub use user::*;
