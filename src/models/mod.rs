pub mod role;

pub use role::{ParseRoleError, Role};
