pub mod user_service;
pub mod user_service_impl;

pub use user_service::{UserInfo, UserService};
pub use user_service_impl::SeaOrmUserService;
