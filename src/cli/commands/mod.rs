mod init;
mod login;
mod user;

pub use init::cmd_init;
pub use login::cmd_login;
pub use user::{cmd_user_add, cmd_user_list, cmd_user_remove, cmd_user_set_role};
