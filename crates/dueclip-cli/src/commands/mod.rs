pub mod add;
pub mod clip;
pub mod delete;
pub mod done;
pub mod extract;
pub mod list;
