pub mod handlers;
pub mod image;
pub mod mutations;
