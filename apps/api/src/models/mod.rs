pub mod chat;
pub mod defaults;
pub mod portfolio;
