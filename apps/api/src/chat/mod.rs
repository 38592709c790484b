pub mod bridge;
pub mod handlers;
pub mod markdown;
pub mod prompts;

pub use bridge::ChatSession;
