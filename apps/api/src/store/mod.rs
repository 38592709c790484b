pub mod local;
pub mod portfolio;

pub use local::LocalStore;
pub use portfolio::{PortfolioStore, AUTHORIZED_KEY, PORTFOLIO_KEY};
