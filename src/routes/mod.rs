pub mod convert;
pub mod health;

pub use convert::AppState;
