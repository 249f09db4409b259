pub mod export;
pub mod history;
pub mod persistence;
pub mod store;
