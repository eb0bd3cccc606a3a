pub mod aggregate;
pub mod cli;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod link;
pub mod model;
pub mod stats;
pub mod store;
