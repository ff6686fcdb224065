pub mod client;
pub mod fetcher;
pub mod transport;
pub mod types;
