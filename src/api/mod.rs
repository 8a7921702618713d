pub mod address;
pub mod client;
