// Library root for the Gatehouse client SDK

pub mod api;
pub mod client;
pub mod core;
pub mod domain;

pub use client::rest::ClientResponse;
pub use client::GatehouseClient;
pub use core::errors::{ClientError, ErrorDetail, Errors};
