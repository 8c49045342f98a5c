//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for decoding and validator for presence checks.
//! Response DTOs mirror the JSON envelopes of each endpoint.

pub mod book;
pub mod health;
pub mod message;
pub mod url;
