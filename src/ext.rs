//! Public extension contracts for attaching signed headers to caller-owned request types.
//!
//! The crate never sends requests itself. Downstream code implements
//! [`RequestSignerExt`] for its HTTP client of choice; with the `reqwest` feature the crate
//! ships an implementation for [`reqwest::Request`].

pub mod request_signer;

pub use request_signer::*;
