//! Injected time and nonce sources.
//!
//! Signing reads the clock and draws a nonce only when the caller leaves those values unset on
//! the request. Both providers sit behind traits so deterministic fixtures can replace them.

mod clock;
mod nonce;

pub use clock::*;
pub use nonce::*;
