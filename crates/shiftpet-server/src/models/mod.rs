//! Shiftpet Data Transfer Objects
//!
//! Typed request/response shapes per endpoint. Requests carry explicit
//! required/optional fields so malformed input is rejected before any
//! store access; responses all carry the `success` envelope flag.

mod admin;
mod employee;
mod shift;

pub use admin::*;
pub use employee::*;
pub use shift::*;
