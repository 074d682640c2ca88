//! Domain Services
//!
//! Pure stat-computation rules. Everything here is a function of its
//! arguments; the clock and the store stay outside.

pub mod decay;
pub mod goals;
pub mod scoring;

pub use goals::SessionGoals;
