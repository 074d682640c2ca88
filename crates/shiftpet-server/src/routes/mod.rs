//! Shiftpet API Routes
//!
//! - /shiftpet/login - employee login (decay + possible auto-reset)
//! - /shiftpet/session - shift start and today's session
//! - /shiftpet/sale - sale recording (feeds the pet)
//! - /shiftpet/stats - pet stats
//! - /shiftpet/pet - pet species selection
//! - /shiftpet/admin - fleet overview, manual reset, count corrections

pub mod admin;
pub mod login;
pub mod pet;
pub mod shift;
pub mod swagger;
