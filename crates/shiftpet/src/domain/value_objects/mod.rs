//! Value Objects
//!
//! Immutable domain value types.

mod animal_choice;

pub use animal_choice::AnimalChoice;
