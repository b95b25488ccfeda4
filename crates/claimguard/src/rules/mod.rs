//! One rule per mutation category.
//!
//! Each submodule adds the `on_*` handler for its category to
//! [`crate::Engine`]. Within a handler, checks that may cancel run first and
//! the first denial ends evaluation.

mod bootstrap;
mod build;
mod dispense;
mod donation;
mod fire;
mod fluid;
mod growth;
mod piston;
mod sign;

pub use build::FIRE_PROXIMITY_SQUARED;
pub use sign::AUDIT_TARGET;
