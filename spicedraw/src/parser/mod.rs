pub mod spice;

// Re-export for convenience
pub use spice::{Directive, SpiceParser};
