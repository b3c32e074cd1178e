//! AI systems (FixedUpdate)

pub mod contact;
pub mod guard;
pub mod journal;

// Re-export all systems
pub use contact::*;
pub use guard::*;
pub use journal::*;
