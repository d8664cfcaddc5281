//! Components - Demo UI Components
//!
//! Pure UI components that don't depend on services or do I/O.

pub mod counter;
pub mod greeting;
pub mod primitives;
