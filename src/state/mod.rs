//! State - Component State Containers
//!
//! Each state module is a plain value struct owned by exactly one component
//! instance; the owning view observes its entity and re-renders on change.

pub mod counter_state;
