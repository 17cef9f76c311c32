pub mod catalog;

// Re-export commonly used types/functions for consumers
pub use catalog::{card, find, grouped, render_card, search, Card, Group, GROUPS};
