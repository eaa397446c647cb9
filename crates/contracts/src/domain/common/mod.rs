//! Common types shared by the domain records

pub mod lenient;
pub mod populated;

// Re-exports
pub use populated::Populated;
