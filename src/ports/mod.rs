//! Port traits defining external boundaries.
//!
//! The trail port is the boundary between whatever drives navigation (the
//! CLI, a test, a recorded session) and the component that turns
//! pathnames into trails. Implementations live in `src/adapters/`.

pub mod trails;

pub use trails::TrailProvider;
