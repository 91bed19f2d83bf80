//! Adapters implementing the trail port.
//!
//! - `live`: builds trails with a [`crate::breadcrumb::Navigator`].
//! - `recording`: wraps another provider and captures every visit.
//! - `replaying`: serves trails straight from a cassette.

pub mod live;
pub mod recording;
pub mod replaying;

pub use live::LiveTrails;
pub use recording::RecordingTrails;
pub use replaying::ReplayingTrails;
