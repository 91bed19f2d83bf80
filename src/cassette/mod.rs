//! Cassette format for recording and replaying navigation sessions.

pub mod format;
pub mod recorder;
pub mod replayer;

pub use format::{Cassette, Visit};
pub use recorder::CassetteRecorder;
pub use replayer::CassetteReplayer;
