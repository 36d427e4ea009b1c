//! Cassette format for recording and replaying file-system sessions.

pub mod format;
pub mod recorder;
pub mod replayer;
