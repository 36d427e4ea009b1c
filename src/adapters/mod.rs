//! Adapter implementations of the port traits.
//!
//! - `live`: real disk I/O and the host platform.
//! - `recording`: wraps a live adapter and captures every call to a cassette.
//! - `replaying`: serves a cassette back without touching disk.

pub mod live;
pub mod recording;
pub mod replaying;
