//! The per-tick render loop.

mod pacer;
/// Session type and run statistics.
pub mod pixelator_session;
