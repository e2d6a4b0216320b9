//! Engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the games.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
