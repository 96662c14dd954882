//! Input handling: terminal event sources, key vocabulary, and the router
//! that turns events into session changes and follow-up effects.

pub mod event;
pub mod handler;
pub mod keys;
pub mod router;

pub use event::{AppEvent, Effect};
pub use handler::{InputHandler, ResizeWatcher};
pub use router::EventRouter;
