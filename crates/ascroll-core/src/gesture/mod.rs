//! Gesture interpretation
//!
//! Turns the raw pointer stream delivered by the input layer into intents the
//! surface acts on: drags, flings, taps and "stop whatever is moving".

mod event;
mod intent;
mod interpreter;
mod trace;
mod velocity;

pub use event::{PointerEvent, PointerKind};
pub use intent::Intent;
pub use interpreter::{GestureInterpreter, GestureState};
pub use trace::GestureTrace;
pub use velocity::VelocityTracker;
