//! Entrance animations
//!
//! - `sequence`: ordered, timed steps (card stagger, typing effect)
//! - `stylesheet`: keyframes and classes used by the rendered markup

mod sequence;
mod stylesheet;

pub use sequence::{Sequence, Step, StepSink, TypingTiming};
pub use stylesheet::{animations_css, ANIMATIONS_CSS_PATH};
