//! Reusable ticket UI components
//!
//! Class names map onto the ticket stylesheet shipped by the desktop app.

mod button;
mod icons;
mod input;

pub use button::*;
pub use icons::*;
pub use input::*;
