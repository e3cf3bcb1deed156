//! SwiftRide Ticket UI Components
//!
//! Dioxus primitives for the bus ticket card: action buttons, length-bounded
//! text inputs, and the inline line icons used on the ticket.
//!
//! ## Palette
//!
//! - **Black (#000000)**: Borders, primary text, download action
//! - **Red (#dc2626)**: Brand accent, times, edit action
//! - **Green (#16a34a)**: Save action
//! - **Gray (#f3f4f6 / #4b5563)**: Field boxes and captions

pub mod components;

pub use components::*;
