//! UI components for the ticket card.

mod ticket_actions;
mod ticket_card;
mod ticket_field;

pub use ticket_actions::TicketActions;
pub use ticket_card::TicketCard;
pub use ticket_field::TicketFieldView;
