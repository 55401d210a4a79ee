//! Domain types for ticket recognition: text fragments as they flow out of
//! the recognizer, and the structured ticket data the pipeline produces.

pub mod fragment;
pub mod ticket;

pub use fragment::OcrFragment;
pub use ticket::{ParseResult, TicketCandidate};
