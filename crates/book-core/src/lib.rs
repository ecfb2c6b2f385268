//! book-core
//!
//! Pure limit order book logic:
//! - instruction / event types
//! - order representation
//! - per-side price-time priority books
//! - the matching engine
//!
//! Text parsing and formatting live in the `book-protocol` crate; scenario
//! file replay lives in `book-replay`.

pub mod error;
pub mod events;
pub mod matching_engine;
pub mod order;
pub mod side;
pub mod side_book;
pub mod tob;

pub use error::{EngineError, SideBookError};
pub use events::{Cancel, Event, Instruction, Submit, Trade};
pub use matching_engine::MatchingEngine;
pub use order::{Order, OrderId};
pub use side::Side;
pub use side_book::SideBook;
pub use tob::TobSnapshot;
