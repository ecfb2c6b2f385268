//! Logical instruction and event types.
//!
//! These are transport-agnostic: the text decoder and formatter live in the
//! `book-protocol` crate; this module is purely logical.

use crate::side::Side;
use crate::tob::TobSnapshot;

/// One decoded instruction into the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Admit a new order, matching it first if it crosses.
    Submit(Submit),

    /// Cancel a resting order by `(user, user_order_id)`.
    Cancel(Cancel),

    /// Discard both side books and reset admission sequences.
    Flush,
}

/// New order request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submit {
    pub user: u32,
    pub symbol: String,
    pub price: u32,
    pub quantity: u32,
    pub side: Side,
    pub user_order_id: u32,
}

/// Cancel request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cancel {
    pub user: u32,
    pub user_order_id: u32,
}

/// One output event produced while processing a single instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Acknowledgement of a submit or cancel.
    Ack { user: u32, user_order_id: u32 },

    /// Reject of a submit: crossing while trading is disabled, or an
    /// identifier collision with a live order.
    Reject { user: u32, user_order_id: u32 },

    /// Top-of-book change on one side, carrying the snapshot at the moment
    /// of emission.
    TopOfBook(TobSnapshot),

    /// Trade print.
    Trade(Trade),
}

/// Trade between a buy-side and a sell-side order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Trade {
    pub buy_user: u32,
    pub buy_user_order_id: u32,
    pub sell_user: u32,
    pub sell_user_order_id: u32,
    pub price: u32,
    pub quantity: u32,
}

impl Event {
    /// Convenience constructor for an acknowledgement.
    pub fn ack(user: u32, user_order_id: u32) -> Self {
        Event::Ack {
            user,
            user_order_id,
        }
    }

    /// Convenience constructor for a reject.
    pub fn reject(user: u32, user_order_id: u32) -> Self {
        Event::Reject {
            user,
            user_order_id,
        }
    }

    /// Convenience constructor for a top-of-book change.
    pub fn top_of_book(snapshot: TobSnapshot) -> Self {
        Event::TopOfBook(snapshot)
    }

    /// Convenience constructor for a trade print.
    pub fn trade(
        buy_user: u32,
        buy_user_order_id: u32,
        sell_user: u32,
        sell_user_order_id: u32,
        price: u32,
        quantity: u32,
    ) -> Self {
        Event::Trade(Trade {
            buy_user,
            buy_user_order_id,
            sell_user,
            sell_user_order_id,
            price,
            quantity,
        })
    }
}
