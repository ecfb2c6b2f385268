//! Single-symbol matching engine.
//!
//! Owns both side books, routes instructions, detects crosses and drives
//! the trade sweep. Two operating modes: trading (crossing orders match
//! against the resting book) and rejecting (crossing orders are refused).
//!
//! Every instruction is processed to completion before the next begins;
//! the engine performs no locking and assumes exclusive ownership of its
//! books and indices for the duration of a call.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::EngineError;
use crate::events::{Cancel, Event, Instruction, Submit};
use crate::order::{Order, OrderId};
use crate::side::Side;
use crate::side_book::SideBook;

#[derive(Debug)]
pub struct MatchingEngine {
    bids: SideBook,
    asks: SideBook,
    trading_enabled: bool,

    /// Which side each live order rests on, so cancels never scan both
    /// books.
    order_sides: HashMap<OrderId, Side>,
}

impl MatchingEngine {
    pub fn new(trading_enabled: bool) -> Self {
        MatchingEngine {
            bids: SideBook::new(Side::Buy),
            asks: SideBook::new(Side::Sell),
            trading_enabled,
            order_sides: HashMap::new(),
        }
    }

    pub fn trading_enabled(&self) -> bool {
        self.trading_enabled
    }

    /// Apply one instruction, returning the events it produced in order.
    pub fn apply(&mut self, instruction: Instruction) -> Result<Vec<Event>, EngineError> {
        match instruction {
            Instruction::Submit(submit) => self.submit(submit),
            Instruction::Cancel(cancel) => Ok(self.cancel(cancel)),
            Instruction::Flush => {
                self.flush();
                Ok(Vec::new())
            }
        }
    }

    /// Discard both side books and the side index; admission sequences
    /// restart from zero. Emits nothing.
    pub fn flush(&mut self) {
        trace!("flushing book");
        self.bids = SideBook::new(Side::Buy);
        self.asks = SideBook::new(Side::Sell);
        self.order_sides.clear();
    }

    /// Read access to one side book.
    pub fn book(&self, side: Side) -> &SideBook {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn submit(&mut self, submit: Submit) -> Result<Vec<Event>, EngineError> {
        let id = OrderId::new(submit.user, submit.user_order_id);
        if self.order_sides.contains_key(&id) {
            debug!(%id, "submit with live identifier rejected");
            return Ok(vec![Event::reject(submit.user, submit.user_order_id)]);
        }

        let order = Order::from_submit(submit);

        // Cross detection: only against the opposite best, and never
        // against the submitting user's own resting order.
        let crossed = match self.book(order.side.opposite()).peek() {
            Some(best) => {
                best.user != order.user && prices_cross(order.side, order.price, best.price)
            }
            None => false,
        };

        if !crossed {
            return self.rest(order);
        }

        if !self.trading_enabled {
            debug!(%id, "crossing submit rejected, trading disabled");
            return Ok(vec![Event::reject(order.user, order.user_order_id)]);
        }

        let mut events = vec![Event::ack(order.user, order.user_order_id)];
        self.sweep(order, &mut events)?;
        Ok(events)
    }

    /// Admit a non-crossing order into its own side book.
    fn rest(&mut self, order: Order) -> Result<Vec<Event>, EngineError> {
        let id = order.id();
        let side = order.side;
        let user = order.user;
        let user_order_id = order.user_order_id;

        let own = self.book_mut(side);
        let before = own.tob_snapshot();
        own.push(order)?;
        let after = own.tob_snapshot();
        self.order_sides.insert(id, side);
        trace!(%id, "order resting");

        let mut events = vec![Event::ack(user, user_order_id)];
        if after != before {
            events.push(Event::top_of_book(after));
        }
        Ok(events)
    }

    /// Match `order` against successive opposite-side heads until it is
    /// exhausted, the opposite side empties, or prices no longer cross.
    ///
    /// The same-user exclusion gates sweep entry only; once inside, the
    /// order matches whatever the opposite top presents.
    fn sweep(&mut self, mut order: Order, events: &mut Vec<Event>) -> Result<(), EngineError> {
        let side = order.side;
        let MatchingEngine {
            bids,
            asks,
            order_sides,
            ..
        } = self;
        let (own, opp) = match side {
            Side::Buy => (bids, asks),
            Side::Sell => (asks, bids),
        };

        while order.quantity > 0 {
            let Some(best) = opp.peek() else { break };
            if !prices_cross(side, order.price, best.price) {
                break;
            }

            let resting_qty = best.quantity;
            let trade_qty = order.quantity.min(resting_qty);
            // Trades print at the resting order's price; price improvement
            // accrues to the aggressor.
            let trade_price = best.price;
            events.push(trade_between(&order, best, trade_price, trade_qty));
            trace!(price = trade_price, quantity = trade_qty, "trade");

            if resting_qty > order.quantity {
                // Partial fill on the resting order. The aggressor is fully
                // consumed and never rests, so no own-side event follows.
                opp.reduce_best(trade_qty);
                events.push(Event::top_of_book(opp.tob_snapshot()));
                return Ok(());
            }

            let Some(filled) = opp.pop_best() else { break };
            order_sides.remove(&filled.id());
            order.quantity -= trade_qty;
        }

        events.push(Event::top_of_book(opp.tob_snapshot()));

        if order.quantity > 0 {
            let id = order.id();
            own.push(order)?;
            order_sides.insert(id, side);
            events.push(Event::top_of_book(own.tob_snapshot()));
        }
        Ok(())
    }

    fn cancel(&mut self, cancel: Cancel) -> Vec<Event> {
        let id = OrderId::new(cancel.user, cancel.user_order_id);
        // Unknown identifiers are a silent no-op: cancels race with fills.
        let Some(side) = self.order_sides.get(&id).copied() else {
            trace!(%id, "cancel of unknown order ignored");
            return Vec::new();
        };

        let book = self.book_mut(side);
        let before = book.tob_snapshot();
        let Some(order) = book.cancel(&id) else {
            debug_assert!(false, "side index names {id} but the book does not hold it");
            return Vec::new();
        };
        let after = book.tob_snapshot();
        self.order_sides.remove(&id);
        debug!(%id, "order cancelled");

        let mut events = vec![Event::ack(order.user, order.user_order_id)];
        if after != before {
            events.push(Event::top_of_book(after));
        }
        events
    }

    fn book_mut(&mut self, side: Side) -> &mut SideBook {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }
}

/// Whether an aggressor at `own_price` executes against a resting order at
/// `opp_price`.
fn prices_cross(side: Side, own_price: u32, opp_price: u32) -> bool {
    match side {
        Side::Buy => own_price >= opp_price,
        Side::Sell => own_price <= opp_price,
    }
}

/// Orient a trade print so the buy-side order comes first.
fn trade_between(aggressor: &Order, resting: &Order, price: u32, quantity: u32) -> Event {
    match aggressor.side {
        Side::Buy => Event::trade(
            aggressor.user,
            aggressor.user_order_id,
            resting.user,
            resting.user_order_id,
            price,
            quantity,
        ),
        Side::Sell => Event::trade(
            resting.user,
            resting.user_order_id,
            aggressor.user,
            aggressor.user_order_id,
            price,
            quantity,
        ),
    }
}
