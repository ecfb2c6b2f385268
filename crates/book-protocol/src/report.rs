//! Event formatter.
//!
//! Line formats, with literal spacing:
//!
//! - Ack:         `A, user, userOrderId`
//! - Reject:      `R, user, userOrderId`
//! - Top of book: `B, side, price, volume` (`-` for price and volume when
//!   the side is empty)
//! - Trade:       `T, buyUser, buyUserOrderId, sellUser, sellUserOrderId, price, quantity`

use book_core::{Event, TobSnapshot};

/// Format one output event as a single line.
pub fn format_event(event: &Event) -> String {
    match event {
        Event::Ack {
            user,
            user_order_id,
        } => format!("A, {}, {}", user, user_order_id),
        Event::Reject {
            user,
            user_order_id,
        } => format!("R, {}, {}", user, user_order_id),
        Event::TopOfBook(tob) => format_tob(tob),
        Event::Trade(trade) => format!(
            "T, {}, {}, {}, {}, {}, {}",
            trade.buy_user,
            trade.buy_user_order_id,
            trade.sell_user,
            trade.sell_user_order_id,
            trade.price,
            trade.quantity
        ),
    }
}

fn format_tob(tob: &TobSnapshot) -> String {
    match tob.level {
        Some((price, volume)) => format!("B, {}, {}, {}", tob.side.as_char(), price, volume),
        None => format!("B, {}, -, -", tob.side.as_char()),
    }
}

/// Render a whole instruction's events, one line each, joined by newlines
/// with no trailing newline.
pub fn render(events: &[Event]) -> String {
    events.iter().map(format_event).collect::<Vec<_>>().join("\n")
}
