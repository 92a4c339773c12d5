//! Cart domain module (event-driven).
//!
//! The cart is an insertion-ordered multiset of products. Every mutation is a
//! command handled by the [`Cart`] aggregate and recorded as an event, so the
//! session can publish what happened. None of these operations can fail.

pub mod cart;
pub mod receipt;

pub use cart::{
    AddItem, Cart, CartCleared, CartCommand, CartEvent, CheckedOut, Checkout, ClearCart, ItemAdded,
};
pub use receipt::Receipt;
