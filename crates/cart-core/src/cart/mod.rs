//! Shopping cart module.
//!
//! Contains the cart entry value type and the cart sequence.

#[allow(clippy::module_inception)]
mod cart;
mod entry;

pub use cart::Cart;
pub use entry::CartEntry;
