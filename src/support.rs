//! Supporting utilities used by the overlay model.
//!
//! - [`constraint`]: Sign constraints on numeric inputs.
//! - [`scene`]: The attribute-store interface the overlay reads and writes.
//! - [`units`]: Extensions to [`uom`] for the sensible heat balance.

pub mod constraint;
pub mod scene;
pub mod units;
