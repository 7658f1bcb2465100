//! # Rack Thermal Overlay
//!
//! Sensible heat balance and reversible color annotation for racks in a
//! hierarchical scene graph.
//!
//! Each entity carrying a heat load is solved either for the coolant flow it
//! requires at a target temperature rise (design) or for the rise its observed
//! flow produces (audit). The result is classified against the target and
//! painted onto the entity as a display-color override that can be fully
//! restored.
//!
//! ## Crate layout
//!
//! - [`models`]: The overlay controller and its [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities: numeric constraints, the scene
//!   interface, and [`uom`] extensions.
//!
//! Modules in [`support`] are part of the public API because hosts implement
//! [`support::scene::Scene`] for their own scene graphs, but their APIs are
//! not stable.

pub mod models;
pub mod support;
