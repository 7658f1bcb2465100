//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (e.g., `thermal`).
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the computation and domain logic lives. The `core` module is an
//! implementation detail; the model module re-exports the parts of it that form
//! the public API and adds any [`twine_core::Model`] adapters.

pub mod thermal;
