//! Thermal systems models.
//!
//! This module contains models that apply heat balances to entities in a
//! scene, starting with the rack thermal overlay.

pub mod overlay;
