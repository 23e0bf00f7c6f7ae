//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`catalog`, `selection`, `ui`) so individual
//! components can depend on small focused models. `slots` is fixed planner
//! configuration rather than fetched data.

pub mod catalog;
pub mod selection;
pub mod slots;
pub mod ui;
