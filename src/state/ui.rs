//! Local UI chrome state (tabs, dialog visibility).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`catalog`,
//! `selection`) so the planner chrome can evolve independently of store data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Primary tab of the planner workspace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MainTab {
    /// Equipment grid. The only tab with live data.
    #[default]
    Gear,
    /// Skills placeholder.
    Skills,
    /// Talents placeholder.
    Talents,
}

/// UI state for tabs and the crafting dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: MainTab,
    pub show_crafting: bool,
}
