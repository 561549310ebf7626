//! Element model of a mounted partial.
//!
//! The engine builds a [`PartialOutline`] from the fetched HTML; the router
//! wires behaviours onto it and the row filter toggles row visibility in it.

/// Rows of the overview table.
pub const OVERVIEW_ROWS: &str = "#overview tbody tr";
/// The overview table handed to the table sorter.
pub const OVERVIEW_TABLE: &str = "#overview table";
/// Id of the overview search input.
pub const OVERVIEW_SEARCH: &str = "searchOverview";
/// Id of the run selector on the details view.
pub const RUN_SELECTOR: &str = "runSelector";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartialOutline {
    pub row_sets: Vec<RowSet>,
    pub controls: Vec<Control>,
    /// Table selectors that matched at least one element.
    pub tables: Vec<String>,
}

/// Rows matched by one selector, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSet {
    pub selector: String,
    pub rows: Vec<PartialRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartialRow {
    /// Text content of each cell element.
    pub cells: Vec<String>,
    /// Value of the row's `td[data-timestamp]` cell, if any.
    pub timestamp: Option<String>,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub id: String,
    pub kind: ControlKind,
    pub value: String,
    /// Present when the control sits in a `.input-group.filter` wrapper that
    /// holds a `.clear-filter-btn`.
    pub clear_button: Option<ClearButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    Input,
    Select { options: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearButton {
    pub visible: bool,
}

impl PartialOutline {
    pub fn rows(&self, selector: &str) -> Option<&RowSet> {
        self.row_sets.iter().find(|set| set.selector == selector)
    }

    pub fn rows_mut(&mut self, selector: &str) -> Option<&mut RowSet> {
        self.row_sets.iter_mut().find(|set| set.selector == selector)
    }

    pub fn control(&self, id: &str) -> Option<&Control> {
        self.controls.iter().find(|control| control.id == id)
    }

    pub fn control_mut(&mut self, id: &str) -> Option<&mut Control> {
        self.controls.iter_mut().find(|control| control.id == id)
    }

    pub fn has_table(&self, selector: &str) -> bool {
        self.tables.iter().any(|table| table == selector)
    }
}

impl RowSet {
    pub fn new(selector: impl Into<String>, rows: Vec<PartialRow>) -> Self {
        Self {
            selector: selector.into(),
            rows,
        }
    }
}

impl PartialRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            timestamp: None,
            hidden: false,
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

impl Control {
    pub fn input(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ControlKind::Input,
            value: value.into(),
            clear_button: None,
        }
    }

    pub fn select(id: impl Into<String>, value: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            id: id.into(),
            kind: ControlKind::Select { options },
            value: value.into(),
            clear_button: None,
        }
    }

    pub fn with_clear_button(mut self) -> Self {
        self.clear_button = Some(ClearButton::default());
        self
    }
}
