use crate::{PartialOutline, PartialRow};

/// Rule for extracting the comparable text of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowText {
    /// Text of the n-th `td` of the row (0-based); header cells are not
    /// counted and a missing cell reads as empty.
    Cell(usize),
}

impl RowText {
    pub fn extract<'a>(&self, row: &'a PartialRow) -> std::borrow::Cow<'a, str> {
        match self {
            RowText::Cell(index) => row
                .cells
                .get(*index)
                .map(|cell| cell.as_str().into())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub input_id: String,
    pub row_selector: String,
    pub text: RowText,
}

/// A live substring filter bound to one input of the mounted partial.
///
/// Holds no row state of its own; visibility lives in the outline, so a
/// fresh partial always starts with fresh, independent bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFilter {
    config: FilterConfig,
    has_clear_button: bool,
}

impl RowFilter {
    /// Binds a filter to `config.input_id`. Returns `None` when the partial
    /// has no such input.
    pub fn attach(outline: &mut PartialOutline, config: FilterConfig) -> Option<Self> {
        let input = outline.control_mut(&config.input_id)?;
        let has_clear_button = match input.clear_button.as_mut() {
            Some(button) => {
                button.visible = !input.value.is_empty();
                true
            }
            None => false,
        };
        Some(Self {
            config,
            has_clear_button,
        })
    }

    pub fn input_id(&self) -> &str {
        &self.config.input_id
    }

    /// Input event: stores the value, syncs the clear button and re-filters.
    pub fn on_input(&self, outline: &mut PartialOutline, value: &str) {
        if let Some(input) = outline.control_mut(&self.config.input_id) {
            input.value = value.to_string();
            if let Some(button) = input.clear_button.as_mut() {
                button.visible = !value.is_empty();
            }
        }

        let needle = value.trim().to_lowercase();
        let Some(set) = outline.rows_mut(&self.config.row_selector) else {
            return;
        };
        for row in &mut set.rows {
            let text = self.config.text.extract(row).trim().to_lowercase();
            row.hidden = !(needle.is_empty() || text.contains(&needle));
        }
    }

    /// Clear-button click. Returns `false` when there is no clear button.
    pub fn on_clear(&self, outline: &mut PartialOutline) -> bool {
        if !self.has_clear_button {
            return false;
        }
        if let Some(input) = outline.control_mut(&self.config.input_id) {
            input.value.clear();
            if let Some(button) = input.clear_button.as_mut() {
                button.visible = false;
            }
        }
        if let Some(set) = outline.rows_mut(&self.config.row_selector) {
            for row in &mut set.rows {
                row.hidden = false;
            }
        }
        true
    }
}
