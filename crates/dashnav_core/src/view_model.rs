use crate::state::{Content, MountedPartial};
use crate::{AppState, ClearButton, ControlKind, OVERVIEW_ROWS, RUN_SELECTOR};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub fragment: String,
    pub nav: Vec<NavLinkView>,
    pub content: ContentView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkView {
    pub label: String,
    pub section: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentView {
    #[default]
    Empty,
    /// Inline error markup.
    Message { html: String },
    Partial {
        section: String,
        /// Partial markup exactly as fetched.
        html: String,
        /// Overview rows, hidden ones included.
        rows: Vec<RowView>,
        filter: Option<FilterView>,
        selector: Option<SelectorView>,
        sortable: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub cells: Vec<String>,
    /// Set when the row's timestamp cell navigates to the details view.
    pub timestamp_link: Option<String>,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterView {
    pub input_id: String,
    pub value: String,
    /// `None` when the partial has no clear button.
    pub clear_visible: Option<bool>,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView {
    pub value: String,
    pub options: Vec<String>,
}

impl ContentView {
    /// Inline error text of the content area, if it shows one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ContentView::Message { html } => Some(html),
            _ => None,
        }
    }

    pub fn visible_rows(&self) -> Vec<&RowView> {
        match self {
            ContentView::Partial { rows, .. } => rows.iter().filter(|row| !row.hidden).collect(),
            _ => Vec::new(),
        }
    }
}

impl AppViewModel {
    pub(crate) fn build(state: &AppState) -> Self {
        let nav = state
            .nav()
            .iter()
            .map(|link| NavLinkView {
                label: link.label.clone(),
                section: link.section.clone(),
                active: link.active,
            })
            .collect();

        let content = match state.content() {
            Content::Empty => ContentView::Empty,
            Content::Message(html) => ContentView::Message { html: html.clone() },
            Content::Partial(partial) => partial_view(partial, state.focused()),
        };

        Self {
            fragment: state.fragment().to_string(),
            nav,
            content,
        }
    }

    pub fn active_sections(&self) -> Vec<&str> {
        self.nav
            .iter()
            .filter(|link| link.active)
            .map(|link| link.section.as_str())
            .collect()
    }
}

fn partial_view(partial: &MountedPartial, focused: Option<&str>) -> ContentView {
    let rows = partial
        .outline
        .rows(OVERVIEW_ROWS)
        .map(|set| {
            set.rows
                .iter()
                .map(|row| RowView {
                    cells: row.cells.iter().map(|cell| cell.trim().to_string()).collect(),
                    timestamp_link: row
                        .timestamp
                        .clone()
                        .filter(|_| partial.timestamp_links),
                    hidden: row.hidden,
                })
                .collect()
        })
        .unwrap_or_default();

    let filter = partial.filter.as_ref().and_then(|filter| {
        let input = partial.outline.control(filter.input_id())?;
        Some(FilterView {
            input_id: input.id.clone(),
            value: input.value.clone(),
            clear_visible: input.clear_button.map(|ClearButton { visible }| visible),
            focused: focused == Some(input.id.as_str()),
        })
    });

    let selector = partial
        .outline
        .control(RUN_SELECTOR)
        .filter(|_| partial.run_selector)
        .map(|control| SelectorView {
            value: control.value.clone(),
            options: match &control.kind {
                ControlKind::Select { options } => options.clone(),
                ControlKind::Input => Vec::new(),
            },
        });

    ContentView::Partial {
        section: partial.section.as_str().to_string(),
        html: partial.html.clone(),
        rows,
        filter,
        selector,
        sortable: partial.table_sort,
    }
}
