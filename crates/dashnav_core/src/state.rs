use crate::route::{details_fragment, partial_path, section_fragment};
use crate::view_model::AppViewModel;
use crate::{
    Effect, FilterConfig, LoadOutcome, PartialOutline, RowFilter, RowText, Section, OVERVIEW_ROWS,
    OVERVIEW_SEARCH, OVERVIEW_TABLE, RUN_SELECTOR,
};

pub const UNEXPECTED_ERROR_HTML: &str = "<p class='text-danger'>Unexpected error.</p>";

/// Optional collaborators present in the hosting environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub table_sort: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    /// Value of the link's section attribute.
    pub section: String,
    pub active: bool,
}

impl NavLink {
    pub fn new(label: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            section: section.into(),
            active: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum Content {
    #[default]
    Empty,
    /// Inline error markup that replaced the content area.
    Message(String),
    Partial(MountedPartial),
}

/// The partial currently injected into the content area plus the behaviours
/// wired onto it. Replacing the content drops every binding with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MountedPartial {
    pub(crate) section: Section,
    pub(crate) html: String,
    pub(crate) outline: PartialOutline,
    pub(crate) filter: Option<RowFilter>,
    pub(crate) timestamp_links: bool,
    pub(crate) run_selector: bool,
    pub(crate) table_sort: bool,
}

/// Router state: the fragment, the nav bar and the content area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    fragment: String,
    current: Option<Section>,
    nav: Vec<NavLink>,
    content: Content,
    focused: Option<String>,
    capabilities: Capabilities,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nav(nav: Vec<NavLink>, capabilities: Capabilities) -> Self {
        Self {
            nav,
            capabilities,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::build(self)
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.current.as_ref()
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn nav(&self) -> &[NavLink] {
        &self.nav
    }

    pub(crate) fn content(&self) -> &Content {
        &self.content
    }

    pub(crate) fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_fragment(&mut self, fragment: String) -> Effect {
        self.fragment = fragment.clone();
        self.mark_dirty();
        Effect::SetFragment(fragment)
    }

    /// Takes over a fragment the host already shows; nothing to write back.
    pub(crate) fn adopt_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.to_string();
        self.mark_dirty();
    }

    /// Issues the fetch for `section`. A detail id that cannot be decoded
    /// replaces the content with the generic error instead.
    pub(crate) fn load_section(&mut self, section: Section) -> Vec<Effect> {
        match partial_path(&section, &self.fragment) {
            Ok(path) => vec![Effect::FetchPartial { section, path }],
            Err(err) => {
                self.show_message(UNEXPECTED_ERROR_HTML.to_string());
                vec![Effect::ReportFailure {
                    section,
                    message: err.to_string(),
                }]
            }
        }
    }

    pub(crate) fn navigate_to(&mut self, section: Section) -> Vec<Effect> {
        let mut effects = vec![self.set_fragment(section_fragment(section.as_str()))];
        effects.extend(self.load_section(section));
        effects
    }

    pub(crate) fn go_to_details(&mut self, id: &str) -> Vec<Effect> {
        let mut effects = vec![self.set_fragment(details_fragment(id))];
        effects.extend(self.load_section(Section::details()));
        effects
    }

    pub(crate) fn apply_loaded(&mut self, section: Section, outcome: LoadOutcome) -> Vec<Effect> {
        match outcome {
            LoadOutcome::HttpStatus(status) => {
                self.show_message(format!(
                    "<p class='text-danger'>Error {status} loading {section}.</p>"
                ));
                Vec::new()
            }
            LoadOutcome::Failed => {
                self.show_message(UNEXPECTED_ERROR_HTML.to_string());
                Vec::new()
            }
            LoadOutcome::Rendered { html, outline } => self.mount(section, html, outline),
        }
    }

    fn show_message(&mut self, html: String) {
        self.content = Content::Message(html);
        self.focused = None;
        self.mark_dirty();
    }

    fn mount(&mut self, section: Section, html: String, outline: PartialOutline) -> Vec<Effect> {
        let key = section.key();
        for link in &mut self.nav {
            link.active = link.section.to_lowercase() == key;
        }

        let mut partial = MountedPartial {
            section: section.clone(),
            html,
            outline,
            filter: None,
            timestamp_links: false,
            run_selector: false,
            table_sort: false,
        };
        let mut effects = Vec::new();

        if section.is(Section::OVERVIEW) {
            partial.timestamp_links = partial
                .outline
                .rows(OVERVIEW_ROWS)
                .is_some_and(|set| set.rows.iter().any(|row| row.timestamp.is_some()));
            partial.filter = RowFilter::attach(
                &mut partial.outline,
                FilterConfig {
                    input_id: OVERVIEW_SEARCH.to_string(),
                    row_selector: OVERVIEW_ROWS.to_string(),
                    text: RowText::Cell(0),
                },
            );
            if self.capabilities.table_sort && partial.outline.has_table(OVERVIEW_TABLE) {
                partial.table_sort = true;
                effects.push(Effect::InitTableSort {
                    selector: OVERVIEW_TABLE.to_string(),
                });
            }
        }

        if section.is(Section::DETAILS) {
            partial.run_selector = partial.outline.control(RUN_SELECTOR).is_some();
        }

        self.current = Some(section);
        self.content = Content::Partial(partial);
        self.focused = None;
        self.mark_dirty();
        effects
    }

    pub(crate) fn timestamp_at(&self, row: usize) -> Option<String> {
        let Content::Partial(partial) = &self.content else {
            return None;
        };
        if !partial.timestamp_links {
            return None;
        }
        partial
            .outline
            .rows(OVERVIEW_ROWS)?
            .rows
            .get(row)?
            .timestamp
            .clone()
    }

    pub(crate) fn select_run(&mut self, value: &str) -> bool {
        let Content::Partial(partial) = &mut self.content else {
            return false;
        };
        if !partial.run_selector {
            return false;
        }
        match partial.outline.control_mut(RUN_SELECTOR) {
            Some(selector) => {
                selector.value = value.to_string();
                true
            }
            None => false,
        }
    }

    pub(crate) fn filter_input(&mut self, input_id: &str, value: &str) {
        let Content::Partial(partial) = &mut self.content else {
            return;
        };
        let MountedPartial {
            filter, outline, ..
        } = partial;
        if let Some(filter) = filter.as_ref().filter(|f| f.input_id() == input_id) {
            filter.on_input(outline, value);
            self.mark_dirty();
        }
    }

    pub(crate) fn filter_cleared(&mut self, input_id: &str) {
        let Content::Partial(partial) = &mut self.content else {
            return;
        };
        let MountedPartial {
            filter, outline, ..
        } = partial;
        let Some(filter) = filter.as_ref().filter(|f| f.input_id() == input_id) else {
            return;
        };
        if filter.on_clear(outline) {
            self.focused = Some(input_id.to_string());
            self.mark_dirty();
        }
    }
}
