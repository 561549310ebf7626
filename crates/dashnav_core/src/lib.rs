//! Dashnav core: pure router state machine, page model and view-model helpers.
mod effect;
mod filter;
mod msg;
mod outline;
mod route;
mod section;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{FilterConfig, RowFilter, RowText};
pub use msg::{LoadOutcome, Msg};
pub use outline::{
    ClearButton, Control, ControlKind, PartialOutline, PartialRow, RowSet, OVERVIEW_ROWS,
    OVERVIEW_SEARCH, OVERVIEW_TABLE, RUN_SELECTOR,
};
pub use route::{
    decode_component, detail_id, details_fragment, encode_component, normalize_fragment,
    partial_path, section_fragment, InitialRoute, RouteError, DEFAULT_FRAGMENT,
};
pub use section::Section;
pub use state::{AppState, Capabilities, NavLink, UNEXPECTED_ERROR_HTML};
pub use update::update;
pub use view_model::{AppViewModel, ContentView, FilterView, NavLinkView, RowView, SelectorView};
