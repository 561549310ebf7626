#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The page finished loading; carries the address fragment, if any.
    PageReady { fragment: Option<String> },
    /// User clicked a nav link carrying this section token.
    NavClicked { section: String },
    /// A partial fetch finished.
    PartialLoaded {
        section: crate::Section,
        outcome: LoadOutcome,
    },
    /// User clicked the timestamp cell of the n-th overview row (0-based).
    TimestampClicked { row: usize },
    /// The run selector changed to a new value.
    RunSelected { value: String },
    /// Input event on a filter input.
    FilterInput { input_id: String, value: String },
    /// Click on the clear button next to a filter input.
    FilterCleared { input_id: String },
    /// Changes nothing and requests no effects; `update` returns the state as given.
    NoOp,
}

/// Result of fetching one partial, as reported back to the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered {
        html: String,
        outline: crate::PartialOutline,
    },
    /// The server answered outside the success range.
    HttpStatus(u16),
    /// Transport or body failure; already logged by the host.
    Failed,
}
