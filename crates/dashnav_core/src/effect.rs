#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the address fragment (without `#`).
    SetFragment(String),
    FetchPartial {
        section: crate::Section,
        path: String,
    },
    /// Hand the table matched by `selector` to the table sorter.
    InitTableSort { selector: String },
    /// A load failed before any request was made; the host logs it.
    ReportFailure {
        section: crate::Section,
        message: String,
    },
}
