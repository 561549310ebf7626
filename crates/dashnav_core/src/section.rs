use std::fmt;

/// Name of a dashboard section as it appears in nav links and fragments.
///
/// The name is kept verbatim for request paths; comparisons ignore case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Section(String);

impl Section {
    pub const OVERVIEW: &'static str = "overview";
    pub const DETAILS: &'static str = "details";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn overview() -> Self {
        Self::new(Self::OVERVIEW)
    }

    pub fn details() -> Self {
        Self::new(Self::DETAILS)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used for highlighting and section matching.
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn is(&self, other: &str) -> bool {
        self.key() == other.to_lowercase()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
