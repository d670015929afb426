//! ANSI color codes for rendered queries.
//!
//! Three semantic colors:
//! - Blue: SPARQL keywords (`SELECT`, `UNION`, `FILTER`, ...)
//! - Green: variables
//! - Dim: IRIs and namespaces
//!
//! Only standard 16-color codes are used, so output reads well on light and
//! dark themes alike.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub keyword: &'static str,
    pub variable: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        keyword: "\x1b[34m",
        variable: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        keyword: "",
        variable: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
