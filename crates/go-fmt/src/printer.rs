//! The rendering context: an indent counter and the four-space unit.

pub(crate) const INDENT: &str = "    ";

/// Tracks the current indent level while the tree is rendered.
/// One `Printer` lives for exactly one `unparse` call.
#[derive(Debug, Default)]
pub(crate) struct Printer {
    pub(crate) indent: usize,
}

impl Printer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The leading whitespace for the current indent level.
    pub(crate) fn indent_str(&self) -> String {
        INDENT.repeat(self.indent)
    }

    /// The leading whitespace one level out, used by `case`/`default`
    /// clauses which outdent relative to their surrounding block.
    pub(crate) fn outdent_str(&self) -> String {
        INDENT.repeat(self.indent.saturating_sub(1))
    }
}
