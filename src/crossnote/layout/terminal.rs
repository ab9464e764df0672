use console::Term;

const DEFAULT_COLUMNS: usize = 80;
const DEFAULT_ROWS: usize = 24;

/// Size of the output terminal, injected into the layout so rendering never
/// queries the real terminal itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalInfo {
    pub columns: usize,
    pub rows: usize,
}

impl Default for TerminalInfo {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl TerminalInfo {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Queries stdout; falls back to 80x24 when it is not a terminal or
    /// reports a zero width.
    pub fn detect() -> Self {
        Term::stdout()
            .size_checked()
            .filter(|(_, cols)| *cols > 0)
            .map(|(rows, cols)| Self::new(cols as usize, rows as usize))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_terminal() {
        assert_eq!(TerminalInfo::default(), TerminalInfo::new(80, 24));
    }

    #[test]
    fn detect_always_yields_a_usable_width() {
        assert!(TerminalInfo::detect().columns > 0);
    }
}
