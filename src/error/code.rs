use std::fmt;

/// Error codes with category prefix
///
/// Categories:
/// - VAL: Input validation errors (labels, ranges, presets, actions)
/// - SEL: Selector lifecycle errors
/// - TUI: Terminal UI errors
/// - CFG: Configuration parsing/validation
/// - IO: File system and terminal I/O
/// - INT: Unexpected internal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid time label
    Val001,
    /// Invalid time range
    Val002,
    /// Unknown quick preset
    Val003,
    /// Invalid script action
    Val004,

    /// Action applied after the selector closed
    Sel001,

    /// Terminal initialization failed
    Tui001,

    /// Invalid config format
    Cfg001,

    /// File or terminal I/O failed
    Io001,

    /// Unexpected internal error
    Int001,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::Val001,
        ErrorCode::Val002,
        ErrorCode::Val003,
        ErrorCode::Val004,
        ErrorCode::Sel001,
        ErrorCode::Tui001,
        ErrorCode::Cfg001,
        ErrorCode::Io001,
        ErrorCode::Int001,
    ];

    /// Returns the error code string (e.g., "VAL001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Val002 => "VAL002",
            ErrorCode::Val003 => "VAL003",
            ErrorCode::Val004 => "VAL004",
            ErrorCode::Sel001 => "SEL001",
            ErrorCode::Tui001 => "TUI001",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Io001 => "IO001",
            ErrorCode::Int001 => "INT001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Val001 => "Time labels must be HH:MM with minutes 00 or 30",
            ErrorCode::Val002 => "A time range must start before it ends",
            ErrorCode::Val003 => "Only the built-in quick presets can be quick-added",
            ErrorCode::Val004 => "The action could not be parsed",
            ErrorCode::Sel001 => "The selector was already committed or cancelled",
            ErrorCode::Tui001 => "Failed to initialize the terminal interface",
            ErrorCode::Cfg001 => "The configuration file has an invalid format",
            ErrorCode::Io001 => "A file or terminal operation failed",
            ErrorCode::Int001 => "An unexpected internal error occurred",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_error_codes_have_valid_string() {
        for code in ErrorCode::ALL {
            let s = code.as_str();
            assert!(
                s.len() >= 5 && s.len() <= 6,
                "Error code string should be 5-6 characters: {}",
                s
            );
            assert!(s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn all_error_codes_have_cause() {
        for code in ErrorCode::ALL {
            assert!(!code.cause().is_empty(), "{} has no cause", code);
        }
    }

    #[test]
    fn error_code_strings_are_unique() {
        let mut seen: Vec<&str> = ErrorCode::ALL.iter().map(|c| c.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), ErrorCode::ALL.len());
    }
}
