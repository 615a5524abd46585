//! Plain text output for traces and located markers.

use std::fmt::Write;

use crate::position::Position;
use crate::traverse::Trace;

/// Two newline-terminated lines: the collected letters and the full path
pub fn format_trace(trace: &Trace) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Letters {}", trace.letters_string());
    let _ = writeln!(out, "Path as characters {}", trace.path_string());
    out
}

/// One `row,col` pair per line
pub fn format_positions(positions: &[Position]) -> String {
    let mut out = String::with_capacity(positions.len() * 6);
    for pos in positions {
        let _ = writeln!(out, "{},{}", pos.row, pos.col);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_trace() {
        let trace = Trace {
            path: "@-A-x".chars().collect(),
            letters: vec!['A'],
        };
        assert_eq!(format_trace(&trace), "Letters A\nPath as characters @-A-x\n");
    }

    #[test]
    fn test_format_trace_no_letters() {
        let trace = Trace {
            path: "@x".chars().collect(),
            letters: Vec::new(),
        };
        assert_eq!(format_trace(&trace), "Letters \nPath as characters @x\n");
    }

    #[test]
    fn test_format_positions() {
        let positions = [Position::new(0, 3), Position::new(12, 0)];
        assert_eq!(format_positions(&positions), "0,3\n12,0\n");
        assert_eq!(format_positions(&[]), "");
    }
}
