//! DOT format utilities for graph rendering.

use std::fmt::Write;

/// Quote a string as a DOT identifier.
///
/// Wraps the value in double quotes, backslash-escapes `"` and `\`, and writes
/// characters that do not print as escape sequences, the way Go's
/// `strconv.Quote` does: `\x` for ASCII, `\u` up to U+FFFF and `\U` beyond.
/// Non-printing means control, format (Cf) or whitespace other than the ASCII
/// space. Unassigned and private-use code points are kept as they are.
pub fn quote(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    out.push('"');
    for c in input.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            c if is_printable(c) => out.push(c),
            c if c.is_ascii() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if (c as u32) <= 0xFFFF => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => {
                let _ = write!(out, "\\U{:08x}", c as u32);
            }
        }
    }
    out.push('"');
    out
}

fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control() || c.is_whitespace() || is_format(c))
}

/// Unicode general category Cf.
fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{0600}'..='\u{0605}'
            | '\u{061C}'
            | '\u{06DD}'
            | '\u{070F}'
            | '\u{0890}'..='\u{0891}'
            | '\u{08E2}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{110BD}'
            | '\u{110CD}'
            | '\u{13430}'..='\u{1343F}'
            | '\u{1BCA0}'..='\u{1BCA3}'
            | '\u{1D173}'..='\u{1D17A}'
            | '\u{E0001}'
            | '\u{E0020}'..='\u{E007F}'
    )
}

/// Line-oriented DOT output buffer.
///
/// Every statement inside the graph body is tab-indented and newline
/// terminated.
pub struct DotBuilder {
    output: String,
}

impl DotBuilder {
    /// Open a directed graph with the given name and the default header.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {name}{{");
        output.push_str("\tedge[arrowhead=vee]\n");
        output.push_str("\tgraph [rankdir=LR,compound=true,ranksep=1.0];\n");
        Self { output }
    }

    /// Add a `/* ... */` comment line.
    pub fn comment(&mut self, text: &str) -> &mut Self {
        let _ = writeln!(self.output, "\t/* {text} */");
        self
    }

    /// Add a node statement. `label` is written verbatim between quotes.
    pub fn node(&mut self, id: &str, shape: &str, label: &str, style: &str) -> &mut Self {
        let _ = writeln!(
            self.output,
            "\t{}[shape={},label=\"{}\",style={}]",
            quote(id),
            quote(shape),
            label,
            quote(style)
        );
        self
    }

    /// Add a directed edge with a `dir` attribute.
    pub fn edge(&mut self, from: &str, to: &str, dir: &str) -> &mut Self {
        let _ = writeln!(self.output, "\t{} -> {}[dir={dir}]", quote(from), quote(to));
        self
    }

    /// Close the graph and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}
