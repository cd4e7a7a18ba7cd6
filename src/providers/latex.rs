//! Default [`Formatter`] for LaTeX-flavoured recognition text.
//!
//! Candidate readings:
//! 1. the text exactly as recognized, e.g. `$x ^ { 2 }$`
//! 2. the text with its outer math delimiters removed, `x ^ { 2 }`
//! 3. reading 2 with insignificant whitespace removed, `x^{2}`
//!
//! Plain text has no delimiters, so reading 2 equals reading 1 and the
//! session collapses the extra slots.

use super::traits::Formatter;

/// Math delimiter pairs, longest opening first so `$$` wins over `$`.
const DELIMITERS: &[(&str, &str)] = &[("$$", "$$"), ("\\[", "\\]"), ("\\(", "\\)"), ("$", "$")];

#[derive(Debug, Clone, Copy, Default)]
pub struct LatexFormatter;

impl LatexFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Inner expression when `text` is exactly one delimited expression.
    fn delimited_inner(text: &str) -> Option<&str> {
        let text = text.trim();
        for &(open, close) in DELIMITERS {
            if text.len() < open.len() + close.len() {
                continue;
            }
            let Some(inner) = text
                .strip_prefix(open)
                .and_then(|rest| rest.strip_suffix(close))
            else {
                continue;
            };
            // `$a$ + $b$` starts and ends with `$` but is two expressions
            if inner.trim().is_empty() || inner.contains('$') || inner.contains(close) {
                return None;
            }
            return Some(inner.trim());
        }
        None
    }
}

impl Formatter for LatexFormatter {
    fn derive_secondary(&self, text: &str) -> String {
        Self::delimited_inner(text).unwrap_or(text).to_string()
    }

    fn derive_third(&self, text: &str) -> String {
        compact_latex(&self.derive_secondary(text))
    }

    fn format_exception(&self, error: &str) -> String {
        let error = error.trim();
        let (kind, detail) = match error.split_once(':') {
            Some((kind, detail)) => (kind.trim(), detail.trim()),
            None => (error, ""),
        };
        // `Connect to host:443 failed: ...` does not start with a type name
        if !is_qualified_name(kind) {
            return error.to_string();
        }
        // net.UnknownHostException -> UnknownHostException
        let simple = kind.rsplit('.').next().unwrap_or(kind);
        if detail.is_empty() {
            simple.to_string()
        } else {
            format!("{simple}: {detail}")
        }
    }

    fn is_fully_delimited_math(&self, text: &str) -> bool {
        Self::delimited_inner(text).is_some()
    }
}

/// `a.b.Name` or `Name`: dot-separated identifiers, no whitespace.
fn is_qualified_name(text: &str) -> bool {
    !text.is_empty()
        && text.split('.').all(|part| {
            part.chars().next().is_some_and(|c| c.is_alphabetic() || c == '_')
                && part.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        })
}

/// Commands whose brace argument is typeset in text mode, spaces included.
const TEXT_COMMANDS: &[&str] = &["text", "textrm", "textit", "textbf", "mbox"];

/// Drop whitespace that LaTeX ignores in math mode.
///
/// A space is kept only where it terminates a control word before a
/// letter (`\alpha x`) and as the control space `\ `. The brace argument
/// of a text-mode command is copied verbatim.
fn compact_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut after_control_word = false;
    let mut pending_space = false;

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            if after_control_word && c.is_ascii_alphabetic() {
                out.push(' ');
            }
            pending_space = false;
        }
        after_control_word = false;

        if c != '\\' {
            out.push(c);
            continue;
        }
        out.push('\\');
        match chars.peek().copied() {
            // control space
            Some(next) if next.is_whitespace() => {
                out.push(' ');
                chars.next();
            }
            Some(next) if next.is_ascii_alphabetic() => {
                let mut word = String::new();
                while let Some(&next) = chars.peek() {
                    if !next.is_ascii_alphabetic() {
                        break;
                    }
                    word.push(next);
                    chars.next();
                }
                out.push_str(&word);
                after_control_word = true;

                if TEXT_COMMANDS.contains(&word.as_str()) {
                    while chars.peek().is_some_and(|c| c.is_whitespace()) {
                        chars.next();
                        pending_space = true;
                    }
                    if chars.peek() == Some(&'{') {
                        copy_brace_group(&mut chars, &mut out);
                        after_control_word = false;
                        pending_space = false;
                    }
                }
            }
            // `\\`, `\{`, `\,` and other control symbols
            Some(next) => {
                out.push(next);
                chars.next();
            }
            None => {}
        }
    }
    out
}

/// Copy a `{...}` group, nested braces and escapes included, unchanged.
fn copy_brace_group(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, out: &mut String) {
    let mut depth = 0usize;
    while let Some(c) = chars.next() {
        out.push(c);
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_each_delimiter_pair() {
        let f = LatexFormatter::new();
        assert!(f.is_fully_delimited_math("$x$"));
        assert!(f.is_fully_delimited_math("$$x+1$$"));
        assert!(f.is_fully_delimited_math("\\( x \\)"));
        assert!(f.is_fully_delimited_math("  \\[ \\frac{1}{2} \\]  "));
    }

    #[test]
    fn rejects_partial_or_multiple_expressions() {
        let f = LatexFormatter::new();
        assert!(!f.is_fully_delimited_math("plain text"));
        assert!(!f.is_fully_delimited_math("$a$ and $b$"));
        assert!(!f.is_fully_delimited_math("$$"));
        assert!(!f.is_fully_delimited_math("$ $"));
        assert!(!f.is_fully_delimited_math("where $x$ is"));
    }

    #[test]
    fn secondary_strips_outer_delimiters() {
        let f = LatexFormatter::new();
        assert_eq!(f.derive_secondary("$x ^ { 2 }$"), "x ^ { 2 }");
        assert_eq!(f.derive_secondary("hello"), "hello");
    }

    #[test]
    fn third_compacts_whitespace() {
        let f = LatexFormatter::new();
        let cases = [
            ("$x ^ { 2 } + 1$", "x^{2}+1"),
            ("$\\alpha x$", "\\alpha x"),
            ("$\\alpha  +  x$", "\\alpha+x"),
            ("$a \\ b$", "a\\ b"),
            ("$x^{2}$", "x^{2}"),
            ("$\\frac { 1 } { 2 }$", "\\frac{1}{2}"),
            ("$\\{ a \\}$", "\\{a\\}"),
        ];
        for (input, expected) in cases {
            assert_eq!(f.derive_third(input), expected, "input: {input}");
        }
    }

    #[test]
    fn third_keeps_text_mode_arguments() {
        let f = LatexFormatter::new();
        let cases = [
            ("$\\text{for all} x$", "\\text{for all}x"),
            ("$\\text{if } x > 0$", "\\text{if }x>0"),
            ("$\\textbf {a  b} + c$", "\\textbf{a  b}+c"),
            ("$\\mbox{a {b c} d}$", "\\mbox{a {b c} d}"),
            ("$\\textit{x \\} y}$", "\\textit{x \\} y}"),
            ("$\\textrm{open ended$", "\\textrm{open ended"),
            ("$\\text x$", "\\text x"),
        ];
        for (input, expected) in cases {
            assert_eq!(f.derive_third(input), expected, "input: {input}");
        }
    }

    #[test]
    fn third_drops_space_around_line_breaks() {
        let f = LatexFormatter::new();
        let cases = [
            ("$a \\\\ b$", "a\\\\b"),
            ("$\\begin{matrix} 1 & 2 \\\\ 3 & 4 \\end{matrix}$", "\\begin{matrix}1&2\\\\3&4\\end{matrix}"),
        ];
        for (input, expected) in cases {
            assert_eq!(f.derive_third(input), expected, "input: {input}");
        }
    }

    #[test]
    fn exception_name_is_simplified() {
        let f = LatexFormatter::new();
        assert_eq!(
            f.format_exception("net.UnknownHostException: api.example.com"),
            "UnknownHostException: api.example.com"
        );
        assert_eq!(f.format_exception("IOException"), "IOException");
    }

    #[test]
    fn exception_text_without_leading_type_name_is_kept() {
        let f = LatexFormatter::new();
        let error = "Connect to api.example.com:443 failed: net.ConnectException: refused";
        assert_eq!(f.format_exception(error), error);
        assert_eq!(
            f.format_exception("  Timeout after 30s: retry later "),
            "Timeout after 30s: retry later"
        );
        assert_eq!(
            f.format_exception("io.IOException: stream closed"),
            "IOException: stream closed"
        );
    }
}
