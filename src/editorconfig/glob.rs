//! `.editorconfig` section patterns, compiled to anchored regexes.

use regex::Regex;

/// A compiled section pattern.
///
/// Numeric ranges (`{n..m}`) compile to capture groups; their bounds are
/// checked after the regex matches.
#[derive(Debug, Clone)]
pub struct SectionGlob {
    regex: Regex,
    ranges: Vec<(i64, i64)>,
}

impl SectionGlob {
    /// Compile a section pattern as written in an `.editorconfig` file.
    ///
    /// A pattern without `/` matches in any directory below the file; a
    /// pattern with `/` is relative to the file's directory. Returns `None`
    /// if the pattern cannot be compiled.
    #[must_use]
    pub fn new(pattern: &str) -> Option<Self> {
        let anchored = if pattern.contains('/') {
            pattern.strip_prefix('/').unwrap_or(pattern).to_string()
        } else {
            format!("**/{pattern}")
        };

        let chars: Vec<char> = anchored.chars().collect();
        let mut ranges = Vec::new();
        let mut source = String::from("^");
        translate(&chars, &mut source, &mut ranges);
        source.push('$');

        let regex = Regex::new(&source).ok()?;
        Some(Self { regex, ranges })
    }

    /// Match a `/`-separated path relative to the `.editorconfig` directory.
    #[must_use]
    pub fn is_match(&self, relative: &str) -> bool {
        if self.ranges.is_empty() {
            return self.regex.is_match(relative);
        }

        let Some(captures) = self.regex.captures(relative) else {
            return false;
        };
        self.ranges.iter().enumerate().all(|(i, &(lo, hi))| {
            captures.get(i + 1).is_none_or(|m| {
                m.as_str()
                    .parse::<i64>()
                    .is_ok_and(|n| (lo..=hi).contains(&n))
            })
        })
    }
}

fn translate(chars: &[char], out: &mut String, ranges: &mut Vec<(i64, i64)>) {
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' if i + 1 < chars.len() => {
                push_literal(out, chars[i + 1]);
                i += 2;
            }
            '*' if chars.get(i + 1) == Some(&'*') => {
                if chars.get(i + 2) == Some(&'/') {
                    out.push_str("(?:.*/)?");
                    i += 3;
                } else {
                    out.push_str(".*");
                    i += 2;
                }
            }
            '*' => {
                out.push_str("[^/]*");
                i += 1;
            }
            '?' => {
                out.push_str("[^/]");
                i += 1;
            }
            '[' => match bracket_end(chars, i) {
                Some(end) => {
                    push_bracket(out, &chars[i + 1..end]);
                    i = end + 1;
                }
                None => {
                    push_literal(out, '[');
                    i += 1;
                }
            },
            '{' => match brace_end(chars, i) {
                Some(end) => {
                    push_brace(out, &chars[i + 1..end], ranges);
                    i = end + 1;
                }
                None => {
                    push_literal(out, '{');
                    i += 1;
                }
            },
            c => {
                push_literal(out, c);
                i += 1;
            }
        }
    }
}

fn push_literal(out: &mut String, c: char) {
    let mut buf = [0; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

/// Index of the `]` closing the set opened at `start`. A set may not span a
/// path separator.
fn bracket_end(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start + 1;
    if matches!(chars.get(i), Some('!' | '^')) {
        i += 1;
    }
    // A `]` right after the opening bracket is a member of the set.
    if chars.get(i) == Some(&']') {
        i += 1;
    }
    while i < chars.len() {
        match chars[i] {
            ']' => return Some(i),
            '/' => return None,
            _ => i += 1,
        }
    }
    None
}

fn push_bracket(out: &mut String, body: &[char]) {
    out.push('[');
    let body = match body.first() {
        Some('!' | '^') => {
            out.push('^');
            &body[1..]
        }
        _ => body,
    };
    for &c in body {
        if c != '-' && c.is_ascii_punctuation() {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(']');
}

/// Index of the `}` matching the `{` at `start`, honoring nesting.
fn brace_end(chars: &[char], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = start;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

fn push_brace(out: &mut String, body: &[char], ranges: &mut Vec<(i64, i64)>) {
    if let Some((lo, hi)) = numeric_range(body) {
        out.push_str(r"([+-]?[0-9]+)");
        ranges.push((lo.min(hi), lo.max(hi)));
        return;
    }

    let alternatives = split_alternatives(body);
    if alternatives.len() < 2 {
        // `{single}` has no alternatives and matches literally.
        push_literal(out, '{');
        translate(body, out, ranges);
        push_literal(out, '}');
        return;
    }

    out.push_str("(?:");
    for (n, alternative) in alternatives.iter().enumerate() {
        if n > 0 {
            out.push('|');
        }
        translate(alternative, out, ranges);
    }
    out.push(')');
}

fn numeric_range(body: &[char]) -> Option<(i64, i64)> {
    let text: String = body.iter().collect();
    let (lo, hi) = text.split_once("..")?;
    Some((lo.parse().ok()?, hi.parse().ok()?))
}

/// Split on commas that are not nested inside another brace.
fn split_alternatives(body: &[char]) -> Vec<&[char]> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < body.len() {
        match body[i] {
            '\\' => i += 1,
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    parts.push(&body[start..]);
    parts
}

#[cfg(test)]
#[path = "glob_tests.rs"]
mod tests;
