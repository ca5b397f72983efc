//! Replacement templates.
//!
//! Templates are parsed when the catalog is compiled so that a malformed
//! template or a reference to a missing group fails the build, not a call.

use fancy_regex::Captures;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Group(usize),
}

/// A parsed replacement template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pieces: Vec<Piece>,
}

impl Replacement {
    /// Parses `$N`, `${N}` and `$$`. Anything else after a `$` is rejected.
    pub fn parse(template: &str) -> Result<Self, String> {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            if c != '$' {
                literal.push(c);
                continue;
            }
            let group = match chars.peek().copied() {
                Some((_, '$')) => {
                    chars.next();
                    literal.push('$');
                    continue;
                }
                Some((_, '{')) => {
                    chars.next();
                    let mut digits = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, d)) if d.is_ascii_digit() => digits.push(d),
                            _ => return Err(format!("unterminated or non-numeric group reference at byte {}", pos)),
                        }
                    }
                    digits
                }
                Some((_, d)) if d.is_ascii_digit() => {
                    let mut digits = String::new();
                    while let Some((_, d)) = chars.peek().copied() {
                        if !d.is_ascii_digit() {
                            break;
                        }
                        digits.push(d);
                        chars.next();
                    }
                    digits
                }
                _ => return Err(format!("stray '$' at byte {} (use '$$' for a literal dollar)", pos)),
            };
            let index = group
                .parse::<usize>()
                .map_err(|_| format!("empty group reference at byte {}", pos))?;
            if !literal.is_empty() {
                pieces.push(Piece::Literal(std::mem::take(&mut literal)));
            }
            pieces.push(Piece::Group(index));
        }

        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }
        Ok(Self { pieces })
    }

    /// Highest capture group referenced, if any.
    pub fn max_group(&self) -> Option<usize> {
        self.pieces
            .iter()
            .filter_map(|p| match p {
                Piece::Group(i) => Some(*i),
                Piece::Literal(_) => None,
            })
            .max()
    }

    /// True when the template is plain text.
    pub fn is_literal(&self) -> bool {
        self.max_group().is_none()
    }

    /// Appends the expansion for one match to `dst`. Groups that did not
    /// participate in the match expand to nothing.
    pub fn expand_into(&self, caps: &Captures<'_>, dst: &mut String) {
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => dst.push_str(text),
                Piece::Group(i) => {
                    if let Some(m) = caps.get(*i) {
                        dst.push_str(m.as_str());
                    }
                }
            }
        }
    }
}
