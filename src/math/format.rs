//! Textual form of points and vectors.
//!
//! The grammar is `open? coord (sep coord)* close?`, where the bracket pair
//! and separator come from a [`CoordStyle`]. Coordinates use the standard
//! Rust number syntax of the element type.
use std::fmt;

use crate::error::ParseError;

use super::Coordinates;

/// Bracket convention around a coordinate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Brackets {
    /// `1, 2`
    None,
    /// `(1, 2)`
    #[default]
    Parentheses,
    /// `[1, 2]`
    Square,
    /// `{1, 2}`
    Curly,
    /// `<1, 2>`
    Angle,
}

impl Brackets {
    const ALL: [Brackets; 4] = [
        Brackets::Parentheses,
        Brackets::Square,
        Brackets::Curly,
        Brackets::Angle,
    ];

    /// Returns the opening and closing characters, if any.
    #[must_use]
    pub fn pair(self) -> Option<(char, char)> {
        match self {
            Brackets::None => None,
            Brackets::Parentheses => Some(('(', ')')),
            Brackets::Square => Some(('[', ']')),
            Brackets::Curly => Some(('{', '}')),
            Brackets::Angle => Some(('<', '>')),
        }
    }

    fn from_open(c: char) -> Option<Brackets> {
        Self::ALL
            .into_iter()
            .find(|b| b.pair().is_some_and(|(open, _)| open == c))
    }

    fn is_close(c: char) -> bool {
        Self::ALL
            .into_iter()
            .any(|b| b.pair().is_some_and(|(_, close)| close == c))
    }
}

/// Style flags for parsing and formatting coordinate tuples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordStyle {
    /// Brackets written around the coordinates.
    pub brackets: Brackets,
    /// Character between coordinates. A whitespace separator splits on any run
    /// of whitespace when parsing.
    pub separator: char,
    /// When set, parsing requires exactly `brackets`; otherwise any bracket
    /// pair (or none) is accepted.
    pub strict: bool,
}

impl Default for CoordStyle {
    fn default() -> Self {
        Self {
            brackets: Brackets::Parentheses,
            separator: ',',
            strict: false,
        }
    }
}

impl CoordStyle {
    /// Creates a style with the given brackets and separator, lenient parsing.
    #[must_use]
    pub fn new(brackets: Brackets, separator: char) -> Self {
        Self {
            brackets,
            separator,
            strict: false,
        }
    }

    /// Returns a copy of this style that only parses its own brackets.
    #[must_use]
    pub fn strict(self) -> Self {
        Self {
            strict: true,
            ..self
        }
    }
}

/// Writes `value` to `out` using `style`.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_coords<W, C>(
    out: &mut W,
    value: &C,
    style: &CoordStyle,
    precision: Option<usize>,
) -> fmt::Result
where
    W: fmt::Write,
    C: Coordinates,
{
    let pair = style.brackets.pair();
    if let Some((open, _)) = pair {
        out.write_char(open)?;
    }
    for i in 0..C::DIM {
        if i > 0 {
            out.write_char(style.separator)?;
            if !style.separator.is_whitespace() {
                out.write_char(' ')?;
            }
        }
        if let Some(v) = value.coord(i) {
            match precision {
                Some(p) => write!(out, "{v:.p$}")?,
                None => write!(out, "{v}")?,
            }
        }
    }
    if let Some((_, close)) = pair {
        out.write_char(close)?;
    }
    Ok(())
}

/// Formats `value` into a new string.
#[must_use]
pub fn format_coords<C: Coordinates>(
    value: &C,
    style: &CoordStyle,
    precision: Option<usize>,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_coords(&mut out, value, style, precision);
    out
}

/// `{}` adapter returned by [`Coordinates::display`].
///
/// Writes the default style, with the formatter precision if one is given.
#[derive(Debug, Clone, Copy)]
pub struct CoordDisplay<'a, C> {
    value: &'a C,
}

impl<'a, C: Coordinates> CoordDisplay<'a, C> {
    #[must_use]
    pub fn new(value: &'a C) -> Self {
        Self { value }
    }
}

impl<C: Coordinates> fmt::Display for CoordDisplay<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        write_coords(f, self.value, &CoordStyle::default(), precision)
    }
}

/// Parses a coordinate tuple from `text`.
///
/// # Errors
///
/// Returns [`ParseError::UnbalancedBrackets`] for mismatched brackets,
/// [`ParseError::WrongCount`] when the number of coordinates is not `C::DIM`
/// and [`ParseError::InvalidNumber`] when a coordinate does not parse.
pub fn parse_coords<C: Coordinates>(text: &str, style: &CoordStyle) -> Result<C, ParseError> {
    let inner = strip_brackets(text.trim(), style)?;

    let tokens: Vec<&str> = if style.separator.is_whitespace() {
        inner.split_whitespace().collect()
    } else if inner.trim().is_empty() {
        Vec::new()
    } else {
        inner.split(style.separator).map(str::trim).collect()
    };

    if tokens.len() != C::DIM {
        return Err(ParseError::WrongCount {
            expected: C::DIM,
            found: tokens.len(),
        });
    }

    let values = tokens
        .iter()
        .map(|t| {
            t.parse::<C::Scalar>()
                .map_err(|_| ParseError::InvalidNumber((*t).to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    C::from_coord_slice(&values).ok_or(ParseError::WrongCount {
        expected: C::DIM,
        found: values.len(),
    })
}

fn strip_brackets<'a>(text: &'a str, style: &CoordStyle) -> Result<&'a str, ParseError> {
    let unbalanced = || ParseError::UnbalancedBrackets(text.to_string());
    let first = text.chars().next();
    let last = text.chars().next_back();

    let found = first.and_then(Brackets::from_open);
    match found {
        Some(brackets) => {
            if style.strict && brackets != style.brackets {
                return Err(unbalanced());
            }
            let (open, close) = brackets.pair().ok_or_else(unbalanced)?;
            if text.len() < 2 || last != Some(close) {
                return Err(unbalanced());
            }
            Ok(&text[open.len_utf8()..text.len() - close.len_utf8()])
        }
        None => {
            if last.is_some_and(Brackets::is_close) {
                return Err(unbalanced());
            }
            if style.strict && style.brackets != Brackets::None {
                return Err(unbalanced());
            }
            Ok(text)
        }
    }
}
