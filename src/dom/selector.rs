//! A small CSS selector subset.
//!
//! Supported: type selectors (`h1`, `*`), `#id`, `.class`, attribute
//! selectors (`[id]`, `[href="#top"]`, `[href^="#"]`, `[href$=".html"]`)
//! combined into compounds, and the descendant combinator (whitespace).

use thiserror::Error;

use super::Element;

/// Errors raised while parsing a selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The selector string was empty.
    #[error("empty selector")]
    Empty,

    /// An unexpected character was found.
    #[error("unexpected '{found}' at offset {offset} in selector '{selector}'")]
    Unexpected {
        selector: String,
        found: char,
        offset: usize,
    },

    /// An attribute selector was not closed.
    #[error("unterminated attribute selector in '{0}'")]
    Unterminated(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrTest {
    Exists,
    Equals(String),
    Prefix(String),
    Suffix(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    test: AttrTest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Compound {
    pub(crate) fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if tag != &element.tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| element.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|m| {
            let value = element.attr(&m.name);
            match (&m.test, value) {
                (_, None) => false,
                (AttrTest::Exists, Some(_)) => true,
                (AttrTest::Equals(expected), Some(v)) => v == expected,
                (AttrTest::Prefix(prefix), Some(v)) => v.starts_with(prefix.as_str()),
                (AttrTest::Suffix(suffix), Some(v)) => v.ends_with(suffix.as_str()),
            }
        })
    }
}

/// A parsed selector: a chain of compounds joined by descendant combinators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Compound>,
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError`] for empty input, unsupported syntax, or an
    /// unterminated attribute selector.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let chars: Vec<char> = input.chars().collect();
        let mut pos = 0;
        let mut compounds = Vec::new();

        loop {
            while pos < chars.len() && chars[pos].is_whitespace() {
                pos += 1;
            }
            if pos >= chars.len() {
                break;
            }
            let (compound, next) = parse_compound(input, &chars, pos)?;
            compounds.push(compound);
            pos = next;
        }

        if compounds.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Self { compounds })
    }

    /// The compound that must match the selected element itself.
    pub(crate) fn subject(&self) -> &Compound {
        // parse guarantees at least one compound
        &self.compounds[self.compounds.len() - 1]
    }

    /// Compounds that must match ancestors, nearest first.
    pub(crate) fn ancestors(&self) -> impl Iterator<Item = &Compound> {
        self.compounds.iter().rev().skip(1)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn read_ident(chars: &[char], mut pos: usize) -> (String, usize) {
    let start = pos;
    while pos < chars.len() && is_ident_char(chars[pos]) {
        pos += 1;
    }
    (chars[start..pos].iter().collect(), pos)
}

fn parse_compound(
    input: &str,
    chars: &[char],
    mut pos: usize,
) -> Result<(Compound, usize), SelectorError> {
    let unexpected = |offset: usize| SelectorError::Unexpected {
        selector: input.to_string(),
        found: chars[offset],
        offset,
    };
    let mut compound = Compound::default();

    if chars[pos] == '*' {
        pos += 1;
    } else if is_ident_char(chars[pos]) {
        let (tag, next) = read_ident(chars, pos);
        compound.tag = Some(tag.to_ascii_lowercase());
        pos = next;
    }

    while pos < chars.len() && !chars[pos].is_whitespace() {
        match chars[pos] {
            '#' | '.' => {
                let marker = chars[pos];
                let (name, next) = read_ident(chars, pos + 1);
                if name.is_empty() {
                    return Err(unexpected(pos));
                }
                if marker == '#' {
                    compound.id = Some(name);
                } else {
                    compound.classes.push(name);
                }
                pos = next;
            }
            '[' => {
                let close = chars[pos..]
                    .iter()
                    .position(|&c| c == ']')
                    .map(|offset| pos + offset)
                    .ok_or_else(|| SelectorError::Unterminated(input.to_string()))?;
                let body: String = chars[pos + 1..close].iter().collect();
                compound.attrs.push(parse_attr(input, &body, pos, chars)?);
                pos = close + 1;
            }
            _ => return Err(unexpected(pos)),
        }
    }

    Ok((compound, pos))
}

fn parse_attr(
    input: &str,
    body: &str,
    offset: usize,
    chars: &[char],
) -> Result<AttrMatch, SelectorError> {
    let unquote = |v: &str| {
        let v = v.trim();
        v.strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .or_else(|| v.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
            .unwrap_or(v)
            .to_string()
    };

    let (name, test) = if let Some((name, value)) = body.split_once("^=") {
        (name, AttrTest::Prefix(unquote(value)))
    } else if let Some((name, value)) = body.split_once("$=") {
        (name, AttrTest::Suffix(unquote(value)))
    } else if let Some((name, value)) = body.split_once('=') {
        (name, AttrTest::Equals(unquote(value)))
    } else {
        (body, AttrTest::Exists)
    };

    let name = name.trim();
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return Err(SelectorError::Unexpected {
            selector: input.to_string(),
            found: chars[offset],
            offset,
        });
    }
    Ok(AttrMatch {
        name: name.to_string(),
        test,
    })
}
