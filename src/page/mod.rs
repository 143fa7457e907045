//! Page identification.
//!
//! A URL is resolved once, up front, into a [`PageRequest`]. Only the final
//! path segment and the `id` query parameter matter:
//!
//! | final segment            | result                                   |
//! |--------------------------|------------------------------------------|
//! | `""` or `index.html`     | [`PageRequest::Home`]                    |
//! | `module.html`, valid id  | [`PageRequest::Module`]                  |
//! | `module.html`, bad id    | [`PageRequest::Redirect`] to the homepage |
//! | anything else            | [`PageRequest::Inert`]                   |
//!
//! # Example
//!
//! ```
//! use conscious_choice::page::{resolve, PageRequest};
//!
//! assert_eq!(resolve("/site/module.html?id=3", 7), PageRequest::Module(3));
//! assert_eq!(
//!     resolve("module.html?id=abc", 7),
//!     PageRequest::Redirect("index.html".to_string())
//! );
//! ```

pub mod skeleton;

/// File name of the homepage.
pub const HOME_PAGE: &str = "index.html";

/// File name of the module page.
pub const MODULE_PAGE: &str = "module.html";

/// Where the first question's back button leads.
pub const MODULES_ANCHOR: &str = "index.html#modules";

/// Link to the module page for `id`.
#[must_use]
pub fn module_href(id: u32) -> String {
    format!("{MODULE_PAGE}?id={id}")
}

/// Kind of page a document represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Home,
    Module,
}

/// What opening a URL should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// Render the homepage
    Home,
    /// Render the module page for this id
    Module(u32),
    /// Go somewhere else instead
    Redirect(String),
    /// No page logic applies
    Inert,
}

impl PageRequest {
    /// Page kind rendered for this request, if any.
    #[must_use]
    pub fn kind(&self) -> Option<PageKind> {
        match self {
            Self::Home => Some(PageKind::Home),
            Self::Module(_) => Some(PageKind::Module),
            Self::Redirect(_) | Self::Inert => None,
        }
    }
}

/// Resolve `url` against a site with `module_count` modules.
#[must_use]
pub fn resolve(url: &str, module_count: u32) -> PageRequest {
    let without_fragment = url.split('#').next().unwrap_or("");
    let (path, query) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, query),
        None => (without_fragment, ""),
    };
    let segment = path.rsplit('/').next().unwrap_or("");

    match segment {
        "" | HOME_PAGE => PageRequest::Home,
        MODULE_PAGE => {
            let id = query_param(query, "id").and_then(|v| parse_int_prefix(&v));
            match id {
                Some(id) if id >= 1 && id <= i64::from(module_count) => {
                    PageRequest::Module(id as u32)
                }
                _ => {
                    log::info!("Invalid module id in '{}', redirecting home", url);
                    PageRequest::Redirect(HOME_PAGE.to_string())
                }
            }
        }
        _ => PageRequest::Inert,
    }
}

/// First value of `name` in a query string, percent-decoded.
#[must_use]
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| percent_decode(key) == name)
        .map(|(_, value)| percent_decode(value))
}

/// Decode `%XX` escapes and `+` as space. Malformed escapes are kept
/// verbatim.
fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3])
                    .ok()
                    .and_then(|h| u8::from_str_radix(h, 16).ok());
                match hex {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Integer parsing with the leniency of the page scripts: leading
/// whitespace, an optional sign, then as many digits as are present.
/// `"3abc"` is 3, `"abc"` is `None`.
#[must_use]
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // saturate absurdly long digit runs instead of failing
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
