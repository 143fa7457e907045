//! Output formatters for rendered pages.
//!
//! - [`html`]: the full HTML document, via an `askama` page shell
//! - [`json`]: a machine-readable page summary for scripting and tests
//!
//! # Example
//!
//! ```no_run
//! use conscious_choice::content::{ContentLoader, DirFetcher};
//! use conscious_choice::output::HtmlOutput;
//! use conscious_choice::site::{PageView, Site};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let site = Site::new(ContentLoader::new(DirFetcher::new("site")));
//! if let PageView::Rendered(page) = site.open("index.html", &mut StdRng::seed_from_u64(0)) {
//!     println!("{}", HtmlOutput::new(page.document()).to_html().unwrap());
//! }
//! ```

pub mod html;
pub mod json;

pub use html::{HtmlOutput, OutputError, DEFAULT_STYLESHEET};
pub use json::{JsonModule, JsonOutput, JsonQuestion};
