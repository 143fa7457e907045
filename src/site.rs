//! Opening pages: routing, loading and population in one place.
//!
//! # Overview
//!
//! [`Site::open`] is the page-load entry point. It resolves a URL with
//! [`page::resolve`], builds the matching skeleton, loads content through
//! the [`ContentLoader`], and populates the document:
//!
//! - homepage: site data plus every module, all-or-nothing
//! - module page: one module, mounted into a fresh [`QuizController`]
//!
//! Content failures are logged and leave the page in its skeleton state;
//! the cause is kept on the [`Page`]. Scroll events go through
//! [`Page::on_scroll`] on every page kind.

use rand::Rng;

use crate::content::{ContentError, ContentLoader, Fetcher};
use crate::dom::{Document, NodeId};
use crate::homepage::populate_homepage;
use crate::nav;
use crate::page::{self, skeleton, PageKind, PageRequest};
use crate::quiz::QuizController;

/// A populated (or skeleton) page view.
#[derive(Debug)]
pub struct Page {
    kind: PageKind,
    document: Document,
    quiz: Option<QuizController>,
    error: Option<ContentError>,
}

impl Page {
    #[must_use]
    pub fn kind(&self) -> PageKind {
        self.kind
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Quiz state for a successfully loaded module page.
    #[must_use]
    pub fn quiz(&self) -> Option<&QuizController> {
        self.quiz.as_ref()
    }

    /// The document and quiz together, for event handling.
    pub fn parts_mut(&mut self) -> (&mut Document, Option<&mut QuizController>) {
        (&mut self.document, self.quiz.as_mut())
    }

    /// Why population was skipped, if it was.
    #[must_use]
    pub fn error(&self) -> Option<&ContentError> {
        self.error.as_ref()
    }

    /// Whether content was loaded and written into the document.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.error.is_none()
    }

    /// Handle a scroll to `scroll_y`: re-highlight the navigation menu.
    ///
    /// Returns the id of the current section, if any.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<String> {
        nav::highlight_nav_sections(&mut self.document, scroll_y)
    }

    /// Element an in-page link scrolls to.
    ///
    /// Smooth scrolling is only wired up on the homepage, and only for its
    /// anchor links.
    #[must_use]
    pub fn scroll_target(&self, href: &str) -> Option<NodeId> {
        if self.kind != PageKind::Home {
            return None;
        }
        let is_anchor = nav::anchor_links(&self.document)
            .into_iter()
            .any(|link| self.document.attr(link, "href") == Some(href));
        if !is_anchor {
            return None;
        }
        nav::scroll_target(&self.document, href)
    }

    /// Consume the page, keeping its document and quiz state.
    #[must_use]
    pub fn into_parts(self) -> (Document, Option<QuizController>) {
        (self.document, self.quiz)
    }
}

/// Outcome of opening a URL.
#[derive(Debug)]
pub enum PageView {
    Rendered(Page),
    /// Navigate to this URL instead
    Redirect(String),
    /// The URL is not a page this site renders
    Inert,
}

/// The site: a content loader plus page logic.
#[derive(Debug, Clone)]
pub struct Site<F> {
    loader: ContentLoader<F>,
}

impl<F: Fetcher> Site<F> {
    pub fn new(loader: ContentLoader<F>) -> Self {
        Self { loader }
    }

    #[must_use]
    pub fn loader(&self) -> &ContentLoader<F> {
        &self.loader
    }

    /// Open `url`, shuffling quiz options with `rng`.
    pub fn open<R: Rng + ?Sized>(&self, url: &str, rng: &mut R) -> PageView {
        match page::resolve(url, self.loader.module_count()) {
            PageRequest::Home => PageView::Rendered(self.open_home()),
            PageRequest::Module(id) => PageView::Rendered(self.open_module(id, rng)),
            PageRequest::Redirect(target) => PageView::Redirect(target),
            PageRequest::Inert => PageView::Inert,
        }
    }

    /// Open `url`, following a redirect once.
    pub fn follow<R: Rng + ?Sized>(&self, url: &str, rng: &mut R) -> PageView {
        match self.open(url, rng) {
            PageView::Redirect(target) => {
                log::debug!("Following redirect from '{}' to '{}'", url, target);
                self.open(&target, rng)
            }
            view => view,
        }
    }

    /// Render the homepage.
    #[must_use]
    pub fn open_home(&self) -> Page {
        let mut document = skeleton::homepage();
        let error = match self.loader.load_homepage() {
            Ok(content) => {
                populate_homepage(&mut document, &content);
                None
            }
            Err(e) => {
                log::error!("Error loading homepage content: {}", e);
                Some(e)
            }
        };

        Page {
            kind: PageKind::Home,
            document,
            quiz: None,
            error,
        }
    }

    /// Render the page for module `id` (assumed already validated).
    pub fn open_module<R: Rng + ?Sized>(&self, id: u32, rng: &mut R) -> Page {
        let mut document = skeleton::module_page();
        let (quiz, error) = match self.loader.load_module(id) {
            Ok(module) => {
                let quiz = QuizController::mount(
                    &mut document,
                    module,
                    id,
                    self.loader.module_count(),
                    rng,
                );
                (Some(quiz), None)
            }
            Err(e) => {
                log::error!("Error loading module {}: {}", id, e);
                (None, Some(e))
            }
        };

        Page {
            kind: PageKind::Module,
            document,
            quiz,
            error,
        }
    }
}
