//! Fetching and parsing content documents.
//!
//! A [`Fetcher`] turns a relative resource path into a [`Response`]; the
//! [`ContentLoader`] checks the status, parses the body and, for the
//! homepage, fans the site and module requests out over the rayon pool.
//!
//! # Example
//!
//! ```no_run
//! use conscious_choice::content::{ContentLoader, DirFetcher};
//!
//! let loader = ContentLoader::new(DirFetcher::new("site"));
//! let module = loader.load_module(3).unwrap();
//! println!("{} has {} questions", module.title, module.question_count());
//! ```

use std::io;
use std::path::{Component, Path, PathBuf};

use rayon::prelude::*;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::model::{Module, SiteData};
use crate::MODULE_COUNT;

/// Path of the homepage document, relative to the site root.
pub const SITE_DATA_PATH: &str = "data/site.json";

/// Path of a module document, relative to the site root.
#[must_use]
pub fn module_path(id: u32) -> String {
    format!("data/module{id}.json")
}

/// Errors raised while loading content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The resource could not be retrieved, or the response was not a success.
    #[error("failed to load {path}: {reason}")]
    Load { path: String, reason: String },

    /// The body was not valid JSON for the expected document.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ContentError {
    /// Path of the resource that failed.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Load { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// A fetched resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP-style status code
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    /// A 200 response with the given body.
    #[must_use]
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// A bodiless response with the given status.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Retrieves resources by path relative to the site root.
///
/// Implementations are shared across the rayon pool during homepage loads.
pub trait Fetcher: Send + Sync {
    /// Fetch `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the transport itself fails. A missing
    /// resource is a non-success [`Response`], not an error.
    fn fetch(&self, path: &str) -> io::Result<Response>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, path: &str) -> io::Result<Response> {
        (**self).fetch(path)
    }
}

/// Serves resources from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    /// Serve files below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The site root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Fetcher for DirFetcher {
    fn fetch(&self, path: &str) -> io::Result<Response> {
        let relative = Path::new(path);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            log::warn!("Refusing to serve path outside the site root: {}", path);
            return Ok(Response::status(403));
        }

        match std::fs::read(self.root.join(relative)) {
            Ok(body) => Ok(Response::ok(body)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Response::status(404)),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => Ok(Response::status(403)),
            Err(e) => Err(e),
        }
    }
}

/// Site data plus every module, in module order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomepageContent {
    pub site: SiteData,
    pub modules: Vec<Module>,
}

/// Loads typed content through a [`Fetcher`].
#[derive(Debug, Clone)]
pub struct ContentLoader<F> {
    fetcher: F,
    module_count: u32,
}

impl<F: Fetcher> ContentLoader<F> {
    /// Create a loader for the standard seven modules.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            module_count: MODULE_COUNT,
        }
    }

    /// Override the number of modules fetched for the homepage.
    #[must_use]
    pub fn with_module_count(mut self, module_count: u32) -> Self {
        self.module_count = module_count;
        self
    }

    /// Number of modules the homepage expects.
    #[must_use]
    pub fn module_count(&self) -> u32 {
        self.module_count
    }

    /// The underlying fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch `path` and parse it as `T`.
    ///
    /// # Errors
    ///
    /// [`ContentError::Load`] on transport failure or non-success status,
    /// [`ContentError::Parse`] if the body does not deserialize.
    pub fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ContentError> {
        log::debug!("Fetching {}", path);
        let response = self.fetcher.fetch(path).map_err(|e| ContentError::Load {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        if !response.is_success() {
            return Err(ContentError::Load {
                path: path.to_string(),
                reason: format!("status {}", response.status),
            });
        }

        serde_json::from_slice(&response.body).map_err(|source| ContentError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Load `data/site.json`.
    ///
    /// # Errors
    ///
    /// See [`fetch_json`](Self::fetch_json).
    pub fn load_site(&self) -> Result<SiteData, ContentError> {
        self.fetch_json(SITE_DATA_PATH)
    }

    /// Load `data/module<id>.json`.
    ///
    /// # Errors
    ///
    /// See [`fetch_json`](Self::fetch_json).
    pub fn load_module(&self, id: u32) -> Result<Module, ContentError> {
        self.fetch_json(&module_path(id))
    }

    /// Load every module, in id order, concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first failure; no partial list is produced.
    pub fn load_modules(&self) -> Result<Vec<Module>, ContentError> {
        (1..=self.module_count)
            .into_par_iter()
            .map(|id| self.load_module(id))
            .collect()
    }

    /// Load everything the homepage needs. The site document and all module
    /// documents are requested without waiting on each other.
    ///
    /// # Errors
    ///
    /// Any single failure aborts the whole load.
    pub fn load_homepage(&self) -> Result<HomepageContent, ContentError> {
        let (site, modules) = rayon::join(|| self.load_site(), || self.load_modules());
        let site = site?;
        let modules = modules?;
        log::info!("Loaded site data and {} modules", modules.len());
        Ok(HomepageContent { site, modules })
    }
}
