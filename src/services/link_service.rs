//! Link list service
//!
//! Owns the in-memory entry list (newest first) and mirrors it to storage after
//! every change. Shared by the terminal UI and the headless commands.

use std::sync::Arc;

use tracing::{error, info};

use crate::config::LinksConfig;
use crate::errors::{MinilinkerError, Result};
use crate::storage::{LinkEntry, LinkRepository};
use crate::utils::{build_short_link, generate_short_code, validate_url};

/// Produces a short code of at most the given length.
pub type CodeGenerator = Arc<dyn Fn(usize) -> String + Send + Sync>;

pub struct LinkService {
    repository: LinkRepository,
    links: Vec<LinkEntry>,
    config: LinksConfig,
    generator: CodeGenerator,
}

impl LinkService {
    /// Load the stored list once and keep it in memory.
    pub async fn load(repository: LinkRepository, config: LinksConfig) -> Result<Self> {
        let links = repository.load().await?;
        Ok(Self {
            repository,
            links,
            config,
            generator: Arc::new(generate_short_code),
        })
    }

    /// Replace the random code generator.
    pub fn with_generator(mut self, generator: CodeGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn links(&self) -> &[LinkEntry] {
        &self.links
    }

    pub fn get(&self, index: usize) -> Option<&LinkEntry> {
        self.links.get(index)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn total_clicks(&self) -> u64 {
        self.links.iter().map(|link| link.clicks).sum()
    }

    /// Validate `input`, fabricate a short link for it and prepend the entry.
    ///
    /// Nothing is checked for uniqueness. If persisting fails the entry stays
    /// in memory and the storage error is returned.
    pub async fn shorten(&mut self, input: &str) -> Result<LinkEntry> {
        validate_url(input)?;

        let code = (self.generator)(self.config.code_length);
        let entry = LinkEntry::new(input, build_short_link(&self.config.short_prefix, &code));
        self.links.insert(0, entry.clone());
        info!("Shortened {} -> {}", entry.original, entry.short);

        self.persist().await?;
        Ok(entry)
    }

    /// Count a visit to the entry at `index`; other entries are untouched.
    ///
    /// Returns the updated entry so the caller can open `original`.
    pub async fn visit(&mut self, index: usize) -> Result<LinkEntry> {
        let total = self.links.len();
        let entry = self.links.get_mut(index).ok_or_else(|| {
            MinilinkerError::not_found(format!(
                "No link at position {} ({} links stored)",
                index + 1,
                total
            ))
        })?;
        entry.clicks += 1;
        let entry = entry.clone();
        info!("Visit #{} of {}", entry.clicks, entry.short);

        self.persist().await?;
        Ok(entry)
    }

    /// Write the full list under the storage key.
    pub async fn persist(&self) -> Result<()> {
        self.repository.save(&self.links).await.map_err(|e| {
            error!("Failed to save links: {}", e);
            e
        })
    }
}
