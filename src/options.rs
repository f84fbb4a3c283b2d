//! Configuration options for page cleaning.
//!
//! `CleanOptions` is immutable for one invocation. The effective allowed-tag
//! set is derived per call into a fresh set, so presets and caller-owned
//! sets are never mutated (adding table tags for one call must not leak into
//! the next).

use std::collections::HashSet;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::minimal_text::MinimalTextOptions;
use crate::patterns::TAG_NAME;
use crate::tags::{ANCHOR_TAGS, DEFAULT_ALLOWED_TAG_SET, RECIPE_MINIMAL_TAG_SET, TABLE_TAGS};

/// Default node-processing budget for the unwrap pass.
pub const DEFAULT_MAX_DEPTH: usize = 200_000;

/// Whitelist of tag names preserved as elements in the output.
///
/// Tag names are stored lowercase; lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedTags(HashSet<String>);

impl AllowedTags {
    /// Build from any list of tag names.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(tags.into_iter().map(|t| t.as_ref().trim().to_ascii_lowercase()).collect())
    }

    /// Headings 1-6, paragraphs, lists, inline emphasis, `br`, `time`, `a`.
    #[must_use]
    pub fn default_preset() -> Self {
        Self::new(DEFAULT_ALLOWED_TAG_SET.iter())
    }

    /// Headings 1-3, paragraphs, lists, `a`, `strong`, `em`, `br`, `time`.
    #[must_use]
    pub fn recipe_minimal() -> Self {
        Self::new(RECIPE_MINIMAL_TAG_SET.iter())
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        if self.0.contains(tag) {
            return true;
        }
        tag.bytes().any(|b| b.is_ascii_uppercase()) && self.0.contains(&tag.to_ascii_lowercase())
    }

    /// Return a copy with extra tags added.
    #[must_use]
    pub fn with<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = self.0.clone();
        set.extend(extra.into_iter().map(|t| t.as_ref().to_ascii_lowercase()));
        Self(set)
    }

    /// Number of tags in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the tag names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for AllowedTags {
    fn default() -> Self {
        Self::default_preset()
    }
}

impl FromStr for AllowedTags {
    type Err = Error;

    /// Accepts a preset name (`default`, `recipe-minimal`) or a
    /// comma-separated list of tag names.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => return Ok(Self::default_preset()),
            "recipe-minimal" | "recipe_minimal" => return Ok(Self::recipe_minimal()),
            _ => {}
        }

        let mut tags = HashSet::new();
        for raw in s.split(',') {
            let tag = raw.trim().to_ascii_lowercase();
            if tag.is_empty() {
                continue;
            }
            if !TAG_NAME.is_match(&tag) {
                return Err(Error::InvalidTag(raw.trim().to_string()));
            }
            tags.insert(tag);
        }
        Ok(Self(tags))
    }
}

/// Configuration options for one cleaning invocation.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_page_cleaner::CleanOptions;
///
/// let options = CleanOptions {
///     keep_tables: true,
///     output_minimal_text: true,
///     ..CleanOptions::default()
/// };
/// assert!(options.strict_urls);
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct CleanOptions {
    /// Tags preserved as elements. `html` and `body` are always implied.
    ///
    /// Default: [`AllowedTags::default_preset`]
    pub allowed_tags: AllowedTags,

    /// Remove `img`, `video`, `audio` and `figure` wholesale.
    ///
    /// When `false`, `video`/`audio`/`figure` are still removed unless
    /// whitelisted, and `img` is decided by attribute handling.
    ///
    /// Default: `true`
    pub drop_media: bool,

    /// Accept only http(s) or relative URLs for `href`/`src`.
    ///
    /// Default: `true`
    pub strict_urls: bool,

    /// Preserve table structure instead of flattening it to text.
    ///
    /// Implied by `output_minimal_text`, whose renderer lays out rows itself.
    ///
    /// Default: `false`
    pub keep_tables: bool,

    /// Node-processing budget for the unwrap/attribute pass.
    ///
    /// Counts element nodes visited, not tree depth. Nodes beyond the budget
    /// are left as they are.
    ///
    /// Default: `200_000`
    pub max_depth: usize,

    /// Remove cookie/consent banners before reducing.
    ///
    /// Default: `true`
    pub apply_consent_ui_heuristics: bool,

    /// Produce structured plain text instead of an HTML fragment.
    ///
    /// Default: `false`
    pub output_minimal_text: bool,

    /// Rendering options used when `output_minimal_text` is set.
    pub minimal_text: MinimalTextOptions,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            allowed_tags: AllowedTags::default_preset(),
            drop_media: true,
            strict_urls: true,
            keep_tables: false,
            max_depth: DEFAULT_MAX_DEPTH,
            apply_consent_ui_heuristics: true,
            output_minimal_text: false,
            minimal_text: MinimalTextOptions::default(),
        }
    }
}

impl CleanOptions {
    /// Defaults with the recipe-minimal whitelist.
    #[must_use]
    pub fn recipe_minimal() -> Self {
        Self {
            allowed_tags: AllowedTags::recipe_minimal(),
            ..Self::default()
        }
    }

    /// Whether table structure survives reduction.
    #[must_use]
    pub fn tables_kept(&self) -> bool {
        self.keep_tables || self.output_minimal_text
    }

    /// Allowed-tag set for one invocation: the configured set plus the
    /// `html`/`body` anchors, plus table tags when tables are kept.
    #[must_use]
    pub fn effective_allowed_tags(&self) -> AllowedTags {
        let with_anchors = self.allowed_tags.with(ANCHOR_TAGS);
        if self.tables_kept() {
            with_anchors.with(TABLE_TAGS)
        } else {
            with_anchors
        }
    }
}
