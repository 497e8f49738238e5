//! Lexer configuration.

/// Interpolation nesting allowed before the scan is aborted.
pub const DEFAULT_MAX_INTERPOLATION_DEPTH: usize = 32;

/// Hard ceiling on the configurable nesting limit.
///
/// Token trees are cloned, dropped and walked recursively, one frame per
/// level, so the depth has to stay within what a thread stack can hold.
pub const MAX_INTERPOLATION_DEPTH_CEILING: usize = 256;

/// Which comments the tokenizer emits.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CommentMode {
    /// Emit doc, line and block comments.
    #[default]
    All,
    /// Emit only doc comments; line and block comments are skipped like
    /// whitespace.
    DocOnly,
}

/// Options for a single scan.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexerConfig {
    pub comments: CommentMode,
    /// Deepest allowed `#{ ... }` nesting. Opening one more is fatal.
    /// Values above [`MAX_INTERPOLATION_DEPTH_CEILING`] act as the ceiling.
    pub max_interpolation_depth: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            comments: CommentMode::All,
            max_interpolation_depth: DEFAULT_MAX_INTERPOLATION_DEPTH,
        }
    }
}

impl LexerConfig {
    #[must_use]
    pub fn with_comments(mut self, comments: CommentMode) -> Self {
        self.comments = comments;
        self
    }

    /// Set the nesting limit, clamped to [`MAX_INTERPOLATION_DEPTH_CEILING`].
    #[must_use]
    pub fn with_max_interpolation_depth(mut self, depth: usize) -> Self {
        self.max_interpolation_depth = depth.min(MAX_INTERPOLATION_DEPTH_CEILING);
        self
    }

    /// The nesting limit the tokenizer enforces.
    #[inline]
    pub fn interpolation_depth_limit(&self) -> usize {
        self.max_interpolation_depth.min(MAX_INTERPOLATION_DEPTH_CEILING)
    }
}
