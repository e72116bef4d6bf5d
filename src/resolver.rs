//! # Path Resolver
//!
//! A named, ordered list of path patterns bound to a [`PatternReplacer`].
//! Pattern order is the resolution priority (most specific first), so the
//! resolved output is an explicit ordered sequence of pairs rather than a
//! map: iteration order is guaranteed to be construction order, with no
//! deduplication.

use crate::replacer::PatternReplacer;

/// One pattern together with its fully-substituted candidate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPattern {
    /// The original pattern, unchanged.
    pub pattern: String,
    /// The candidate path after token substitution.
    pub path: String,
}

/// Named ordered pattern list plus the environment snapshot it resolves
/// against.
#[derive(Debug)]
pub struct PathResolver<'a> {
    alias: String,
    patterns: Vec<String>,
    replacer: &'a PatternReplacer,
}

impl<'a> PathResolver<'a> {
    /// Create a resolver from an ordered pattern list.
    ///
    /// Empty-string patterns are silently dropped; the remaining list is
    /// immutable for the resolver's lifetime.
    pub fn new(alias: &str, patterns: &[String], replacer: &'a PatternReplacer) -> Self {
        Self {
            alias: alias.to_string(),
            patterns: patterns.iter().filter(|p| !p.is_empty()).cloned().collect(),
            replacer,
        }
    }

    /// Substitute `source` into every pattern, preserving pattern order.
    pub fn resolved_patterns(&self, source: &str) -> Vec<ResolvedPattern> {
        self.patterns
            .iter()
            .map(|pattern| ResolvedPattern {
                pattern: pattern.clone(),
                path: self.replacer.replace(pattern, source),
            })
            .collect()
    }

    /// The resolver's alias.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The retained pattern list, in priority order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// The bound replacer; target substitution reuses the same snapshot.
    pub fn replacer(&self) -> &PatternReplacer {
        self.replacer
    }
}
