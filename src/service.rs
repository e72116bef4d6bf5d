//! # Provisioning Service
//!
//! Orchestrates one provisioning run: builds the pattern replacer and the
//! resolvers from the merged configuration, constructs a handler per file
//! rule, lets every handler record its outcome in a fresh [`TaskStack`],
//! and then executes the matched copy tasks.
//!
//! Every per-rule problem — missing fields, an unresolvable resolver, a
//! vanished source, a failed copy — is reported through the [`Io`]
//! collaborator and processing continues with the remaining rules. Nothing
//! in this module aborts the run.

use crate::config::{FileRule, ProviderConfig, DEFAULT_RESOLVER_ALIAS};
use crate::handler::FileProvideHandler;
use crate::output::Io;
use crate::placeholder;
use crate::replacer::PatternReplacer;
use crate::resolver::PathResolver;
use crate::task::TaskStack;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Lifecycle event preceding dependency installation.
pub const EVENT_PRE_INSTALL: &str = "pre-install-cmd";
/// Lifecycle event preceding autoload generation.
pub const EVENT_PRE_AUTOLOAD: &str = "pre-autoload-dump";

/// Runs provisioning passes; idempotent per lifecycle event name.
#[derive(Debug, Default)]
pub struct FilesProviderService {
    // Per-instance state, deliberately not process-global: one service
    // instance corresponds to one logical run of the host tool.
    handled_events: HashSet<String>,
}

impl FilesProviderService {
    /// Create a service with no handled events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a provisioning pass for `event`.
    ///
    /// Repeated dispatch of the same event name on the same instance is a
    /// no-op, so a host that fires both lifecycle hooks in one process run
    /// provisions only once per event.
    pub fn process(
        &mut self,
        event: &str,
        project_root: &Path,
        config: &ProviderConfig,
        io: &mut dyn Io,
    ) {
        if !self.handled_events.insert(event.to_string()) {
            log::debug!("event {} already handled, skipping", event);
            return;
        }
        io.write(&format!("> files-provider event: {}", event));
        self.run(project_root, config, io);
    }

    fn run(&self, project_root: &Path, config: &ProviderConfig, io: &mut dyn Io) {
        let replacer = PatternReplacer::from_env(
            &project_root.to_string_lossy(),
            &config.template_root,
        );
        let resolvers = build_resolvers(config, &replacer, io);
        let handlers = build_handlers(config, &resolvers, project_root, io);

        let mut stack = TaskStack::new();
        for handler in &handlers {
            handler.match_into(&mut stack);
        }

        if stack.count() == 0 {
            io.write("files-provider - nothing to process.");
            return;
        }
        process_task_stack(project_root, &stack, io);
    }

    /// Print the effective configuration: environment snapshot, resolvers
    /// with their candidate paths per rule, and any validation issues.
    pub fn info(&self, project_root: &Path, config: &ProviderConfig, io: &mut dyn Io) {
        let replacer = PatternReplacer::from_env(
            &project_root.to_string_lossy(),
            &config.template_root,
        );

        io.write(&format!("Template root: {}", config.template_root));
        io.write("Environment:");
        io.write(&format!("  host:           {}", replacer.hostname()));
        io.write(&format!("  user:           {}", replacer.username()));
        io.write(&format!("  project:        {}", replacer.project_folder()));
        io.write(&format!("  project parent: {}", replacer.project_parent_folder()));
        io.write(&format!("  ddev:           {}", replacer.is_ddev()));

        io.write(&format!("Resolvers: {}", config.resolvers.len()));
        for (alias, patterns) in &config.resolvers {
            io.write(&format!("  {} ({} patterns)", alias, patterns.len()));
            for pattern in patterns {
                io.write(&format!("    {}", pattern));
            }
        }

        let resolvers = build_resolvers(config, &replacer, io);
        io.write(&format!("Files: {}", config.files.len()));
        for rule in &config.files {
            io.write(&format!(
                "  {} - source: {} target: {} resolver: {}",
                rule.label(),
                rule.source(),
                rule.target,
                rule.resolver_alias()
            ));
            if let Some(resolver) = lookup_resolver(&resolvers, rule.resolver_alias()) {
                for candidate in resolver.resolved_patterns(rule.source()) {
                    io.write(&format!("    {} -> {}", candidate.pattern, candidate.path));
                }
            }
        }

        for issue in config.validate() {
            io.write_error(&format!("Configuration issue: {}", issue));
        }
    }
}

/// Instantiate a resolver per configured alias, skipping invalid entries
/// with a warning.
fn build_resolvers<'a>(
    config: &ProviderConfig,
    replacer: &'a PatternReplacer,
    io: &mut dyn Io,
) -> BTreeMap<String, PathResolver<'a>> {
    let mut resolvers = BTreeMap::new();
    for (alias, patterns) in &config.resolvers {
        if alias.is_empty() {
            log::warn!("resolver with empty alias skipped");
            io.write_error("Invalid alias provided for files-provider resolver configuration.");
            continue;
        }
        if patterns.iter().all(|p| p.is_empty()) {
            log::warn!("resolver {} has no usable patterns", alias);
            io.write_error(&format!(
                "Invalid or empty path pattern provided for files-provider resolver {} configuration.",
                alias
            ));
            continue;
        }
        resolvers.insert(alias.clone(), PathResolver::new(alias, patterns, replacer));
    }
    resolvers
}

/// Alias lookup with fallback: an unknown alias falls back to `default`;
/// `None` only when the default resolver itself is unavailable.
fn lookup_resolver<'r, 'a>(
    resolvers: &'r BTreeMap<String, PathResolver<'a>>,
    alias: &str,
) -> Option<&'r PathResolver<'a>> {
    resolvers
        .get(alias)
        .or_else(|| resolvers.get(DEFAULT_RESOLVER_ALIAS))
}

/// Build a handler per structurally valid file rule; invalid rules are
/// reported and skipped.
fn build_handlers<'a>(
    config: &ProviderConfig,
    resolvers: &'a BTreeMap<String, PathResolver<'a>>,
    project_root: &Path,
    io: &mut dyn Io,
) -> Vec<FileProvideHandler<'a>> {
    let mut handlers = Vec::new();
    for rule in &config.files {
        if rule.source.is_empty() {
            io.write_error(&format!(
                "No source pattern set for file config: {}",
                rule_json(rule)
            ));
            continue;
        }
        if rule.target.is_empty() {
            io.write_error(&format!(
                "No target pattern set for file config: {}",
                rule_json(rule)
            ));
            continue;
        }
        let Some(resolver) = lookup_resolver(resolvers, rule.resolver_alias()) else {
            io.write_error(&format!(
                "Could not find resolver for file config: {}",
                rule_json(rule)
            ));
            continue;
        };
        // One-off %env(...)% expansion for the target pattern; a malformed
        // placeholder rejects this rule only.
        let target = match placeholder::expand(&rule.target) {
            Ok(target) => target,
            Err(e) => {
                io.write_error(&format!("{} - {}", rule.label(), e));
                continue;
            }
        };
        handlers.push(FileProvideHandler::new(
            rule.label(),
            rule.source(),
            &target,
            resolver,
            project_root,
        ));
    }
    handlers
}

fn rule_json(rule: &FileRule) -> String {
    serde_json::to_string(rule).unwrap_or_else(|_| format!("{:?}", rule))
}

/// Execute the copy phase for every recorded entry.
fn process_task_stack(project_root: &Path, stack: &TaskStack, io: &mut dyn Io) {
    for group in stack.items() {
        for entry in &group.entries {
            let label = &group.label;
            if !entry.matched {
                io.write(&format!("{} - no match", label));
                continue;
            }
            let source = against_root(project_root, &entry.source);
            // The match phase checked existence already; guard against a
            // race with the filesystem between match and copy.
            if !source.exists() {
                io.write_error(&format!(
                    "{} - source does not exist: {}",
                    label, entry.source
                ));
                continue;
            }
            let target = against_root(project_root, &entry.target);
            if let Err(e) = ensure_target_folder(&target) {
                io.write_error(&format!(
                    "{} - could not provide {:?} as {:?}: {}",
                    label, entry.source, entry.target, e
                ));
                continue;
            }
            // Unconditional overwrite, byte-for-byte
            match fs::copy(&source, &target) {
                Ok(_) => io.write(&format!(
                    "{} - provided {:?} as {:?}",
                    label, entry.source, entry.target
                )),
                Err(e) => io.write_error(&format!(
                    "{} - could not provide {:?} as {:?}: {}",
                    label, entry.source, entry.target, e
                )),
            }
        }
    }
}

fn ensure_target_folder(target: &Path) -> std::io::Result<()> {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

fn against_root(project_root: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
