use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Sparse on/off flags keyed by identifier. Missing keys read as collapsed.
#[derive(Debug, Clone, Default)]
pub struct ToggleSet<K: Eq + Hash> {
    flags: HashMap<K, bool>,
}

impl<K: Eq + Hash> ToggleSet<K> {
    pub fn new() -> Self {
        Self {
            flags: HashMap::new(),
        }
    }

    pub fn is_on<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Flips `key` and returns its new value.
    pub fn toggle(&mut self, key: K) -> bool {
        let flag = self.flags.entry(key).or_insert(false);
        *flag = !*flag;
        *flag
    }
}

/// Which domain groups and which comment bodies are currently expanded.
///
/// Independent of the fetched data: entries survive filtering and are never
/// cleared behind the user's back.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    domains: ToggleSet<String>,
    comments: ToggleSet<u64>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_domain(&mut self, domain: &str) -> bool {
        let expanded = self.domains.toggle(domain.to_string());
        tracing::debug!("Domain '{}' expanded: {}", domain, expanded);
        expanded
    }

    pub fn toggle_comment(&mut self, id: u64) -> bool {
        let expanded = self.comments.toggle(id);
        tracing::debug!("Comment #{} expanded: {}", id, expanded);
        expanded
    }

    pub fn is_domain_expanded(&self, domain: &str) -> bool {
        self.domains.is_on(domain)
    }

    pub fn is_comment_expanded(&self, id: u64) -> bool {
        self.comments.is_on(&id)
    }
}
