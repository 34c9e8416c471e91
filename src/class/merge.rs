//! Utility-class conflict resolution.
//!
//! Within one merge, at most one token per group (and per modifier scope)
//! survives: the last one in input order. Tokens that belong to no group are
//! only deduplicated by exact text, keeping their first appearance.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::groups::{ClassGroup, classify_base, parse_class};
use super::value::ClassValue;
use crate::error::{Error, Result};

/// A project-specific utility group, consulted before the built-in table.
///
/// ```rust
/// use showcase_kit::class::{ClassMerger, CustomGroup};
///
/// let merger = ClassMerger::with_groups(vec![CustomGroup {
///     name: "text-shadow".to_string(),
///     classes: vec![],
///     prefixes: vec!["text-shadow".to_string()],
///     conflicts: vec![],
/// }])
/// .unwrap();
/// assert_eq!(merger.merge("text-shadow-sm text-red-500 text-shadow-lg"), "text-red-500 text-shadow-lg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomGroup {
    /// Group identifier; must not be empty.
    pub name: String,
    /// Tokens that belong to the group verbatim.
    #[serde(default)]
    pub classes: Vec<String>,
    /// `prefix-<anything>` tokens belong to the group.
    #[serde(default)]
    pub prefixes: Vec<String>,
    /// Ids (built-in or custom) overridden by a later member of this group.
    #[serde(default)]
    pub conflicts: Vec<String>,
}

impl CustomGroup {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidGroup {
                name: self.name.clone(),
                reason: "name is empty",
            });
        }
        if self.classes.is_empty() && self.prefixes.is_empty() {
            return Err(Error::InvalidGroup {
                name: self.name.clone(),
                reason: "no classes or prefixes",
            });
        }
        Ok(())
    }

    fn matches(&self, base: &str) -> bool {
        self.classes.iter().any(|class| class == base)
            || self.prefixes.iter().any(|prefix| {
                base.strip_prefix(prefix.as_str())
                    .and_then(|rest| rest.strip_prefix('-'))
                    .is_some_and(|rest| !rest.is_empty())
            })
    }
}

/// The group a token was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRef<'a> {
    /// Built-in utility group.
    Builtin(ClassGroup),
    /// Caller-registered group.
    Custom(&'a CustomGroup),
}

impl<'a> GroupRef<'a> {
    /// Identifier used for conflict keys.
    pub fn id(&self) -> &'a str {
        match *self {
            Self::Builtin(group) => group.id(),
            Self::Custom(group) => group.name.as_str(),
        }
    }

    fn conflicting_ids(&self) -> Vec<&'a str> {
        match *self {
            Self::Builtin(group) => group.conflicts().iter().map(|g| g.id()).collect(),
            Self::Custom(group) => group.conflicts.iter().map(String::as_str).collect(),
        }
    }
}

/// Resolves conflicting utility classes.
#[derive(Debug, Clone, Default)]
pub struct ClassMerger {
    custom: Vec<CustomGroup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fate {
    Unclassified,
    Keep,
    Drop,
}

impl ClassMerger {
    /// Merger over the built-in table only.
    pub const fn new() -> Self {
        Self { custom: Vec::new() }
    }

    /// Merger with additional groups, checked ahead of the built-in table.
    pub fn with_groups(groups: Vec<CustomGroup>) -> Result<Self> {
        for group in &groups {
            group.validate()?;
        }
        Ok(Self { custom: groups })
    }

    /// Registered custom groups.
    pub fn custom_groups(&self) -> &[CustomGroup] {
        &self.custom
    }

    /// Classifies a full token, modifiers included.
    pub fn classify(&self, token: &str) -> Option<GroupRef<'_>> {
        self.classify_base(parse_class(token).base)
    }

    fn classify_base(&self, base: &str) -> Option<GroupRef<'_>> {
        if base.is_empty() {
            return None;
        }
        self.custom
            .iter()
            .find(|group| group.matches(base))
            .map(GroupRef::Custom)
            .or_else(|| classify_base(base).map(GroupRef::Builtin))
    }

    /// Resolves conflicts in an already-flat token list.
    pub fn merge_tokens<'t>(&self, tokens: &[&'t str]) -> Vec<&'t str> {
        let mut fates = vec![Fate::Unclassified; tokens.len()];
        let mut claimed: HashSet<(String, &str)> = HashSet::new();

        // Walk backwards so the last member of each group claims it first.
        for (idx, token) in tokens.iter().enumerate().rev() {
            let parsed = parse_class(token);
            let Some(group) = self.classify_base(parsed.base) else {
                continue;
            };
            let scope = parsed.scope();

            if claimed.contains(&(scope.clone(), group.id())) {
                tracing::trace!(
                    name: "class.merge.conflict",
                    dropped = %token,
                    group = group.id(),
                    "Dropped overridden class"
                );
                fates[idx] = Fate::Drop;
                continue;
            }

            fates[idx] = Fate::Keep;
            for id in group.conflicting_ids() {
                claimed.insert((scope.clone(), id));
            }
            claimed.insert((scope, group.id()));
        }

        let mut seen = HashSet::new();
        tokens
            .iter()
            .zip(fates)
            .filter(|(token, fate)| match fate {
                Fate::Keep => true,
                Fate::Drop => false,
                Fate::Unclassified => seen.insert(**token),
            })
            .map(|(token, _)| *token)
            .collect()
    }

    /// Merges a whitespace-separated class string.
    pub fn merge(&self, classes: &str) -> String {
        let tokens: Vec<&str> = classes.split_whitespace().collect();
        self.merge_tokens(&tokens).join(" ")
    }

    /// Flattens a [`ClassValue`] tree and merges the result.
    pub fn compose(&self, value: &ClassValue) -> String {
        self.merge_tokens(&value.tokens()).join(" ")
    }
}
