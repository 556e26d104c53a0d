mod goal;
mod identity;
mod layout;
mod references;

pub use goal::{MissingPlayerButtonRule, MissingPlayerRule};
pub use identity::DuplicateBlockIdRule;
pub use layout::{CellConflictRule, ChildOutOfBoundsRule, FilledBlockChildrenRule};
pub use references::{DanglingRefRule, DuplicateExitRefRule};

use crate::diagnostic::Diagnostic;
use crate::index::LevelIndex;

/// Trait for implementing lint rules
pub trait LintRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Inspect the collected facts of one document
    fn check(&self, index: &LevelIndex) -> Vec<Diagnostic>;
}

/// Registry of all available lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(MissingPlayerRule),
                Box::new(MissingPlayerButtonRule),
                Box::new(DanglingRefRule),
                Box::new(FilledBlockChildrenRule),
                Box::new(DuplicateBlockIdRule),
                Box::new(DuplicateExitRefRule),
                Box::new(ChildOutOfBoundsRule),
                Box::new(CellConflictRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}
