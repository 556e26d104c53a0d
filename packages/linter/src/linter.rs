use crate::diagnostic::{Diagnostic, DiagnosticLevel};
use crate::index::LevelIndex;
use crate::rules::RuleRegistry;
use boxlevel_parser::ast::Document;

/// Options for configuring the linter
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,

    /// Rule names to skip
    pub disabled_rules: Vec<String>,

    /// Report every finding at error level
    pub warnings_as_errors: bool,
}

/// Lint a level document and return diagnostics in rule order
pub fn lint_document(document: &Document, options: LintOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    let index = LevelIndex::build(document);
    let mut diagnostics = Vec::new();

    for rule in registry.rules() {
        if options.disabled_rules.iter().any(|name| name == rule.name()) {
            tracing::trace!(rule = rule.name(), "rule disabled");
            continue;
        }
        diagnostics.extend(rule.check(&index));
    }

    if options.warnings_as_errors {
        for diagnostic in &mut diagnostics {
            if diagnostic.level == DiagnosticLevel::Warning {
                diagnostic.level = DiagnosticLevel::Error;
            }
        }
    }

    tracing::debug!(count = diagnostics.len(), "lint finished");
    diagnostics
}

/// Human-readable warnings from every built-in rule. Never fails.
pub fn validate(document: &Document) -> Vec<String> {
    lint_document(document, LintOptions::default())
        .into_iter()
        .map(|diagnostic| diagnostic.message)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxlevel_parser::ast::{LevelObject, Ref};

    fn broken_document() -> Document {
        let mut doc = boxlevel_parser::new_document();
        doc.root.children.push(LevelObject::Ref(Ref::new(0, 0, 42)));
        doc
    }

    #[test]
    fn test_template_is_clean() {
        assert!(validate(&boxlevel_parser::new_document()).is_empty());
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let options = LintOptions {
            disabled_rules: vec!["dangling-ref".to_string()],
            ..Default::default()
        };
        assert!(lint_document(&broken_document(), options).is_empty());
    }

    #[test]
    fn test_warnings_as_errors() {
        let options = LintOptions {
            warnings_as_errors: true,
            ..Default::default()
        };
        let diagnostics = lint_document(&broken_document(), options);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].level, DiagnosticLevel::Error);
    }

    #[test]
    fn test_empty_registry() {
        let options = LintOptions {
            registry: Some(RuleRegistry::empty()),
            ..Default::default()
        };
        assert!(lint_document(&broken_document(), options).is_empty());
    }
}
