use crate::diagnostic::Diagnostic;
use crate::index::LevelIndex;
use crate::rules::LintRule;
use boxlevel_parser::ast::BlockId;
use std::collections::BTreeMap;

/// Refs whose target id names no Block
pub struct DanglingRefRule;

impl LintRule for DanglingRefRule {
    fn name(&self) -> &'static str {
        "dangling-ref"
    }

    fn description(&self) -> &'static str {
        "Ref targets must name a Block present in the document"
    }

    fn check(&self, index: &LevelIndex) -> Vec<Diagnostic> {
        index
            .refs
            .iter()
            .filter(|site| !index.contains_block(site.target_id))
            .map(|site| {
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "Ref at ({}, {}) in block {} points to missing block {}",
                        site.x, site.y, site.parent_id, site.target_id
                    ),
                )
                .at(site.path.clone())
            })
            .collect()
    }
}

/// Exit Refs are the canonical instance of their target; one per target
pub struct DuplicateExitRefRule;

impl LintRule for DuplicateExitRefRule {
    fn name(&self) -> &'static str {
        "duplicate-exit-ref"
    }

    fn description(&self) -> &'static str {
        "At most one exit Ref per target Block"
    }

    fn check(&self, index: &LevelIndex) -> Vec<Diagnostic> {
        let mut exits: BTreeMap<BlockId, Vec<_>> = BTreeMap::new();
        for site in index.refs.iter().filter(|site| site.exit_block) {
            exits.entry(site.target_id).or_default().push(site);
        }

        exits
            .into_iter()
            .filter(|(_, sites)| sites.len() > 1)
            .map(|(target, sites)| {
                Diagnostic::warning(
                    self.name(),
                    format!("Block {} has {} exit Refs", target, sites.len()),
                )
                .at(sites[1].path.clone())
                .with_suggestion("Clear the exit flag on all but one Ref to make the rest clones")
            })
            .collect()
    }
}
