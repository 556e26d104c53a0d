use crate::diagnostic::Diagnostic;
use crate::index::LevelIndex;
use crate::rules::LintRule;

/// Block ids are how Refs find their target, so they must be unique
pub struct DuplicateBlockIdRule;

impl LintRule for DuplicateBlockIdRule {
    fn name(&self) -> &'static str {
        "duplicate-block-id"
    }

    fn description(&self) -> &'static str {
        "Every Block id must be unique within the document"
    }

    fn check(&self, index: &LevelIndex) -> Vec<Diagnostic> {
        index
            .block_ids
            .iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(id, paths)| {
                Diagnostic::warning(
                    self.name(),
                    format!("Block id {} is used by {} blocks", id, paths.len()),
                )
                .at(paths[1].clone())
                .with_suggestion("Give each Block its own id; Refs resolve to one of them arbitrarily")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxlevel_common::ObjectPath;
    use boxlevel_parser::ast::{Block, LevelObject};

    #[test]
    fn test_detects_duplicate_id() {
        let mut doc = boxlevel_parser::new_document();
        doc.root
            .children
            .push(LevelObject::Block(Block::new(1, 2, 2).at(0, 0)));

        let diagnostics = DuplicateBlockIdRule.check(&LevelIndex::build(&doc));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Block id 1 is used by 2 blocks");
        assert_eq!(diagnostics[0].location, Some(ObjectPath::new(0, vec![2])));
    }

    #[test]
    fn test_unique_ids_pass() {
        let index = LevelIndex::build(&boxlevel_parser::new_document());
        assert!(DuplicateBlockIdRule.check(&index).is_empty());
    }
}
