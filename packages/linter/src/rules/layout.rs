use crate::diagnostic::Diagnostic;
use crate::index::LevelIndex;
use crate::rules::LintRule;

/// A box (`fillWithWalls`) is solid, so anything inside it is unreachable
pub struct FilledBlockChildrenRule;

impl LintRule for FilledBlockChildrenRule {
    fn name(&self) -> &'static str {
        "filled-block-children"
    }

    fn description(&self) -> &'static str {
        "Blocks filled with walls should have no children"
    }

    fn check(&self, index: &LevelIndex) -> Vec<Diagnostic> {
        index
            .filled_with_children
            .iter()
            .map(|(id, path, count)| {
                Diagnostic::warning(
                    self.name(),
                    format!("Block {} is filled with walls but has {} children", id, count),
                )
                .at(path.clone())
                .with_suggestion("Clear fillWithWalls or remove the children")
            })
            .collect()
    }
}

/// Children must sit inside `[0, width) x [0, height)` of their parent
pub struct ChildOutOfBoundsRule;

impl LintRule for ChildOutOfBoundsRule {
    fn name(&self) -> &'static str {
        "child-out-of-bounds"
    }

    fn description(&self) -> &'static str {
        "Children must lie within their parent Block's extent"
    }

    fn check(&self, index: &LevelIndex) -> Vec<Diagnostic> {
        index
            .placements
            .iter()
            .filter(|placement| !placement.in_bounds())
            .map(|placement| {
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "{} at ({}, {}) lies outside block {} ({}x{})",
                        placement.kind,
                        placement.x,
                        placement.y,
                        placement.parent_id,
                        placement.parent_width,
                        placement.parent_height
                    ),
                )
                .at(placement.path.clone())
            })
            .collect()
    }
}

/// One solid object and one Floor per cell
pub struct CellConflictRule;

impl LintRule for CellConflictRule {
    fn name(&self) -> &'static str {
        "cell-conflict"
    }

    fn description(&self) -> &'static str {
        "A cell holds at most one non-Floor object and at most one Floor"
    }

    fn check(&self, index: &LevelIndex) -> Vec<Diagnostic> {
        index
            .conflicts
            .iter()
            .map(|(id, path, conflict)| {
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "Cell ({}, {}) of block {} holds {} solid objects and {} floors",
                        conflict.x, conflict.y, id, conflict.solids, conflict.floors
                    ),
                )
                .at(path.clone())
            })
            .collect()
    }
}
