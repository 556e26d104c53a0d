use crate::diagnostic::Diagnostic;
use crate::index::LevelIndex;
use crate::rules::LintRule;

/// A level needs something for the player to control
pub struct MissingPlayerRule;

impl LintRule for MissingPlayerRule {
    fn name(&self) -> &'static str {
        "missing-player"
    }

    fn description(&self) -> &'static str {
        "Require at least one Block with the player flag"
    }

    fn check(&self, index: &LevelIndex) -> Vec<Diagnostic> {
        if index.has_player {
            return Vec::new();
        }
        vec![Diagnostic::warning(self.name(), "No player Block present")
            .with_suggestion("Set the player flag on the Block the player controls")]
    }
}

/// A level needs a PlayerButton for the player to finish on
pub struct MissingPlayerButtonRule;

impl LintRule for MissingPlayerButtonRule {
    fn name(&self) -> &'static str {
        "missing-player-button"
    }

    fn description(&self) -> &'static str {
        "Require at least one PlayerButton floor"
    }

    fn check(&self, index: &LevelIndex) -> Vec<Diagnostic> {
        if index.has_player_button {
            return Vec::new();
        }
        vec![Diagnostic::warning(self.name(), "No PlayerButton floor present")
            .with_suggestion("Place a PlayerButton floor as the goal for the player")]
    }
}
