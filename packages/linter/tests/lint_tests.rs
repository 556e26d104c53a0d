//! Linting parsed level files end to end

use boxlevel_linter::{lint_document, validate, DiagnosticLevel, LintOptions, LintRule, RuleRegistry};
use boxlevel_parser::parse;

const HEADER: &str = "version 4\n#\n";

fn level(body: &str) -> boxlevel_parser::Document {
    parse(&format!("{}{}", HEADER, body)).unwrap()
}

#[test]
fn test_no_player_is_the_only_warning() {
    // Template with the player flag cleared on Block 1
    let doc = level(concat!(
        "Block -1 -1 0 5 5 0.6 0.8 1 1 0 0 0 0 0 0 0\n",
        "\tBlock 1 2 1 5 5 0.9 1 0.7 1 1 0 1 0 0 0 0\n",
        "\tFloor 3 2 PlayerButton\n",
    ));

    assert_eq!(validate(&doc), vec!["No player Block present".to_string()]);
}

#[test]
fn test_each_core_condition_is_reported() {
    let doc = level(concat!(
        "Block 0 0 0 5 5 0.6 0.8 1 1 0 0 0 0 0 0 0\n",
        "\tBlock 1 1 1 3 3 0.6 0.8 1 1 1 0 0 0 0 0 0\n",
        "\t\tWall 0 0 0 0 0\n",
        "\tRef 2 2 8 1 0 0 0 0 -1 0 0 0 0 0 0\n",
    ));

    let rules: Vec<String> = lint_document(&doc, LintOptions::default())
        .into_iter()
        .map(|d| d.rule)
        .collect();

    assert_eq!(
        rules,
        vec![
            "missing-player",
            "missing-player-button",
            "dangling-ref",
            "filled-block-children",
        ]
    );
}

#[test]
fn test_forward_reference_resolves() {
    let doc = level(concat!(
        "Block 0 0 0 5 5 0.6 0.8 1 1 0 0 0 0 0 0 0\n",
        "\tRef 0 0 3 1 0 0 0 0 -1 0 0 0 0 0 0\n",
        "\tBlock 1 1 3 3 3 0.6 0.8 1 1 0 1 1 0 0 0 0\n",
        "\tFloor 4 4 PlayerButton\n",
    ));

    assert!(validate(&doc).is_empty());
}

#[test]
fn test_extended_checks() {
    let doc = level(concat!(
        "Block 0 0 0 4 4 0.6 0.8 1 1 0 1 1 0 0 0 0\n",
        "\tBlock 0 0 2 2 2 0.6 0.8 1 1 0 0 0 0 0 0 0\n",
        "\tBlock 1 0 2 2 2 0.6 0.8 1 1 0 0 0 0 0 0 0\n",
        "\tRef 2 0 2 1 0 0 0 0 -1 0 0 0 0 0 0\n",
        "\tRef 3 0 2 1 0 0 0 0 -1 0 0 0 0 0 0\n",
        "\tWall 3 0 0 0 0\n",
        "\tWall 9 9 0 0 0\n",
        "\tFloor 0 3 PlayerButton\n",
    ));

    let diagnostics = lint_document(&doc, LintOptions::default());
    let rules: Vec<&str> = diagnostics.iter().map(|d| d.rule.as_str()).collect();

    assert_eq!(
        rules,
        vec![
            "duplicate-block-id",
            "duplicate-exit-ref",
            "child-out-of-bounds",
            "cell-conflict",
        ]
    );
    assert!(diagnostics
        .iter()
        .all(|d| d.level == DiagnosticLevel::Warning));
}

#[test]
fn test_custom_rule() {
    struct NoWalls;

    impl LintRule for NoWalls {
        fn name(&self) -> &'static str {
            "no-walls"
        }

        fn description(&self) -> &'static str {
            "Flag every placed Wall"
        }

        fn check(&self, index: &boxlevel_linter::LevelIndex) -> Vec<boxlevel_linter::Diagnostic> {
            index
                .placements
                .iter()
                .filter(|p| p.kind == boxlevel_parser::ast::ObjectKind::Wall)
                .map(|p| boxlevel_linter::Diagnostic::warning(self.name(), "wall").at(p.path.clone()))
                .collect()
        }
    }

    let mut registry = RuleRegistry::empty();
    registry.add_rule(Box::new(NoWalls));
    let doc = level(concat!(
        "Block 0 0 0 5 5 0.6 0.8 1 1 0 0 0 0 0 0 0\n",
        "\tWall 0 0 0 0 0\n",
        "\tWall 1 0 0 0 0\n",
    ));

    let options = LintOptions {
        registry: Some(registry),
        ..Default::default()
    };
    assert_eq!(lint_document(&doc, options).len(), 2);
}

#[test]
fn test_diagnostics_serialize_to_json() {
    let doc = level("Block 0 0 0 5 5 0.6 0.8 1 1 0 1 0 0 0 0 0\n");
    let diagnostics = lint_document(&doc, LintOptions::default());

    let json = serde_json::to_value(&diagnostics).unwrap();
    assert_eq!(json[0]["rule"], "missing-player-button");
    assert_eq!(json[0]["level"], "warning");
}
