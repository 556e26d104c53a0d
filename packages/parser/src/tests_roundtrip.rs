//! Round-trip tests: parse(serialize(doc)) must reproduce doc field for field

use crate::ast::*;
use crate::*;

fn full_document() -> Document {
    let mut header = Header::new(4);
    header.title = Some("Recursion primer".to_string());
    header.shed = true;
    header.draw_style = Some(DrawStyle::Tui);
    header.attempt_order = Some("push,enter,eat,possess".to_string());
    header.custom_level_music = Some(-1);
    header.custom_level_palette = Some(12);

    let mut inner = Block::new(2, 3, 3).at(1, 1);
    inner.hue = 0.125;
    inner.zoom_factor = 0.5;
    inner.flip_h = true;
    inner.special_effect = 4;
    inner.children.push(LevelObject::Wall(Wall {
        x: 0,
        y: 2,
        player: false,
        possessable: true,
        player_order: 3,
    }));

    let mut player = Block::new(1, 5, 5).at(3, 3);
    player.fill_with_walls = true;
    player.player = true;
    player.possessable = true;
    player.float_in_space = true;

    let mut info = Floor::new(0, 4, FloorType::Info);
    info.info_text = Some("Enter the\nsmall box".to_string());

    let mut reference = Ref::new(4, 0, 2);
    reference.exit_block = false;
    reference.inf_exit = 1;
    reference.inf_exit_num = 2;
    reference.inf_enter = 1;
    reference.inf_enter_num = 3;
    reference.inf_enter_id = 2;

    let mut root = Block::new(0, 7, 7).at(-1, -1);
    root.children = vec![
        LevelObject::Block(inner),
        LevelObject::Block(player),
        LevelObject::Floor(Floor::new(4, 4, FloorType::PlayerButton)),
        LevelObject::Floor(Floor::new(2, 5, FloorType::FastTravel)),
        LevelObject::Floor(info),
        LevelObject::Ref(reference),
    ];

    Document::new(header, root)
}

#[test]
fn test_roundtrip_full_document() {
    let doc = full_document();
    let serialized = serialize(&doc);
    let reparsed = parse(&serialized).expect(&format!("Failed to reparse: {}", serialized));

    assert_eq!(reparsed, doc);
}

#[test]
fn test_serialize_is_stable() {
    let first = serialize(&full_document());
    let second = serialize(&parse(&first).unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_roundtrip_template() {
    let doc = new_document();
    assert_eq!(parse(&serialize(&doc)).unwrap(), doc);
}

#[test]
fn test_roundtrip_preserves_child_order() {
    let mut root = Block::new(0, 4, 4);
    for x in (0..4).rev() {
        root.children.push(LevelObject::Wall(Wall::new(x, 0)));
    }
    let doc = Document::new(Header::new(4), root);
    let reparsed = parse(&serialize(&doc)).unwrap();

    let xs: Vec<i32> = reparsed.root.children.iter().map(|c| c.position().0).collect();
    assert_eq!(xs, vec![3, 2, 1, 0]);
}

#[test]
fn test_roundtrip_odd_reals() {
    let mut root = Block::new(0, 4, 4);
    root.hue = 1.0 / 3.0;
    root.sat = 1e-7;
    root.val = 2.5;
    root.zoom_factor = 0.1 + 0.2;
    let doc = Document::new(Header::new(4), root);

    assert_eq!(parse(&serialize(&doc)).unwrap(), doc);
}

#[test]
fn test_example_text_reproduces() {
    let source = "version 4\n#\nBlock -1 -1 0 5 5 0.6 0.8 1 1 0 0 0 0 0 0 0\n\tWall 0 0 0 0 0\n";
    assert_eq!(serialize(&parse(source).unwrap()), source);
}

#[test]
fn test_json_roundtrip_of_value_model() {
    let doc = full_document();
    let json = serde_json::to_string(&doc).unwrap();
    let restored: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, doc);
}
