use crate::ast::*;
use std::fmt::Write;

/// Serializer converts a Document back to level text
///
/// Output is canonical: fixed header order, one object per line, children
/// indented with one tab per level. Free text is normalized so that
/// `parse(serialize(doc)) == doc` for documents built through the editor.
pub struct Serializer {
    indent_level: usize,
    indent_string: String,
}

impl Serializer {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            indent_string: "\t".to_string(),
        }
    }

    /// Serialize a Document to level text
    pub fn serialize(&mut self, doc: &Document) -> String {
        let mut output = String::new();

        self.serialize_header(&doc.header, &mut output);
        output.push_str("#\n");
        self.serialize_block(&doc.root, &mut output);

        output
    }

    fn serialize_header(&self, header: &Header, output: &mut String) {
        let _ = writeln!(output, "version {}", header.version);

        if let Some(title) = header.title.as_deref().and_then(normalize_title) {
            let _ = writeln!(output, "({})", title);
        }
        if header.shed {
            output.push_str("shed\n");
        }
        if header.inner_push {
            output.push_str("inner_push\n");
        }
        if let Some(style) = header.draw_style {
            let _ = writeln!(output, "draw_style {}", style.as_str());
        }
        if let Some(order) = &header.attempt_order {
            let _ = writeln!(output, "attempt_order {}", order);
        }
        if let Some(music) = header.custom_level_music {
            let _ = writeln!(output, "custom_level_music {}", music);
        }
        if let Some(palette) = header.custom_level_palette {
            let _ = writeln!(output, "custom_level_palette {}", palette);
        }
    }

    fn serialize_object(&mut self, object: &LevelObject, output: &mut String) {
        match object {
            LevelObject::Block(block) => self.serialize_block(block, output),
            LevelObject::Wall(wall) => self.serialize_wall(wall, output),
            LevelObject::Floor(floor) => self.serialize_floor(floor, output),
            LevelObject::Ref(reference) => self.serialize_ref(reference, output),
        }
    }

    fn serialize_block(&mut self, block: &Block, output: &mut String) {
        self.write_indent(output);
        let _ = writeln!(
            output,
            "Block {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {}",
            block.x,
            block.y,
            block.id,
            block.width,
            block.height,
            block.hue,
            block.sat,
            block.val,
            block.zoom_factor,
            flag(block.fill_with_walls),
            flag(block.player),
            flag(block.possessable),
            block.player_order,
            flag(block.flip_h),
            flag(block.float_in_space),
            block.special_effect,
        );

        self.indent_level += 1;
        for child in &block.children {
            self.serialize_object(child, output);
        }
        self.indent_level -= 1;
    }

    fn serialize_wall(&self, wall: &Wall, output: &mut String) {
        self.write_indent(output);
        let _ = writeln!(
            output,
            "Wall {} {} {} {} {}",
            wall.x,
            wall.y,
            flag(wall.player),
            flag(wall.possessable),
            wall.player_order,
        );
    }

    fn serialize_floor(&self, floor: &Floor, output: &mut String) {
        self.write_indent(output);
        let _ = write!(output, "Floor {} {} {}", floor.x, floor.y, floor.floor_type.as_str());

        if floor.floor_type == FloorType::Info {
            if let Some(text) = floor.info_text.as_deref().and_then(normalize_info_text) {
                output.push(' ');
                output.push_str(&encode_info_text(&text));
            }
        }
        output.push('\n');
    }

    fn serialize_ref(&self, reference: &Ref, output: &mut String) {
        self.write_indent(output);
        let _ = writeln!(
            output,
            "Ref {} {} {} {} {} {} {} {} {} {} {} {} {} {} {}",
            reference.x,
            reference.y,
            reference.target_id,
            flag(reference.exit_block),
            reference.inf_exit,
            reference.inf_exit_num,
            reference.inf_enter,
            reference.inf_enter_num,
            reference.inf_enter_id,
            flag(reference.player),
            flag(reference.possessable),
            reference.player_order,
            flag(reference.flip_h),
            flag(reference.float_in_space),
            reference.special_effect,
        );
    }

    fn write_indent(&self, output: &mut String) {
        for _ in 0..self.indent_level {
            output.push_str(&self.indent_string);
        }
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}

/// Canonical form of a title: one line, no closing parenthesis, trimmed.
/// Returns `None` when nothing printable is left.
pub fn normalize_title(title: &str) -> Option<String> {
    let text: String = title
        .chars()
        .filter(|c| *c != ')')
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    Some(text.trim().to_string()).filter(|t| !t.is_empty())
}

/// Canonical form of Info text: the value that survives an
/// encode/decode cycle unchanged. Returns `None` for empty text.
pub fn normalize_info_text(text: &str) -> Option<String> {
    let mut text: String = text
        .replace("\\n", "\n")
        .chars()
        .filter(|c| *c != '\r')
        .map(|c| match c {
            '\n' => '\n',
            '_' => ' ',
            c if c.is_whitespace() => ' ',
            c => c,
        })
        .collect();

    // A bare "(...)" token would be read back as a comment
    if text.starts_with('(') && text.ends_with(')') && text.matches(')').count() == 1 {
        text = text[1..text.len() - 1].to_string();
    }
    Some(text).filter(|t| !t.is_empty())
}

fn encode_info_text(text: &str) -> String {
    text.replace('\n', "\\n").replace(' ', "_")
}

/// Serialize a Document to level text
pub fn serialize(doc: &Document) -> String {
    Serializer::new().serialize(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_serialize_example_level() {
        let mut root = Block::new(0, 5, 5).at(-1, -1);
        root.children.push(LevelObject::Wall(Wall::new(0, 0)));
        let doc = Document::new(Header::new(4), root);

        assert_eq!(
            serialize(&doc),
            "version 4\n#\nBlock -1 -1 0 5 5 0.6 0.8 1 1 0 0 0 0 0 0 0\n\tWall 0 0 0 0 0\n"
        );
    }

    #[test]
    fn test_header_canonical_order() {
        let mut header = Header::new(4);
        header.custom_level_palette = Some(2);
        header.attempt_order = Some("enter,push".to_string());
        header.inner_push = true;
        header.title = Some("Hello (world)".to_string());
        header.shed = true;
        header.draw_style = Some(DrawStyle::OldStyle);
        header.custom_level_music = Some(1);
        let doc = Document::new(header, Block::new(0, 1, 1));

        let text = serialize(&doc);
        let head: Vec<&str> = text.lines().take(9).collect();
        assert_eq!(
            head,
            vec![
                "version 4",
                "(Hello (world)",
                "shed",
                "inner_push",
                "draw_style oldstyle",
                "attempt_order enter,push",
                "custom_level_music 1",
                "custom_level_palette 2",
                "#",
            ]
        );
    }

    #[test]
    fn test_nested_indentation() {
        let mut inner = Block::new(1, 2, 2).at(1, 1);
        inner.children.push(LevelObject::Floor(Floor::new(0, 0, FloorType::Button)));
        let mut root = Block::new(0, 5, 5);
        root.children.push(LevelObject::Block(inner));
        let doc = Document::new(Header::new(4), root);

        let text = serialize(&doc);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[2].starts_with("Block 0 0 0"));
        assert!(lines[3].starts_with("\tBlock 1 1 1"));
        assert_eq!(lines[4], "\t\tFloor 0 0 Button");
    }

    #[test]
    fn test_info_text_roundtrip() {
        let mut floor = Floor::new(2, 3, FloorType::Info);
        floor.info_text = Some("two  spaces\nand a new line".to_string());
        let mut root = Block::new(0, 5, 5);
        root.children.push(LevelObject::Floor(floor.clone()));
        let doc = Document::new(Header::new(4), root);

        let text = serialize(&doc);
        assert!(text.contains("Floor 2 3 Info two__spaces\\nand_a_new_line"));

        let reparsed = parse(&text).unwrap();
        assert_eq!(reparsed, doc);
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("  A (B)\nC "), Some("A (B C".to_string()));
        assert_eq!(normalize_title(")"), None);
    }

    #[test]
    fn test_normalize_info_text() {
        assert_eq!(normalize_info_text("a_b\tc"), Some("a b c".to_string()));
        assert_eq!(normalize_info_text("line\\nbreak"), Some("line\nbreak".to_string()));
        assert_eq!(normalize_info_text(""), None);
    }
}
