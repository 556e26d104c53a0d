use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Document-wide Block identifier (also the target of a `Ref`)
pub type BlockId = i64;

/// Root document: header plus the single root Block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub header: Header,
    pub root: Block,
}

/// Level metadata written above the `#` separator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub version: u32,
    /// Display title, written as a standalone `(comment)` line
    pub title: Option<String>,
    pub shed: bool,
    pub inner_push: bool,
    pub draw_style: Option<DrawStyle>,
    /// Opaque token, e.g. `push,enter,eat,possess`
    pub attempt_order: Option<String>,
    pub custom_level_music: Option<i64>,
    pub custom_level_palette: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawStyle {
    Tui,
    Grid,
    OldStyle,
}

impl DrawStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawStyle::Tui => "tui",
            DrawStyle::Grid => "grid",
            DrawStyle::OldStyle => "oldstyle",
        }
    }
}

impl FromStr for DrawStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tui" => Ok(DrawStyle::Tui),
            "grid" => Ok(DrawStyle::Grid),
            "oldstyle" => Ok(DrawStyle::OldStyle),
            other => Err(format!("unknown draw style '{}'", other)),
        }
    }
}

/// Any object placed inside a Block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LevelObject {
    Block(Block),
    Wall(Wall),
    Floor(Floor),
    Ref(Ref),
}

/// The only object kind that owns children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub x: i32,
    pub y: i32,
    pub id: BlockId,
    pub width: u32,
    pub height: u32,
    pub hue: f64,
    pub sat: f64,
    pub val: f64,
    pub zoom_factor: f64,
    pub fill_with_walls: bool,
    pub player: bool,
    pub possessable: bool,
    pub player_order: i32,
    pub flip_h: bool,
    pub float_in_space: bool,
    pub special_effect: i32,
    /// Children in file order (also z-order)
    pub children: Vec<LevelObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub x: i32,
    pub y: i32,
    pub player: bool,
    pub possessable: bool,
    pub player_order: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloorType {
    Button,
    PlayerButton,
    FastTravel,
    Info,
}

impl FloorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FloorType::Button => "Button",
            FloorType::PlayerButton => "PlayerButton",
            FloorType::FastTravel => "FastTravel",
            FloorType::Info => "Info",
        }
    }
}

impl FromStr for FloorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "button" => Ok(FloorType::Button),
            "playerbutton" => Ok(FloorType::PlayerButton),
            "fasttravel" => Ok(FloorType::FastTravel),
            "info" => Ok(FloorType::Info),
            other => Err(format!("unknown floor type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub x: i32,
    pub y: i32,
    pub floor_type: FloorType,
    /// Only meaningful for `FloorType::Info`; `None` rather than empty
    pub info_text: Option<String>,
}

/// Non-owning pointer to a Block by id. The target may not exist yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ref {
    pub x: i32,
    pub y: i32,
    pub target_id: BlockId,
    /// `true` for the canonical exit instance, `false` for a clone
    pub exit_block: bool,
    pub inf_exit: i32,
    pub inf_exit_num: i32,
    pub inf_enter: i32,
    pub inf_enter_num: i32,
    pub inf_enter_id: BlockId,
    pub player: bool,
    pub possessable: bool,
    pub player_order: i32,
    pub flip_h: bool,
    pub float_in_space: bool,
    pub special_effect: i32,
}

/// Variant tag without payload, for occupancy checks and messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Block,
    Wall,
    Floor,
    Ref,
}

impl ObjectKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            ObjectKind::Block => "Block",
            ObjectKind::Wall => "Wall",
            ObjectKind::Floor => "Floor",
            ObjectKind::Ref => "Ref",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl LevelObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            LevelObject::Block(_) => ObjectKind::Block,
            LevelObject::Wall(_) => ObjectKind::Wall,
            LevelObject::Floor(_) => ObjectKind::Floor,
            LevelObject::Ref(_) => ObjectKind::Ref,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        match self {
            LevelObject::Block(b) => (b.x, b.y),
            LevelObject::Wall(w) => (w.x, w.y),
            LevelObject::Floor(f) => (f.x, f.y),
            LevelObject::Ref(r) => (r.x, r.y),
        }
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        let (px, py) = match self {
            LevelObject::Block(b) => (&mut b.x, &mut b.y),
            LevelObject::Wall(w) => (&mut w.x, &mut w.y),
            LevelObject::Floor(f) => (&mut f.x, &mut f.y),
            LevelObject::Ref(r) => (&mut r.x, &mut r.y),
        };
        *px = x;
        *py = y;
    }

    pub fn is_floor(&self) -> bool {
        matches!(self, LevelObject::Floor(_))
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            LevelObject::Block(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_block_mut(&mut self) -> Option<&mut Block> {
        match self {
            LevelObject::Block(b) => Some(b),
            _ => None,
        }
    }
}

impl Block {
    /// Empty block with the editor's default colour and zoom
    pub fn new(id: BlockId, width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            id,
            width,
            height,
            hue: 0.6,
            sat: 0.8,
            val: 1.0,
            zoom_factor: 1.0,
            fill_with_walls: false,
            player: false,
            possessable: false,
            player_order: 0,
            flip_h: false,
            float_in_space: false,
            special_effect: 0,
            children: Vec::new(),
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Pre-order depth-first search over this block and its descendants
    pub fn find_block(&self, id: BlockId) -> Option<&Block> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter()
            .filter_map(LevelObject::as_block)
            .find_map(|child| child.find_block(id))
    }

    pub fn find_block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .filter_map(LevelObject::as_block_mut)
            .find_map(|child| child.find_block_mut(id))
    }

    /// Largest Block id in this subtree (including self)
    pub fn max_block_id(&self) -> BlockId {
        self.children
            .iter()
            .filter_map(LevelObject::as_block)
            .map(Block::max_block_id)
            .fold(self.id, BlockId::max)
    }
}

impl Wall {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            player: false,
            possessable: false,
            player_order: 0,
        }
    }
}

impl Floor {
    pub fn new(x: i32, y: i32, floor_type: FloorType) -> Self {
        Self {
            x,
            y,
            floor_type,
            info_text: None,
        }
    }
}

impl Ref {
    pub fn new(x: i32, y: i32, target_id: BlockId) -> Self {
        Self {
            x,
            y,
            target_id,
            exit_block: true,
            inf_exit: 0,
            inf_exit_num: 0,
            inf_enter: 0,
            inf_enter_num: 0,
            inf_enter_id: 0,
            player: false,
            possessable: false,
            player_order: 0,
            flip_h: false,
            float_in_space: false,
            special_effect: 0,
        }
    }
}

impl Header {
    pub fn new(version: u32) -> Self {
        Self {
            version,
            title: None,
            shed: false,
            inner_push: false,
            draw_style: None,
            attempt_order: None,
            custom_level_music: None,
            custom_level_palette: None,
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new(4)
    }
}

impl Document {
    pub fn new(header: Header, root: Block) -> Self {
        Self { header, root }
    }

    /// Fresh level: a 5x5 root holding one player box and a PlayerButton
    pub fn template() -> Self {
        let mut root = Block::new(0, 5, 5).at(-1, -1);

        let mut player = Block::new(1, 5, 5).at(1, 2);
        player.hue = 0.9;
        player.sat = 1.0;
        player.val = 0.7;
        player.fill_with_walls = true;
        player.player = true;
        player.possessable = true;

        root.children.push(LevelObject::Block(player));
        root.children
            .push(LevelObject::Floor(Floor::new(3, 2, FloorType::PlayerButton)));

        Self {
            header: Header::default(),
            root,
        }
    }

    /// 1 + the largest Block id in the document, `None` past `BlockId::MAX`
    pub fn next_free_block_id(&self) -> Option<BlockId> {
        next_free_block_id(self)
    }

    pub fn find_block(&self, id: BlockId) -> Option<&Block> {
        self.root.find_block(id)
    }

    pub fn find_block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.root.find_block_mut(id)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::template()
    }
}

/// Default document used by "New"
pub fn new_document() -> Document {
    Document::template()
}

/// Smallest id guaranteed not to collide: one past the current maximum.
/// The root always exists, so the result is at least `root.id + 1`.
/// `None` when the maximum id is already `BlockId::MAX`.
pub fn next_free_block_id(doc: &Document) -> Option<BlockId> {
    doc.root.max_block_id().max(-1).checked_add(1)
}

/// Pre-order depth-first lookup of a Block by id
pub fn find_block(doc: &Document, id: BlockId) -> Option<&Block> {
    doc.root.find_block(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_shape() {
        let doc = new_document();
        assert_eq!(doc.root.id, 0);
        assert_eq!((doc.root.width, doc.root.height), (5, 5));
        assert_eq!(doc.root.children.len(), 2);
        assert!(doc.find_block(1).unwrap().player);
    }

    #[test]
    fn test_next_free_block_id_uses_max_at_any_depth() {
        let mut doc = new_document();
        let mut inner = Block::new(7, 3, 3);
        inner.children.push(LevelObject::Block(Block::new(12, 1, 1)));
        doc.root.children.push(LevelObject::Block(inner));

        assert_eq!(next_free_block_id(&doc), Some(13));
    }

    #[test]
    fn test_next_free_block_id_at_id_limit() {
        let mut doc = new_document();
        doc.root.children.push(LevelObject::Block(Block::new(BlockId::MAX, 1, 1)));

        assert_eq!(next_free_block_id(&doc), None);
    }

    #[test]
    fn test_find_block_is_preorder() {
        let mut doc = new_document();
        let mut outer = Block::new(5, 3, 3);
        outer.children.push(LevelObject::Block(Block::new(6, 1, 1)));
        doc.root.children.insert(0, LevelObject::Block(outer));

        assert_eq!(find_block(&doc, 6).map(|b| b.width), Some(1));
        assert!(find_block(&doc, 99).is_none());
    }

    #[test]
    fn test_set_position() {
        let mut obj = LevelObject::Wall(Wall::new(1, 1));
        obj.set_position(4, 2);
        assert_eq!(obj.position(), (4, 2));
    }
}
