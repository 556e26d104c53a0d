//! # Level Mutations
//!
//! Structural and property edits on a level Document.
//!
//! ## Design Principles
//!
//! 1. **Explicit targets**: every edit names its Block id or `ObjectPath`;
//!    there is no ambient "current block"
//! 2. **Validated**: `apply` runs `validate` first, so a declined edit
//!    leaves the document untouched
//! 3. **Typed fields**: properties are a closed enum, not string keys
//!
//! ## Mutation Semantics
//!
//! ### Insert / Paste
//! - Declined if the parent Block is missing or the cell is taken by an
//!   object of the same class (solid vs Floor)
//! - Declined if any Block in the value has an empty extent, a non-finite
//!   colour or a non-positive zoom, or if the fresh ids would run past
//!   `BlockId::MAX`
//! - Every Block in the inserted value gets a fresh id; Refs inside it
//!   that pointed at those Blocks are retargeted
//!
//! ### Delete
//! - Removes the object and its descendants
//! - Refs elsewhere to a deleted Block are left dangling
//!
//! ### Move / Resize
//! - No occupancy or bounds re-check; overlap while dragging is allowed

use crate::identity::{assign_fresh_ids, IdMap};
use boxlevel_common::{
    cell_accepts, occupants, walk_block, walk_block_mut, Node, NodeMut, ObjectPath, Visitor,
    VisitorMut,
};
use boxlevel_parser::ast::*;
use boxlevel_parser::{normalize_info_text, normalize_title};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic edits (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Place a new object at a cell of a Block
    Insert {
        parent_id: BlockId,
        object: LevelObject,
        x: i32,
        y: i32,
    },

    /// Place a clipboard value at a cell of a Block
    Paste {
        value: LevelObject,
        parent_id: BlockId,
        x: i32,
        y: i32,
    },

    /// Remove an object (and its subtree)
    Delete { path: ObjectPath },

    /// Translate an object within its parent
    Move { path: ObjectPath, dx: i32, dy: i32 },

    /// Replace a Block's extent
    Resize {
        block_id: BlockId,
        width: u32,
        height: u32,
    },

    /// Replace a Block's colour
    Recolor {
        block_id: BlockId,
        hue: f64,
        sat: f64,
        val: f64,
    },

    /// Set one typed field on an object
    SetProperty { path: ObjectPath, property: Property },

    /// Set one header field
    SetHeader(HeaderProperty),
}

/// Per-variant fields settable through `Mutation::SetProperty`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Property {
    Player(bool),
    Possessable(bool),
    PlayerOrder(i32),
    FlipH(bool),
    FloatInSpace(bool),
    SpecialEffect(i32),
    ZoomFactor(f64),
    FillWithWalls(bool),
    FloorType(FloorType),
    InfoText(Option<String>),
    TargetId(BlockId),
    ExitBlock(bool),
    InfExit(i32),
    InfExitNum(i32),
    InfEnter(i32),
    InfEnterNum(i32),
    InfEnterId(BlockId),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum HeaderProperty {
    Version(u32),
    Title(Option<String>),
    Shed(bool),
    InnerPush(bool),
    DrawStyle(Option<DrawStyle>),
    AttemptOrder(Option<String>),
    CustomLevelMusic(Option<i64>),
    CustomLevelPalette(Option<i64>),
}

/// Why an edit was not applied. The document is unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Declined {
    #[error("Parent block not found: {0}")]
    ParentNotFound(BlockId),

    #[error("Block not found: {0}")]
    BlockNotFound(BlockId),

    #[error("Path resolves to nothing: {0}")]
    InvalidPath(ObjectPath),

    #[error("Cell ({x}, {y}) is already occupied by a {occupant}")]
    CellOccupied {
        x: i32,
        y: i32,
        occupant: ObjectKind,
    },

    #[error("Block extent must be positive, got {width}x{height}")]
    InvalidExtent { width: u32, height: u32 },

    #[error("{kind} has no property '{property}'")]
    PropertyMismatch {
        kind: ObjectKind,
        property: &'static str,
    },

    #[error("Invalid value for '{property}': {reason}")]
    InvalidValue {
        property: &'static str,
        reason: String,
    },

    #[error("Clipboard is empty")]
    ClipboardEmpty,

    #[error("No free block ids left")]
    IdSpaceExhausted,
}

impl Declined {
    fn invalid(property: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            property,
            reason: reason.into(),
        }
    }
}

/// What a committed edit produced
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// New object now lives at `path`; `ids` maps renumbered Blocks
    Inserted {
        path: ObjectPath,
        object: LevelObject,
        ids: IdMap,
    },

    /// Object taken out of the tree
    Removed(LevelObject),

    /// Fields changed in place
    Updated,
}

impl Mutation {
    /// Short label used for history entries and logs
    pub fn describe(&self) -> String {
        match self {
            Mutation::Insert { object, x, y, .. } => {
                format!("Insert {} at ({}, {})", object.kind(), x, y)
            }
            Mutation::Paste { value, x, y, .. } => {
                format!("Paste {} at ({}, {})", value.kind(), x, y)
            }
            Mutation::Delete { path } => format!("Delete {}", path),
            Mutation::Move { path, dx, dy } => format!("Move {} by ({}, {})", path, dx, dy),
            Mutation::Resize {
                block_id,
                width,
                height,
            } => format!("Resize block {} to {}x{}", block_id, width, height),
            Mutation::Recolor { block_id, .. } => format!("Recolor block {}", block_id),
            Mutation::SetProperty { path, property } => {
                format!("Set {} on {}", property.name(), path)
            }
            Mutation::SetHeader(property) => format!("Set header {}", property.name()),
        }
    }

    /// Apply mutation to the document with validation
    pub fn apply(&self, doc: &mut Document) -> Result<MutationOutcome, Declined> {
        self.validate(doc)?;

        match self {
            Mutation::Insert {
                parent_id,
                object,
                x,
                y,
            } => Self::apply_insert(doc, *parent_id, object, *x, *y),

            Mutation::Paste {
                value,
                parent_id,
                x,
                y,
            } => Self::apply_insert(doc, *parent_id, value, *x, *y),

            Mutation::Delete { path } => Self::apply_delete(doc, path),

            Mutation::Move { path, dx, dy } => {
                let node = path
                    .resolve_mut(doc)
                    .ok_or_else(|| Declined::InvalidPath(path.clone()))?;
                let (x, y) = node_position(&node);
                set_node_position(node, x.saturating_add(*dx), y.saturating_add(*dy));
                Ok(MutationOutcome::Updated)
            }

            Mutation::Resize {
                block_id,
                width,
                height,
            } => {
                let block = doc
                    .find_block_mut(*block_id)
                    .ok_or(Declined::BlockNotFound(*block_id))?;
                block.width = *width;
                block.height = *height;
                Ok(MutationOutcome::Updated)
            }

            Mutation::Recolor {
                block_id,
                hue,
                sat,
                val,
            } => {
                let block = doc
                    .find_block_mut(*block_id)
                    .ok_or(Declined::BlockNotFound(*block_id))?;
                block.hue = *hue;
                block.sat = *sat;
                block.val = *val;
                Ok(MutationOutcome::Updated)
            }

            Mutation::SetProperty { path, property } => {
                let node = path
                    .resolve_mut(doc)
                    .ok_or_else(|| Declined::InvalidPath(path.clone()))?;
                property.assign(node)?;
                Ok(MutationOutcome::Updated)
            }

            Mutation::SetHeader(property) => {
                property.assign(&mut doc.header);
                Ok(MutationOutcome::Updated)
            }
        }
    }

    fn apply_insert(
        doc: &mut Document,
        parent_id: BlockId,
        object: &LevelObject,
        x: i32,
        y: i32,
    ) -> Result<MutationOutcome, Declined> {
        let mut object = object.clone();
        object.set_position(x, y);
        Canonicalize.visit_object_mut(&mut object);
        let ids = assign_fresh_ids(doc, &mut object)?;

        let parent = doc
            .find_block_mut(parent_id)
            .ok_or(Declined::ParentNotFound(parent_id))?;
        parent.children.push(object.clone());
        let index = parent.children.len() - 1;

        Ok(MutationOutcome::Inserted {
            path: ObjectPath::new(parent_id, vec![index]),
            object,
            ids,
        })
    }

    fn apply_delete(doc: &mut Document, path: &ObjectPath) -> Result<MutationOutcome, Declined> {
        let (parent_path, index) = path
            .split_last()
            .ok_or_else(|| Declined::InvalidPath(path.clone()))?;
        let parent = parent_path
            .resolve_block_mut(doc)
            .filter(|parent| index < parent.children.len())
            .ok_or_else(|| Declined::InvalidPath(path.clone()))?;

        Ok(MutationOutcome::Removed(parent.children.remove(index)))
    }

    /// Check preconditions without applying
    pub fn validate(&self, doc: &Document) -> Result<(), Declined> {
        match self {
            Mutation::Insert {
                parent_id,
                object,
                x,
                y,
            }
            | Mutation::Paste {
                value: object,
                parent_id,
                x,
                y,
            } => {
                let parent = doc
                    .find_block(*parent_id)
                    .ok_or(Declined::ParentNotFound(*parent_id))?;
                let incoming = check_incoming(object)?;
                if incoming > 0 {
                    doc.next_free_block_id()
                        .and_then(|first| first.checked_add(incoming as BlockId - 1))
                        .ok_or(Declined::IdSpaceExhausted)?;
                }

                if !cell_accepts(parent, object.kind(), *x, *y) {
                    let incoming_floor = object.is_floor();
                    let occupant = occupants(parent, *x, *y)
                        .find(|o| o.is_floor() == incoming_floor)
                        .map(LevelObject::kind)
                        .unwrap_or_else(|| object.kind());
                    return Err(Declined::CellOccupied {
                        x: *x,
                        y: *y,
                        occupant,
                    });
                }
                Ok(())
            }

            Mutation::Delete { path } => {
                path.resolve_object(doc)
                    .ok_or_else(|| Declined::InvalidPath(path.clone()))?;
                Ok(())
            }

            Mutation::Move { path, .. } => {
                path.resolve(doc)
                    .ok_or_else(|| Declined::InvalidPath(path.clone()))?;
                Ok(())
            }

            Mutation::Resize {
                block_id,
                width,
                height,
            } => {
                doc.find_block(*block_id)
                    .ok_or(Declined::BlockNotFound(*block_id))?;
                check_extent(*width, *height)
            }

            Mutation::Recolor {
                block_id,
                hue,
                sat,
                val,
            } => {
                doc.find_block(*block_id)
                    .ok_or(Declined::BlockNotFound(*block_id))?;
                check_color(*hue, *sat, *val)
            }

            Mutation::SetProperty { path, property } => {
                let node = path
                    .resolve(doc)
                    .ok_or_else(|| Declined::InvalidPath(path.clone()))?;
                property.check(node)
            }

            Mutation::SetHeader(property) => property.check(),
        }
    }
}

fn check_extent(width: u32, height: u32) -> Result<(), Declined> {
    if width == 0 || height == 0 {
        return Err(Declined::InvalidExtent { width, height });
    }
    Ok(())
}

fn check_color(hue: f64, sat: f64, val: f64) -> Result<(), Declined> {
    if [hue, sat, val].iter().any(|c| !c.is_finite()) {
        return Err(Declined::invalid("color", "components must be finite"));
    }
    Ok(())
}

fn check_zoom(zoom: f64) -> Result<(), Declined> {
    if !(zoom.is_finite() && zoom > 0.0) {
        return Err(Declined::invalid(
            "zoomFactor",
            "must be a positive finite number",
        ));
    }
    Ok(())
}

/// Field checks over every Block of an incoming subtree
#[derive(Default)]
struct IncomingBlocks {
    count: usize,
    declined: Option<Declined>,
}

impl Visitor for IncomingBlocks {
    fn visit_block(&mut self, block: &Block) {
        if self.declined.is_some() {
            return;
        }
        self.count += 1;
        let checked = check_extent(block.width, block.height)
            .and_then(|()| check_color(block.hue, block.sat, block.val))
            .and_then(|()| check_zoom(block.zoom_factor));
        match checked {
            Ok(()) => walk_block(self, block),
            Err(declined) => self.declined = Some(declined),
        }
    }
}

/// Number of Blocks in `object` once every one of them passes the same
/// checks Resize, Recolor and SetProperty apply
fn check_incoming(object: &LevelObject) -> Result<usize, Declined> {
    let mut blocks = IncomingBlocks::default();
    blocks.visit_object(object);
    match blocks.declined {
        Some(declined) => Err(declined),
        None => Ok(blocks.count),
    }
}

fn node_position(node: &NodeMut<'_>) -> (i32, i32) {
    match node {
        NodeMut::Block(b) => (b.x, b.y),
        NodeMut::Wall(w) => (w.x, w.y),
        NodeMut::Floor(f) => (f.x, f.y),
        NodeMut::Ref(r) => (r.x, r.y),
    }
}

fn set_node_position(node: NodeMut<'_>, x: i32, y: i32) {
    let (px, py) = match node {
        NodeMut::Block(b) => (&mut b.x, &mut b.y),
        NodeMut::Wall(w) => (&mut w.x, &mut w.y),
        NodeMut::Floor(f) => (&mut f.x, &mut f.y),
        NodeMut::Ref(r) => (&mut r.x, &mut r.y),
    };
    *px = x;
    *py = y;
}

/// Bring free text into the form the serializer writes back
struct Canonicalize;

impl VisitorMut for Canonicalize {
    fn visit_block_mut(&mut self, block: &mut Block) {
        walk_block_mut(self, block);
    }

    fn visit_floor_mut(&mut self, floor: &mut Floor) {
        floor.info_text = match floor.floor_type {
            FloorType::Info => floor.info_text.as_deref().and_then(normalize_info_text),
            _ => None,
        };
    }
}

impl Property {
    pub fn name(&self) -> &'static str {
        match self {
            Property::Player(_) => "player",
            Property::Possessable(_) => "possessable",
            Property::PlayerOrder(_) => "playerOrder",
            Property::FlipH(_) => "flipH",
            Property::FloatInSpace(_) => "floatInSpace",
            Property::SpecialEffect(_) => "specialEffect",
            Property::ZoomFactor(_) => "zoomFactor",
            Property::FillWithWalls(_) => "fillWithWalls",
            Property::FloorType(_) => "floorType",
            Property::InfoText(_) => "infoText",
            Property::TargetId(_) => "targetId",
            Property::ExitBlock(_) => "exitBlock",
            Property::InfExit(_) => "infExit",
            Property::InfExitNum(_) => "infExitNum",
            Property::InfEnter(_) => "infEnter",
            Property::InfEnterNum(_) => "infEnterNum",
            Property::InfEnterId(_) => "infEnterId",
        }
    }

    /// Object kinds carrying this field
    pub fn applies_to(&self, kind: ObjectKind) -> bool {
        use ObjectKind::*;

        match self {
            Property::Player(_) | Property::Possessable(_) | Property::PlayerOrder(_) => {
                matches!(kind, Block | Wall | Ref)
            }
            Property::FlipH(_) | Property::FloatInSpace(_) | Property::SpecialEffect(_) => {
                matches!(kind, Block | Ref)
            }
            Property::ZoomFactor(_) | Property::FillWithWalls(_) => kind == Block,
            Property::FloorType(_) | Property::InfoText(_) => kind == Floor,
            Property::TargetId(_)
            | Property::ExitBlock(_)
            | Property::InfExit(_)
            | Property::InfExitNum(_)
            | Property::InfEnter(_)
            | Property::InfEnterNum(_)
            | Property::InfEnterId(_) => kind == Ref,
        }
    }

    fn check(&self, node: Node<'_>) -> Result<(), Declined> {
        let kind = node.kind();
        if !self.applies_to(kind) {
            return Err(Declined::PropertyMismatch {
                kind,
                property: self.name(),
            });
        }

        match (self, node) {
            (Property::ZoomFactor(zoom), _) => check_zoom(*zoom),
            (Property::InfoText(Some(_)), Node::Floor(floor))
                if floor.floor_type != FloorType::Info =>
            {
                Err(Declined::invalid(self.name(), "only Info floors carry text"))
            }
            _ => Ok(()),
        }
    }

    fn assign(&self, node: NodeMut<'_>) -> Result<(), Declined> {
        let kind = node.kind();
        let mismatch = || Declined::PropertyMismatch {
            kind,
            property: self.name(),
        };

        match (self, node) {
            (Property::Player(v), NodeMut::Block(b)) => b.player = *v,
            (Property::Player(v), NodeMut::Wall(w)) => w.player = *v,
            (Property::Player(v), NodeMut::Ref(r)) => r.player = *v,
            (Property::Possessable(v), NodeMut::Block(b)) => b.possessable = *v,
            (Property::Possessable(v), NodeMut::Wall(w)) => w.possessable = *v,
            (Property::Possessable(v), NodeMut::Ref(r)) => r.possessable = *v,
            (Property::PlayerOrder(v), NodeMut::Block(b)) => b.player_order = *v,
            (Property::PlayerOrder(v), NodeMut::Wall(w)) => w.player_order = *v,
            (Property::PlayerOrder(v), NodeMut::Ref(r)) => r.player_order = *v,
            (Property::FlipH(v), NodeMut::Block(b)) => b.flip_h = *v,
            (Property::FlipH(v), NodeMut::Ref(r)) => r.flip_h = *v,
            (Property::FloatInSpace(v), NodeMut::Block(b)) => b.float_in_space = *v,
            (Property::FloatInSpace(v), NodeMut::Ref(r)) => r.float_in_space = *v,
            (Property::SpecialEffect(v), NodeMut::Block(b)) => b.special_effect = *v,
            (Property::SpecialEffect(v), NodeMut::Ref(r)) => r.special_effect = *v,
            (Property::ZoomFactor(v), NodeMut::Block(b)) => b.zoom_factor = *v,
            (Property::FillWithWalls(v), NodeMut::Block(b)) => b.fill_with_walls = *v,
            (Property::FloorType(v), NodeMut::Floor(f)) => {
                f.floor_type = *v;
                if *v != FloorType::Info {
                    f.info_text = None;
                }
            }
            (Property::InfoText(v), NodeMut::Floor(f)) => {
                f.info_text = v.as_deref().and_then(normalize_info_text);
            }
            (Property::TargetId(v), NodeMut::Ref(r)) => r.target_id = *v,
            (Property::ExitBlock(v), NodeMut::Ref(r)) => r.exit_block = *v,
            (Property::InfExit(v), NodeMut::Ref(r)) => r.inf_exit = *v,
            (Property::InfExitNum(v), NodeMut::Ref(r)) => r.inf_exit_num = *v,
            (Property::InfEnter(v), NodeMut::Ref(r)) => r.inf_enter = *v,
            (Property::InfEnterNum(v), NodeMut::Ref(r)) => r.inf_enter_num = *v,
            (Property::InfEnterId(v), NodeMut::Ref(r)) => r.inf_enter_id = *v,
            _ => return Err(mismatch()),
        }
        Ok(())
    }
}

impl HeaderProperty {
    pub fn name(&self) -> &'static str {
        match self {
            HeaderProperty::Version(_) => "version",
            HeaderProperty::Title(_) => "title",
            HeaderProperty::Shed(_) => "shed",
            HeaderProperty::InnerPush(_) => "innerPush",
            HeaderProperty::DrawStyle(_) => "drawStyle",
            HeaderProperty::AttemptOrder(_) => "attemptOrder",
            HeaderProperty::CustomLevelMusic(_) => "customLevelMusic",
            HeaderProperty::CustomLevelPalette(_) => "customLevelPalette",
        }
    }

    fn check(&self) -> Result<(), Declined> {
        match self {
            HeaderProperty::Version(0) => Err(Declined::invalid(self.name(), "must be positive")),
            HeaderProperty::AttemptOrder(Some(order))
                if order.is_empty()
                    || order.starts_with('(')
                    || order.chars().any(char::is_whitespace) =>
            {
                Err(Declined::invalid(
                    self.name(),
                    "must be a single token without whitespace",
                ))
            }
            _ => Ok(()),
        }
    }

    fn assign(&self, header: &mut Header) {
        match self {
            HeaderProperty::Version(v) => header.version = *v,
            HeaderProperty::Title(v) => header.title = v.as_deref().and_then(normalize_title),
            HeaderProperty::Shed(v) => header.shed = *v,
            HeaderProperty::InnerPush(v) => header.inner_push = *v,
            HeaderProperty::DrawStyle(v) => header.draw_style = *v,
            HeaderProperty::AttemptOrder(v) => header.attempt_order = v.clone(),
            HeaderProperty::CustomLevelMusic(v) => header.custom_level_music = *v,
            HeaderProperty::CustomLevelPalette(v) => header.custom_level_palette = *v,
        }
    }
}

/// Deep clone of the object at `path`; no ownership link to the tree
pub fn copy(doc: &Document, path: &ObjectPath) -> Option<LevelObject> {
    path.resolve_object(doc).cloned()
}

/// Copy then delete
pub fn cut(doc: &mut Document, path: &ObjectPath) -> Result<LevelObject, Declined> {
    match (Mutation::Delete { path: path.clone() }).apply(doc)? {
        MutationOutcome::Removed(object) => Ok(object),
        _ => Err(Declined::InvalidPath(path.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::Insert {
            parent_id: 0,
            object: LevelObject::Wall(Wall::new(0, 0)),
            x: 2,
            y: 3,
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_validation_rejects_missing_parent() {
        let doc = boxlevel_parser::new_document();
        let mutation = Mutation::Insert {
            parent_id: 42,
            object: LevelObject::Wall(Wall::new(0, 0)),
            x: 0,
            y: 0,
        };

        assert_eq!(mutation.validate(&doc), Err(Declined::ParentNotFound(42)));
    }

    #[test]
    fn test_occupied_cell_names_occupant() {
        let doc = boxlevel_parser::new_document();
        // Template has the player Block at (1, 2)
        let mutation = Mutation::Insert {
            parent_id: 0,
            object: LevelObject::Wall(Wall::new(0, 0)),
            x: 1,
            y: 2,
        };

        assert_eq!(
            mutation.validate(&doc),
            Err(Declined::CellOccupied {
                x: 1,
                y: 2,
                occupant: ObjectKind::Block
            })
        );
    }

    #[test]
    fn test_property_mismatch() {
        let mut doc = boxlevel_parser::new_document();
        let mutation = Mutation::SetProperty {
            path: ObjectPath::new(0, vec![1]),
            property: Property::ZoomFactor(2.0),
        };

        assert_eq!(
            mutation.apply(&mut doc),
            Err(Declined::PropertyMismatch {
                kind: ObjectKind::Floor,
                property: "zoomFactor"
            })
        );
    }

    #[test]
    fn test_floor_type_change_clears_text() {
        let mut doc = boxlevel_parser::new_document();
        let floor = ObjectPath::new(0, vec![1]);

        for property in [
            Property::FloorType(FloorType::Info),
            Property::InfoText(Some("hi there".to_string())),
            Property::FloorType(FloorType::Button),
        ] {
            Mutation::SetProperty {
                path: floor.clone(),
                property,
            }
            .apply(&mut doc)
            .unwrap();
        }

        let LevelObject::Floor(floor) = &doc.root.children[1] else {
            panic!("Expected floor");
        };
        assert_eq!(floor.floor_type, FloorType::Button);
        assert_eq!(floor.info_text, None);
    }

    #[test]
    fn test_header_title_is_normalized() {
        let mut doc = boxlevel_parser::new_document();
        Mutation::SetHeader(HeaderProperty::Title(Some(" Two\nlines ".to_string())))
            .apply(&mut doc)
            .unwrap();
        assert_eq!(doc.header.title.as_deref(), Some("Two lines"));
    }

    #[test]
    fn test_attempt_order_must_be_token() {
        let doc = boxlevel_parser::new_document();
        let mutation = Mutation::SetHeader(HeaderProperty::AttemptOrder(Some("a b".to_string())));
        assert!(matches!(
            mutation.validate(&doc),
            Err(Declined::InvalidValue { property: "attemptOrder", .. })
        ));
    }

    #[test]
    fn test_describe() {
        let mutation = Mutation::Resize {
            block_id: 3,
            width: 7,
            height: 2,
        };
        assert_eq!(mutation.describe(), "Resize block 3 to 7x2");
    }
}
