//! # Block Identity
//!
//! Block ids are document-wide and user-visible, so any subtree that enters
//! the document (paste, duplicate, insert) gets fresh ids first.
//!
//! Duplication runs in two passes over the clone:
//!
//! 1. Pre-order walk assigning each Block the next free id and recording
//!    `old -> new` in an [`IdMap`]
//! 2. Walk rewriting every Ref whose target is a key of the map
//!
//! The second pass has to be separate: a Ref may point at a Block that comes
//! later in traversal order. Refs to Blocks outside the subtree keep pointing
//! at the shared original.

use crate::mutations::Declined;
use boxlevel_common::{walk_block_mut, VisitorMut};
use boxlevel_parser::ast::{Block, BlockId, Document, LevelObject, Ref};
use std::collections::BTreeMap;

/// Old Block id -> freshly assigned id
pub type IdMap = BTreeMap<BlockId, BlockId>;

struct Allocator {
    /// `None` once the id space is used up
    next: Option<BlockId>,
    map: IdMap,
    exhausted: bool,
}

impl VisitorMut for Allocator {
    fn visit_block_mut(&mut self, block: &mut Block) {
        let Some(fresh) = self.next else {
            self.exhausted = true;
            return;
        };
        self.next = fresh.checked_add(1);
        // First occurrence wins if the subtree itself repeats an id
        self.map.entry(block.id).or_insert(fresh);
        block.id = fresh;
        walk_block_mut(self, block);
    }
}

struct Retarget<'a> {
    map: &'a IdMap,
}

impl VisitorMut for Retarget<'_> {
    fn visit_ref_mut(&mut self, reference: &mut Ref) {
        if let Some(fresh) = self.map.get(&reference.target_id) {
            reference.target_id = *fresh;
        }
    }
}

/// Give every Block in `object` an id unused in `doc`, then retarget Refs
/// inside `object` that pointed at the renumbered Blocks.
///
/// Declines with `IdSpaceExhausted` when the subtree needs ids past
/// `BlockId::MAX`; `object` is then partially renumbered and should be dropped.
pub fn assign_fresh_ids(doc: &Document, object: &mut LevelObject) -> Result<IdMap, Declined> {
    let mut allocator = Allocator {
        next: doc.next_free_block_id(),
        map: IdMap::new(),
        exhausted: false,
    };
    allocator.visit_object_mut(object);
    if allocator.exhausted {
        return Err(Declined::IdSpaceExhausted);
    }

    let map = allocator.map;
    if !map.is_empty() {
        Retarget { map: &map }.visit_object_mut(object);
        tracing::debug!(?map, "remapped block ids");
    }
    Ok(map)
}

/// Deep-clone `subtree` with fresh Block ids relative to `doc`
pub fn duplicate_subtree(
    doc: &Document,
    subtree: &LevelObject,
) -> Result<(LevelObject, IdMap), Declined> {
    let mut clone = subtree.clone();
    let map = assign_fresh_ids(doc, &mut clone)?;
    Ok((clone, map))
}
