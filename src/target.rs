use crate::model::{ItemId, PlacedItem};
use crate::random::RandomSource;

/// Flags exactly one item as the target, chosen uniformly over the whole
/// slice. Run once per layout after every item is placed.
pub fn mark_target<R: RandomSource + ?Sized>(items: &mut [PlacedItem], rng: &mut R) -> Option<ItemId> {
    if items.is_empty() {
        return None;
    }
    let chosen = rng.index(items.len());
    for (idx, item) in items.iter_mut().enumerate() {
        item.is_target = idx == chosen;
    }
    Some(items[chosen].id)
}
