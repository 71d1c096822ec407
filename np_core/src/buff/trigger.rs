//! Trait/trigger matching

use crate::types::Trait;
use std::collections::BTreeSet;

/// Whether a conditional effect applies to something carrying `traits`
///
/// True when the trigger contains [`Trait::Always`] or shares a trait.
pub fn is_trigger_active(traits: &BTreeSet<Trait>, trigger: &BTreeSet<Trait>) -> bool {
    trigger.contains(&Trait::Always) || !traits.is_disjoint(trigger)
}

/// The traits present in both sets
pub fn match_traits(traits: &BTreeSet<Trait>, trigger: &BTreeSet<Trait>) -> BTreeSet<Trait> {
    traits.intersection(trigger).cloned().collect()
}
