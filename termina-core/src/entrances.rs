//! Dungeon entrance shuffle.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::items::{
    AREA_GREAT_BAY_TEMPLE_ACCESS, AREA_GREAT_BAY_TEMPLE_CLEAR,
    AREA_INVERTED_STONE_TOWER_TEMPLE_ACCESS, AREA_SNOWHEAD_TEMPLE_ACCESS,
    AREA_SNOWHEAD_TEMPLE_CLEAR, AREA_STONE_TOWER_CLEAR, AREA_WOODFALL_TEMPLE_ACCESS,
    AREA_WOODFALL_TEMPLE_CLEAR,
};
use crate::logic::ItemGraph;

pub const DUNGEON_COUNT: usize = 4;

/// Access records in slot order: Woodfall, Snowhead, Inverted Stone Tower, Great Bay.
pub const ACCESS_SLOTS: [usize; DUNGEON_COUNT] = [
    AREA_WOODFALL_TEMPLE_ACCESS,
    AREA_SNOWHEAD_TEMPLE_ACCESS,
    AREA_INVERTED_STONE_TOWER_TEMPLE_ACCESS,
    AREA_GREAT_BAY_TEMPLE_ACCESS,
];

pub const CLEAR_SLOTS: [usize; DUNGEON_COUNT] = [
    AREA_WOODFALL_TEMPLE_CLEAR,
    AREA_SNOWHEAD_TEMPLE_CLEAR,
    AREA_STONE_TOWER_CLEAR,
    AREA_GREAT_BAY_TEMPLE_CLEAR,
];

/// Vanilla entrance values per dungeon slot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntranceTables {
    pub entrances: [u16; DUNGEON_COUNT],
    pub exits: [u16; DUNGEON_COUNT],
    /// Event flag byte checked for "dungeon cleared".
    pub dc_flags: [u16; DUNGEON_COUNT],
    pub dc_masks: [u16; DUNGEON_COUNT],
}

impl Default for EntranceTables {
    fn default() -> Self {
        EntranceTables {
            entrances: [0x3000, 0x3C00, 0x2600, 0x8C00],
            exits: [0x8610, 0xB210, 0xAC10, 0x6A80],
            dc_flags: [0x0D, 0x0D, 0x0E, 0x0E],
            dc_masks: [0x01, 0x02, 0x04, 0x08],
        }
    }
}

/// Result of one shuffle: slot `i` now leads to dungeon `destination_indices[i]`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntranceShuffle {
    pub destination_indices: [usize; DUNGEON_COUNT],
    pub exit_indices: [usize; DUNGEON_COUNT],
    pub new_entrances: [u16; DUNGEON_COUNT],
    pub new_exits: [u16; DUNGEON_COUNT],
    pub new_dc_flags: [u16; DUNGEON_COUNT],
    pub new_dc_masks: [u16; DUNGEON_COUNT],
}

impl EntranceShuffle {
    pub fn from_destinations(
        destination_indices: [usize; DUNGEON_COUNT],
        tables: &EntranceTables,
    ) -> Self {
        let mut exit_indices = [0; DUNGEON_COUNT];
        for (slot, &destination) in destination_indices.iter().enumerate() {
            exit_indices[destination] = slot;
        }

        EntranceShuffle {
            destination_indices,
            exit_indices,
            new_entrances: destination_indices.map(|d| tables.entrances[d]),
            new_exits: exit_indices.map(|e| tables.exits[e]),
            new_dc_flags: exit_indices.map(|e| tables.dc_flags[e]),
            new_dc_masks: exit_indices.map(|e| tables.dc_masks[e]),
        }
    }
}

/// Draws a permutation of the dungeon slots. Without self mapping the draw
/// starts over whenever the last slot is left with only itself.
pub fn draw_destinations<R: Rng + ?Sized>(
    rng: &mut R,
    allow_self_mapping: bool,
) -> [usize; DUNGEON_COUNT] {
    'draw: loop {
        let mut destinations = [0; DUNGEON_COUNT];
        let mut used = [false; DUNGEON_COUNT];

        for slot in 0..DUNGEON_COUNT {
            let open: Vec<usize> = (0..DUNGEON_COUNT)
                .filter(|&n| !used[n] && (allow_self_mapping || n != slot))
                .collect();
            let Some(&n) = open.choose(rng) else {
                continue 'draw;
            };
            destinations[slot] = n;
            used[n] = true;
        }

        return destinations;
    }
}

/// Relabels the access and clear records so that reaching entrance `i`
/// grants access to dungeon `destinations[i]`, and clearing the dungeon
/// behind entrance `i` counts as clearing it.
pub fn apply_destinations(graph: &mut ItemGraph, destinations: &[usize; DUNGEON_COUNT]) {
    let old_access = ACCESS_SLOTS.map(|slot| graph.items[slot].clone());
    for (slot, record) in old_access.into_iter().enumerate() {
        let id = ACCESS_SLOTS[destinations[slot]];
        log::debug!(
            "entrance {} placed at {}",
            crate::items::item_name(id),
            crate::items::item_name(record.id)
        );
        graph.items[id] = crate::logic::LogicItem { id, ..record };
    }

    let old_clear = CLEAR_SLOTS.map(|slot| graph.items[slot].clone());
    for (slot, &destination) in destinations.iter().enumerate() {
        let id = CLEAR_SLOTS[slot];
        graph.items[id] = crate::logic::LogicItem {
            id,
            ..old_clear[destination].clone()
        };
    }
}

pub fn shuffle_entrances<R: Rng + ?Sized>(
    graph: &mut ItemGraph,
    rng: &mut R,
    allow_self_mapping: bool,
    tables: &EntranceTables,
) -> EntranceShuffle {
    let destinations = draw_destinations(rng, allow_self_mapping);
    apply_destinations(graph, &destinations);
    EntranceShuffle::from_destinations(destinations, tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::TOTAL_NUMBER_OF_ITEMS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_permutation(d: &[usize; DUNGEON_COUNT]) -> bool {
        let mut sorted = *d;
        sorted.sort_unstable();
        sorted == [0, 1, 2, 3]
    }

    #[test]
    fn derangement_never_maps_a_slot_to_itself() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let d = draw_destinations(&mut rng, false);
            assert!(is_permutation(&d));
            assert!(d.iter().enumerate().all(|(i, &n)| i != n), "seed {seed}: {d:?}");
        }
    }

    #[test]
    fn exported_arrays_follow_the_mapping() {
        let tables = EntranceTables::default();
        let shuffle = EntranceShuffle::from_destinations([1, 2, 3, 0], &tables);

        assert_eq!(shuffle.exit_indices, [3, 0, 1, 2]);
        assert_eq!(shuffle.new_entrances, [0x3C00, 0x2600, 0x8C00, 0x3000]);
        assert_eq!(shuffle.new_exits, [0x6A80, 0x8610, 0xB210, 0xAC10]);
        assert_eq!(shuffle.new_dc_masks, [0x08, 0x01, 0x02, 0x04]);
        assert_eq!(shuffle.new_dc_flags, [0x0E, 0x0D, 0x0D, 0x0E]);
    }

    #[test]
    fn identity_mapping_changes_nothing() {
        let mut graph = ItemGraph::without_logic(TOTAL_NUMBER_OF_ITEMS);
        graph.items[AREA_SNOWHEAD_TEMPLE_ACCESS].depends_on_items = vec![3];
        let before = graph.clone();
        apply_destinations(&mut graph, &[0, 1, 2, 3]);
        assert_eq!(graph, before);
    }

    #[test]
    fn records_are_relabelled_by_slot() {
        let mut graph = ItemGraph::without_logic(TOTAL_NUMBER_OF_ITEMS);
        graph.items[AREA_WOODFALL_TEMPLE_ACCESS].depends_on_items = vec![1];
        graph.items[AREA_SNOWHEAD_TEMPLE_ACCESS].depends_on_items = vec![2];
        graph.items[AREA_WOODFALL_TEMPLE_CLEAR].depends_on_items = vec![5];
        graph.items[AREA_SNOWHEAD_TEMPLE_CLEAR].depends_on_items = vec![6];

        // Woodfall's entrance leads to Snowhead and back.
        apply_destinations(&mut graph, &[1, 0, 2, 3]);

        let snowhead = &graph.items[AREA_SNOWHEAD_TEMPLE_ACCESS];
        assert_eq!(snowhead.id, AREA_SNOWHEAD_TEMPLE_ACCESS);
        assert_eq!(snowhead.depends_on_items, vec![1]);
        assert_eq!(graph.items[AREA_WOODFALL_TEMPLE_ACCESS].depends_on_items, vec![2]);
        assert_eq!(graph.items[AREA_WOODFALL_TEMPLE_CLEAR].depends_on_items, vec![6]);
        assert_eq!(graph.items[AREA_WOODFALL_TEMPLE_CLEAR].id, AREA_WOODFALL_TEMPLE_CLEAR);
        assert_eq!(graph.items[AREA_SNOWHEAD_TEMPLE_CLEAR].depends_on_items, vec![5]);
    }
}
