//! Logic-checked item placement.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

use crate::conditionals::{check_conditionals, remove_conditionals};
use crate::items::*;
use crate::logic::ItemGraph;
use crate::resolver;
use crate::{RandomiserError, RandomiserSettings, Result};

/// Static placement exclusions consulted before any graph work.
#[derive(Clone, Debug, Default)]
pub struct ExclusionTables {
    /// location -> items that may never be placed there.
    pub forbidden_replaced_by: HashMap<usize, Vec<usize>>,
    /// item -> locations it may never be placed at.
    pub forbidden_placed_at: HashMap<usize, Vec<usize>>,
}

impl ExclusionTables {
    pub fn standard() -> Self {
        let downgradable = [
            UPGRADE_GILDED_SWORD,
            UPGRADE_MIRROR_SHIELD,
            UPGRADE_BIGGEST_QUIVER,
            UPGRADE_BIG_BOMB_BAG,
            UPGRADE_BIGGEST_BOMB_BAG,
            UPGRADE_GIANT_WALLET,
        ];

        // The starting item must not be something that is lost or downgraded.
        let deku_mask: Vec<usize> = downgradable
            .into_iter()
            .chain(TRADE_ITEM_MOON_TEAR..=TRADE_ITEM_MAMA_LETTER)
            .chain(ITEM_BOTTLE_WITCH..=ITEM_BOTTLE_MADAME_AROMA)
            .collect();

        // Keaton Mask and Letter to Mama are received back to back; the first
        // must not be overwritten by the second.
        let keaton_mask = vec![
            UPGRADE_GIANT_WALLET,
            UPGRADE_GILDED_SWORD,
            UPGRADE_MIRROR_SHIELD,
            UPGRADE_BIGGEST_QUIVER,
            UPGRADE_BIG_BOMB_BAG,
            UPGRADE_BIGGEST_BOMB_BAG,
            TRADE_ITEM_MOON_TEAR,
            TRADE_ITEM_LAND_DEED,
            TRADE_ITEM_SWAMP_DEED,
            TRADE_ITEM_MOUNTAIN_DEED,
            TRADE_ITEM_OCEAN_DEED,
            TRADE_ITEM_ROOM_KEY,
            TRADE_ITEM_MAMA_LETTER,
            TRADE_ITEM_KAFEI_LETTER,
            TRADE_ITEM_PENDANT,
        ];

        ExclusionTables {
            forbidden_replaced_by: HashMap::from([(MASK_DEKU, deku_mask), (MASK_KEATON, keaton_mask)]),
            forbidden_placed_at: HashMap::new(),
        }
    }

    /// Whether the tables allow `item` at `location`.
    pub fn allows(&self, item: usize, location: usize) -> bool {
        let placed_at = self
            .forbidden_placed_at
            .get(&item)
            .map_or(false, |locations| locations.contains(&location));
        let replaced_by = self
            .forbidden_replaced_by
            .get(&location)
            .map_or(false, |items| items.contains(&item));
        !placed_at && !replaced_by
    }
}

pub struct ItemPlacer {
    graph: ItemGraph,
    rng: StdRng,
    exclusions: ExclusionTables,
}

impl ItemPlacer {
    pub fn new(graph: ItemGraph, rng: StdRng) -> Self {
        ItemPlacer::with_exclusions(graph, rng, ExclusionTables::standard())
    }

    pub fn with_exclusions(graph: ItemGraph, rng: StdRng, exclusions: ExclusionTables) -> Self {
        ItemPlacer {
            graph,
            rng,
            exclusions,
        }
    }

    pub fn graph(&self) -> &ItemGraph {
        &self.graph
    }

    pub fn into_graph(self) -> ItemGraph {
        self.graph
    }

    /// Validates `current` at `target` and, when it fits, tightens the graph
    /// so later placements cannot undo the guarantee.
    pub fn check_match(&mut self, current: usize, target: usize) -> bool {
        if self
            .exclusions
            .forbidden_placed_at
            .get(&current)
            .map_or(false, |locations| locations.contains(&target))
        {
            debug!("{current} forbidden from being placed at {target}");
            return false;
        }

        if self
            .exclusions
            .forbidden_replaced_by
            .get(&target)
            .map_or(false, |items| items.contains(&current))
        {
            debug!("{target} forbids being replaced by {current}");
            return false;
        }

        if is_temporary_item(current) && is_moon_item(target) {
            debug!("{current} cannot be placed on the moon");
            return false;
        }

        let (dependence, removes) = resolver::check_dependence(&self.graph, current, target);
        if dependence.is_dependent() {
            return false;
        }

        remove_conditionals(&mut self.graph, current, &removes);
        check_conditionals(&mut self.graph, current, target, &[target]);
        true
    }

    /// Places `item` at a random location from `pool` that passes
    /// `check_match`, removing that location from the pool.
    pub fn place_item(&mut self, item: usize, pool: &mut Vec<usize>) -> Result<()> {
        if self.graph.items[item].replaces_another_item() {
            return Ok(());
        }

        let mut available = pool.clone();

        while !available.is_empty() {
            let index = match available.iter().position(|&location| location == 0) {
                // Only songs and earlier items may become the starting item.
                Some(start) if item > SONG_OATH => {
                    if available.len() == 1 {
                        break;
                    }
                    let drawn = self.rng.gen_range(0..available.len() - 1);
                    if drawn >= start {
                        drawn + 1
                    } else {
                        drawn
                    }
                }
                _ => self.rng.gen_range(0..available.len()),
            };
            let location = available[index];

            debug!(
                "attempting to place {} at {}",
                item_name(item),
                item_name(location)
            );

            if self.check_match(item, location) {
                self.graph.items[item].replaces_item_id = Some(location);
                pool.retain(|&l| l != location);
                debug!("placed {} at {}", item_name(item), item_name(location));
                return Ok(());
            }

            debug!(
                "failed to place {} at {}",
                item_name(item),
                item_name(location)
            );
            available.remove(index);
        }

        Err(RandomiserError::PlacementImpossible {
            item,
            name: item_name(item).to_string(),
        })
    }

    fn place_range(&mut self, items: RangeInclusive<usize>, pool: &mut Vec<usize>) -> Result<()> {
        for item in items {
            self.place_item(item, pool)?;
        }
        Ok(())
    }

    fn keep_vanilla(&mut self, items: impl IntoIterator<Item = usize>) {
        for item in items {
            if let Some(record) = self.graph.items.get_mut(item) {
                record.replaces_item_id = Some(item);
            }
        }
    }

    /// Shuffles a closed category among its own locations.
    fn shuffle_within(&mut self, items: RangeInclusive<usize>) -> Result<()> {
        let mut pool: Vec<usize> = items
            .clone()
            .filter(|&id| !self.graph.items[id].replaces_another_item())
            .collect();
        self.place_range(items, &mut pool)
    }

    fn keep_shop_items_vanilla(&mut self) {
        self.keep_vanilla(SHOP_ITEM_TRADING_POST_RED_POTION..=SHOP_ITEM_ZORA_RED_POTION);
        // Also sold in shops.
        self.keep_vanilla([ITEM_BOMB_BAG, UPGRADE_BIG_BOMB_BAG, MASK_ALL_NIGHT]);
    }

    /// Fixes the categories that are not part of the main pool.
    pub fn setup(&mut self, settings: &RandomiserSettings) -> Result<()> {
        if settings.exclude_song_of_soaring {
            self.keep_vanilla([SONG_SOARING]);
        }

        if !settings.add_songs {
            self.shuffle_within(SONG_SOARING..=SONG_OATH)?;
        }

        if !settings.add_dungeon_items {
            self.keep_vanilla(ITEM_WOODFALL_MAP..=ITEM_STONE_TOWER_KEY_4);
        }

        if !settings.add_shop_items {
            self.keep_shop_items_vanilla();
        }

        if !settings.add_other {
            self.keep_vanilla(CHEST_LENS_CAVE_RED_RUPEE..=CHEST_TO_GORON_RACE_GROTTO);
        }

        if settings.randomize_bottle_catch_contents {
            self.shuffle_within(BOTTLE_CATCH_FAIRY..=BOTTLE_CATCH_MUSHROOM)?;
        } else {
            self.keep_vanilla(BOTTLE_CATCH_FAIRY..=BOTTLE_CATCH_MUSHROOM);
        }

        if !settings.add_moon_items {
            self.keep_vanilla(HEART_PIECE_DEKU_TRIAL..=MASK_FIERCE_DEITY);
        }

        Ok(())
    }

    /// Everything stays vanilla except the listed compact ids. Bottle-catch
    /// contents are always shuffled among themselves.
    pub fn setup_custom_items(&mut self, settings: &RandomiserSettings) -> Result<()> {
        let placeable: Vec<usize> = (0..self.graph.len()).filter(|&id| is_placeable(id)).collect();
        self.keep_vanilla(placeable);

        for &compact in &settings.custom_item_list {
            match from_compact_id(compact).and_then(|id| self.graph.items.get_mut(id)) {
                Some(record) => record.replaces_item_id = None,
                None => debug!("ignoring unknown custom item {compact}"),
            }
        }

        self.shuffle_within(BOTTLE_CATCH_FAIRY..=BOTTLE_CATCH_MUSHROOM)?;

        if !settings.add_songs {
            self.shuffle_within(SONG_SOARING..=SONG_OATH)?;
        }
        Ok(())
    }

    /// Locations whose vanilla item still needs a home.
    pub fn unplaced_locations(&self) -> Vec<usize> {
        (0..self.graph.len())
            .filter(|&id| is_placeable(id) && !self.graph.items[id].replaces_another_item())
            .collect()
    }

    /// Fills the starting slot with a random early item when nothing has
    /// been placed there yet.
    pub fn place_free_item(&mut self, pool: &mut Vec<usize>) -> Result<()> {
        if self.graph.item_at(MASK_DEKU).is_some() || !pool.contains(&MASK_DEKU) {
            return Ok(());
        }

        let mut candidates: Vec<usize> = (0..=SONG_OATH)
            .filter(|&id| {
                !self.graph.items[id].replaces_another_item() && self.exclusions.allows(id, MASK_DEKU)
            })
            .collect();

        while !candidates.is_empty() {
            let item = candidates.swap_remove(self.rng.gen_range(0..candidates.len()));
            if self.check_match(item, MASK_DEKU) {
                self.graph.items[item].replaces_item_id = Some(MASK_DEKU);
                pool.retain(|&l| l != MASK_DEKU);
                debug!("starting item is {}", item_name(item));
                return Ok(());
            }
        }

        Err(RandomiserError::PlacementImpossible {
            item: MASK_DEKU,
            name: "starting item".to_string(),
        })
    }

    /// Full item shuffle: pool setup followed by every category in order.
    pub fn randomize_items(&mut self, settings: &RandomiserSettings) -> Result<()> {
        if settings.use_custom_item_list {
            self.setup_custom_items(settings)?;
        } else {
            self.setup(settings)?;
        }

        let mut pool = self.unplaced_locations();
        debug!("item pool has {} locations", pool.len());

        self.place_range(TRADE_ITEM_ROOM_KEY..=TRADE_ITEM_MAMA_LETTER, &mut pool)?;
        self.place_range(TRADE_ITEM_MOON_TEAR..=TRADE_ITEM_OCEAN_DEED, &mut pool)?;
        self.place_range(ITEM_WOODFALL_MAP..=ITEM_STONE_TOWER_KEY_4, &mut pool)?;
        self.place_free_item(&mut pool)?;
        self.place_range(UPGRADE_RAZOR_SWORD..=UPGRADE_GIANT_WALLET, &mut pool)?;
        self.place_range(SONG_SOARING..=SONG_OATH, &mut pool)?;
        self.place_range(MASK_POSTMAN_HAT..=MASK_ZORA, &mut pool)?;
        self.place_range(MASK_DEKU..=ITEM_NOTEBOOK, &mut pool)?;
        self.place_range(SHOP_ITEM_TRADING_POST_RED_POTION..=SHOP_ITEM_ZORA_RED_POTION, &mut pool)?;
        self.place_range(HEART_PIECE_DEKU_TRIAL..=MASK_FIERCE_DEITY, &mut pool)?;
        self.place_range(HEART_PIECE_NOTEBOOK_MAYOR..=HEART_PIECE_KNUCKLE, &mut pool)?;
        self.place_item(HEART_PIECE_BANK, &mut pool)?;
        self.place_range(HEART_PIECE_SOUTH_CLOCK_TOWN..=HEART_CONTAINER_STONE_TOWER, &mut pool)?;
        self.place_range(CHEST_LENS_CAVE_RED_RUPEE..=CHEST_SOUTH_CLOCK_TOWN_PURPLE_RUPEE, &mut pool)?;
        self.place_item(CHEST_TO_GORON_RACE_GROTTO, &mut pool)?;
        self.place_range(ITEM_TINGLE_MAP_TOWN..=ITEM_TINGLE_MAP_STONE_TOWER, &mut pool)?;

        debug!("{} locations left unused", pool.len());
        Ok(())
    }
}
