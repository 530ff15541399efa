use assert_matches::assert_matches;
use rand::rngs::StdRng;
use rand::SeedableRng;

use termina_core::items::*;
use termina_core::logic::ItemGraph;
use termina_core::placer::{ExclusionTables, ItemPlacer};
use termina_core::{
    randomize, run, LogProgress, LogicMode, RandomiserError, RandomiserSettings, Resources,
};

const SEQUENCES: &str = "mm-termina-field\n0,2\n3\n2\n\
mm-clock-town\n0\n4\n18\n\
mm-boss\n8,10\n5\n1B\n\
mmr-f-sot\n0\n6\n\
custom-battle\n8,10\n7\n\
custom-field\n2\n8\n";

/// Item -> location pairs of a hand-made placement.
const PUZZLE: &[(usize, usize)] = &[
    (ITEM_ICE_ARROW, MASK_COUPLE),
    (ITEM_NOTEBOOK, MASK_CIRCUS_LEADER),
    (TRADE_ITEM_KAFEI_LETTER, MASK_BUNNY_HOOD),
    (HEART_PIECE_NOTEBOOK_HAND, MASK_DEKU),
    (MASK_BUNNY_HOOD, ITEM_BOTTLE_MADAME_AROMA),
    (MASK_CIRCUS_LEADER, MASK_BREMEN),
    (MASK_TRUTH, MASK_BLAST),
    (MASK_KAMARO, MASK_CAPTAIN_HAT),
];

fn settings(seed: u64) -> RandomiserSettings {
    RandomiserSettings {
        seed,
        logic_mode: LogicMode::NoLogic,
        add_songs: true,
        add_shop_items: true,
        add_other: true,
        randomize_dungeon_entrances: true,
        randomize_bgm: true,
        ..RandomiserSettings::default()
    }
}

fn resources() -> Resources {
    Resources {
        sequences: Some(SEQUENCES.to_string()),
        ..Resources::default()
    }
}

#[test]
fn same_seed_same_result() {
    let a = randomize(&settings(77), &resources(), &mut LogProgress).unwrap();
    let b = randomize(&settings(77), &resources(), &mut LogProgress).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );

    let c = randomize(&settings(78), &resources(), &mut LogProgress).unwrap();
    assert_ne!(a.item_placements, c.item_placements);
}

#[test]
fn toggling_music_leaves_items_alone() {
    let with_music = randomize(&settings(5), &resources(), &mut LogProgress).unwrap();
    let without = RandomiserSettings {
        randomize_bgm: false,
        ..settings(5)
    };
    let without = randomize(&without, &resources(), &mut LogProgress).unwrap();

    assert_eq!(with_music.item_placements, without.item_placements);
    assert_eq!(with_music.entrances, without.entrances);
    assert!(without.sequences.is_empty());
}

#[test]
fn every_item_gets_exactly_one_location() {
    for seed in 0..4 {
        let result = randomize(&settings(seed), &resources(), &mut LogProgress).unwrap();
        assert_eq!(result.item_placements.len(), placeable_item_count());

        let mut locations: Vec<usize> = result.item_placements.iter().map(|&(_, l)| l).collect();
        locations.sort_unstable();
        locations.dedup();
        assert_eq!(locations.len(), placeable_item_count(), "seed {seed}");
        assert!(locations.iter().all(|&l| !is_fake_item(l)));
    }
}

#[test]
fn placements_respect_exclusions() {
    let tables = ExclusionTables::standard();
    for seed in 0..4 {
        let result = randomize(&settings(seed), &resources(), &mut LogProgress).unwrap();
        for &(item, location) in &result.item_placements {
            assert!(
                tables.allows(item, location),
                "seed {seed}: {} at {}",
                item_name(item),
                item_name(location)
            );
            if is_temporary_item(item) {
                assert!(!is_moon_item(location));
            }
        }

        let start = result
            .item_placements
            .iter()
            .find(|&&(_, location)| location == MASK_DEKU)
            .map(|&(item, _)| item);
        assert!(start.map_or(false, |item| item <= SONG_OATH));
    }
}

#[test]
fn time_windows_steer_placement() {
    for seed in 0..10 {
        let mut graph = ItemGraph::without_logic(TOTAL_NUMBER_OF_ITEMS);
        graph.items[TRADE_ITEM_ROOM_KEY].time_needed = 0b000011;
        graph.items[4].time_available = 0b110000;
        graph.items[5].time_available = 0b001100;

        let mut placer = ItemPlacer::new(graph, StdRng::seed_from_u64(seed));
        let mut pool = vec![4, 5, 6];
        placer.place_item(TRADE_ITEM_ROOM_KEY, &mut pool).unwrap();

        assert_eq!(placer.graph().items[TRADE_ITEM_ROOM_KEY].replaces_item_id, Some(6));
        assert_eq!(pool, vec![4, 5]);
    }
}

#[test]
fn items_never_land_behind_themselves() {
    for seed in 0..10 {
        let mut graph = ItemGraph::without_logic(TOTAL_NUMBER_OF_ITEMS);
        // Location 5 needs the item directly, location 6 through item 7.
        graph.items[5].depends_on_items = vec![7];
        graph.items[7].depends_on_items = vec![ITEM_HOOKSHOT];
        graph.items[7].replaces_item_id = Some(7);
        graph.items[6].depends_on_items = vec![ITEM_HOOKSHOT];

        let mut placer = ItemPlacer::new(graph, StdRng::seed_from_u64(seed));
        let mut pool = vec![5, 6, 8];
        placer.place_item(ITEM_HOOKSHOT, &mut pool).unwrap();

        assert_eq!(placer.graph().items[ITEM_HOOKSHOT].replaces_item_id, Some(8));
    }
}

/// Dependencies for the hand-made layout: Bremen Mask needs the Notebook,
/// Circus Leader's Mask needs Bunny Hood, Madame Aroma's bottle and Captain's
/// Hat need the Hookshot.
fn puzzle_graph() -> ItemGraph {
    let mut graph = ItemGraph::without_logic(TOTAL_NUMBER_OF_ITEMS);
    graph.items[MASK_BREMEN].depends_on_items = vec![ITEM_NOTEBOOK];
    graph.items[MASK_CIRCUS_LEADER].depends_on_items = vec![MASK_BUNNY_HOOD];
    graph.items[ITEM_BOTTLE_MADAME_AROMA].depends_on_items = vec![ITEM_HOOKSHOT];
    graph.items[MASK_CAPTAIN_HAT].depends_on_items = vec![ITEM_HOOKSHOT];
    graph
}

#[test]
fn puzzle_layout_is_accepted_as_is() {
    let mut placer = ItemPlacer::new(puzzle_graph(), StdRng::seed_from_u64(0));
    for &(item, location) in PUZZLE {
        let mut pool = vec![location];
        assert_matches!(
            placer.place_item(item, &mut pool),
            Ok(()),
            "{} at {}",
            item_name(item),
            item_name(location)
        );
        assert!(pool.is_empty());
    }

    // Bremen Mask -> Notebook at Circus Leader -> Bunny Hood at Madame
    // Aroma -> Hookshot.
    assert!(!placer.check_match(ITEM_HOOKSHOT, MASK_BREMEN));
    assert!(!placer.check_match(MASK_BUNNY_HOOD, MASK_CIRCUS_LEADER));
    assert!(!placer.check_match(UPGRADE_GILDED_SWORD, MASK_DEKU));
    assert!(placer.check_match(ITEM_HOOKSHOT, 5));

    assert_eq!(
        placer.graph().placements(),
        vec![
            (3, 81),
            (18, 79),
            (34, 75),
            (40, 0),
            (75, 17),
            (79, 74),
            (82, 70),
            (83, 86),
        ]
    );
}

#[test]
fn entrance_shuffle_is_seeded() {
    let strict = RandomiserSettings {
        allow_entrance_self_mapping: false,
        ..settings(12)
    };
    let a = randomize(&strict, &resources(), &mut LogProgress).unwrap();
    let b = randomize(&strict, &resources(), &mut LogProgress).unwrap();
    let a = a.entrances.unwrap();
    assert_eq!(Some(&a), b.entrances.as_ref());
    assert!(a
        .destination_indices
        .iter()
        .enumerate()
        .all(|(slot, &d)| slot != d));
}

#[test]
fn entrances_may_keep_their_dungeon_by_default() {
    let kept = (0..20)
        .filter_map(|seed| {
            randomize(&settings(seed), &resources(), &mut LogProgress)
                .unwrap()
                .entrances
        })
        .filter(|shuffle| {
            shuffle
                .destination_indices
                .iter()
                .enumerate()
                .any(|(slot, &d)| slot == d)
        })
        .count();
    assert!(kept > 0);
}

#[test]
fn default_pool_leaves_other_items_home() {
    let plain = RandomiserSettings {
        seed: 1,
        logic_mode: LogicMode::NoLogic,
        ..RandomiserSettings::default()
    };
    let result = randomize(&plain, &Resources::default(), &mut LogProgress).unwrap();
    for id in CHEST_LENS_CAVE_RED_RUPEE..=CHEST_TO_GORON_RACE_GROTTO {
        assert!(
            result.item_placements.contains(&(id, id)),
            "{} moved",
            item_name(id)
        );
    }
    assert!(result.item_placements.contains(&(HEART_PIECE_BANK, HEART_PIECE_BANK)));
    assert!(result.item_placements.contains(&(ITEM_TINGLE_MAP_TOWN, ITEM_TINGLE_MAP_TOWN)));
}

#[test]
fn run_writes_result_and_spoiler() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    std::fs::write(input.path().join("SEQS.txt"), SEQUENCES).unwrap();

    let debug = RandomiserSettings {
        debug: true,
        input_path: input.path().to_path_buf(),
        output_path: output.path().join("out"),
        ..settings(31)
    };
    run(debug).unwrap();

    let root = output.path().join("out").join("Termina_31");
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(root.join("randomized.json")).unwrap())
            .unwrap();
    assert_eq!(json["seed"], 31);
    assert_eq!(
        json["item_placements"].as_array().map(Vec::len),
        Some(placeable_item_count())
    );

    let spoiler = std::fs::read_to_string(root.join("spoiler_log.txt")).unwrap();
    assert!(spoiler.starts_with("Termina randomiser spoiler log\nSeed: 31\n"));
    assert!(spoiler.contains("Entrances:"));
    assert!(spoiler.contains("Music:"));
}

#[test]
fn run_reports_missing_resources() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let casual = RandomiserSettings {
        logic_mode: LogicMode::Casual,
        input_path: input.path().to_path_buf(),
        output_path: output.path().to_path_buf(),
        ..RandomiserSettings::default()
    };
    assert_matches!(run(casual), Err(RandomiserError::Config(msg)) if msg.contains("REQ_CASUAL"));

    let missing_input = RandomiserSettings {
        input_path: input.path().join("missing"),
        output_path: output.path().to_path_buf(),
        ..settings(1)
    };
    assert_matches!(run(missing_input), Err(RandomiserError::Config(_)));
}
