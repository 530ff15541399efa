use log::info;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod bgm;
pub mod conditionals;
pub mod entrances;
pub mod gossip;
pub mod items;
pub mod logic;
pub mod migrator;
pub mod patch;
pub mod placer;
pub mod resolver;
pub mod spoiler;

use bgm::{assign_sequences, parse_sequences, SequenceError, SequenceInfo};
use entrances::{shuffle_entrances, EntranceShuffle, EntranceTables};
use gossip::{make_gossip_quotes, parse_gossip_table};
use items::{from_compact_id, is_shop_item, TOTAL_NUMBER_OF_ITEMS};
use logic::{ItemGraph, ItemLogic, LogicError};
use placer::ItemPlacer;

const ENTRANCE_SALT: u64 = 0xE17A_2CE5_u64;
const ITEM_SALT: u64 = 0x1735_0F7E_u64;
const GOSSIP_SALT: u64 = 0x6055_1B00_u64;
const MUSIC_SALT: u64 = 0xB6_0B6D_u64;

/// Which ruleset constrains the item shuffle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicMode {
    #[default]
    Casual,
    Glitched,
    UserLogic,
    NoLogic,
    Vanilla,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomiserSettings {
    pub seed: u64,
    pub logic_mode: LogicMode,
    pub user_logic_path: Option<PathBuf>,
    pub use_custom_item_list: bool,
    /// Compact ids of the items to shuffle when `use_custom_item_list` is set.
    pub custom_item_list: Vec<usize>,
    pub add_songs: bool,
    pub add_dungeon_items: bool,
    pub add_shop_items: bool,
    pub add_other: bool,
    pub add_moon_items: bool,
    pub randomize_bottle_catch_contents: bool,
    pub exclude_song_of_soaring: bool,
    pub enable_gossip_hints: bool,
    pub randomize_dungeon_entrances: bool,
    pub allow_entrance_self_mapping: bool,
    pub randomize_bgm: bool,
    pub debug: bool,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for RandomiserSettings {
    fn default() -> Self {
        RandomiserSettings {
            seed: 0,
            logic_mode: LogicMode::default(),
            user_logic_path: None,
            use_custom_item_list: false,
            custom_item_list: Vec::new(),
            add_songs: false,
            add_dungeon_items: false,
            add_shop_items: false,
            add_other: false,
            add_moon_items: false,
            randomize_bottle_catch_contents: false,
            exclude_song_of_soaring: false,
            enable_gossip_hints: false,
            randomize_dungeon_entrances: false,
            allow_entrance_self_mapping: true,
            randomize_bgm: false,
            debug: false,
            input_path: PathBuf::new(),
            output_path: PathBuf::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RandomiserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("logic error: {0}")]
    Logic(#[from] LogicError),
    #[error("sequence table error: {0}")]
    Sequence(#[from] SequenceError),
    #[error("unable to place {name} anywhere")]
    PlacementImpossible { item: usize, name: String },
    #[error("randomisation cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, RandomiserError>;

fn join_candidate(base: &Path, candidate: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    for part in candidate.split(['/', '\\']) {
        if !part.is_empty() {
            path.push(part);
        }
    }
    path
}

fn find_first_existing(base: &Path, candidates: &[&str]) -> Option<PathBuf> {
    for candidate in candidates {
        let path = join_candidate(base, candidate);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

fn read_resource(base: &Path, candidates: &[&str], what: &str) -> Result<String> {
    let path = find_first_existing(base, candidates).ok_or_else(|| {
        RandomiserError::Config(format!("Could not find {what} under input path"))
    })?;
    info!("reading {}", path.display());
    Ok(fs::read_to_string(path)?)
}

/// Text inputs of a pass, already read from disk.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    pub logic: Option<String>,
    pub gossip: Option<String>,
    pub sequences: Option<String>,
}

impl Resources {
    /// Reads only what the settings will use.
    pub fn load(settings: &RandomiserSettings) -> Result<Self> {
        let base = &settings.input_path;

        let logic = match settings.logic_mode {
            LogicMode::Casual => Some(read_resource(
                base,
                &["REQ_CASUAL.txt", "Resources/REQ_CASUAL.txt"],
                "REQ_CASUAL.txt",
            )?),
            LogicMode::Glitched => Some(read_resource(
                base,
                &["REQ_GLITCH.txt", "Resources/REQ_GLITCH.txt"],
                "REQ_GLITCH.txt",
            )?),
            LogicMode::UserLogic => {
                let path = settings.user_logic_path.as_ref().ok_or_else(|| {
                    RandomiserError::Config("user logic selected but no logic file given".to_string())
                })?;
                Some(fs::read_to_string(path)?)
            }
            LogicMode::NoLogic | LogicMode::Vanilla => None,
        };

        let gossip = if hints_enabled(settings) {
            Some(read_resource(
                base,
                &["GOSSIP.txt", "Resources/GOSSIP.txt"],
                "GOSSIP.txt",
            )?)
        } else {
            None
        };

        let sequences = if settings.randomize_bgm {
            Some(read_resource(
                base,
                &["SEQS.txt", "Resources/SEQS.txt", "music/SEQS.txt"],
                "SEQS.txt",
            )?)
        } else {
            None
        };

        Ok(Resources {
            logic,
            gossip,
            sequences,
        })
    }
}

/// Receives phase updates and may stop a pass between phases.
pub trait Progress {
    fn report(&mut self, percent: u8, message: &str);

    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Reports phases through the log.
pub struct LogProgress;

impl Progress for LogProgress {
    fn report(&mut self, percent: u8, message: &str) {
        info!("[{percent:>3}%] {message}");
    }
}

fn begin_phase<P: Progress + ?Sized>(progress: &mut P, percent: u8, message: &str) -> Result<()> {
    if progress.is_cancelled() {
        return Err(RandomiserError::Cancelled);
    }
    progress.report(percent, message);
    Ok(())
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RandomizedResult {
    pub seed: u64,
    /// `(item, location)` for every placed item.
    pub item_placements: Vec<(usize, usize)>,
    /// Logic graph as it stood before items were placed.
    pub logic: Vec<ItemLogic>,
    pub entrances: Option<EntranceShuffle>,
    pub sequences: Vec<SequenceInfo>,
    pub gossip_quotes: Vec<String>,
}

fn load_graph(settings: &RandomiserSettings, resources: &Resources) -> Result<ItemGraph> {
    if settings.logic_mode == LogicMode::NoLogic {
        return Ok(ItemGraph::without_logic(TOTAL_NUMBER_OF_ITEMS));
    }

    let text = resources.logic.as_deref().ok_or_else(|| {
        RandomiserError::Config(format!("no logic loaded for {:?}", settings.logic_mode))
    })?;
    let graph = ItemGraph::from_logic_text(text)?;
    if graph.len() < TOTAL_NUMBER_OF_ITEMS {
        return Err(RandomiserError::Config(format!(
            "logic has {} item records, expected {}",
            graph.len(),
            TOTAL_NUMBER_OF_ITEMS
        )));
    }
    Ok(graph)
}

/// Hints describe shuffled items, so a vanilla pass has none.
fn hints_enabled(settings: &RandomiserSettings) -> bool {
    settings.enable_gossip_hints && settings.logic_mode != LogicMode::Vanilla
}

/// Settings as the hint phase sees them: with a custom list, shop items
/// count as shuffled when any of them is listed.
fn effective_settings(settings: &RandomiserSettings) -> RandomiserSettings {
    let mut effective = settings.clone();
    if settings.use_custom_item_list {
        effective.add_shop_items = settings
            .custom_item_list
            .iter()
            .filter_map(|&compact| from_compact_id(compact))
            .any(is_shop_item);
    }
    effective
}

/// Runs every enabled phase in order. Each phase draws from its own RNG so
/// that toggling one never changes the outcome of another.
pub fn randomize<P: Progress + ?Sized>(
    settings: &RandomiserSettings,
    resources: &Resources,
    progress: &mut P,
) -> Result<RandomizedResult> {
    let mut result = RandomizedResult {
        seed: settings.seed,
        ..RandomizedResult::default()
    };
    let settings = effective_settings(settings);
    let mut graph = ItemGraph::default();

    if settings.logic_mode != LogicMode::Vanilla {
        begin_phase(progress, 5, "Preparing ruleset...")?;
        graph = load_graph(&settings, resources)?;

        if settings.randomize_dungeon_entrances {
            begin_phase(progress, 10, "Shuffling entrances...")?;
            let mut rng = StdRng::seed_from_u64(settings.seed ^ ENTRANCE_SALT);
            result.entrances = Some(shuffle_entrances(
                &mut graph,
                &mut rng,
                settings.allow_entrance_self_mapping,
                &EntranceTables::default(),
            ));
        }

        result.logic = graph.snapshot();

        begin_phase(progress, 30, "Shuffling items...")?;
        let rng = StdRng::seed_from_u64(settings.seed ^ ITEM_SALT);
        let mut placer = ItemPlacer::new(graph, rng);
        placer.randomize_items(&settings)?;
        graph = placer.into_graph();
        result.item_placements = graph.placements();
        info!("placed {} items", result.item_placements.len());
    }

    if hints_enabled(&settings) {
        begin_phase(progress, 35, "Making gossip quotes...")?;
        let text = resources.gossip.as_deref().ok_or_else(|| {
            RandomiserError::Config("gossip hints enabled but no gossip table loaded".to_string())
        })?;
        let table = parse_gossip_table(text)?;
        let mut rng = StdRng::seed_from_u64(settings.seed ^ GOSSIP_SALT);
        result.gossip_quotes = make_gossip_quotes(&graph, &table, &settings, &mut rng)?;
    }

    if settings.randomize_bgm {
        begin_phase(progress, 45, "Randomizing music...")?;
        let text = resources.sequences.as_deref().ok_or_else(|| {
            RandomiserError::Config("music shuffle enabled but no sequence table loaded".to_string())
        })?;
        let table = parse_sequences(text)?;
        let mut rng = StdRng::seed_from_u64(settings.seed ^ MUSIC_SALT);
        result.sequences = assign_sequences(table, &mut rng)?;
    }

    Ok(result)
}

/// Upgrades a logic file in place to the current format.
pub fn migrate_logic_file(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)?;
    let migrated = migrator::apply_migrations(&text)?;
    fs::write(path, migrated)?;
    info!("migrated {}", path.display());
    Ok(())
}

pub fn run(settings: RandomiserSettings) -> Result<()> {
    if !settings.input_path.exists() {
        return Err(RandomiserError::Config(format!(
            "Input path does not exist: {}",
            settings.input_path.display()
        )));
    }

    if !settings.output_path.exists() {
        fs::create_dir_all(&settings.output_path)?;
    }

    let out_root = settings
        .output_path
        .join(format!("Termina_{}", settings.seed));
    if !out_root.exists() {
        fs::create_dir_all(&out_root)?;
    }

    let resources = Resources::load(&settings)?;
    let result = randomize(&settings, &resources, &mut LogProgress)?;

    fs::write(
        out_root.join("randomized.json"),
        serde_json::to_string_pretty(&result)?,
    )?;

    if settings.debug {
        let log_path = out_root.join("spoiler_log.txt");
        fs::write(log_path, spoiler::build_spoiler_log(&result))?;
    }

    info!("wrote seed {} to {}", settings.seed, out_root.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use items::{to_compact_id, ITEM_HOOKSHOT, SHOP_ITEM_TRADING_POST_RED_POTION};

    fn no_logic(seed: u64) -> RandomiserSettings {
        RandomiserSettings {
            seed,
            logic_mode: LogicMode::NoLogic,
            ..RandomiserSettings::default()
        }
    }

    struct CancelAfter {
        phases_left: usize,
        seen: Vec<u8>,
    }

    impl Progress for CancelAfter {
        fn report(&mut self, percent: u8, _message: &str) {
            self.seen.push(percent);
            self.phases_left = self.phases_left.saturating_sub(1);
        }

        fn is_cancelled(&self) -> bool {
            self.phases_left == 0
        }
    }

    #[test]
    fn partial_settings_json_loads() {
        let settings: RandomiserSettings =
            serde_json::from_str(r#"{ "seed": 9, "logic_mode": "NoLogic", "add_songs": true }"#)
                .unwrap();
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.logic_mode, LogicMode::NoLogic);
        assert!(settings.add_songs);
        assert!(!settings.randomize_bgm);
        assert!(settings.allow_entrance_self_mapping);

        let strict: RandomiserSettings =
            serde_json::from_str(r#"{ "allow_entrance_self_mapping": false }"#).unwrap();
        assert!(!strict.allow_entrance_self_mapping);
        assert!(RandomiserSettings::default().allow_entrance_self_mapping);
    }

    #[test]
    fn candidates_are_tried_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Resources")).unwrap();
        fs::write(dir.path().join("Resources").join("SEQS.txt"), "").unwrap();

        let found = find_first_existing(dir.path(), &["SEQS.txt", "Resources\\SEQS.txt"]);
        assert_eq!(found, Some(dir.path().join("Resources").join("SEQS.txt")));
        assert_eq!(find_first_existing(dir.path(), &["GOSSIP.txt"]), None);
    }

    #[test]
    fn vanilla_mode_places_nothing() {
        let settings = RandomiserSettings {
            logic_mode: LogicMode::Vanilla,
            ..RandomiserSettings::default()
        };
        let result = randomize(&settings, &Resources::default(), &mut LogProgress).unwrap();
        assert!(result.item_placements.is_empty());
        assert!(result.logic.is_empty());
    }

    #[test]
    fn vanilla_mode_makes_no_hints() {
        let settings = RandomiserSettings {
            logic_mode: LogicMode::Vanilla,
            enable_gossip_hints: true,
            ..RandomiserSettings::default()
        };
        assert!(Resources::load(&settings).unwrap().gossip.is_none());

        let result = randomize(&settings, &Resources::default(), &mut LogProgress).unwrap();
        assert!(result.gossip_quotes.is_empty());
    }

    #[test]
    fn no_logic_pass_fills_every_location_once() {
        let result = randomize(&no_logic(4), &Resources::default(), &mut LogProgress).unwrap();
        let mut locations: Vec<usize> = result.item_placements.iter().map(|&(_, l)| l).collect();
        let placed = locations.len();
        locations.sort_unstable();
        locations.dedup();
        assert_eq!(locations.len(), placed);
        assert_eq!(result.logic.len(), TOTAL_NUMBER_OF_ITEMS);
    }

    #[test]
    fn short_logic_is_rejected() {
        let resources = Resources {
            logic: Some("-version 3\n- Deku Mask\n\n\n0\n0".to_string()),
            ..Resources::default()
        };
        let settings = RandomiserSettings::default();
        assert_matches!(
            randomize(&settings, &resources, &mut LogProgress),
            Err(RandomiserError::Config(_))
        );
    }

    #[test]
    fn cancellation_stops_between_phases() {
        let settings = RandomiserSettings {
            randomize_dungeon_entrances: true,
            ..no_logic(1)
        };
        let mut progress = CancelAfter {
            phases_left: 2,
            seen: Vec::new(),
        };
        assert_matches!(
            randomize(&settings, &Resources::default(), &mut progress),
            Err(RandomiserError::Cancelled)
        );
        assert_eq!(progress.seen, vec![5, 10]);
    }

    #[test]
    fn custom_list_decides_shop_hints() {
        let mut settings = RandomiserSettings {
            use_custom_item_list: true,
            custom_item_list: vec![to_compact_id(ITEM_HOOKSHOT).unwrap()],
            add_shop_items: true,
            ..RandomiserSettings::default()
        };
        assert!(!effective_settings(&settings).add_shop_items);

        settings
            .custom_item_list
            .push(to_compact_id(SHOP_ITEM_TRADING_POST_RED_POTION).unwrap());
        assert!(effective_settings(&settings).add_shop_items);
    }

    #[test]
    fn hints_require_a_table() {
        let settings = RandomiserSettings {
            enable_gossip_hints: true,
            ..no_logic(2)
        };
        assert_matches!(
            randomize(&settings, &Resources::default(), &mut LogProgress),
            Err(RandomiserError::Config(_))
        );
    }
}
