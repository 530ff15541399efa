use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env};
use std::path::PathBuf;

use termina_core::{migrate_logic_file, run, LogicMode, RandomiserSettings};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Logic {
    Casual,
    Glitched,
    User,
    NoLogic,
    Vanilla,
}

impl From<Logic> for LogicMode {
    fn from(logic: Logic) -> Self {
        match logic {
            Logic::Casual => LogicMode::Casual,
            Logic::Glitched => LogicMode::Glitched,
            Logic::User => LogicMode::UserLogic,
            Logic::NoLogic => LogicMode::NoLogic,
            Logic::Vanilla => LogicMode::Vanilla,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "termina-randomiser", version, about = "Majora's Mask item randomiser")]
struct Args {
    /// JSON settings file; flags given on the command line win over it.
    #[arg(long, value_name = "JSON")]
    settings: Option<PathBuf>,

    #[arg(long, required_unless_present_any = ["settings", "migrate_logic"])]
    input: Option<PathBuf>,

    #[arg(long, required_unless_present_any = ["settings", "migrate_logic"])]
    output: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum)]
    logic: Option<Logic>,

    /// Logic file used with `--logic user`.
    #[arg(long, value_name = "FILE")]
    user_logic: Option<PathBuf>,

    /// Comma separated compact item ids to shuffle; everything else stays vanilla.
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    custom_items: Option<Vec<usize>>,

    #[arg(long)]
    add_songs: bool,

    #[arg(long)]
    add_dungeon_items: bool,

    #[arg(long)]
    add_shop_items: bool,

    #[arg(long)]
    add_other: bool,

    #[arg(long)]
    add_moon_items: bool,

    #[arg(long)]
    randomize_bottle_catch_contents: bool,

    #[arg(long)]
    exclude_song_of_soaring: bool,

    #[arg(long)]
    gossip_hints: bool,

    #[arg(long)]
    randomize_dungeon_entrances: bool,

    /// Never leave a dungeon entrance leading to its own dungeon.
    #[arg(long)]
    no_entrance_self_mapping: bool,

    #[arg(long)]
    randomize_bgm: bool,

    #[arg(long)]
    debug: bool,

    /// Upgrade a logic file to the current format in place and exit.
    #[arg(long, value_name = "FILE")]
    migrate_logic: Option<PathBuf>,
}

fn load_settings(args: &Args) -> Result<RandomiserSettings, String> {
    let mut settings = match &args.settings {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
            serde_json::from_str(&text)
                .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?
        }
        None => RandomiserSettings::default(),
    };

    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(input) = &args.input {
        settings.input_path = input.clone();
    }
    if let Some(output) = &args.output {
        settings.output_path = output.clone();
    }
    if let Some(logic) = args.logic {
        settings.logic_mode = logic.into();
    }
    if let Some(path) = &args.user_logic {
        settings.user_logic_path = Some(path.clone());
    }
    if let Some(ids) = &args.custom_items {
        settings.use_custom_item_list = true;
        settings.custom_item_list = ids.clone();
    }

    settings.add_songs |= args.add_songs;
    settings.add_dungeon_items |= args.add_dungeon_items;
    settings.add_shop_items |= args.add_shop_items;
    settings.add_other |= args.add_other;
    settings.add_moon_items |= args.add_moon_items;
    settings.randomize_bottle_catch_contents |= args.randomize_bottle_catch_contents;
    settings.exclude_song_of_soaring |= args.exclude_song_of_soaring;
    settings.enable_gossip_hints |= args.gossip_hints;
    settings.randomize_dungeon_entrances |= args.randomize_dungeon_entrances;
    if args.no_entrance_self_mapping {
        settings.allow_entrance_self_mapping = false;
    }
    settings.randomize_bgm |= args.randomize_bgm;
    settings.debug |= args.debug;

    Ok(settings)
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Some(path) = args.migrate_logic.as_ref() {
        if let Err(err) = migrate_logic_file(path) {
            eprintln!("Failed to migrate {:?}: {err}", path);
            std::process::exit(1);
        }
        return;
    }

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(settings) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
