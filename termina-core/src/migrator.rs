//! Upgrades older logic files to the current format version.
//!
//! Version history:
//! - 0: bare data lines, no header.
//! - 1: `-version` header and a `- Name` comment before every record.
//! - 2: moon trial records inserted after "Arrows"; later ids shift by ten.
//! - 3: Oath to Order requires clearing any one of the four temples.

use itertools::Itertools;

use crate::items::{self, ITEMS};
use crate::logic::{get_version, split_lines, LogicError, CURRENT_LOGIC_VERSION};

/// Records present before the moon items were added.
const LEGACY_ITEM_COUNT: usize = 255;
const MOON_RECORD_COUNT: usize = 10;
const LINES_PER_RECORD: usize = 5;

/// Applies every pending migration and returns the upgraded text with CRLF
/// line endings. Current-version input is returned unchanged apart from
/// line endings.
pub fn apply_migrations(logic: &str) -> Result<String, LogicError> {
    let mut lines = split_lines(logic);
    migrate_lines(&mut lines)?;
    Ok(lines.join("\r\n"))
}

pub fn migrate_lines(lines: &mut Vec<String>) -> Result<(), LogicError> {
    if get_version(lines)? < 0 {
        add_version_number(lines);
    }
    if get_version(lines)? < 1 {
        add_item_names(lines)?;
    }
    if get_version(lines)? < 2 {
        add_moon_items(lines)?;
    }
    if get_version(lines)? < 3 {
        add_requirements_for_song_oath(lines)?;
    }
    debug_assert_eq!(get_version(lines).ok(), Some(CURRENT_LOGIC_VERSION));
    Ok(())
}

fn add_version_number(lines: &mut Vec<String>) {
    lines.insert(0, "-version 0".to_string());
}

fn legacy_item_names() -> impl Iterator<Item = &'static str> {
    ITEMS
        .iter()
        .enumerate()
        .filter(|(id, _)| {
            !(items::OTHER_ONE_MASK..items::OTHER_ONE_MASK + MOON_RECORD_COUNT).contains(id)
        })
        .map(|(_, info)| info.name)
}

fn add_item_names(lines: &mut Vec<String>) -> Result<(), LogicError> {
    if lines.get(1).map(String::as_str) == Some("- Deku Mask") {
        lines[0] = "-version 1".to_string();
        return Ok(());
    }

    lines.retain(|line| !line.starts_with('-'));
    let records = lines.len() / 4;
    if records < LEGACY_ITEM_COUNT {
        return Err(LogicError::TruncatedForMigration {
            found: records,
            expected: LEGACY_ITEM_COUNT,
        });
    }

    for (i, name) in legacy_item_names().enumerate() {
        lines.insert(i * LINES_PER_RECORD, format!("- {name}"));
    }
    lines.insert(0, "-version 1".to_string());
    Ok(())
}

struct NewRecord {
    id: usize,
    depends_on_items: Vec<usize>,
    conditionals: Vec<Vec<usize>>,
}

fn mask_range() -> std::ops::Range<usize> {
    items::MASK_POSTMAN_HAT..items::MASK_POSTMAN_HAT + items::MOON_TRIAL_MASK_COUNT
}

fn any_n_masks(id: usize, n: usize) -> NewRecord {
    NewRecord {
        id,
        depends_on_items: Vec::new(),
        conditionals: mask_range().combinations(n).collect(),
    }
}

fn requires(id: usize, depends_on_items: Vec<usize>) -> NewRecord {
    NewRecord {
        id,
        depends_on_items,
        conditionals: Vec::new(),
    }
}

fn moon_records() -> Vec<NewRecord> {
    use items::*;

    let fierce_deity = [
        AREA_MOON_ACCESS,
        MASK_DEKU,
        MASK_GORON,
        MASK_ZORA,
        OTHER_EXPLOSIVE,
        OTHER_ARROW,
        ITEM_FIRE_ARROW,
        ITEM_HOOKSHOT,
    ]
    .into_iter()
    .chain(mask_range())
    .collect();

    vec![
        any_n_masks(OTHER_ONE_MASK, 1),
        any_n_masks(OTHER_TWO_MASKS, 2),
        any_n_masks(OTHER_THREE_MASKS, 3),
        any_n_masks(OTHER_FOUR_MASKS, 4),
        requires(
            AREA_MOON_ACCESS,
            vec![
                SONG_OATH,
                AREA_WOODFALL_TEMPLE_CLEAR,
                AREA_SNOWHEAD_TEMPLE_CLEAR,
                AREA_GREAT_BAY_TEMPLE_CLEAR,
                AREA_STONE_TOWER_CLEAR,
            ],
        ),
        requires(
            HEART_PIECE_DEKU_TRIAL,
            vec![AREA_MOON_ACCESS, MASK_DEKU, OTHER_ONE_MASK],
        ),
        requires(
            HEART_PIECE_GORON_TRIAL,
            vec![AREA_MOON_ACCESS, MASK_GORON, OTHER_TWO_MASKS],
        ),
        requires(
            HEART_PIECE_ZORA_TRIAL,
            vec![AREA_MOON_ACCESS, MASK_ZORA, OTHER_THREE_MASKS],
        ),
        requires(
            HEART_PIECE_LINK_TRIAL,
            vec![
                AREA_MOON_ACCESS,
                OTHER_FOUR_MASKS,
                OTHER_EXPLOSIVE,
                OTHER_ARROW,
                ITEM_FIRE_ARROW,
                ITEM_HOOKSHOT,
            ],
        ),
        requires(MASK_FIERCE_DEITY, fierce_deity),
    ]
}

fn join_ids(ids: &[usize]) -> String {
    ids.iter().join(",")
}

fn renumber_line(line_no: usize, line: &str) -> Result<String, LogicError> {
    let sections = line
        .split(';')
        .map(|section| {
            section
                .split(',')
                .map(|token| {
                    let t = token.trim();
                    let id: usize = t.parse().map_err(|e| LogicError::ParseInt {
                        line: line_no,
                        token: t.to_string(),
                        source: e,
                    })?;
                    Ok(if id >= items::OTHER_ONE_MASK {
                        id + MOON_RECORD_COUNT
                    } else {
                        id
                    })
                })
                .collect::<Result<Vec<usize>, LogicError>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(sections.iter().map(|section| join_ids(section)).join(";"))
}

fn add_moon_items(lines: &mut Vec<String>) -> Result<(), LogicError> {
    lines[0] = "-version 2".to_string();

    for (index, line) in lines.iter_mut().enumerate() {
        if line.starts_with('-') || line.trim().is_empty() {
            continue;
        }
        *line = renumber_line(index + 1, line)?;
    }

    for record in moon_records() {
        let at = record.id * LINES_PER_RECORD + 1;
        if at > lines.len() {
            return Err(LogicError::TruncatedForMigration {
                found: lines.len().saturating_sub(1) / LINES_PER_RECORD,
                expected: record.id,
            });
        }
        let conditionals = record
            .conditionals
            .iter()
            .map(|group| join_ids(group))
            .join(";");
        let name = items::item_name(record.id);
        let new_lines = [
            format!("- {name}"),
            join_ids(&record.depends_on_items),
            conditionals,
            "0".to_string(),
            "0".to_string(),
        ];
        lines.splice(at..at, new_lines);
    }
    Ok(())
}

fn add_requirements_for_song_oath(lines: &mut Vec<String>) -> Result<(), LogicError> {
    use items::*;

    let name = format!("- {}", item_name(SONG_OATH));
    let oath_index = lines
        .iter()
        .position(|line| *line == name)
        .filter(|&index| index + 4 < lines.len())
        .ok_or_else(|| LogicError::MissingRecord {
            name: item_name(SONG_OATH).to_string(),
        })?;

    lines[0] = "-version 3".to_string();
    lines[oath_index + 1] = String::new();
    lines[oath_index + 2] = [
        AREA_WOODFALL_TEMPLE_CLEAR,
        AREA_SNOWHEAD_TEMPLE_CLEAR,
        AREA_GREAT_BAY_TEMPLE_CLEAR,
        AREA_STONE_TOWER_CLEAR,
    ]
    .iter()
    .join(";");
    lines[oath_index + 3] = "0".to_string();
    lines[oath_index + 4] = "0".to_string();
    Ok(())
}
