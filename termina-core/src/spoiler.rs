use crate::entrances::ACCESS_SLOTS;
use crate::items::item_name;
use crate::RandomizedResult;

const COLUMN: usize = 40;

fn row(left: &str, right: &str) -> String {
    format!("{left:<width$} >> {right}\n", width = COLUMN)
}

/// Plain text spoiler log for a finished pass.
pub fn build_spoiler_log(result: &RandomizedResult) -> String {
    let mut log = String::new();
    log.push_str("Termina randomiser spoiler log\n");
    log.push_str(&format!("Seed: {}\n", result.seed));

    if let Some(entrances) = &result.entrances {
        log.push_str("\nEntrances:\n");
        log.push_str(&row("Entrance", "Destination"));
        for (slot, &destination) in entrances.destination_indices.iter().enumerate() {
            log.push_str(&row(
                item_name(ACCESS_SLOTS[slot]),
                item_name(ACCESS_SLOTS[destination]),
            ));
        }
    }

    let mut placements = result.item_placements.clone();

    log.push_str("\nItem >> Location:\n");
    log.push_str(&row("Item", "Location"));
    for &(item, location) in &placements {
        log.push_str(&row(item_name(item), item_name(location)));
    }

    placements.sort_by_key(|&(_, location)| location);
    log.push_str("\nLocation >> Item:\n");
    log.push_str(&row("Location", "Item"));
    for &(item, location) in &placements {
        log.push_str(&row(item_name(location), item_name(item)));
    }

    if !result.sequences.is_empty() {
        log.push_str("\nMusic:\n");
        for sequence in &result.sequences {
            let slot = sequence
                .replaces
                .map_or_else(|| "-".to_string(), |s| format!("0x{s:02X}"));
            log.push_str(&row(&sequence.name, &slot));
        }
    }

    log
}
