//! Gossip stone hints.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::items::{
    is_bottle_catch_content, is_dungeon_item, is_moon_item, is_other_item, is_shop_item,
    to_compact_id, SONG_SOARING,
};
use crate::logic::{split_lines, ItemGraph};
use crate::{RandomiserError, RandomiserSettings, Result};

const TRUE_HINT_SFX: u16 = 0x690C;
const FAKE_HINT_SFX: u16 = 0x690A;
/// Percent chance that a hint names a random item instead of the real one.
const FAKE_HINT_CHANCE: u32 = 5;

const START_SENTENCES: &[&str] = &[
    "They say",
    "I hear",
    "It seems",
    "Apparently,",
    "It appears",
];

const MID_SENTENCES: &[&str] = &[
    "leads to",
    "yields",
    "brings",
    "holds",
    "conceals",
    "possesses",
];

const JUNK_MESSAGES: &[&str] = &[
    "\x1E\x69\x0DThey say you can find\x11a fairy by the fountain...\u{BF}",
    "\x1E\x69\x0DThey say the moon is\x11not so happy tonight...\u{BF}",
    "\x1E\x69\x0DIt seems that a masked thief\x11roams the fields at night...\u{BF}",
];

/// Phrases describing one compact item id, as a location and as a reward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GossipEntry {
    pub source_messages: Vec<String>,
    pub destination_messages: Vec<String>,
}

/// Reads the gossip table: two lines per compact id, each a `;` separated
/// list of phrasings.
pub fn parse_gossip_table(text: &str) -> Result<Vec<GossipEntry>> {
    let mut lines = split_lines(text);
    while lines.last().map_or(false, |l| l.is_empty()) {
        lines.pop();
    }
    if lines.len() % 2 != 0 {
        return Err(RandomiserError::Config(format!(
            "gossip table has an odd number of lines ({})",
            lines.len()
        )));
    }

    let split = |line: &str| line.split(';').map(str::to_string).collect::<Vec<_>>();
    Ok(lines
        .chunks_exact(2)
        .map(|pair| GossipEntry {
            source_messages: split(&pair[0]),
            destination_messages: split(&pair[1]),
        })
        .collect())
}

fn sound_effect_chars(sfx: u16) -> String {
    [char::from((sfx >> 8) as u8), char::from((sfx & 0xFF) as u8)]
        .iter()
        .collect()
}

/// Formats one hint with the message box control codes.
pub fn build_gossip_quote<R: Rng + ?Sized>(
    rng: &mut R,
    sound_effect_id: u16,
    source_message: &str,
    destination_message: &str,
) -> String {
    let start = START_SENTENCES[rng.gen_range(0..START_SENTENCES.len())];
    let mid = MID_SENTENCES[rng.gen_range(0..MID_SENTENCES.len())];
    format!(
        "\x1E{}{start} \x01{source_message}\x00\x11{mid} \x06{destination_message}\x00...\u{BF}",
        sound_effect_chars(sound_effect_id)
    )
}

fn hint_skipped(settings: &RandomiserSettings, item: usize) -> bool {
    (!settings.randomize_bottle_catch_contents && is_bottle_catch_content(item))
        || (!settings.add_shop_items && is_shop_item(item))
        || (!settings.add_dungeon_items && is_dungeon_item(item))
        || (settings.exclude_song_of_soaring && item == SONG_SOARING)
        || (!settings.add_moon_items && is_moon_item(item))
        || (!settings.add_other && is_other_item(item))
}

fn entry(table: &[GossipEntry], compact: usize) -> Result<&GossipEntry> {
    table.get(compact).ok_or_else(|| {
        RandomiserError::Config(format!("gossip table has no entry for item {compact}"))
    })
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, messages: &'a [String]) -> &'a str {
    messages.choose(rng).map_or("", String::as_str)
}

/// One quote per placed item in randomised categories, then the junk lines.
pub fn make_gossip_quotes<R: Rng + ?Sized>(
    graph: &ItemGraph,
    table: &[GossipEntry],
    settings: &RandomiserSettings,
    rng: &mut R,
) -> Result<Vec<String>> {
    let mut quotes = Vec::new();

    for (item, record) in graph.items.iter().enumerate() {
        let Some(location) = record.replaces_item_id else {
            continue;
        };
        if hint_skipped(settings, item) {
            continue;
        }
        let (Some(mut source), Some(destination)) = (to_compact_id(location), to_compact_id(item))
        else {
            continue;
        };

        let is_fake = rng.gen_range(0..100) < FAKE_HINT_CHANCE;
        if is_fake {
            source = rng.gen_range(0..table.len().max(1));
        }

        let source_message = pick(rng, &entry(table, source)?.source_messages);
        let destination_message = pick(rng, &entry(table, destination)?.destination_messages);
        let sfx = if is_fake { FAKE_HINT_SFX } else { TRUE_HINT_SFX };

        quotes.push(build_gossip_quote(rng, sfx, source_message, destination_message));
    }

    quotes.extend(JUNK_MESSAGES.iter().map(|m| m.to_string()));
    Ok(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{placeable_item_count, ITEM_HOOKSHOT, MASK_DEKU, TOTAL_NUMBER_OF_ITEMS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn table() -> Vec<GossipEntry> {
        (0..placeable_item_count())
            .map(|i| GossipEntry {
                source_messages: vec![format!("place{i}")],
                destination_messages: vec![format!("thing{i}")],
            })
            .collect()
    }

    #[test]
    fn parses_pairs_of_lines() {
        let table = parse_gossip_table("a woods;a swamp\na mask\nthe bank\ncoins;rupees\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].source_messages, vec!["a woods", "a swamp"]);
        assert_eq!(table[1].destination_messages, vec!["coins", "rupees"]);

        assert!(parse_gossip_table("one\ntwo\nthree").is_err());
    }

    #[test]
    fn quote_carries_sound_effect_and_markers() {
        let mut rng = StdRng::seed_from_u64(0);
        let quote = build_gossip_quote(&mut rng, TRUE_HINT_SFX, "the woods", "a bow");
        assert!(quote.starts_with("\x1E\x69\x0C"));
        assert!(quote.contains(" \x01the woods\x00\x11"));
        assert!(quote.ends_with(" \x06a bow\x00...\u{BF}"));
    }

    #[test]
    fn one_quote_per_hinted_item_then_junk() {
        let mut graph = ItemGraph::without_logic(TOTAL_NUMBER_OF_ITEMS);
        graph.items[ITEM_HOOKSHOT].replaces_item_id = Some(MASK_DEKU);
        graph.items[MASK_DEKU].replaces_item_id = Some(ITEM_HOOKSHOT);
        // Vanilla bottle content: skipped with the default settings.
        graph.items[crate::items::BOTTLE_CATCH_FAIRY].replaces_item_id =
            Some(crate::items::BOTTLE_CATCH_FAIRY);

        let settings = RandomiserSettings::default();
        let mut rng = StdRng::seed_from_u64(3);
        let quotes = make_gossip_quotes(&graph, &table(), &settings, &mut rng).unwrap();

        assert_eq!(quotes.len(), 2 + JUNK_MESSAGES.len());
        assert!(quotes[0].contains("thing0") || quotes[0].contains("thing10"));
    }

    #[test]
    fn heart_pieces_and_maps_follow_the_other_setting() {
        use crate::items::{HEART_PIECE_BANK, ITEM_TINGLE_MAP_TOWN};

        let mut graph = ItemGraph::without_logic(TOTAL_NUMBER_OF_ITEMS);
        graph.items[HEART_PIECE_BANK].replaces_item_id = Some(HEART_PIECE_BANK);
        graph.items[ITEM_TINGLE_MAP_TOWN].replaces_item_id = Some(ITEM_TINGLE_MAP_TOWN);

        let table = table();
        let mut settings = RandomiserSettings::default();
        let quotes =
            make_gossip_quotes(&graph, &table, &settings, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(quotes.len(), JUNK_MESSAGES.len());

        settings.add_other = true;
        let quotes =
            make_gossip_quotes(&graph, &table, &settings, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(quotes.len(), 2 + JUNK_MESSAGES.len());
    }
}
