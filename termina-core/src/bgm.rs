//! Background music shuffle.
//!
//! `SEQS.txt` lists one record per track: name, comma separated type tags,
//! instrument set in hex. Vanilla tracks (`mm-` prefix) carry a fourth line
//! with the hex slot they occupy and double as assignment targets.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logic::split_lines;
use crate::{RandomiserError, Result};

/// Slot of the one vanilla track that is never used as a replacement.
const UNSHUFFLED_SLOT: u32 = 0x18;
const SONG_OF_TIME_TRACK: &str = "mmr-f-sot";
const SONG_OF_TIME_SLOT: u32 = 0x33;

const HIGH_TIER_BIT: u32 = 8;
const SPECIAL_TYPE: u32 = 10;
const EXCLUDED_TYPE: u32 = 16;

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("failed to parse '{token}' on line {line} of the sequence table")]
    ParseInt {
        line: usize,
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("sequence '{name}' starting on line {line} is incomplete")]
    IncompleteRecord { name: String, line: usize },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SequenceInfo {
    pub name: String,
    pub types: Vec<u32>,
    pub instrument: u32,
    /// Slot this track plays in after the shuffle.
    pub replaces: Option<u32>,
    /// Slot of the vanilla track this record was read from.
    pub vanilla_slot: Option<u32>,
}

impl SequenceInfo {
    /// Vanilla game tracks are picked less eagerly than custom ones.
    fn is_default_track(&self) -> bool {
        self.name.starts_with("mm")
    }

    fn shares_type_with(&self, target: &SequenceInfo) -> bool {
        self.types.iter().any(|t| target.types.contains(t))
    }

    fn loosely_matches(&self, target: &SequenceInfo) -> bool {
        let tier = |s: &SequenceInfo| s.types.first().map_or(0, |t| t & HIGH_TIER_BIT);
        tier(self) == tier(target)
            && self.types.contains(&SPECIAL_TYPE) == target.types.contains(&SPECIAL_TYPE)
            && !self.types.contains(&EXCLUDED_TYPE)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceTable {
    /// Every track that may be assigned to a slot.
    pub sources: Vec<SequenceInfo>,
    /// Vanilla slots that must be filled.
    pub targets: Vec<SequenceInfo>,
}

fn parse_hex(line: usize, token: &str) -> std::result::Result<u32, SequenceError> {
    let t = token.trim();
    let digits = t.trim_start_matches("0x").trim_start_matches("0X");
    u32::from_str_radix(digits, 16).map_err(|e| SequenceError::ParseInt {
        line,
        token: t.to_string(),
        source: e,
    })
}

fn parse_types(line: usize, text: &str) -> std::result::Result<Vec<u32>, SequenceError> {
    text.split(',')
        .map(|token| {
            let t = token.trim();
            t.parse::<u32>().map_err(|e| SequenceError::ParseInt {
                line,
                token: t.to_string(),
                source: e,
            })
        })
        .collect()
}

pub fn parse_sequences(text: &str) -> std::result::Result<SequenceTable, SequenceError> {
    let lines = split_lines(text);
    let mut table = SequenceTable::default();
    let mut i = 0;

    while i < lines.len() {
        let name = lines[i].trim();
        if name.is_empty() {
            i += 1;
            continue;
        }

        let is_vanilla = name.starts_with("mm-");
        let record_len = if is_vanilla { 4 } else { 3 };
        if i + record_len > lines.len() {
            return Err(SequenceError::IncompleteRecord {
                name: name.to_string(),
                line: i + 1,
            });
        }

        let mut source = SequenceInfo {
            name: name.to_string(),
            types: parse_types(i + 2, &lines[i + 1])?,
            instrument: parse_hex(i + 3, &lines[i + 2])?,
            replaces: None,
            vanilla_slot: None,
        };

        if is_vanilla {
            let slot = parse_hex(i + 4, &lines[i + 3])?;
            source.vanilla_slot = Some(slot);
            table.targets.push(SequenceInfo {
                replaces: Some(slot),
                ..source.clone()
            });
        } else if source.name == SONG_OF_TIME_TRACK {
            source.replaces = Some(SONG_OF_TIME_SLOT);
        }

        if source.vanilla_slot != Some(UNSHUFFLED_SLOT) {
            table.sources.push(source);
        }
        i += record_len;
    }

    debug!(
        "read {} sequences for {} slots",
        table.sources.len(),
        table.targets.len()
    );
    Ok(table)
}

/// Fills every target slot with a compatible source track. Returns the
/// assigned sources; unassigned ones are dropped.
pub fn assign_sequences<R: Rng + ?Sized>(
    mut table: SequenceTable,
    rng: &mut R,
) -> Result<Vec<SequenceInfo>> {
    while !table.targets.is_empty() {
        let target_index = rng.gen_range(0..table.targets.len());
        let target = &table.targets[target_index];

        let unassigned: Vec<usize> = (0..table.sources.len())
            .filter(|&i| table.sources[i].replaces.is_none())
            .collect();

        let reachable = unassigned.iter().any(|&i| {
            let source = &table.sources[i];
            source.shares_type_with(target) || source.loosely_matches(target)
        });
        if !reachable {
            return Err(RandomiserError::Config(format!(
                "no remaining sequence can replace '{}'",
                target.name
            )));
        }

        loop {
            let pick = unassigned[rng.gen_range(0..unassigned.len())];
            let source = &table.sources[pick];

            let skip = rng.gen_range(0..100) < 50;
            if source.is_default_track() && skip {
                continue;
            }

            let matched = source.shares_type_with(target)
                || (rng.gen_range(0..30) == 0 && source.loosely_matches(target));
            if matched {
                debug!("{} -> {}", source.name, target.name);
                table.sources[pick].replaces = target.replaces;
                break;
            }
        }

        table.targets.remove(target_index);
    }

    table.sources.retain(|s| s.replaces.is_some());
    Ok(table.sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TABLE: &str = "mm-termina-field\n0,2\n3\n2\n\
mm-clock-town\n0\n4\n18\n\
mm-boss\n8,10\n5\n1B\n\
mmr-f-sot\n0\n6\n\
custom-battle\n8,10\n7\n\
custom-field\n2\n8\n";

    #[test]
    fn parses_vanilla_and_custom_records() {
        let table = parse_sequences(TABLE).unwrap();
        let targets: Vec<_> = table.targets.iter().map(|t| t.replaces).collect();
        assert_eq!(targets, vec![Some(0x02), Some(0x18), Some(0x1B)]);

        let names: Vec<_> = table.sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["mm-termina-field", "mm-boss", "mmr-f-sot", "custom-battle", "custom-field"]
        );
        assert_eq!(table.sources[2].replaces, Some(SONG_OF_TIME_SLOT));
        assert_eq!(table.sources[1].types, vec![8, 10]);
        assert_eq!(table.sources[1].instrument, 5);
    }

    #[test]
    fn every_slot_gets_a_compatible_track() {
        for seed in 0..20 {
            let table = parse_sequences(TABLE).unwrap();
            let targets = table.targets.clone();
            let assigned = assign_sequences(table, &mut StdRng::seed_from_u64(seed)).unwrap();

            for target in &targets {
                let filled: Vec<_> = assigned
                    .iter()
                    .filter(|s| s.replaces == target.replaces)
                    .collect();
                assert_eq!(filled.len(), 1, "slot {:?}", target.replaces);
                let source = filled[0];
                assert!(source.shares_type_with(target) || source.loosely_matches(target));
            }
            assert!(assigned.iter().any(|s| s.name == "mmr-f-sot"));
        }
    }

    #[test]
    fn unfillable_slot_is_an_error() {
        let table = parse_sequences("mm-boss\n8,10\n0\n1B\n").unwrap();
        let only_target = SequenceTable {
            sources: vec![SequenceInfo {
                name: "custom-quiet".into(),
                types: vec![16],
                instrument: 0,
                replaces: None,
                vanilla_slot: None,
            }],
            targets: table.targets,
        };
        assert_matches!(
            assign_sequences(only_target, &mut StdRng::seed_from_u64(1)),
            Err(RandomiserError::Config(_))
        );
    }

    #[test]
    fn bad_numbers_report_their_line() {
        assert_matches!(
            parse_sequences("custom\n1,x\n0\n"),
            Err(SequenceError::ParseInt { line: 2, .. })
        );
        assert_matches!(
            parse_sequences("mm-field\n1\n0"),
            Err(SequenceError::IncompleteRecord { line: 1, .. })
        );
    }
}
