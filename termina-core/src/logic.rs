use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version written by the current migration chain.
pub const CURRENT_LOGIC_VERSION: i32 = 3;

/// All six day/night windows.
pub const FULL_TIME_MASK: u8 = 63;

/// Errors that can occur while reading or migrating a logic file.
#[derive(Debug, Error)]
pub enum LogicError {
    #[error("failed to parse integer '{token}' on line {line}")]
    ParseInt {
        line: usize,
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("time mask {value} on line {line} is out of range (0-63)")]
    TimeMaskOutOfRange { line: usize, value: u32 },

    #[error("item record ending on line {line} has fewer than 4 lines")]
    IncompleteRecord { line: usize },

    #[error("item {item} references unknown item {reference}")]
    UnknownItem { item: usize, reference: usize },

    #[error(
        "logic file is version {found} but version {expected} is required; \
         run the logic migration on it first"
    )]
    StaleLogicFormat { found: i32, expected: i32 },

    #[error("logic file has {found} item records but migration needs at least {expected}")]
    TruncatedForMigration { found: usize, expected: usize },

    #[error("logic file has no record named '{name}'")]
    MissingRecord { name: String },
}

/// One logic record: an item together with the location it vanilla-occupies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogicItem {
    pub id: usize,
    pub depends_on_items: Vec<usize>,
    /// OR of AND-groups. Empty means "no conditionals".
    pub conditionals: Vec<Vec<usize>>,
    pub cannot_require_items: Vec<usize>,
    pub time_needed: u8,
    pub time_available: u8,
    /// Location this item has been placed at.
    pub replaces_item_id: Option<usize>,
}

impl LogicItem {
    pub fn new(id: usize) -> Self {
        LogicItem {
            id,
            time_available: FULL_TIME_MASK,
            ..Default::default()
        }
    }

    pub fn replaces_another_item(&self) -> bool {
        self.replaces_item_id.is_some()
    }

    pub fn has_conditionals(&self) -> bool {
        !self.conditionals.is_empty()
    }

    pub fn has_dependencies(&self) -> bool {
        !self.depends_on_items.is_empty()
    }

    pub(crate) fn add_cannot_require(&mut self, item: usize) {
        if !self.cannot_require_items.contains(&item) {
            self.cannot_require_items.push(item);
        }
    }

    pub(crate) fn add_dependency(&mut self, item: usize) {
        if !self.depends_on_items.contains(&item) {
            self.depends_on_items.push(item);
        }
    }
}

/// Serializable view of a record, exported alongside the placement result.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemLogic {
    pub item_id: usize,
    pub required_item_ids: Vec<usize>,
    pub conditional_item_ids: Vec<Vec<usize>>,
    pub time_needed: u8,
    pub time_available: u8,
}

impl From<&LogicItem> for ItemLogic {
    fn from(item: &LogicItem) -> Self {
        ItemLogic {
            item_id: item.id,
            required_item_ids: item.depends_on_items.clone(),
            conditional_item_ids: item.conditionals.clone(),
            time_needed: item.time_needed,
            time_available: item.time_available,
        }
    }
}

/// Arena of logic records indexed by item id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemGraph {
    pub items: Vec<LogicItem>,
}

impl ItemGraph {
    /// Graph with no requirements at all: every location is always reachable.
    pub fn without_logic(count: usize) -> Self {
        ItemGraph {
            items: (0..count).map(LogicItem::new).collect(),
        }
    }

    pub fn from_logic_text(text: &str) -> Result<Self, LogicError> {
        parse_logic(&split_lines(text))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item currently placed at `location`, if any.
    pub fn item_at(&self, location: usize) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.replaces_item_id == Some(location))
    }

    pub fn snapshot(&self) -> Vec<ItemLogic> {
        self.items.iter().map(ItemLogic::from).collect()
    }

    /// Committed `(item, location)` pairs in item order.
    pub fn placements(&self) -> Vec<(usize, usize)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(id, item)| item.replaces_item_id.map(|loc| (id, loc)))
            .collect()
    }

    fn validate_references(&self) -> Result<(), LogicError> {
        let count = self.items.len();
        for item in &self.items {
            let references = item
                .depends_on_items
                .iter()
                .chain(item.conditionals.iter().flatten());
            for &reference in references {
                if reference >= count {
                    return Err(LogicError::UnknownItem {
                        item: item.id,
                        reference,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Splits on CRLF, LF or CR, keeping empty lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split("\r\n")
        .flat_map(|chunk| chunk.split(['\n', '\r']))
        .map(str::to_string)
        .collect()
}

/// Version from the `-version N` header, or -1 when the header is absent.
pub fn get_version(lines: &[String]) -> Result<i32, LogicError> {
    let Some(first) = lines.first() else {
        return Ok(-1);
    };
    if !first.starts_with("-version") {
        return Ok(-1);
    }
    let token = first.split(' ').nth(1).unwrap_or("").trim();
    token.parse::<i32>().map_err(|e| LogicError::ParseInt {
        line: 1,
        token: token.to_string(),
        source: e,
    })
}

fn parse_int<T: std::str::FromStr<Err = std::num::ParseIntError>>(
    line: usize,
    token: &str,
) -> Result<T, LogicError> {
    let t = token.trim();
    t.parse::<T>().map_err(|e| LogicError::ParseInt {
        line,
        token: t.to_string(),
        source: e,
    })
}

fn parse_id_list(line: usize, text: &str) -> Result<Vec<usize>, LogicError> {
    text.split(',').map(|token| parse_int(line, token)).collect()
}

fn parse_time_mask(line: usize, text: &str) -> Result<u8, LogicError> {
    let value: u32 = parse_int(line, text)?;
    if value > FULL_TIME_MASK as u32 {
        return Err(LogicError::TimeMaskOutOfRange { line, value });
    }
    Ok(value as u8)
}

/// Builds the item graph from logic lines: four data lines per item in id
/// order (dependencies, conditionals, time needed, time available); lines
/// starting with `-` are comments.
pub fn parse_logic(lines: &[String]) -> Result<ItemGraph, LogicError> {
    let version = get_version(lines)?;
    if version != CURRENT_LOGIC_VERSION {
        return Err(LogicError::StaleLogicFormat {
            found: version,
            expected: CURRENT_LOGIC_VERSION,
        });
    }

    let mut graph = ItemGraph::default();
    let mut current = LogicItem::new(0);
    let mut record_line = 0usize;
    let mut last_line_no = 0usize;

    for (index, line) in lines.iter().enumerate() {
        if line.starts_with('-') {
            continue;
        }
        let line_no = index + 1;
        last_line_no = line_no;

        match record_line {
            0 => {
                if !line.is_empty() {
                    current.depends_on_items = parse_id_list(line_no, line)?;
                }
            }
            1 => {
                if !line.is_empty() {
                    current.conditionals = line
                        .split(';')
                        .map(|group| parse_id_list(line_no, group))
                        .collect::<Result<_, _>>()?;
                }
            }
            2 => current.time_needed = parse_time_mask(line_no, line)?,
            _ => {
                current.time_available = parse_time_mask(line_no, line)?;
                if current.time_available == 0 {
                    current.time_available = FULL_TIME_MASK;
                }
            }
        }

        record_line += 1;
        if record_line == 4 {
            let next_id = graph.items.len() + 1;
            graph.items.push(std::mem::replace(&mut current, LogicItem::new(next_id)));
            record_line = 0;
        }
    }

    // A final newline leaves exactly one empty line behind.
    let trailing_newline = record_line == 1
        && last_line_no == lines.len()
        && lines.last().map_or(false, |line| line.is_empty());
    if record_line != 0 && !trailing_newline {
        return Err(LogicError::IncompleteRecord { line: last_line_no });
    }

    graph.validate_references()?;
    log::debug!("parsed {} logic records (version {})", graph.len(), version);
    Ok(graph)
}
