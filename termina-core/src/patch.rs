//! Hand-off of shuffle results to the ROM patcher.
//!
//! The patcher itself lives outside this crate. `RomServices` is the surface
//! it exposes; address tables are looked up by name so no offsets are known
//! here.

use crate::entrances::{EntranceShuffle, EntranceTables};
use crate::Result;

/// One address group as returned by the patcher's address tables.
pub type AddressGroup = Vec<u32>;

pub trait RomServices {
    fn apply_hack(&mut self, patch_id: &str) -> Result<()>;
    fn get_addresses(&mut self, table_id: &str) -> Result<Vec<AddressGroup>>;
    fn write_rom_addr(&mut self, addr: &[u32], bytes: &[u8]) -> Result<()>;
    /// Rewrites every occurrence of each `old` entrance value with `new`.
    fn write_entrances(&mut self, old: &[u16], new: &[u16]) -> Result<()>;
}

fn write_words<S: RomServices + ?Sized>(
    rom: &mut S,
    table_id: &str,
    values: impl IntoIterator<Item = u16>,
) -> Result<()> {
    let addresses = rom.get_addresses(table_id)?;
    for (group, value) in addresses.iter().zip(values) {
        rom.write_rom_addr(group, &value.to_be_bytes())?;
    }
    Ok(())
}

/// Writes a dungeon entrance shuffle.
pub fn write_dungeons<S: RomServices + ?Sized>(
    rom: &mut S,
    shuffle: &EntranceShuffle,
    tables: &EntranceTables,
) -> Result<()> {
    rom.write_entrances(&tables.entrances, &shuffle.new_entrances)?;
    rom.write_entrances(&tables.exits, &shuffle.new_exits)?;

    // `li v0, n` with the exit index patched into the immediate.
    let checks = rom.get_addresses("d-check")?;
    for (group, &exit) in checks.iter().zip(shuffle.exit_indices.iter()) {
        rom.write_rom_addr(group, &[0x24, 0x02, 0x00, exit as u8])?;
    }

    rom.apply_hack("fix-dungeons")?;

    // The third exit shares its code with the fourth dungeon.
    let d = shuffle.destination_indices;
    let exits = (0..d.len()).map(|i| {
        let slot = if i == 2 { d[3] } else { d[i] };
        tables.exits[slot]
    });
    write_words(rom, "d-exit", exits)?;

    write_words(rom, "dc-flagload", shuffle.new_dc_flags)?;
    write_words(rom, "dc-flagmask", shuffle.new_dc_masks)?;
    Ok(())
}
