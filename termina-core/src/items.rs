//! Item catalogue in the current (version 3) logic numbering.
//!
//! Every logic record is both an item and the location that item occupies in
//! an unmodified game, so the same id space is used for both.

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ItemRole {
    Regular,
    Upgrade,
    Trade,
    Quest,
    HeartPieceReward,
    Mask,
    Song,
    /// Region access or dungeon clear flag. Never physically placed.
    Area,
    /// Synthetic aggregate requirement ("explosives", "any two masks", ...).
    Aggregate,
    Moon,
    Dungeon,
    Shop,
    BottleCatch,
    OtherChest,
    HeartPieceStanding,
    TingleMap,
}

#[derive(Copy, Clone, Debug)]
pub struct ItemInfo {
    pub name: &'static str,
    pub role: ItemRole,
}

pub const MASK_DEKU: usize = 0;
pub const ITEM_FIRE_ARROW: usize = 2;
pub const ITEM_ICE_ARROW: usize = 3;
pub const ITEM_BOMB_BAG: usize = 5;
pub const ITEM_HOOKSHOT: usize = 10;
pub const ITEM_BOTTLE_WITCH: usize = 12;
pub const ITEM_BOTTLE_MADAME_AROMA: usize = 17;
pub const ITEM_NOTEBOOK: usize = 18;

pub const UPGRADE_RAZOR_SWORD: usize = 19;
pub const UPGRADE_GILDED_SWORD: usize = 20;
pub const UPGRADE_MIRROR_SHIELD: usize = 21;
pub const UPGRADE_BIGGEST_QUIVER: usize = 23;
pub const UPGRADE_BIG_BOMB_BAG: usize = 24;
pub const UPGRADE_BIGGEST_BOMB_BAG: usize = 25;
pub const UPGRADE_GIANT_WALLET: usize = 27;

pub const TRADE_ITEM_MOON_TEAR: usize = 28;
pub const TRADE_ITEM_LAND_DEED: usize = 29;
pub const TRADE_ITEM_SWAMP_DEED: usize = 30;
pub const TRADE_ITEM_MOUNTAIN_DEED: usize = 31;
pub const TRADE_ITEM_OCEAN_DEED: usize = 32;
pub const TRADE_ITEM_ROOM_KEY: usize = 33;
pub const TRADE_ITEM_KAFEI_LETTER: usize = 34;
pub const TRADE_ITEM_PENDANT: usize = 35;
pub const TRADE_ITEM_MAMA_LETTER: usize = 36;

pub const HEART_PIECE_NOTEBOOK_MAYOR: usize = 37;
pub const HEART_PIECE_NOTEBOOK_HAND: usize = 40;
pub const HEART_PIECE_KNUCKLE: usize = 67;

pub const MASK_POSTMAN_HAT: usize = 68;
pub const MASK_ALL_NIGHT: usize = 69;
pub const MASK_BLAST: usize = 70;
pub const MASK_KEATON: usize = 73;
pub const MASK_BREMEN: usize = 74;
pub const MASK_BUNNY_HOOD: usize = 75;
pub const MASK_CIRCUS_LEADER: usize = 79;
pub const MASK_COUPLE: usize = 81;
pub const MASK_TRUTH: usize = 82;
pub const MASK_KAMARO: usize = 83;
pub const MASK_CAPTAIN_HAT: usize = 86;
pub const MASK_GORON: usize = 88;
pub const MASK_ZORA: usize = 89;
/// Masks counted by the "N masks" aggregates (Postman's Hat through Giant's Mask).
pub const MOON_TRIAL_MASK_COUNT: usize = 20;

pub const SONG_SOARING: usize = 90;
pub const SONG_OATH: usize = 97;

pub const AREA_SOUTH_ACCESS: usize = 98;
pub const AREA_WOODFALL_TEMPLE_ACCESS: usize = 99;
pub const AREA_WOODFALL_TEMPLE_CLEAR: usize = 100;
pub const AREA_SNOWHEAD_TEMPLE_ACCESS: usize = 102;
pub const AREA_SNOWHEAD_TEMPLE_CLEAR: usize = 103;
pub const AREA_GREAT_BAY_TEMPLE_ACCESS: usize = 107;
pub const AREA_GREAT_BAY_TEMPLE_CLEAR: usize = 108;
pub const AREA_INVERTED_STONE_TOWER_TEMPLE_ACCESS: usize = 112;
pub const AREA_STONE_TOWER_CLEAR: usize = 113;
pub const OTHER_EXPLOSIVE: usize = 114;
pub const OTHER_ARROW: usize = 115;
pub const OTHER_ONE_MASK: usize = 116;
pub const OTHER_TWO_MASKS: usize = 117;
pub const OTHER_THREE_MASKS: usize = 118;
pub const OTHER_FOUR_MASKS: usize = 119;
pub const AREA_MOON_ACCESS: usize = 120;
pub const HEART_PIECE_DEKU_TRIAL: usize = 121;
pub const HEART_PIECE_GORON_TRIAL: usize = 122;
pub const HEART_PIECE_ZORA_TRIAL: usize = 123;
pub const HEART_PIECE_LINK_TRIAL: usize = 124;
pub const MASK_FIERCE_DEITY: usize = 125;

pub const ITEM_WOODFALL_MAP: usize = 131;
pub const ITEM_STONE_TOWER_KEY_4: usize = 151;
pub const SHOP_ITEM_TRADING_POST_RED_POTION: usize = 152;
pub const SHOP_ITEM_ZORA_RED_POTION: usize = 170;
pub const BOTTLE_CATCH_FAIRY: usize = 171;
pub const BOTTLE_CATCH_MUSHROOM: usize = 180;
pub const CHEST_LENS_CAVE_RED_RUPEE: usize = 181;
pub const CHEST_SOUTH_CLOCK_TOWN_PURPLE_RUPEE: usize = 237;
pub const HEART_PIECE_BANK: usize = 238;
pub const HEART_PIECE_SOUTH_CLOCK_TOWN: usize = 239;
pub const HEART_CONTAINER_STONE_TOWER: usize = 257;
pub const ITEM_TINGLE_MAP_TOWN: usize = 258;
pub const ITEM_TINGLE_MAP_STONE_TOWER: usize = 263;
pub const CHEST_TO_GORON_RACE_GROTTO: usize = 264;

pub const TOTAL_NUMBER_OF_ITEMS: usize = 265;

pub static ITEMS: [ItemInfo; TOTAL_NUMBER_OF_ITEMS] = [
    ItemInfo { name: "Deku Mask", role: ItemRole::Regular }, // 0
    ItemInfo { name: "Hero's Bow", role: ItemRole::Regular }, // 1
    ItemInfo { name: "Fire Arrow", role: ItemRole::Regular }, // 2
    ItemInfo { name: "Ice Arrow", role: ItemRole::Regular }, // 3
    ItemInfo { name: "Light Arrow", role: ItemRole::Regular }, // 4
    ItemInfo { name: "Bomb Bag (20)", role: ItemRole::Regular }, // 5
    ItemInfo { name: "Magic Bean", role: ItemRole::Regular }, // 6
    ItemInfo { name: "Powder Keg", role: ItemRole::Regular }, // 7
    ItemInfo { name: "Pictobox", role: ItemRole::Regular }, // 8
    ItemInfo { name: "Lens of Truth", role: ItemRole::Regular }, // 9
    ItemInfo { name: "Hookshot", role: ItemRole::Regular }, // 10
    ItemInfo { name: "Great Fairy's Sword", role: ItemRole::Regular }, // 11
    ItemInfo { name: "Witch Bottle", role: ItemRole::Regular }, // 12
    ItemInfo { name: "Aliens Bottle", role: ItemRole::Regular }, // 13
    ItemInfo { name: "Gold Dust", role: ItemRole::Regular }, // 14
    ItemInfo { name: "Beaver Race Bottle", role: ItemRole::Regular }, // 15
    ItemInfo { name: "Dampe Bottle", role: ItemRole::Regular }, // 16
    ItemInfo { name: "Chateau Bottle", role: ItemRole::Regular }, // 17
    ItemInfo { name: "Bombers' Notebook", role: ItemRole::Regular }, // 18
    ItemInfo { name: "Razor Sword", role: ItemRole::Upgrade }, // 19
    ItemInfo { name: "Gilded Sword", role: ItemRole::Upgrade }, // 20
    ItemInfo { name: "Mirror Shield", role: ItemRole::Upgrade }, // 21
    ItemInfo { name: "Town Archery Quiver (40)", role: ItemRole::Upgrade }, // 22
    ItemInfo { name: "Swamp Archery Quiver (50)", role: ItemRole::Upgrade }, // 23
    ItemInfo { name: "Town Bomb Bag (30)", role: ItemRole::Upgrade }, // 24
    ItemInfo { name: "Mountain Bomb Bag (40)", role: ItemRole::Upgrade }, // 25
    ItemInfo { name: "Town Wallet (200)", role: ItemRole::Upgrade }, // 26
    ItemInfo { name: "Ocean Wallet (500)", role: ItemRole::Upgrade }, // 27
    ItemInfo { name: "Moon's Tear", role: ItemRole::Trade }, // 28
    ItemInfo { name: "Land Title Deed", role: ItemRole::Trade }, // 29
    ItemInfo { name: "Swamp Title Deed", role: ItemRole::Trade }, // 30
    ItemInfo { name: "Mountain Title Deed", role: ItemRole::Trade }, // 31
    ItemInfo { name: "Ocean Title Deed", role: ItemRole::Trade }, // 32
    ItemInfo { name: "Room Key", role: ItemRole::Quest }, // 33
    ItemInfo { name: "Letter to Kafei", role: ItemRole::Quest }, // 34
    ItemInfo { name: "Pendant of Memories", role: ItemRole::Quest }, // 35
    ItemInfo { name: "Letter to Mama", role: ItemRole::Quest }, // 36
    ItemInfo { name: "Mayor Dotour HP", role: ItemRole::HeartPieceReward }, // 37
    ItemInfo { name: "Postman HP", role: ItemRole::HeartPieceReward }, // 38
    ItemInfo { name: "Rosa Sisters HP", role: ItemRole::HeartPieceReward }, // 39
    ItemInfo { name: "??? HP", role: ItemRole::HeartPieceReward }, // 40
    ItemInfo { name: "Grandma Short Story HP", role: ItemRole::HeartPieceReward }, // 41
    ItemInfo { name: "Grandma Long Story HP", role: ItemRole::HeartPieceReward }, // 42
    ItemInfo { name: "Keaton Quiz HP", role: ItemRole::HeartPieceReward }, // 43
    ItemInfo { name: "Deku Playground HP", role: ItemRole::HeartPieceReward }, // 44
    ItemInfo { name: "Town Archery HP", role: ItemRole::HeartPieceReward }, // 45
    ItemInfo { name: "Honey and Darling HP", role: ItemRole::HeartPieceReward }, // 46
    ItemInfo { name: "Swordsman's School HP", role: ItemRole::HeartPieceReward }, // 47
    ItemInfo { name: "Postbox HP", role: ItemRole::HeartPieceReward }, // 48
    ItemInfo { name: "Termina Field Gossips HP", role: ItemRole::HeartPieceReward }, // 49
    ItemInfo { name: "Termina Field Business Scrub HP", role: ItemRole::HeartPieceReward }, // 50
    ItemInfo { name: "Swamp Archery HP", role: ItemRole::HeartPieceReward }, // 51
    ItemInfo { name: "Pictograph Contest HP", role: ItemRole::HeartPieceReward }, // 52
    ItemInfo { name: "Boat Archery HP", role: ItemRole::HeartPieceReward }, // 53
    ItemInfo { name: "Frog Choir HP", role: ItemRole::HeartPieceReward }, // 54
    ItemInfo { name: "Beaver Race HP", role: ItemRole::HeartPieceReward }, // 55
    ItemInfo { name: "Seahorse HP", role: ItemRole::HeartPieceReward }, // 56
    ItemInfo { name: "Fisherman Game HP", role: ItemRole::HeartPieceReward }, // 57
    ItemInfo { name: "Evan HP", role: ItemRole::HeartPieceReward }, // 58
    ItemInfo { name: "Dog Race HP", role: ItemRole::HeartPieceReward }, // 59
    ItemInfo { name: "Poe Hut HP", role: ItemRole::HeartPieceReward }, // 60
    ItemInfo { name: "Treasure Chest Game HP", role: ItemRole::HeartPieceReward }, // 61
    ItemInfo { name: "Peahat Grotto HP", role: ItemRole::HeartPieceReward }, // 62
    ItemInfo { name: "Dodongo Grotto HP", role: ItemRole::HeartPieceReward }, // 63
    ItemInfo { name: "Woodfall Chest HP", role: ItemRole::HeartPieceReward }, // 64
    ItemInfo { name: "Twin Islands Chest HP", role: ItemRole::HeartPieceReward }, // 65
    ItemInfo { name: "Ocean Spider House HP", role: ItemRole::HeartPieceReward }, // 66
    ItemInfo { name: "Graveyard Iron Knuckle HP", role: ItemRole::HeartPieceReward }, // 67
    ItemInfo { name: "Postman's Hat", role: ItemRole::Mask }, // 68
    ItemInfo { name: "All Night Mask", role: ItemRole::Mask }, // 69
    ItemInfo { name: "Blast Mask", role: ItemRole::Mask }, // 70
    ItemInfo { name: "Stone Mask", role: ItemRole::Mask }, // 71
    ItemInfo { name: "Great Fairy's Mask", role: ItemRole::Mask }, // 72
    ItemInfo { name: "Keaton Mask", role: ItemRole::Mask }, // 73
    ItemInfo { name: "Bremen Mask", role: ItemRole::Mask }, // 74
    ItemInfo { name: "Bunny Hood", role: ItemRole::Mask }, // 75
    ItemInfo { name: "Don Gero's Mask", role: ItemRole::Mask }, // 76
    ItemInfo { name: "Mask of Scents", role: ItemRole::Mask }, // 77
    ItemInfo { name: "Romani Mask", role: ItemRole::Mask }, // 78
    ItemInfo { name: "Circus Leader's Mask", role: ItemRole::Mask }, // 79
    ItemInfo { name: "Kafei's Mask", role: ItemRole::Mask }, // 80
    ItemInfo { name: "Couple's Mask", role: ItemRole::Mask }, // 81
    ItemInfo { name: "Mask of Truth", role: ItemRole::Mask }, // 82
    ItemInfo { name: "Kamaro's Mask", role: ItemRole::Mask }, // 83
    ItemInfo { name: "Gibdo Mask", role: ItemRole::Mask }, // 84
    ItemInfo { name: "Garo Mask", role: ItemRole::Mask }, // 85
    ItemInfo { name: "Captain's Hat", role: ItemRole::Mask }, // 86
    ItemInfo { name: "Giant's Mask", role: ItemRole::Mask }, // 87
    ItemInfo { name: "Goron Mask", role: ItemRole::Mask }, // 88
    ItemInfo { name: "Zora Mask", role: ItemRole::Mask }, // 89
    ItemInfo { name: "Song of Soaring", role: ItemRole::Song }, // 90
    ItemInfo { name: "Epona's Song", role: ItemRole::Song }, // 91
    ItemInfo { name: "Song of Storms", role: ItemRole::Song }, // 92
    ItemInfo { name: "Sonata of Awakening", role: ItemRole::Song }, // 93
    ItemInfo { name: "Goron Lullaby", role: ItemRole::Song }, // 94
    ItemInfo { name: "New Wave Bossa Nova", role: ItemRole::Song }, // 95
    ItemInfo { name: "Elegy of Emptiness", role: ItemRole::Song }, // 96
    ItemInfo { name: "Oath to Order", role: ItemRole::Song }, // 97
    ItemInfo { name: "Poison swamp access", role: ItemRole::Area }, // 98
    ItemInfo { name: "Woodfall Temple access", role: ItemRole::Area }, // 99
    ItemInfo { name: "Woodfall clear", role: ItemRole::Area }, // 100
    ItemInfo { name: "North access", role: ItemRole::Area }, // 101
    ItemInfo { name: "Snowhead Temple access", role: ItemRole::Area }, // 102
    ItemInfo { name: "Snowhead clear", role: ItemRole::Area }, // 103
    ItemInfo { name: "Epona access", role: ItemRole::Area }, // 104
    ItemInfo { name: "West access", role: ItemRole::Area }, // 105
    ItemInfo { name: "Pirates' Fortress access", role: ItemRole::Area }, // 106
    ItemInfo { name: "Great Bay Temple access", role: ItemRole::Area }, // 107
    ItemInfo { name: "Great Bay clear", role: ItemRole::Area }, // 108
    ItemInfo { name: "East access", role: ItemRole::Area }, // 109
    ItemInfo { name: "Ikana Canyon access", role: ItemRole::Area }, // 110
    ItemInfo { name: "Stone Tower Temple access", role: ItemRole::Area }, // 111
    ItemInfo { name: "Inverted Stone Tower Temple access", role: ItemRole::Area }, // 112
    ItemInfo { name: "Ikana clear", role: ItemRole::Area }, // 113
    ItemInfo { name: "Explosives", role: ItemRole::Aggregate }, // 114
    ItemInfo { name: "Arrows", role: ItemRole::Aggregate }, // 115
    ItemInfo { name: "One Mask", role: ItemRole::Aggregate }, // 116
    ItemInfo { name: "Two Masks", role: ItemRole::Aggregate }, // 117
    ItemInfo { name: "Three Masks", role: ItemRole::Aggregate }, // 118
    ItemInfo { name: "Four Masks", role: ItemRole::Aggregate }, // 119
    ItemInfo { name: "Moon Access", role: ItemRole::Area }, // 120
    ItemInfo { name: "Deku Trial HP", role: ItemRole::Moon }, // 121
    ItemInfo { name: "Goron Trial HP", role: ItemRole::Moon }, // 122
    ItemInfo { name: "Zora Trial HP", role: ItemRole::Moon }, // 123
    ItemInfo { name: "Link Trial HP", role: ItemRole::Moon }, // 124
    ItemInfo { name: "Fierce Deity's Mask", role: ItemRole::Moon }, // 125
    ItemInfo { name: "(Unused)", role: ItemRole::Aggregate }, // 126
    ItemInfo { name: "(Unused)", role: ItemRole::Aggregate }, // 127
    ItemInfo { name: "(Unused)", role: ItemRole::Aggregate }, // 128
    ItemInfo { name: "(Unused)", role: ItemRole::Aggregate }, // 129
    ItemInfo { name: "(Unused)", role: ItemRole::Aggregate }, // 130
    ItemInfo { name: "Woodfall Map", role: ItemRole::Dungeon }, // 131
    ItemInfo { name: "Woodfall Compass", role: ItemRole::Dungeon }, // 132
    ItemInfo { name: "Woodfall Boss Key", role: ItemRole::Dungeon }, // 133
    ItemInfo { name: "Woodfall Key 1", role: ItemRole::Dungeon }, // 134
    ItemInfo { name: "Snowhead Map", role: ItemRole::Dungeon }, // 135
    ItemInfo { name: "Snowhead Compass", role: ItemRole::Dungeon }, // 136
    ItemInfo { name: "Snowhead Boss Key", role: ItemRole::Dungeon }, // 137
    ItemInfo { name: "Snowhead Key 1 - block room", role: ItemRole::Dungeon }, // 138
    ItemInfo { name: "Snowhead Key 2 - icicle room", role: ItemRole::Dungeon }, // 139
    ItemInfo { name: "Snowhead Key 3 - bridge room", role: ItemRole::Dungeon }, // 140
    ItemInfo { name: "Great Bay Map", role: ItemRole::Dungeon }, // 141
    ItemInfo { name: "Great Bay Compass", role: ItemRole::Dungeon }, // 142
    ItemInfo { name: "Great Bay Boss Key", role: ItemRole::Dungeon }, // 143
    ItemInfo { name: "Great Bay Key 1", role: ItemRole::Dungeon }, // 144
    ItemInfo { name: "Stone Tower Map", role: ItemRole::Dungeon }, // 145
    ItemInfo { name: "Stone Tower Compass", role: ItemRole::Dungeon }, // 146
    ItemInfo { name: "Stone Tower Boss Key", role: ItemRole::Dungeon }, // 147
    ItemInfo { name: "Stone Tower Key 1 - armos room", role: ItemRole::Dungeon }, // 148
    ItemInfo { name: "Stone Tower Key 2 - eyegore room", role: ItemRole::Dungeon }, // 149
    ItemInfo { name: "Stone Tower Key 3 - updraft room", role: ItemRole::Dungeon }, // 150
    ItemInfo { name: "Stone Tower Key 4 - death armos maze", role: ItemRole::Dungeon }, // 151
    ItemInfo { name: "Trading Post Red Potion", role: ItemRole::Shop }, // 152
    ItemInfo { name: "Trading Post Green Potion", role: ItemRole::Shop }, // 153
    ItemInfo { name: "Trading Post Shield", role: ItemRole::Shop }, // 154
    ItemInfo { name: "Trading Post Fairy", role: ItemRole::Shop }, // 155
    ItemInfo { name: "Trading Post Stick", role: ItemRole::Shop }, // 156
    ItemInfo { name: "Trading Post Arrow 30", role: ItemRole::Shop }, // 157
    ItemInfo { name: "Trading Post Nut 10", role: ItemRole::Shop }, // 158
    ItemInfo { name: "Trading Post Arrow 50", role: ItemRole::Shop }, // 159
    ItemInfo { name: "Witch Shop Blue Potion", role: ItemRole::Shop }, // 160
    ItemInfo { name: "Witch Shop Red Potion", role: ItemRole::Shop }, // 161
    ItemInfo { name: "Witch Shop Green Potion", role: ItemRole::Shop }, // 162
    ItemInfo { name: "Bomb Shop Bomb 10", role: ItemRole::Shop }, // 163
    ItemInfo { name: "Bomb Shop Chu 10", role: ItemRole::Shop }, // 164
    ItemInfo { name: "Goron Shop Bomb 10", role: ItemRole::Shop }, // 165
    ItemInfo { name: "Goron Shop Arrow 10", role: ItemRole::Shop }, // 166
    ItemInfo { name: "Goron Shop Red Potion", role: ItemRole::Shop }, // 167
    ItemInfo { name: "Zora Shop Shield", role: ItemRole::Shop }, // 168
    ItemInfo { name: "Zora Shop Arrow 10", role: ItemRole::Shop }, // 169
    ItemInfo { name: "Zora Shop Red Potion", role: ItemRole::Shop }, // 170
    ItemInfo { name: "Bottle: Fairy", role: ItemRole::BottleCatch }, // 171
    ItemInfo { name: "Bottle: Deku Princess", role: ItemRole::BottleCatch }, // 172
    ItemInfo { name: "Bottle: Fish", role: ItemRole::BottleCatch }, // 173
    ItemInfo { name: "Bottle: Bug", role: ItemRole::BottleCatch }, // 174
    ItemInfo { name: "Bottle: Poe", role: ItemRole::BottleCatch }, // 175
    ItemInfo { name: "Bottle: Big Poe", role: ItemRole::BottleCatch }, // 176
    ItemInfo { name: "Bottle: Spring Water", role: ItemRole::BottleCatch }, // 177
    ItemInfo { name: "Bottle: Hot Spring Water", role: ItemRole::BottleCatch }, // 178
    ItemInfo { name: "Bottle: Zora Egg", role: ItemRole::BottleCatch }, // 179
    ItemInfo { name: "Bottle: Mushroom", role: ItemRole::BottleCatch }, // 180
    ItemInfo { name: "Lens Cave 20r", role: ItemRole::OtherChest }, // 181
    ItemInfo { name: "Lens Cave 50r", role: ItemRole::OtherChest }, // 182
    ItemInfo { name: "Bean Grotto 20r", role: ItemRole::OtherChest }, // 183
    ItemInfo { name: "HSW Grotto 20r", role: ItemRole::OtherChest }, // 184
    ItemInfo { name: "Graveyard Bad Bats", role: ItemRole::OtherChest }, // 185
    ItemInfo { name: "Ikana Grotto", role: ItemRole::OtherChest }, // 186
    ItemInfo { name: "PF 20r Lower", role: ItemRole::OtherChest }, // 187
    ItemInfo { name: "PF 20r Upper", role: ItemRole::OtherChest }, // 188
    ItemInfo { name: "PF Tank 20r", role: ItemRole::OtherChest }, // 189
    ItemInfo { name: "PF Guard Room 100r", role: ItemRole::OtherChest }, // 190
    ItemInfo { name: "PF HP Room 20r", role: ItemRole::OtherChest }, // 191
    ItemInfo { name: "PF HP Room 5r", role: ItemRole::OtherChest }, // 192
    ItemInfo { name: "PF Maze 20r", role: ItemRole::OtherChest }, // 193
    ItemInfo { name: "PR 20r (1)", role: ItemRole::OtherChest }, // 194
    ItemInfo { name: "PR 20r (2)", role: ItemRole::OtherChest }, // 195
    ItemInfo { name: "Bombers' Hideout 100r", role: ItemRole::OtherChest }, // 196
    ItemInfo { name: "Termina Bombchu Grotto", role: ItemRole::OtherChest }, // 197
    ItemInfo { name: "Termina 20r Grotto", role: ItemRole::OtherChest }, // 198
    ItemInfo { name: "Termina Underwater 20r", role: ItemRole::OtherChest }, // 199
    ItemInfo { name: "Termina Grass 20r", role: ItemRole::OtherChest }, // 200
    ItemInfo { name: "Termina Stump 20r", role: ItemRole::OtherChest }, // 201
    ItemInfo { name: "Great Bay Coast Grotto", role: ItemRole::OtherChest }, // 202
    ItemInfo { name: "Great Bay Cape Ledge (1)", role: ItemRole::OtherChest }, // 203
    ItemInfo { name: "Great Bay Cape Ledge (2)", role: ItemRole::OtherChest }, // 204
    ItemInfo { name: "Great Bay Cape Grotto", role: ItemRole::OtherChest }, // 205
    ItemInfo { name: "Great Bay Cape Underwater", role: ItemRole::OtherChest }, // 206
    ItemInfo { name: "PF Exterior 20r (1)", role: ItemRole::OtherChest }, // 207
    ItemInfo { name: "PF Exterior 20r (2)", role: ItemRole::OtherChest }, // 208
    ItemInfo { name: "PF Exterior 20r (3)", role: ItemRole::OtherChest }, // 209
    ItemInfo { name: "Path to Swamp Grotto", role: ItemRole::OtherChest }, // 210
    ItemInfo { name: "Doggy Racetrack 50r", role: ItemRole::OtherChest }, // 211
    ItemInfo { name: "Graveyard Grotto", role: ItemRole::OtherChest }, // 212
    ItemInfo { name: "Swamp Grotto", role: ItemRole::OtherChest }, // 213
    ItemInfo { name: "Woodfall 5r", role: ItemRole::OtherChest }, // 214
    ItemInfo { name: "Woodfall 20r", role: ItemRole::OtherChest }, // 215
    ItemInfo { name: "Well Right Path 50r", role: ItemRole::OtherChest }, // 216
    ItemInfo { name: "Well Left Path 50r", role: ItemRole::OtherChest }, // 217
    ItemInfo { name: "Mountain Village Chest (Spring)", role: ItemRole::OtherChest }, // 218
    ItemInfo { name: "Mountain Village Grotto Bottle (Spring)", role: ItemRole::OtherChest }, // 219
    ItemInfo { name: "Path to Ikana 20r", role: ItemRole::OtherChest }, // 220
    ItemInfo { name: "Path to Ikana Grotto", role: ItemRole::OtherChest }, // 221
    ItemInfo { name: "Stone Tower 100r", role: ItemRole::OtherChest }, // 222
    ItemInfo { name: "Stone Tower Bombchu 10", role: ItemRole::OtherChest }, // 223
    ItemInfo { name: "Stone Tower Magic Bean", role: ItemRole::OtherChest }, // 224
    ItemInfo { name: "Path to Snowhead Grotto", role: ItemRole::OtherChest }, // 225
    ItemInfo { name: "Twin Islands 20r", role: ItemRole::OtherChest }, // 226
    ItemInfo { name: "Secret Shrine HP", role: ItemRole::OtherChest }, // 227
    ItemInfo { name: "Secret Shrine Dinolfos", role: ItemRole::OtherChest }, // 228
    ItemInfo { name: "Secret Shrine Wizzrobe", role: ItemRole::OtherChest }, // 229
    ItemInfo { name: "Secret Shrine Wart", role: ItemRole::OtherChest }, // 230
    ItemInfo { name: "Secret Shrine Garo Master", role: ItemRole::OtherChest }, // 231
    ItemInfo { name: "Inn Staff Room", role: ItemRole::OtherChest }, // 232
    ItemInfo { name: "Inn Guest Room", role: ItemRole::OtherChest }, // 233
    ItemInfo { name: "Mystery Woods Grotto", role: ItemRole::OtherChest }, // 234
    ItemInfo { name: "East Clock Town 100r", role: ItemRole::OtherChest }, // 235
    ItemInfo { name: "South Clock Town 20r", role: ItemRole::OtherChest }, // 236
    ItemInfo { name: "South Clock Town 50r", role: ItemRole::OtherChest }, // 237
    ItemInfo { name: "Bank HP", role: ItemRole::HeartPieceReward }, // 238
    ItemInfo { name: "South Clock Town HP", role: ItemRole::HeartPieceStanding }, // 239
    ItemInfo { name: "North Clock Town HP", role: ItemRole::HeartPieceStanding }, // 240
    ItemInfo { name: "Path to Swamp HP", role: ItemRole::HeartPieceStanding }, // 241
    ItemInfo { name: "Swamp Scrub HP", role: ItemRole::HeartPieceStanding }, // 242
    ItemInfo { name: "Deku Palace HP", role: ItemRole::HeartPieceStanding }, // 243
    ItemInfo { name: "Goron Village Scrub HP", role: ItemRole::HeartPieceStanding }, // 244
    ItemInfo { name: "Bio Baba Grotto HP", role: ItemRole::HeartPieceStanding }, // 245
    ItemInfo { name: "Lab Fish HP", role: ItemRole::HeartPieceStanding }, // 246
    ItemInfo { name: "Great Bay Like-Like HP", role: ItemRole::HeartPieceStanding }, // 247
    ItemInfo { name: "Pirates' Fortress HP", role: ItemRole::HeartPieceStanding }, // 248
    ItemInfo { name: "Zora Hall Scrub HP", role: ItemRole::HeartPieceStanding }, // 249
    ItemInfo { name: "Path to Snowhead HP", role: ItemRole::HeartPieceStanding }, // 250
    ItemInfo { name: "Great Bay Coast HP", role: ItemRole::HeartPieceStanding }, // 251
    ItemInfo { name: "Ikana Scrub HP", role: ItemRole::HeartPieceStanding }, // 252
    ItemInfo { name: "Ikana Castle HP", role: ItemRole::HeartPieceStanding }, // 253
    ItemInfo { name: "Odolwa Heart Container", role: ItemRole::HeartPieceStanding }, // 254
    ItemInfo { name: "Goht Heart Container", role: ItemRole::HeartPieceStanding }, // 255
    ItemInfo { name: "Gyorg Heart Container", role: ItemRole::HeartPieceStanding }, // 256
    ItemInfo { name: "Twinmold Heart Container", role: ItemRole::HeartPieceStanding }, // 257
    ItemInfo { name: "Map: Clock Town", role: ItemRole::TingleMap }, // 258
    ItemInfo { name: "Map: Woodfall", role: ItemRole::TingleMap }, // 259
    ItemInfo { name: "Map: Snowhead", role: ItemRole::TingleMap }, // 260
    ItemInfo { name: "Map: Romani Ranch", role: ItemRole::TingleMap }, // 261
    ItemInfo { name: "Map: Great Bay", role: ItemRole::TingleMap }, // 262
    ItemInfo { name: "Map: Stone Tower", role: ItemRole::TingleMap }, // 263
    ItemInfo { name: "Goron Racetrack Grotto", role: ItemRole::OtherChest }, // 264
];

/// Display name, or a placeholder for ids past the catalogue (user logic files
/// may carry extra records).
pub fn item_name(id: usize) -> &'static str {
    ITEMS.get(id).map(|info| info.name).unwrap_or("?")
}

pub fn item_role(id: usize) -> Option<ItemRole> {
    ITEMS.get(id).map(|info| info.role)
}

pub fn is_fake_item(id: usize) -> bool {
    matches!(item_role(id), Some(ItemRole::Area) | Some(ItemRole::Aggregate))
}

/// Items the player loses when time is rewound.
pub fn is_temporary_item(id: usize) -> bool {
    matches!(item_role(id), Some(ItemRole::Trade) | Some(ItemRole::Quest))
}

pub fn is_moon_item(id: usize) -> bool {
    item_role(id) == Some(ItemRole::Moon)
}

pub fn is_shop_item(id: usize) -> bool {
    item_role(id) == Some(ItemRole::Shop)
}

pub fn is_dungeon_item(id: usize) -> bool {
    item_role(id) == Some(ItemRole::Dungeon)
}

pub fn is_bottle_catch_content(id: usize) -> bool {
    item_role(id) == Some(ItemRole::BottleCatch)
}

/// The block kept vanilla unless "other" items join the pool: overworld
/// chests, standing heart pieces, heart containers and tingle maps.
pub fn is_other_item(id: usize) -> bool {
    (CHEST_LENS_CAVE_RED_RUPEE..=CHEST_TO_GORON_RACE_GROTTO).contains(&id)
}

/// Ids that exist as placeable items (everything except areas and aggregates).
pub fn is_placeable(id: usize) -> bool {
    id < TOTAL_NUMBER_OF_ITEMS && !is_fake_item(id)
}

/// Compact numbering skips every fake id, so placeable items are numbered
/// contiguously from zero. Fake ids have no compact form.
pub fn to_compact_id(id: usize) -> Option<usize> {
    if !is_placeable(id) {
        return None;
    }
    let fakes_below = (0..id).filter(|&i| is_fake_item(i)).count();
    Some(id - fakes_below)
}

pub fn from_compact_id(compact: usize) -> Option<usize> {
    (0..TOTAL_NUMBER_OF_ITEMS)
        .filter(|&id| !is_fake_item(id))
        .nth(compact)
}

pub fn placeable_item_count() -> usize {
    (0..TOTAL_NUMBER_OF_ITEMS).filter(|&id| is_placeable(id)).count()
}
