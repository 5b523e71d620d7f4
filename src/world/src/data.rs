// src/world/src/data.rs

/// Authored world: `(name, description, connections)`.
///
/// Connections are kept exactly as written, including the few that point at
/// places never defined or that have no way back.
pub(crate) const LOCATIONS: &[(&str, &str, &[&str])] = &[
    (
        "Town",
        "You are in a peaceful town. You can buy items or travel.",
        &["Forest", "Dungeon Entrance"],
    ),
    (
        "Forest",
        "A dense forest with wild monsters roaming.",
        &["Town", "Mountain"],
    ),
    (
        "Mountain",
        "A rocky mountain range, home to fierce beasts.",
        &["Forest", "Dungeon Entrance"],
    ),
    (
        "Dungeon Entrance",
        "The entrance to a dark and dangerous dungeon.",
        &["Town", "Mountain", "Dungeon"],
    ),
    (
        "Dungeon",
        "A dark dungeon with powerful monsters and treasures.",
        &["Dungeon Entrance"],
    ),
    (
        "Misty Swamp",
        "A foggy swamp with hidden dangers beneath the murky waters.",
        &["Forest", "Haunted Grove"],
    ),
    (
        "Crystal Lake",
        "A beautiful lake known for its reflective waters and lurking water spirits.",
        &["Town", "Misty Swamp"],
    ),
    (
        "Haunted Grove",
        "A cursed grove, where trees whisper forgotten names.",
        &["Misty Swamp", "Abandoned Castle"],
    ),
    (
        "Wizards Tower",
        "The tower of a powerful wizard. Few are allowed inside.",
        &["Town"],
    ),
    (
        "Ancient Ruins",
        "Collapsed stones and relics of a forgotten civilization.",
        &["Mountain", "Cave"],
    ),
    (
        "Frozen Tundra",
        "A cold, desolate place where only the toughest survive.",
        &["Dungeon", "Ice Cavern"],
    ),
    (
        "Ice Cavern",
        "Crystalline walls echo with the howls of icy monsters.",
        &["Frozen Tundra"],
    ),
    (
        "Sunken Temple",
        "A temple partially submerged in water, hiding sacred artifacts.",
        &["Crystal Lake"],
    ),
    (
        "Volcano Core",
        "The heart of a volcano, where fire elementals roam.",
        &["Mountain"],
    ),
    (
        "Sky Bridge",
        "A floating bridge of light connecting realms.",
        &["Wizards Tower", "Sky Citadel"],
    ),
    (
        "Sky Citadel",
        "A city in the clouds, home of the Celestial Order.",
        &["Sky Bridge"],
    ),
    (
        "Ashen Ridge",
        "A mountain pass blackened by ancient volcanic fires.",
        &["Mountain", "Volcano Core"],
    ),
    (
        "Windscar Plateau",
        "An elevated land swept by fierce, unnatural winds.",
        &["Ashen Ridge", "Sky Bridge"],
    ),
    (
        "Silent Marsh",
        "A lifeless swamp where even frogs fear to croak.",
        &["Misty Swamp", "Haunted Grove"],
    ),
    (
        "Frostfang Peak",
        "A peak so cold it freezes breath midair.",
        &["Frozen Tundra", "Ice Cavern"],
    ),
    (
        "Twilight Hollow",
        "A forest shrouded in permanent dusk.",
        &["Forest", "Haunted Grove"],
    ),
    (
        "Bloodmist Vale",
        "A valley filled with red mist and screams at night.",
        &["Dungeon", "Ancient Ruins"],
    ),
    (
        "Crimson Dunes",
        "Desert sands tinged with red, stained by forgotten battles.",
        &["Sunken Temple", "Crystal Lake"],
    ),
    (
        "Shimmering Strand",
        "A beach where the sand sparkles with ancient magic.",
        &["Crystal Lake", "Sunken Temple"],
    ),
    (
        "Echo Caverns",
        "Caves that echo not just sound, but memory.",
        &["Cave", "Ancient Ruins"],
    ),
    (
        "Gloomspire",
        "A towering ruin that pierces the clouds like a dagger.",
        &["Abandoned Castle", "Dungeon Entrance"],
    ),
    (
        "Obsidian Flats",
        "Vast black plains of cooled lava, still warm to the touch.",
        &["Volcano Core", "Ashen Ridge"],
    ),
    (
        "Moonlit Cliffs",
        "White cliffs that shine under the moonlight.",
        &["Sky Bridge", "Crystal Lake"],
    ),
    (
        "Gravewatch Hill",
        "A grassy hill covered in forgotten gravestones.",
        &["Haunted Grove", "Twilight Hollow"],
    ),
    (
        "Wailing Coast",
        "The waves here howl like the lost souls.",
        &["Shimmering Strand", "Sunken Temple"],
    ),
    (
        "Verdant Wilds",
        "Overgrown jungle teeming with aggressive flora.",
        &["Forest", "Twilight Hollow"],
    ),
    (
        "Ivory Steps",
        "A staircase carved from bones leads into the mountain.",
        &["Gloomspire", "Dungeon"],
    ),
    (
        "Blightwoods",
        "Rotting trees and decayed beasts prowl this cursed forest.",
        &["Forest", "Twilight Hollow"],
    ),
    (
        "Thornreach",
        "A thicket where brambles whisper warnings.",
        &["Verdant Wilds", "Blightwoods"],
    ),
    (
        "Scorchtrail",
        "A trail of ash and burn marks left by fire beasts.",
        &["Volcano Core", "Ashen Ridge"],
    ),
    (
        "Spectral Glade",
        "Phantom deer roam this ghostly clearing.",
        &["Gravewatch Hill", "Twilight Hollow"],
    ),
    (
        "Silvergrove",
        "An enchanted grove with trees of silver bark.",
        &["Verdant Wilds", "Wizards Tower"],
    ),
    (
        "Sunspire Citadel",
        "A shining fortress above the clouds.",
        &["Sky Citadel", "Sky Bridge"],
    ),
    (
        "Mirror Depths",
        "Still waters reflect more than just your face.",
        &["Sunken Temple", "Crystal Lake"],
    ),
    (
        "Rift Canyon",
        "A deep chasm split by an ancient battle of gods.",
        &["Dungeon Entrance", "Obsidian Flats"],
    ),
    (
        "Celestial Garden",
        "Floating islands with flowers that sing.",
        &["Sky Citadel", "Sunspire Citadel"],
    ),
    (
        "Mirevault",
        "An ancient vault buried deep beneath the swamp.",
        &["Silent Marsh", "Echo Caverns"],
    ),
    (
        "Ashvale",
        "Blackened fields where nothing grows anymore.",
        &["Ashen Ridge", "Scorchtrail"],
    ),
    (
        "Driftwood Shoal",
        "A beach littered with broken ships and forgotten cargo.",
        &["Wailing Coast", "Mirror Depths"],
    ),
    (
        "Cindershade Keep",
        "Ruins of a keep destroyed by fire magic.",
        &["Blightwoods", "Ashvale"],
    ),
    (
        "Hollowcore",
        "A hidden city built into the mountain's heart.",
        &["Frostfang Peak", "Ivory Steps"],
    ),
    (
        "Blackspire Bluff",
        "A sheer cliff overlooking eternal darkness below.",
        &["Gloomspire", "Obsidian Flats"],
    ),
    (
        "Thundervale",
        "Storms constantly roar across this jagged valley.",
        &["Sky Bridge", "Rift Canyon"],
    ),
    (
        "Ebonroot",
        "An ancient tree at the center of a dead forest.",
        &["Blightwoods", "Thornreach"],
    ),
    (
        "Feycross",
        "A glade where fae spirits dance and meddle.",
        &["Silvergrove", "Celestial Garden"],
    ),
];
