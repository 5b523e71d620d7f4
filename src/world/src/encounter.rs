// src/world/src/encounter.rs

use std::collections::HashMap;

use combat::{Bestiary, EnemyTemplate, RandomSource};
use tracing::debug;

use crate::{WorldError, WorldGraph};

/// Which monster lives where. Sparse: anything not listed meets the fallback.
#[derive(Debug, Clone)]
pub struct EncounterTable {
    entries: HashMap<String, String>,
    fallback: String,
}

impl EncounterTable {
    pub fn new<I, L, E>(entries: I, fallback: &str) -> Self
    where
        I: IntoIterator<Item = (L, E)>,
        L: Into<String>,
        E: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(l, e)| (l.into(), e.into())).collect(),
            fallback: fallback.to_string(),
        }
    }

    pub fn standard() -> Self {
        Self::new(
            [
                ("Forest", "Goblin"),
                ("Mountain", "Orc"),
                ("Dungeon Entrance", "Slime"),
                ("Dungeon", "Dragon"),
            ],
            "Rat",
        )
    }

    /// Template name for `location`.
    pub fn template_for(&self, location: &str) -> &str {
        self.entries
            .get(location)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .values()
            .map(String::as_str)
            .chain(std::iter::once(self.fallback.as_str()))
    }
}

/// Decides on arrival whether a fight starts and against what.
#[derive(Debug, Clone, Copy)]
pub struct EncounterGenerator<'a> {
    world: &'a WorldGraph,
    table: &'a EncounterTable,
    bestiary: &'a Bestiary,
}

impl<'a> EncounterGenerator<'a> {
    /// Fails if the table names a monster the bestiary cannot spawn.
    pub fn new(world: &'a WorldGraph, table: &'a EncounterTable, bestiary: &'a Bestiary) -> Result<Self, WorldError> {
        if let Some(missing) = table.names().find(|name| bestiary.get(name).is_none()) {
            return Err(WorldError::UnknownEnemy(missing.to_string()));
        }
        Ok(Self { world, table, bestiary })
    }

    /// Roll for an encounter at `location`.
    ///
    /// The safe hub never rolls. Elsewhere one draw below `chance` starts a
    /// fight.
    pub fn roll<R: RandomSource + ?Sized>(&self, location: &str, chance: f64, rng: &mut R) -> Option<&'a EnemyTemplate> {
        if self.world.is_safe(location) {
            return None;
        }
        if !rng.chance(chance) {
            debug!(location, "no encounter");
            return None;
        }
        let name = self.table.template_for(location);
        debug!(location, enemy = name, "encounter rolled");
        self.bestiary.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat::ScriptedRng;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_falls_back_for_unlisted_locations() {
        let table = EncounterTable::standard();
        assert_eq!(table.template_for("Forest"), "Goblin");
        assert_eq!(table.template_for("Dungeon"), "Dragon");
        assert_eq!(table.template_for("Feycross"), "Rat");
        assert_eq!(table.fallback(), "Rat");
    }

    #[test]
    fn hub_takes_no_draw() {
        let world = WorldGraph::standard();
        let table = EncounterTable::standard();
        let bestiary = Bestiary::standard();
        let generator = EncounterGenerator::new(&world, &table, &bestiary).unwrap();
        let mut rng = ScriptedRng::constant(0.0);

        assert!(generator.roll("Town", 0.6, &mut rng).is_none());
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn draw_below_chance_spawns_location_enemy() {
        let world = WorldGraph::standard();
        let table = EncounterTable::standard();
        let bestiary = Bestiary::standard();
        let generator = EncounterGenerator::new(&world, &table, &bestiary).unwrap();
        let mut rng = ScriptedRng::new([0.59, 0.6, 0.1]);

        assert_eq!(generator.roll("Mountain", 0.6, &mut rng).map(|t| t.name.as_str()), Some("Orc"));
        assert!(generator.roll("Mountain", 0.6, &mut rng).is_none());
        assert_eq!(generator.roll("Sky Citadel", 0.6, &mut rng).map(|t| t.name.as_str()), Some("Rat"));
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn unknown_table_entry_is_rejected() {
        let world = WorldGraph::standard();
        let table = EncounterTable::new([("Forest", "Basilisk")], "Rat");
        let bestiary = Bestiary::standard();

        assert_eq!(
            EncounterGenerator::new(&world, &table, &bestiary).unwrap_err(),
            WorldError::UnknownEnemy("Basilisk".into())
        );
    }
}
