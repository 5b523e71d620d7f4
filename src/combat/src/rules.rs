// src/combat/src/rules.rs

use serde::{Deserialize, Serialize};

/// Tunable constants for combat and exploration.
///
/// Defaults reproduce the stock game; the binary lets a config file
/// override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatRules {
    /// Chance that arriving somewhere outside the safe hub starts a fight
    pub encounter_chance: f64,
    /// Chance that a flee attempt succeeds
    pub flee_chance: f64,
    /// Chance an enemy with enough mana picks its skill
    pub enemy_skill_chance: f64,
    pub fireball_cost: u32,
    pub fireball_base_damage: u32,
    pub fireball_damage_per_level: u32,
    pub enemy_skill_cost: u32,
    pub enemy_skill_bonus: u32,
    /// Location where no encounters happen and the shop is open
    pub safe_hub: String,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            encounter_chance: 0.6,
            flee_chance: 0.5,
            enemy_skill_chance: 0.3,
            fireball_cost: 10,
            fireball_base_damage: 30,
            fireball_damage_per_level: 2,
            enemy_skill_cost: 5,
            enemy_skill_bonus: 10,
            safe_hub: "Town".to_string(),
        }
    }
}

impl CombatRules {
    /// Fireball damage for a caster of the given level.
    pub fn fireball_damage(&self, level: u32) -> u32 {
        self.fireball_base_damage
            .saturating_add(level.saturating_mul(self.fireball_damage_per_level))
    }

    /// A flee succeeds when the draw lands in the top `flee_chance` of the
    /// unit interval.
    pub fn flee_succeeds(&self, draw: f64) -> bool {
        draw >= 1.0 - self.flee_chance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fireball_scales_with_level() {
        let rules = CombatRules::default();
        assert_eq!(rules.fireball_damage(1), 32);
        assert_eq!(rules.fireball_damage(5), 40);
    }

    #[test]
    fn flee_threshold_is_half() {
        let rules = CombatRules::default();
        assert!(rules.flee_succeeds(0.5));
        assert!(rules.flee_succeeds(0.99));
        assert!(!rules.flee_succeeds(0.49));
    }
}
