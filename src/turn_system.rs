//! Turn-based encounter engine.
//!
//! An [`Encounter`] walks a fixed cycle of states:
//!
//! `AwaitingPlayerAction -> CheckEnemyAlive -> AwaitingEnemyAction ->
//! CheckPlayerAlive -> AwaitingPlayerAction`
//!
//! and stops in `Victory`, `Defeat` or `Fled`. Each [`Encounter::submit`]
//! runs one full round: the player's action, then (if the fight goes on)
//! the enemy's. The hero is only borrowed for the duration of a call.

use std::io;

use combat::{CombatRules, Combatant, EffectOutcome, Enemy, EnemyTemplate, LevelUp, RandomSource};
use hero::{Hero, ItemUseError};
use items::ItemCatalog;
use thiserror::Error;
use tracing::{debug, info};

use crate::input::{ActionSource, ItemChoice, PlayerAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingPlayerAction,
    CheckEnemyAlive,
    AwaitingEnemyAction,
    CheckPlayerAlive,
    Victory,
    Defeat,
    Fled,
}

impl TurnState {
    pub fn is_terminal(self) -> bool {
        self.outcome().is_some()
    }

    pub fn outcome(self) -> Option<EncounterOutcome> {
        match self {
            TurnState::Victory => Some(EncounterOutcome::Victory),
            TurnState::Defeat => Some(EncounterOutcome::Defeat),
            TurnState::Fled => Some(EncounterOutcome::Fled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    Victory,
    Defeat,
    Fled,
}

/// What the hero got out of a fight. Empty unless the outcome is `Victory`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewards {
    pub exp: u32,
    pub gold: u32,
    pub level_ups: Vec<LevelUp>,
}

#[derive(Debug, Clone)]
pub struct EncounterResult {
    pub outcome: EncounterOutcome,
    pub rewards: Rewards,
    /// The enemy as the fight left it
    pub enemy: Enemy,
    /// Completed player actions
    pub turns: u32,
    /// Combat narrative for the player
    pub logs: Vec<String>,
}

#[derive(Debug, Error)]
pub enum EncounterError {
    #[error("the encounter is already over")]
    Finished,
    #[error("the encounter is still running")]
    NotFinished,
    #[error("could not read the player's action: {0}")]
    Input(#[from] io::Error),
}

/// A single fight against one freshly spawned enemy.
#[derive(Debug)]
pub struct Encounter<'r> {
    enemy: Enemy,
    rules: &'r CombatRules,
    state: TurnState,
    turns: u32,
    logs: Vec<String>,
}

impl<'r> Encounter<'r> {
    pub fn begin(template: &EnemyTemplate, rules: &'r CombatRules) -> Self {
        let enemy = template.spawn();
        info!(enemy = %enemy.stats.name, level = enemy.stats.level, "encounter started");
        Self {
            logs: vec![format!("A wild {} appears!", enemy.stats.name)],
            enemy,
            rules,
            state: TurnState::AwaitingPlayerAction,
            turns: 0,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    fn log(&mut self, message: String) {
        debug!(%message, "combat");
        self.logs.push(message);
    }

    fn transition(&mut self, next: TurnState) {
        debug!(from = ?self.state, to = ?next, "turn state");
        self.state = next;
    }

    /// Play one round with `action`. Returns the state the round ended in.
    pub fn submit<R: RandomSource + ?Sized>(
        &mut self,
        hero: &mut Hero,
        action: PlayerAction,
        catalog: &ItemCatalog,
        rng: &mut R,
    ) -> Result<TurnState, EncounterError> {
        if self.state != TurnState::AwaitingPlayerAction {
            return Err(EncounterError::Finished);
        }

        let fled = self.resolve_player_action(hero, action, catalog, rng);
        self.turns += 1;
        if fled {
            self.transition(TurnState::Fled);
            return Ok(self.state);
        }

        self.transition(TurnState::CheckEnemyAlive);
        if !self.enemy.is_alive() {
            self.transition(TurnState::Victory);
            return Ok(self.state);
        }

        self.transition(TurnState::AwaitingEnemyAction);
        self.enemy_turn(hero, rng);

        self.transition(TurnState::CheckPlayerAlive);
        if hero.is_alive() {
            self.transition(TurnState::AwaitingPlayerAction);
        } else {
            self.transition(TurnState::Defeat);
        }
        Ok(self.state)
    }

    /// Returns `true` if the hero got away.
    fn resolve_player_action<R: RandomSource + ?Sized>(
        &mut self,
        hero: &mut Hero,
        action: PlayerAction,
        catalog: &ItemCatalog,
        rng: &mut R,
    ) -> bool {
        match action {
            PlayerAction::Attack => {
                let dealt = self.enemy.take_damage(hero.stats.attack);
                self.log(format!("You attacked {} for {dealt} damage.", self.enemy.name()));
            }
            PlayerAction::UseItem(choice) => self.use_item(hero, choice, catalog),
            PlayerAction::UseSkill => {
                if !hero.use_mp(self.rules.fireball_cost) {
                    self.log("Not enough MP!".to_string());
                } else {
                    let dealt = self
                        .enemy
                        .take_damage(self.rules.fireball_damage(hero.level()));
                    self.log(format!("Fireball hits {} for {dealt} damage.", self.enemy.name()));
                }
            }
            PlayerAction::Flee => {
                let draw = rng.next_f64();
                if self.rules.flee_succeeds(draw) {
                    self.log("You successfully fled!".to_string());
                    return true;
                }
                self.log("Failed to flee!".to_string());
            }
            PlayerAction::Unknown(text) => {
                debug!(input = %text, "unrecognised action");
                self.log("Invalid input, you lose your turn!".to_string());
            }
        }
        false
    }

    fn use_item(&mut self, hero: &mut Hero, choice: ItemChoice, catalog: &ItemCatalog) {
        if hero.bag.inventory.is_empty() {
            self.log("You have no items to use.".to_string());
            return;
        }
        let position = match choice {
            ItemChoice::Slot(position) => position,
            ItemChoice::Cancel => {
                self.log("You put your bag away.".to_string());
                return;
            }
            ItemChoice::Malformed(_) => {
                self.log("Invalid input.".to_string());
                return;
            }
        };
        let Some(name) = hero
            .bag
            .inventory
            .get_by_position(position)
            .map(|slot| slot.name.clone())
        else {
            self.log("Invalid choice.".to_string());
            return;
        };

        let message = match hero.use_consumable(&name, catalog, Some(&mut self.enemy.stats)) {
            Ok(EffectOutcome::Healed(n)) => format!("You used {name} and restored {n} HP."),
            Ok(EffectOutcome::ManaRestored(n)) => format!("You used {name} and restored {n} MP."),
            Ok(EffectOutcome::Damaged(n)) => {
                format!("{name} hits {} for {n} damage.", self.enemy.name())
            }
            Ok(EffectOutcome::NoEffect) => format!("You used {name}. Nothing happens."),
            Err(ItemUseError::NotConsumable(_)) => format!("{name} cannot be used in battle."),
            Err(err) => {
                debug!(%err, "item use rejected");
                "Invalid item choice.".to_string()
            }
        };
        self.log(message);
    }

    fn enemy_turn<R: RandomSource + ?Sized>(&mut self, hero: &mut Hero, rng: &mut R) {
        let action = self.enemy.choose_action(self.rules, rng);
        let strike = self.enemy.strike(action, &mut hero.stats, self.rules);
        let message = match strike.action {
            combat::EnemyAction::Skill => format!(
                "{} uses a special skill for {} damage!",
                self.enemy.name(),
                strike.damage
            ),
            combat::EnemyAction::Attack => format!(
                "{} attacks {} for {} damage.",
                self.enemy.name(),
                hero.name(),
                strike.damage
            ),
        };
        self.log(message);
    }

    /// Close the encounter, paying out rewards on victory.
    pub fn finish(mut self, hero: &mut Hero) -> Result<EncounterResult, EncounterError> {
        let outcome = self.state.outcome().ok_or(EncounterError::NotFinished)?;
        let mut rewards = Rewards::default();

        match outcome {
            EncounterOutcome::Victory => {
                rewards.exp = self.enemy.exp_reward;
                rewards.gold = self.enemy.gold_reward;
                self.log(format!("You defeated the {}!", self.enemy.name()));
                rewards.level_ups = hero.gain_exp(rewards.exp);
                hero.add_gold(rewards.gold);
                self.log(format!("You gained {} EXP and {} Gold.", rewards.exp, rewards.gold));
                for up in &rewards.level_ups {
                    self.log(format!("Level up! You are now level {}.", up.level));
                }
            }
            EncounterOutcome::Defeat => self.log("You were defeated. Game Over.".to_string()),
            EncounterOutcome::Fled => {}
        }

        info!(
            enemy = %self.enemy.name(),
            ?outcome,
            turns = self.turns,
            exp = rewards.exp,
            gold = rewards.gold,
            "encounter finished"
        );
        Ok(EncounterResult {
            outcome,
            rewards,
            enemy: self.enemy,
            turns: self.turns,
            logs: self.logs,
        })
    }
}

/// Run a whole fight, pulling actions from `input` until it ends.
pub fn start_encounter<R, A>(
    hero: &mut Hero,
    template: &EnemyTemplate,
    catalog: &ItemCatalog,
    rules: &CombatRules,
    rng: &mut R,
    input: &mut A,
) -> Result<EncounterResult, EncounterError>
where
    R: RandomSource + ?Sized,
    A: ActionSource + ?Sized,
{
    let mut encounter = Encounter::begin(template, rules);
    let mut shown = 0;
    while !encounter.state().is_terminal() {
        shown = forward_logs(input, encounter.logs(), shown)?;
        let action = input.next_action(hero, encounter.enemy())?;
        encounter.submit(hero, action, catalog, rng)?;
    }
    let result = encounter.finish(hero)?;
    forward_logs(input, &result.logs, shown)?;
    Ok(result)
}

/// Hand log lines from `shown` onwards to the input side. Returns the new
/// watermark.
fn forward_logs<A: ActionSource + ?Sized>(input: &mut A, logs: &[String], shown: usize) -> io::Result<usize> {
    for line in &logs[shown..] {
        input.observe(line)?;
    }
    Ok(logs.len())
}
