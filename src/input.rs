//! Player action model and the sources that produce actions during a fight.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use combat::Enemy;
use hero::Hero;

/// Answer to the "which item?" prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemChoice {
    /// 1-based position in the inventory ledger
    Slot(usize),
    Cancel,
    Malformed(String),
}

impl ItemChoice {
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<usize>() {
            Ok(0) => ItemChoice::Cancel,
            Ok(n) => ItemChoice::Slot(n),
            Err(_) => ItemChoice::Malformed(text.trim().to_string()),
        }
    }
}

/// One combat action. Every variant costs the player's turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    UseItem(ItemChoice),
    /// Fireball
    UseSkill,
    Flee,
    Unknown(String),
}

impl PlayerAction {
    /// Map a combat menu answer (`1`-`4`). `UseItem` still needs an
    /// [`ItemChoice`]; it is returned here as a cancel placeholder.
    pub fn from_menu(text: &str) -> Self {
        match text.trim() {
            "1" => PlayerAction::Attack,
            "2" => PlayerAction::UseItem(ItemChoice::Cancel),
            "3" => PlayerAction::UseSkill,
            "4" => PlayerAction::Flee,
            other => PlayerAction::Unknown(other.to_string()),
        }
    }
}

/// Where the engine gets the player's next move from.
pub trait ActionSource {
    fn next_action(&mut self, hero: &Hero, enemy: &Enemy) -> io::Result<PlayerAction>;

    /// Receives each combat log line as it happens.
    fn observe(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Replays a fixed list of actions. Running dry is an input failure.
#[derive(Debug, Clone, Default)]
pub struct ScriptedActions {
    actions: VecDeque<PlayerAction>,
}

impl ScriptedActions {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl ActionSource for ScriptedActions {
    fn next_action(&mut self, _hero: &Hero, _enemy: &Enemy) -> io::Result<PlayerAction> {
        self.actions
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "action script exhausted"))
    }
}

/// Line-based prompt over any reader/writer pair (stdin/stdout in the game).
pub struct ConsoleActions<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleActions<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Print `prompt`, then read one trimmed line. End of input is an error.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> ActionSource for ConsoleActions<R, W> {
    fn observe(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }

    fn next_action(&mut self, hero: &Hero, enemy: &Enemy) -> io::Result<PlayerAction> {
        let (h, e) = (&hero.stats, &enemy.stats);
        writeln!(self.writer, "\n{}'s turn:", h.name)?;
        writeln!(self.writer, "HP: {}/{}  MP: {}/{}", h.hp, h.max_hp, h.mp, h.max_mp)?;
        writeln!(self.writer, "{} HP: {}/{}", e.name, e.hp, e.max_hp)?;
        writeln!(self.writer, "1. Attack\n2. Use Item\n3. Use Skill/Spell\n4. Run")?;

        let action = PlayerAction::from_menu(&self.ask("> ")?);
        if !matches!(action, PlayerAction::UseItem(_)) || hero.bag.inventory.is_empty() {
            return Ok(action);
        }

        writeln!(self.writer, "Your Inventory:")?;
        for (i, slot) in hero.bag.inventory.iter().enumerate() {
            writeln!(self.writer, "{}. {} x{}", i + 1, slot.name, slot.count)?;
        }
        writeln!(self.writer, "0. Cancel")?;
        let choice = self.ask("Choose item number to use: ")?;
        Ok(PlayerAction::UseItem(ItemChoice::parse(&choice)))
    }
}
