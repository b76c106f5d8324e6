//! Battle log tail and cursor

use skirmish_protocol::{Battle, LogEntry};

/// Number of log lines shown under the field
pub const LOG_TAIL: usize = 3;

/// The last `n` log messages, oldest first
pub fn recent_logs(battle: &Battle, n: usize) -> impl Iterator<Item = &str> {
    let start = battle.logs.len().saturating_sub(n);
    battle.logs[start..].iter().map(|e| e.message.as_str())
}

/// Remembers how much of a battle log was already shown
///
/// Every snapshot carries the whole log, so the cursor only stores a count.
#[derive(Debug, Clone, Default)]
pub struct LogCursor {
    battle_id: Option<u64>,
    seen: usize,
}

impl LogCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries of `battle` not returned by a previous call
    ///
    /// Starts over when the battle changes or the log got shorter.
    pub fn advance<'a>(&mut self, battle: &'a Battle) -> &'a [LogEntry] {
        if self.battle_id != Some(battle.id) || battle.logs.len() < self.seen {
            self.battle_id = Some(battle.id);
            self.seen = 0;
        }

        let fresh = &battle.logs[self.seen..];
        self.seen = battle.logs.len();
        fresh
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn seen(&self) -> usize {
        self.seen
    }
}
