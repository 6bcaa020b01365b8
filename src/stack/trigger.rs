//! Trigger kinds indexing the effect stack.

use serde::{Deserialize, Serialize};

/// The moment an effect listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TriggerKind {
    #[default]
    OnPlay = 0,
    OnMove = 1,
    OnAttack = 2,
    OnCombat = 3,
    OnDraw = 4,
    OnEndOfTurn = 5,
    OnStartOfTurn = 6,
    Cast = 7,
}

impl TriggerKind {
    /// Number of trigger kinds.
    pub const COUNT: usize = 8;

    /// All trigger kinds in bucket order.
    pub const ALL: [TriggerKind; Self::COUNT] = [
        TriggerKind::OnPlay,
        TriggerKind::OnMove,
        TriggerKind::OnAttack,
        TriggerKind::OnCombat,
        TriggerKind::OnDraw,
        TriggerKind::OnEndOfTurn,
        TriggerKind::OnStartOfTurn,
        TriggerKind::Cast,
    ];

    /// Bucket index in the stack.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TriggerKind::OnPlay => "on play",
            TriggerKind::OnMove => "on move",
            TriggerKind::OnAttack => "on attack",
            TriggerKind::OnCombat => "on combat",
            TriggerKind::OnDraw => "on draw",
            TriggerKind::OnEndOfTurn => "end of turn",
            TriggerKind::OnStartOfTurn => "start of turn",
            TriggerKind::Cast => "cast",
        };
        f.write_str(name)
    }
}
