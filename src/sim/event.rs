/// Events emitted during a simulation step.
/// The presentation layer turns these into sound cues and log lines.

use crate::domain::actor::PlayerId;
use crate::domain::geom::Pos;

use super::world::GameResult;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    CoinsGiven { player: PlayerId, amount: u32 },
    CoinsTaken { player: PlayerId, amount: u32 },
    StarGiven { player: PlayerId },
    VortexGiven { player: PlayerId },
    VortexFired { player: PlayerId },
    VortexHit { at: Pos },
    BowserActivated { player: PlayerId },
    BooActivated { player: PlayerId },
    BankWithdraw { player: PlayerId, amount: u32 },
    BankDeposit { player: PlayerId, amount: u32 },
    DroppingCreated { at: Pos },
    DroppingActivated { player: PlayerId },
    Teleported { player: PlayerId },
    GameFinished { result: GameResult },
}
