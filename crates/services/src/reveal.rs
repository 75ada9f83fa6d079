use folio_core::model::{RevealStep, RevealTicket};
use rand::Rng;
use tokio::time::sleep;

use crate::settings::RevealSettings;

/// How a reveal run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEnd {
    /// Every unit was shown and the prompt now awaits input.
    Completed,
    /// The ticket was superseded (skip, restart, next prompt, unmount).
    Cancelled,
}

/// Drive one typewriter reveal to completion or cancellation.
///
/// Waits `pre_delay`, then calls `advance` with `ticket` once per unit,
/// sleeping a jittered `unit_delay` after each. `on_unit` runs for every unit
/// revealed. The run ends the first time `advance` reports `Finished` or
/// `Stale`, so a superseded reveal never touches state again.
pub async fn run_reveal<R, A, U>(
    settings: &RevealSettings,
    ticket: RevealTicket,
    rng: &mut R,
    mut advance: A,
    mut on_unit: U,
) -> RevealEnd
where
    R: Rng + ?Sized,
    A: FnMut(RevealTicket) -> RevealStep,
    U: FnMut(char, &mut R),
{
    sleep(settings.pre_delay).await;
    loop {
        match advance(ticket) {
            RevealStep::Unit(unit) => {
                on_unit(unit, &mut *rng);
                sleep(settings.unit_delay_with_jitter(&mut *rng)).await;
            }
            RevealStep::Finished => return RevealEnd::Completed,
            RevealStep::Stale => return RevealEnd::Cancelled,
        }
    }
}
