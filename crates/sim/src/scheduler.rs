//! Cadence drivers for [`Simulator::attempt`].
//!
//! Both variants call the same operation; they differ only in when.

use chrono::Utc;
use rand::Rng;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::SimError;
use crate::simulator::{SaleOutcome, Simulator};

/// Interactive-mode tick: on each display refresh, gate by business hours
/// and then run one attempt with the configured probability.
pub async fn tick_once(
    sim: &Simulator,
    rng: &mut (impl Rng + ?Sized),
) -> Result<Option<SaleOutcome>, SimError> {
    let now = Utc::now();
    if !sim.hours().is_open(now) {
        return Ok(None);
    }
    if !rng.gen_bool(sim.config().tick_chance) {
        return Ok(None);
    }
    sim.attempt(rng, now).await
}

/// Standalone mode: loop forever. While open, attempt a sale and pause a
/// random 10-30 s; while closed, sleep until the next opening (at least a
/// minute, so clock drift cannot busy-loop us).
///
/// Store failures abandon that attempt and the loop continues; a reorder
/// log write failure propagates out.
pub async fn run_standalone(sim: &Simulator, rng: &mut (impl Rng + ?Sized)) -> Result<(), SimError> {
    info!("starting transaction simulation loop");
    loop {
        let now = Utc::now();
        if sim.hours().is_open(now) {
            match sim.attempt(rng, now).await {
                Ok(Some(outcome)) => {
                    info!(
                        order_id = outcome.order_id.value(),
                        restocks = outcome.restocks.len(),
                        "simulated transaction committed"
                    );
                }
                Ok(None) => {}
                Err(e @ SimError::Log(_)) => return Err(e),
                Err(e) => warn!(error = %e, "simulation attempt failed; continuing"),
            }
            let pause = rng.gen_range(sim.config().min_pause_secs..=sim.config().max_pause_secs);
            tokio::time::sleep(Duration::from_secs(pause)).await;
        } else {
            let next = sim.hours().next_opening(now);
            let wait = (next - now).num_seconds().max(60) as u64;
            info!(reopens_in_secs = wait, "shop is closed; waiting for opening hour");
            tokio::time::sleep(Duration::from_secs(wait)).await;
        }
    }
}
