//! Simulated processing latency and per-client request sequencing.
//!
//! A request takes a ticket on its channel, waits out a random delay, then
//! runs its generator. If a newer request on the same client and channel was
//! issued during the wait, the response is marked stale.
//!
//! Only ids the caller sent are tracked. Ids minted by the middleware are
//! never seen again, so their single request is always current.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use shared::{Channel, Envelope, Sequencer, Ticket};
use uuid::Uuid;

use crate::config::{LatencyConfig, LatencyRange};
use crate::session::ClientId;

const MAX_TRACKED_CLIENTS: usize = 10_000;
const IDLE_GRACE: Duration = Duration::from_secs(5);

struct ClientSequence {
    sequencer: Sequencer,
    last_seen: Instant,
}

struct Registry {
    clients: HashMap<Uuid, ClientSequence>,
    sweep_at: usize,
}

#[derive(Clone)]
pub struct Simulator {
    latency: LatencyConfig,
    idle_after: Duration,
    registry: Arc<Mutex<Registry>>,
}

impl Simulator {
    pub fn new(latency: LatencyConfig) -> Self {
        let idle_after = latency.longest() + IDLE_GRACE;
        Self {
            latency,
            idle_after,
            registry: Arc::new(Mutex::new(Registry {
                clients: HashMap::new(),
                sweep_at: MAX_TRACKED_CLIENTS,
            })),
        }
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        // A poisoned map only holds counters; keep serving.
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Issues the next ticket for `client` on `channel`.
    ///
    /// Past the tracking limit, clients idle for longer than any delay are
    /// dropped. A client seen within that window may still be waiting on a
    /// response, so it is kept and the table grows instead.
    pub fn issue(&self, client: Uuid, channel: Channel) -> Ticket {
        let now = Instant::now();
        let mut registry = self.registry();

        if registry.clients.len() >= registry.sweep_at && !registry.clients.contains_key(&client)
        {
            let idle_after = self.idle_after;
            let before = registry.clients.len();
            registry
                .clients
                .retain(|_, entry| now.duration_since(entry.last_seen) <= idle_after);
            let remaining = registry.clients.len();
            registry.sweep_at = (remaining * 2).max(MAX_TRACKED_CLIENTS);
            log::debug!(
                "Dropped {} idle clients, {} still tracked",
                before - remaining,
                remaining
            );
        }

        let entry = registry
            .clients
            .entry(client)
            .or_insert_with(|| ClientSequence {
                sequencer: Sequencer::new(),
                last_seen: now,
            });
        entry.last_seen = now;
        entry.sequencer.issue(channel)
    }

    pub fn is_current(&self, client: Uuid, ticket: &Ticket) -> bool {
        self.registry()
            .clients
            .get(&client)
            .is_some_and(|entry| entry.sequencer.is_current(ticket))
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.registry().clients.len()
    }

    pub fn range_for(&self, channel: Channel) -> LatencyRange {
        self.latency.range_for(channel)
    }

    pub fn rethreshold_range(&self) -> LatencyRange {
        self.latency.rethreshold
    }

    /// Issues a ticket, sleeps for a delay drawn from `range`, then runs
    /// `work` and wraps its output.
    pub async fn run<T, E, F>(
        &self,
        client: ClientId,
        channel: Channel,
        range: LatencyRange,
        work: F,
    ) -> Result<Envelope<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let ticket = if client.assigned {
            Sequencer::new().issue(channel)
        } else {
            self.issue(client.id, channel)
        };
        let delay = range.sample(&mut rand::rng(), self.latency.scale);
        log::debug!(
            "{} request #{} for client {} delayed {:?}",
            channel,
            ticket.sequence,
            client.id,
            delay
        );
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let data = work()?;
        let stale = !client.assigned && !self.is_current(client.id, &ticket);
        if stale {
            log::info!(
                "{} request #{} for client {} superseded",
                channel,
                ticket.sequence,
                client.id
            );
        }

        Ok(Envelope {
            sequence: ticket.sequence,
            stale,
            data,
        })
    }
}
