//! Request sequencing.
//!
//! Every request on a channel takes a ticket with the next sequence number.
//! When its result is ready the caller asks whether the ticket is still the
//! latest one; if a newer request started meanwhile the result is stale.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Channel {
    Detection,
    Text,
    Generation,
    MultiModal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub channel: Channel,
    pub sequence: u64,
}

#[derive(Debug, Default, Clone)]
pub struct Sequencer {
    latest: HashMap<Channel, u64>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket on `channel`. Sequence numbers start at 1.
    pub fn issue(&mut self, channel: Channel) -> Ticket {
        let latest = self.latest.entry(channel).or_insert(0);
        *latest += 1;
        Ticket {
            channel,
            sequence: *latest,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.get(&ticket.channel) == Some(&ticket.sequence)
    }

    pub fn latest(&self, channel: Channel) -> Option<u64> {
        self.latest.get(&channel).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let mut sequencer = Sequencer::new();
        let first = sequencer.issue(Channel::Detection);
        assert!(sequencer.is_current(&first));

        let second = sequencer.issue(Channel::Detection);
        assert!(!sequencer.is_current(&first));
        assert!(sequencer.is_current(&second));
        assert_eq!(second.sequence, first.sequence + 1);
    }

    #[test]
    fn channels_are_independent() {
        let mut sequencer = Sequencer::new();
        let text = sequencer.issue(Channel::Text);
        let _ = sequencer.issue(Channel::Generation);
        let _ = sequencer.issue(Channel::Generation);
        assert!(sequencer.is_current(&text));
        assert_eq!(sequencer.latest(Channel::Generation), Some(2));
        assert_eq!(sequencer.latest(Channel::MultiModal), None);
    }

    #[test]
    fn foreign_ticket_is_never_current() {
        let sequencer = Sequencer::new();
        let ticket = Ticket {
            channel: Channel::Text,
            sequence: 1,
        };
        assert!(!sequencer.is_current(&ticket));
    }
}
