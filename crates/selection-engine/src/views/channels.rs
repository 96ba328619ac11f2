use reference_data::{Chain, ChannelLink, Tables};
use tracing::debug;

/// Hub chain every IBC channel is paired with unless configured otherwise.
pub const DEFAULT_HUB_CHAIN: &str = "axelarnet";

/// Undirected pairing of the hub with one counterparty chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelPair<'a> {
    pub hub: Option<&'a Chain>,
    pub counterparty_id: &'a str,
    pub counterparty: Option<&'a Chain>,
    pub links: Vec<&'a ChannelLink>,
}

impl<'a> ChannelPair<'a> {
    /// Channel id on the hub's side.
    pub fn hub_channel(&self) -> Option<&'a str> {
        let hub = self.hub?;
        self.channel_from(&hub.id)
    }

    /// Channel id on the counterparty's side.
    pub fn counterparty_channel(&self) -> Option<&'a str> {
        self.channel_from(self.counterparty_id)
    }

    fn channel_from(&self, chain: &str) -> Option<&'a str> {
        self.links
            .iter()
            .copied()
            .find(|l| l.from == chain)
            .map(|l| l.channel_id.as_str())
    }
}

/// Groups channel links by their non-hub end, in first-appearance order.
pub fn channel_pairs<'a>(tables: &'a Tables, hub: &str) -> Vec<ChannelPair<'a>> {
    let hub_chain = tables.cosmos_chain(hub);
    let mut pairs: Vec<ChannelPair<'a>> = Vec::new();

    for link in &tables.ibc_channels {
        let Some(other) = link.counterparty(hub) else {
            debug!(from = %link.from, to = %link.to, "channel link has no counterparty");
            continue;
        };
        match pairs.iter_mut().find(|p| p.counterparty_id == other) {
            Some(pair) => pair.links.push(link),
            None => pairs.push(ChannelPair {
                hub: hub_chain,
                counterparty_id: other,
                counterparty: tables.cosmos_chain(other),
                links: vec![link],
            }),
        }
    }
    pairs
}
