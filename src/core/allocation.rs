//! Budget shares across the four channels.

use super::channel::Channel;
use serde::{Deserialize, Serialize};

/// Integer percentage of the media budget assigned to each channel.
///
/// Values produced by [`crate::allocation::set_allocation`] always sum to
/// exactly 100. Values deserialized from configuration are checked by
/// [`crate::config::MediamixConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AllocationSet {
    #[serde(rename = "OOH", alias = "ooh")]
    pub ooh: u8,
    #[serde(rename = "TV", alias = "tv")]
    pub tv: u8,
    #[serde(rename = "Digital", alias = "digital")]
    pub digital: u8,
    #[serde(rename = "CTV", alias = "ctv")]
    pub ctv: u8,
}

impl Default for AllocationSet {
    fn default() -> Self {
        Self {
            ooh: 20,
            tv: 35,
            digital: 30,
            ctv: 15,
        }
    }
}

impl AllocationSet {
    pub fn new(ooh: u8, tv: u8, digital: u8, ctv: u8) -> Self {
        Self {
            ooh,
            tv,
            digital,
            ctv,
        }
    }

    /// Build from values listed in canonical channel order.
    pub fn from_values(values: [u8; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    /// Values in canonical channel order.
    pub fn values(&self) -> [u8; 4] {
        [self.ooh, self.tv, self.digital, self.ctv]
    }

    pub fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Ooh => self.ooh,
            Channel::Tv => self.tv,
            Channel::Digital => self.digital,
            Channel::Ctv => self.ctv,
        }
    }

    /// Copy of `self` with one channel replaced.
    pub fn with(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Ooh => self.ooh = value,
            Channel::Tv => self.tv = value,
            Channel::Digital => self.digital = value,
            Channel::Ctv => self.ctv = value,
        }
        self
    }

    pub fn total(&self) -> u32 {
        self.values().iter().map(|&v| u32::from(v)).sum()
    }

    /// `(channel, share)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, u8)> + '_ {
        Channel::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}
