//! Media channels that share the campaign budget.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four budget categories whose shares must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Out-of-home placements (billboards, transit)
    #[serde(rename = "OOH", alias = "ooh")]
    Ooh,
    /// Linear television
    #[serde(rename = "TV", alias = "tv")]
    Tv,
    /// Search, social and display
    #[serde(rename = "Digital", alias = "digital")]
    Digital,
    /// Connected TV
    #[serde(rename = "CTV", alias = "ctv")]
    Ctv,
}

impl Channel {
    /// All channels in canonical order. Remainder fix-ups walk this order.
    pub const ALL: [Channel; 4] = [Channel::Ooh, Channel::Tv, Channel::Digital, Channel::Ctv];

    /// Display label, also used as the key in rate tables.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Ooh => "OOH",
            Channel::Tv => "TV",
            Channel::Digital => "Digital",
            Channel::Ctv => "CTV",
        }
    }

    /// Position in [`Channel::ALL`].
    pub fn index(self) -> usize {
        match self {
            Channel::Ooh => 0,
            Channel::Tv => 1,
            Channel::Digital => 2,
            Channel::Ctv => 3,
        }
    }

    /// The three channels other than `self`, in canonical order.
    pub fn others(self) -> [Channel; 3] {
        let mut out = [Channel::Ooh; 3];
        let mut slot = 0;
        for channel in Channel::ALL {
            if channel != self {
                out[slot] = channel;
                slot += 1;
            }
        }
        out
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown channel '{0}' (expected one of OOH, TV, Digital, CTV)")]
pub struct UnknownChannel(pub String);

impl FromStr for Channel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Channel::ALL
            .into_iter()
            .find(|channel| channel.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownChannel(trimmed.to_string()))
    }
}
