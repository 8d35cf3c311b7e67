//! Construction-time selection of the in-process filter variant

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{BloomFilter, FilterConfig, HashSetFilter};
use crate::error::FilterError;
use crate::ports::MembershipFilter;

/// In-process filter backing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Packed bit array
    #[default]
    Bits,
    /// Set of seen hash values
    HashSet,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::Bits => write!(f, "bits"),
            FilterKind::HashSet => write!(f, "hash_set"),
        }
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bits" => Ok(FilterKind::Bits),
            "hash_set" | "hashset" => Ok(FilterKind::HashSet),
            other => Err(FilterError::invalid(format!("unknown filter kind {:?}", other))),
        }
    }
}

/// Build a filter of the given kind behind the common contract
pub fn build_filter(
    kind: FilterKind,
    config: &FilterConfig,
) -> Result<Box<dyn MembershipFilter>, FilterError> {
    let filter: Box<dyn MembershipFilter> = match kind {
        FilterKind::Bits => Box::new(BloomFilter::from_config(config)?),
        FilterKind::HashSet => Box::new(HashSetFilter::from_config(config)?),
    };
    Ok(filter)
}
