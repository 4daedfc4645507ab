// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use getset::CopyGetters;

use crate::errs::SkipListError;

/// The default probability that a node present at level `n` is also present
/// at level `n + 1`.
pub const DEFAULT_P: f64 = 0.5;

/// The default cap on sampled node heights. With [`DEFAULT_P`] this covers
/// lists of roughly `2^32` entries before the cap starts to matter.
pub const DEFAULT_MAX_LEVEL: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct SkipListConfig {
    /// Probability of promoting a node one level higher.
    p: f64,
    /// Highest level index a node may be sampled for.
    max_level: usize,
}

impl SkipListConfig {
    pub fn new(p: f64, max_level: usize) -> Result<Self, SkipListError> {
        validate_p(p)?;
        if max_level == 0 {
            return Err(SkipListError::InvalidMaxLevel);
        }
        Ok(SkipListConfig { p, max_level })
    }

    pub fn with_p(self, p: f64) -> Result<Self, SkipListError> {
        Self::new(p, self.max_level)
    }

    pub fn with_max_level(self, max_level: usize) -> Result<Self, SkipListError> {
        Self::new(self.p, max_level)
    }
}

impl Default for SkipListConfig {
    fn default() -> Self {
        SkipListConfig {
            p: DEFAULT_P,
            max_level: DEFAULT_MAX_LEVEL,
        }
    }
}

/// Rejects any `p` outside the open interval `(0, 1)`, including NaN.
pub(crate) fn validate_p(p: f64) -> Result<(), SkipListError> {
    if p > 0.0 && p < 1.0 {
        Ok(())
    } else {
        Err(SkipListError::InvalidProbability(p))
    }
}
