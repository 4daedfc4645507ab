// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SkipListError {
    #[error("probability must be in (0, 1), got {0}")]
    InvalidProbability(f64),
    #[error("max level must be non-zero")]
    InvalidMaxLevel,
    #[error("random draw must be in [0, 1), got {0}")]
    DrawOutOfRange(f64),
    #[error("random sequence must not be empty")]
    EmptySequence,
    #[error("key not found")]
    KeyNotFound,
}
