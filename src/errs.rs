// Copyright (c) Sienna Satterwhite, Strata Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("maximum height must be at least 1")]
    ZeroMaxHeight,
    #[error("level probability must be within (0, 1), got {0}")]
    ProbabilityOutOfRange(f64),
}
