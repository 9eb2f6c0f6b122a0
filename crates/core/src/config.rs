// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Settlement configuration.
use serde::{Deserialize, Serialize};

use showdown_eval::TableVariant;

/// What to do with the chips left over when a pot splits unevenly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OddChips {
    /// The remainder is not paid out, it is recorded in the pot odd chips.
    #[default]
    Drop,
    /// The remainder is paid one chip per winner in seat order, starting from
    /// the first seat after the button.
    SeatOrder,
}

/// Round settlement configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettleConfig {
    /// The table variant used to classify hands.
    pub variant: TableVariant,
    /// The split pots odd chips policy.
    pub odd_chips: OddChips,
}
