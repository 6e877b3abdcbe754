// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod entry;
mod notice;
mod pin;

pub use entry::*;
pub use notice::*;
pub use pin::*;
