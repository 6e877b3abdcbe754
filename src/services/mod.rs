// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

pub mod checkout;
pub mod collector;
pub mod git;
pub mod manifest;
pub mod render;
