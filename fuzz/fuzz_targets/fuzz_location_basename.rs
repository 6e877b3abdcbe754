// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use libfuzzer_sys::fuzz_target;
use notice_gen::services::checkout::location_basename;

fuzz_target!(|data: &str| {
    let base = location_basename(data);
    assert!(!base.contains('/'));
    assert!(data.contains(base));
});
