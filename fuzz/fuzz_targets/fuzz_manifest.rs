// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use libfuzzer_sys::fuzz_target;
use notice_gen::domain::{Entry, NoticeSection, dedupe_and_sort};
use notice_gen::services::manifest::parse_pins;
use notice_gen::services::render::render_document;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(pins) = parse_pins(text) else {
        return;
    };

    let entries: Vec<Entry> = pins
        .iter()
        .map(|pin| Entry {
            name: pin.identity().to_string(),
            repo: pin.location().to_string(),
            version: pin.version_label().to_string(),
            path: None,
        })
        .collect();

    let sections: Vec<NoticeSection> = dedupe_and_sort(entries)
        .into_iter()
        .map(|entry| NoticeSection {
            entry,
            license: None,
            notice: None,
        })
        .collect();

    let doc = render_document("Fuzz", &sections);
    assert!(doc.ends_with('\n'));
    assert!(!doc.ends_with("\n\n"));
});
