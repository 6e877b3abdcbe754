// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use proptest::prelude::*;

use notice_gen::domain::{
    Attachment, Entry, NoticeSection, PinState, VersionLabel, dedupe_and_sort, missing_licenses,
};
use notice_gen::services::render::render_document;

fn entry(name: &str, version: &str) -> Entry {
    Entry {
        name: name.into(),
        repo: format!("https://github.com/example/{name}.git"),
        version: version.into(),
        path: None,
    }
}

fn attachment(file_name: &str, text: &str) -> Attachment {
    Attachment {
        file_name: file_name.into(),
        text: text.into(),
    }
}

// ─── Rendering ───────────────────────────────────────────────────────────────

#[test]
fn full_document_layout() {
    let sections = vec![
        NoticeSection {
            entry: entry("Alamofire", "5.9.1"),
            license: Some(attachment("LICENSE", "MIT License")),
            notice: None,
        },
        NoticeSection {
            entry: entry("swift-nio", "main@0123456"),
            license: Some(attachment("LICENSE.txt", "Apache License\nVersion 2.0")),
            notice: Some(attachment("NOTICE.txt", "The SwiftNIO Project")),
        },
    ];

    insta::assert_snapshot!(render_document("CodMate", &sections), @r"
    Third-Party Notices

    This document lists third-party components included in CodMate distributions, along with their licenses and attributions. The original license texts are reproduced or referenced below.

    If you distribute CodMate binaries, keep this file together with `LICENSE`.

    ---

    Alamofire (5.9.1)
    Repository: https://github.com/example/Alamofire.git
    License file: LICENSE

    MIT License

    ---

    swift-nio (main@0123456)
    Repository: https://github.com/example/swift-nio.git
    License file: LICENSE.txt

    Apache License
    Version 2.0

    NOTICE (NOTICE.txt)
    The SwiftNIO Project
    ");
}

#[test]
fn missing_names_are_sorted_display_names() {
    let sections = vec![
        NoticeSection {
            entry: entry("zeta", "1"),
            license: None,
            notice: None,
        },
        NoticeSection {
            entry: entry("", "1"),
            license: None,
            notice: None,
        },
        NoticeSection {
            entry: entry("alpha", "1"),
            license: Some(attachment("LICENSE", "x")),
            notice: None,
        },
    ];
    assert_eq!(missing_licenses(&sections), ["unknown", "zeta"]);
}

// ─── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn dedupe_yields_unique_sorted_names(names in prop::collection::vec("[a-cA-C]{1,3}", 0..24)) {
        let entries: Vec<Entry> = names
            .iter()
            .enumerate()
            .map(|(i, n)| entry(n, &i.to_string()))
            .collect();

        let out = dedupe_and_sort(entries);

        let keys: Vec<String> = out.iter().map(|e| e.name.to_lowercase()).collect();
        let mut expected: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(&keys, &expected);

        // First occurrence wins
        for e in &out {
            let first = names
                .iter()
                .position(|n| n.to_lowercase() == e.name.to_lowercase())
                .unwrap();
            prop_assert_eq!(e.version.clone(), first.to_string());
        }
    }

    #[test]
    fn revision_labels_are_seven_chars(revision in "[0-9a-f]{7,40}", branch in "[a-z]{1,10}") {
        let only_revision = PinState { revision: Some(revision.clone()), ..PinState::default() };
        prop_assert_eq!(VersionLabel::resolve(Some(&only_revision)).to_string(), revision[..7].to_string());

        let with_branch = PinState { branch: Some(branch.clone()), ..only_revision };
        prop_assert_eq!(
            VersionLabel::resolve(Some(&with_branch)).to_string(),
            format!("{branch}@{}", &revision[..7])
        );
    }

    #[test]
    fn explicit_version_always_wins(version in "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}", revision in "[0-9a-f]{40}") {
        let state = PinState {
            version: Some(version.clone()),
            branch: Some("main".into()),
            revision: Some(revision),
        };
        prop_assert_eq!(VersionLabel::resolve(Some(&state)).to_string(), version);
    }
}
