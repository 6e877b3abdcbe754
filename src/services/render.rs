// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use crate::domain::NoticeSection;

pub const TITLE: &str = "Third-Party Notices";

/// Rule placed between sections.
pub const SECTION_SEPARATOR: &str = "\n\n---\n\n";

pub const NOT_FOUND: &str = "NOT FOUND";

/// Render the notices document.
///
/// Sections are emitted in the order given. The result ends with exactly
/// one newline.
pub fn render_document(product: &str, sections: &[NoticeSection]) -> String {
    let preamble = [
        TITLE.to_string(),
        String::new(),
        format!(
            "This document lists third-party components included in {product} distributions, \
             along with their licenses and attributions. The original license texts are \
             reproduced or referenced below."
        ),
        String::new(),
        format!("If you distribute {product} binaries, keep this file together with `LICENSE`."),
        String::new(),
        "---".to_string(),
        String::new(),
    ];

    let body = sections
        .iter()
        .map(render_section)
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR);

    let mut lines: Vec<String> = preamble.into();
    lines.push(body);

    let mut content = lines.join("\n").trim().to_string();
    content.push('\n');
    content
}

pub fn render_section(section: &NoticeSection) -> String {
    let entry = &section.entry;
    let mut lines = vec![
        format!("{} ({})", entry.display_name(), entry.display_version()),
        format!("Repository: {}", entry.display_repo()),
        format!(
            "License file: {}",
            section
                .license
                .as_ref()
                .map_or(NOT_FOUND, |l| l.file_name.as_str())
        ),
        String::new(),
    ];

    if let Some(license) = &section.license {
        lines.push(license.text.clone());
    }
    if let Some(notice) = &section.notice {
        lines.push(String::new());
        lines.push(format!("NOTICE ({})", notice.file_name));
        lines.push(notice.text.clone());
    }

    lines.join("\n").trim().to_string()
}
