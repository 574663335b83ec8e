use std::fmt::Write;

use crate::error::Result;
use crate::model::group::GroupResult;

/// Plain-text listing, one numbered block per group.
pub fn to_text(groups: &[GroupResult]) -> String {
    let mut out = String::new();
    for group in groups {
        // writing into a String cannot fail
        let _ = writeln!(out, "=== {} ===", group.name);
        for (index, member) in group.members.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", index + 1, member.name);
        }
        out.push('\n');
    }
    out
}

pub fn to_json(groups: &[GroupResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(groups)?)
}
