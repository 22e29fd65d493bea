// src/cli/help.rs

use crate::cli::options::{OptionSpec, OPTIONS};

/// Renders usage text for every declared option.
///
/// Each row lists all spellings, a value placeholder for integer options,
/// the description and, where one exists, the default.
pub fn render_help(program: &str) -> String {
    let mut out = format!("Usage: {program} [OPTIONS]\n\nOptions:\n");

    let heads: Vec<String> = OPTIONS.iter().map(option_head).collect();
    let width = heads.iter().map(String::len).max().unwrap_or(0);

    for (spec, head) in OPTIONS.iter().zip(&heads) {
        out.push_str(&format!("  {head:<width$}  {}", spec.description));
        if let Some(default) = spec.default {
            out.push_str(&format!(" (default: {default})"));
        }
        out.push('\n');
    }

    out
}

fn option_head(spec: &OptionSpec) -> String {
    let mut head = spec.spellings().join(", ");
    if spec.id.takes_value() {
        head.push_str(" <int>");
    }
    head
}
