use crate::diff::diff_model::{AttributeDiff, AttributeFamily};
use crate::selector::candidates::SelectorStrategy;
use crate::workbench::analysis::Analysis;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format an analysis for terminal output.
///
/// Produces output like:
/// ```text
/// === Attribute diff (revision 3f2a9c1e) ===
///
/// [class] shared: btn | only in on: active
/// [data]  shared: trackid | only in on: (none)
///     trackid = toggle_favorite
/// [aria]  shared: (none) | only in on: (none)
///
/// Selector candidates (paired):
///   .btn
///   [data-trackid="toggle_favorite"]
///
/// trackid present: selector not required
/// ```
pub fn format_console_report(analysis: &Analysis) -> String {
    let mut out = String::new();

    let short_revision: String = analysis.revision.chars().take(8).collect();
    out.push_str(&format!("=== Attribute diff (revision {}) ===\n\n", short_revision));

    for family in [AttributeFamily::Class, AttributeFamily::Data, AttributeFamily::Aria] {
        format_family(&mut out, family, analysis.diff.family(family));
    }

    out.push_str(&format!(
        "\nSelector candidates ({}):\n",
        strategy_name(analysis)
    ));
    let options = analysis.selector_options();
    if options.is_empty() && analysis.aria_selectors.is_empty() {
        out.push_str("  (none)\n");
    }
    for selector in options.iter().chain(&analysis.aria_selectors) {
        out.push_str(&format!("  {}\n", selector));
    }

    if analysis.has_trackid {
        out.push_str("\ntrackid present: selector not required\n");
    }

    out
}

fn format_family(out: &mut String, family: AttributeFamily, diff: &AttributeDiff) {
    let label = match family {
        AttributeFamily::Class => "[class]",
        AttributeFamily::Data => "[data] ",
        AttributeFamily::Aria => "[aria] ",
    };

    out.push_str(&format!(
        "{} shared: {} | only in on: {}\n",
        label,
        join_or_none(diff.shared.iter()),
        join_or_none(diff.only_in_on.iter())
    ));

    for (key, values) in &diff.values_by_key {
        out.push_str(&format!(
            "    {} = {}\n",
            key,
            join_or_none(values.iter())
        ));
    }
}

fn join_or_none<'a>(items: impl Iterator<Item = &'a String>) -> String {
    let joined = items.map(String::as_str).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined
    }
}

fn strategy_name(analysis: &Analysis) -> &'static str {
    match analysis.strategy {
        SelectorStrategy::Simple => "simple",
        SelectorStrategy::Paired => "paired",
    }
}
