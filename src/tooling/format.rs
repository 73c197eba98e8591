//! Human-readable rendering of trees and attendance results.

use crate::attendance::AttendanceDate;
use crate::tree::{Orphan, OrphanReason, TreeBuild, TreeNode};
use chrono::NaiveDate;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::{OwoColorize, Stream, Style};

/// Format a section heading with bold/underline when stdout is a color terminal.
pub fn format_section_heading(title: &str) -> String {
    let style = Style::new().bold().underline();
    format!("{}", title.if_supports_color(Stream::Stdout, |t| t.style(style)))
}

/// Indented outline of a built tree; folders carry a trailing `/`.
pub fn format_tree_text(build: &TreeBuild) -> String {
    let mut out = String::new();
    if build.roots.is_empty() {
        out.push_str("No documents.\n");
    }
    write_outline(&mut out, &build.roots);
    if !build.orphans.is_empty() {
        out.push('\n');
        out.push_str(&format!("{}\n", format_section_heading("Promoted to root")));
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Document", "Parent", "Reason"]);
        for Orphan {
            id,
            parent_id,
            reason,
        } in &build.orphans
        {
            let reason = match reason {
                OrphanReason::MissingParent => "missing parent",
                OrphanReason::ParentCycle => "parent cycle",
            };
            table.add_row(vec![id.clone(), parent_id.clone(), reason.to_string()]);
        }
        out.push_str(&format!("{}\n", table));
    }
    out
}

fn write_outline(out: &mut String, roots: &[TreeNode]) {
    let mut stack: Vec<(&TreeNode, usize)> = roots.iter().rev().map(|n| (n, 0)).collect();
    while let Some((node, depth)) = stack.pop() {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&node.title);
        if node.is_folder() {
            out.push('/');
        }
        out.push('\n');
        stack.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
    }
}

/// Table of the attendance flags for one date.
pub fn format_attendance_text(evaluated: &AttendanceDate, today: NaiveDate) -> String {
    let yes_no = |b: bool| if b { "yes" } else { "no" }.to_string();
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Check", "Result"]);
    table.add_row(vec!["Weekday".to_string(), yes_no(evaluated.is_weekday)]);
    table.add_row(vec!["In future".to_string(), yes_no(evaluated.is_future)]);
    table.add_row(vec![
        "Within edit window".to_string(),
        yes_no(evaluated.is_within_editable_window),
    ]);
    table.add_row(vec!["Selectable".to_string(), yes_no(evaluated.is_selectable())]);
    table.add_row(vec!["Editable".to_string(), yes_no(evaluated.is_editable())]);

    format!(
        "{}\n\n  Date: {}\n  Today: {}\n\n{}\n",
        format_section_heading("Attendance"),
        evaluated.date,
        today,
        table
    )
}

/// One line per selectable day of a month.
pub fn format_calendar_text(year: i32, month: u32, days: &[NaiveDate]) -> String {
    let mut out = format!(
        "{}\n\n",
        format_section_heading(&format!("Selectable days {:04}-{:02}", year, month))
    );
    if days.is_empty() {
        out.push_str("No selectable days.\n");
        return out;
    }
    for day in days {
        out.push_str(&format!("  {} {}\n", day, day.format("%a")));
    }
    out.push_str(&format!("\nTotal: {} days.\n", days.len()));
    out
}
