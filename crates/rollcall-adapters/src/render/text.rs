//! Plain-text roster table rendering.

use rollcall_core::domain::Submission;

/// Render the roster as an aligned plain-text table.
///
/// Columns follow [`Submission::HEADERS`]; each column is padded to its
/// widest cell. Width is measured in characters, which is good enough for
/// the Latin-script names the validators accept.
pub fn render_roster(rows: &[Submission]) -> String {
    let mut widths: Vec<usize> = Submission::HEADERS
        .iter()
        .map(|h| h.chars().count())
        .collect();
    let cells: Vec<[String; 6]> = rows.iter().map(Submission::cells).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &Submission::HEADERS.map(String::from), &widths);
    let rule_len = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, row: &[String; 6], widths: &[usize]) {
    for (i, (cell, width)) in row.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            out.push_str(" | ");
        }
        out.push_str(cell);
        // Pad in characters, not bytes.
        let pad = width.saturating_sub(cell.chars().count());
        if i + 1 < row.len() {
            out.push_str(&" ".repeat(pad));
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}
