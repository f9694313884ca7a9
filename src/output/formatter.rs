use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::course::{Course, Tee};
use crate::scoring::{HoleScore, ScoredHole, Split, Totals};

/// Everything printed for a scored round
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    pub handicap: i32,
    pub split_at: usize,
    pub holes: Vec<ScoredHole>,
    pub totals: Split,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// A number that reads as "-" while the hole is unplayed
fn played_cell(value: Option<i32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// One-line heading for a card played from a course:
/// "Kingston Heath (Blue)  Par 72  6,412 yds  Slope 131"
pub fn format_course_line(course: &Course, tee: &Tee, use_colors: bool) -> String {
    let mut parts = vec![format!("Par {}", tee.total_par())];
    if let Some(yards) = tee.total_yardage() {
        parts.push(format!("{} yds", group_thousands(yards)));
    }
    if let Some(slope) = tee.slope {
        parts.push(format!("Slope {}", slope));
    }

    let title = format!("{} ({})", course.name, tee.name);
    let title = if use_colors {
        title.bold().to_string()
    } else {
        title
    };

    format!("{}  {}", title, parts.join("  "))
}

fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

const HEADER: [&str; 7] = ["Hole", "Par", "SI", "Gross", "Shots", "Net", "Pts"];
const COL_WIDTH: usize = 6;

fn row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|c| format!("{:>width$}", c, width = COL_WIDTH))
        .collect::<Vec<_>>()
        .join("")
}

fn totals_row(label: &str, par: i32, totals: &Totals, use_colors: bool) -> String {
    let line = row(&[
        label.to_string(),
        par.to_string(),
        String::new(),
        totals.gross_total.to_string(),
        String::new(),
        totals.net_total.to_string(),
        totals.points_total.to_string(),
    ]);
    if use_colors {
        line.bold().to_string()
    } else {
        line
    }
}

/// Format a round as a scorecard table: one row per hole, with Out after the
/// front half and In/Total at the bottom. Unplayed holes show "-".
pub fn format_card_table(report: &RoundReport, use_colors: bool) -> String {
    if report.holes.is_empty() {
        return "No holes on card.".to_string();
    }

    let header = row(&HEADER.map(String::from));
    let mut lines = vec![if use_colors {
        header.dimmed().to_string()
    } else {
        header
    }];

    let split_at = report.split_at.min(report.holes.len());
    let par_of = |holes: &[ScoredHole]| holes.iter().map(|s| s.hole.par).sum::<i32>();

    for (idx, scored) in report.holes.iter().enumerate() {
        if idx == split_at && split_at > 0 {
            lines.push(totals_row(
                "Out",
                par_of(&report.holes[..split_at]),
                &report.totals.out,
                use_colors,
            ));
        }
        lines.push(hole_row(scored, use_colors));
    }

    if split_at == report.holes.len() {
        lines.push(totals_row(
            "Out",
            par_of(&report.holes),
            &report.totals.out,
            use_colors,
        ));
    } else {
        lines.push(totals_row(
            "In",
            par_of(&report.holes[split_at..]),
            &report.totals.inward,
            use_colors,
        ));
    }
    lines.push(totals_row(
        "Total",
        par_of(&report.holes),
        &report.totals.total,
        use_colors,
    ));

    lines.join("\n")
}

fn hole_row(scored: &ScoredHole, use_colors: bool) -> String {
    let gross = scored.hole.gross_score();
    let line = row(&[
        scored.number.to_string(),
        scored.hole.par.to_string(),
        scored.hole.stroke_index.to_string(),
        played_cell(gross),
        scored.score.shots.to_string(),
        played_cell(gross.map(|_| scored.score.net)),
        played_cell(gross.map(|_| scored.score.points)),
    ]);

    if !use_colors || gross.is_none() {
        return line;
    }

    match scored.score.points {
        p if p >= 5 => line.green().to_string(),
        p if p <= 2 => line.red().to_string(),
        _ => line,
    }
}

/// Single-hole result as one line
pub fn format_hole_score(score: &HoleScore, use_colors: bool) -> String {
    if use_colors {
        format!(
            "shots: {}  net: {}  points: {}",
            score.shots,
            score.net,
            score.points.bold()
        )
    } else {
        format!(
            "shots: {}  net: {}  points: {}",
            score.shots, score.net, score.points
        )
    }
}

/// Format a round as tab-separated values for scripting
/// Columns: hole, par, stroke_index, gross, shots, net, points (no headers,
/// no colors). Totals follow as "out", "in", "total" rows.
pub fn format_tsv(report: &RoundReport) -> String {
    let holes = report.holes.iter().map(|s| {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            s.number,
            s.hole.par,
            s.hole.stroke_index,
            s.hole.gross,
            s.score.shots,
            s.score.net,
            s.score.points
        )
    });

    let totals = [
        ("out", &report.totals.out),
        ("in", &report.totals.inward),
        ("total", &report.totals.total),
    ]
    .into_iter()
    .map(|(label, t)| {
        format!(
            "{}\t\t\t{}\t\t{}\t{}",
            label, t.gross_total, t.net_total, t.points_total
        )
    });

    holes.chain(totals).collect::<Vec<_>>().join("\n")
}

/// Pretty-printed JSON for any serializable result
pub fn format_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize result as JSON")
}
