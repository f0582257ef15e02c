//! Terminal rendering of potability verdicts

use crate::types::verdict::{Potability, PotabilityVerdict};
use colored::Colorize;
use std::io::{self, Write};

const BAR_WIDTH: usize = 30;

/// Print the application header
pub fn print_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Water Potability Predictor".bold())?;
    writeln!(
        out,
        "Analyze water quality parameters to determine if water is safe to drink."
    )?;
    writeln!(
        out,
        "Enter a value for each parameter, or press Enter to keep the default."
    )?;
    writeln!(out, "Enter '?' at any prompt for the parameter reference.\n")?;
    Ok(())
}

/// Render one verdict: banner, narrative, confidence, and the per-class
/// probability breakdown.
pub fn render<W: Write>(verdict: &PotabilityVerdict, out: &mut W) -> io::Result<()> {
    writeln!(out, "\nAnalysis Results")?;
    writeln!(out, "----------------")?;

    let banner = match verdict.label {
        Potability::Potable => format!("✓ {}", verdict.label.headline()).green().bold(),
        Potability::NotPotable => format!("✗ {}", verdict.label.headline()).red().bold(),
    };
    writeln!(out, "{}", banner)?;
    writeln!(out, "{}", verdict.label.narrative())?;
    writeln!(
        out,
        "Confidence level: {}",
        format_percent(verdict.confidence).bold()
    )?;

    writeln!(out, "\nConfidence breakdown:")?;
    writeln!(
        out,
        "  Safe to drink:   {:>6}  ({} vs. even odds)",
        format_percent(verdict.p_potable),
        format_delta(verdict.p_potable),
    )?;
    writeln!(
        out,
        "  Unsafe to drink: {:>6}  ({} vs. even odds)",
        format_percent(verdict.p_not_potable),
        format_delta(verdict.p_not_potable),
    )?;

    writeln!(out, "\nProbability distribution:")?;
    writeln!(
        out,
        "  Potable     {} {}",
        probability_bar(verdict.p_potable),
        format_percent(verdict.p_potable)
    )?;
    writeln!(
        out,
        "  Not potable {} {}",
        probability_bar(verdict.p_not_potable),
        format_percent(verdict.p_not_potable)
    )?;

    Ok(())
}

/// Print a user-facing error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Format a probability as a percentage string
pub fn format_percent(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

/// Signed distance of a probability from even odds, computed once per
/// class regardless of which side of 0.5 it falls on.
pub fn format_delta(p: f64) -> String {
    format!("{:+.1}%", (p - 0.5) * 100.0)
}

/// Fixed-width text bar for a probability in [0, 1]
fn probability_bar(p: f64) -> String {
    let filled = (p.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let mut bar = String::with_capacity(BAR_WIDTH * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..BAR_WIDTH {
        bar.push('░');
    }
    bar
}
