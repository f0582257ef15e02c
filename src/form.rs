//! Interactive collection of water-quality measurements
//!
//! One prompt per field, in the trained order. Empty input takes the
//! field default; non-numeric or out-of-range input is rejected with the
//! reason and the prompt repeats, so nothing outside a field's bounds
//! ever reaches the rest of the pipeline. `?` prints the parameter
//! reference. Fields are independent; there is no cross-field check.

use crate::error::PipelineError;
use crate::types::sample::{FieldSpec, WaterSample, FEATURE_COUNT, FIELDS};
use std::io::{self, BufRead, Write};

/// Longer parameter descriptions for the `?` reference listing
const PARAMETER_NOTES: [(&str, &str); FEATURE_COUNT] = [
    (
        "pH Level",
        "Measures acidity/alkalinity. Safe drinking water typically has pH between 6.5-8.5.",
    ),
    (
        "Hardness",
        "Indicates mineral content, primarily calcium and magnesium.",
    ),
    (
        "Solids",
        "Total dissolved solids (TDS) measure all organic and inorganic substances.",
    ),
    (
        "Chloramines",
        "Disinfectant used in water treatment, should be kept at safe levels.",
    ),
    (
        "Sulfate",
        "Naturally occurring mineral, excessive amounts can cause digestive issues.",
    ),
    (
        "Conductivity",
        "Measures water's ability to conduct electricity, indicating ion concentration.",
    ),
    (
        "Organic Carbon",
        "Indicates organic matter, which can affect taste and support bacterial growth.",
    ),
    (
        "Trihalomethanes",
        "Byproducts of chlorination, potential health concern at high levels.",
    ),
    (
        "Turbidity",
        "Measure of water clarity, high values indicate suspended particles.",
    ),
];

/// Parse one raw entry for a field.
///
/// Empty input takes the field default; anything else must parse as a
/// number and fall inside the field's inclusive bounds.
pub fn parse_entry(spec: &FieldSpec, raw: &str) -> Result<f64, PipelineError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(spec.default);
    }

    let value: f64 = trimmed.parse().map_err(|_| PipelineError::InvalidNumber {
        field: spec.name,
        raw: trimmed.to_string(),
    })?;

    spec.validate(value)
}

/// Format a bound or default without trailing fraction noise
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

fn prompt_line(spec: &FieldSpec) -> String {
    let label = match spec.unit {
        Some(unit) => format!("{} ({})", spec.name, unit),
        None => spec.name.to_string(),
    };
    format!(
        "{} [{} - {}, step {}, default {}]",
        label,
        format_value(spec.min),
        format_value(spec.max),
        format_value(spec.step),
        format_value(spec.default),
    )
}

/// Terminal form for one analysis cycle
pub struct InputForm;

impl InputForm {
    /// Collect all nine measurements in the trained order.
    ///
    /// Returns `None` on end of input. Out-of-range and non-numeric
    /// entries are reported and re-prompted, never forwarded downstream.
    pub fn collect<R: BufRead, W: Write>(
        input: &mut R,
        out: &mut W,
    ) -> io::Result<Option<WaterSample>> {
        let mut values = [0.0; FEATURE_COUNT];

        for (slot, spec) in values.iter_mut().zip(FIELDS.iter()) {
            loop {
                writeln!(out, "{}", prompt_line(spec))?;
                writeln!(out, "  {}. {}", spec.help, spec.guidance)?;
                write!(out, "> ")?;
                out.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    return Ok(None);
                }

                if line.trim() == "?" {
                    Self::print_parameter_reference(out)?;
                    continue;
                }

                match parse_entry(spec, &line) {
                    Ok(value) => {
                        *slot = value;
                        break;
                    }
                    Err(err) => writeln!(out, "  {}", err)?,
                }
            }
        }

        Ok(Some(WaterSample::from_features(values)))
    }

    /// Ask whether to run another analysis cycle
    pub fn ask_again<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
        write!(out, "\nAnalyze another sample? [y/N]: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        Ok(matches!(line.trim(), "y" | "Y" | "yes" | "Yes"))
    }

    /// Print the parameter reference listing
    pub fn print_parameter_reference<W: Write>(out: &mut W) -> io::Result<()> {
        writeln!(out, "\nAbout Water Quality Parameters")?;
        writeln!(out, "------------------------------")?;
        for (name, note) in PARAMETER_NOTES {
            writeln!(out, "{}: {}", name, note)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
