use crate::prelude::Statistics;
use std::io::{self, Write};

/// Plain-text rendering of [`Statistics`], one labelled value per line.
pub struct Report;

impl Report {
    pub fn render(stats: &Statistics) -> String {
        let rows = [
            ("Average", stats.average),
            ("Median", stats.median),
            ("Variance", stats.variance),
            ("Standard Deviation", stats.standard_deviation),
        ];
        rows.iter()
            .map(|(label, value)| format!("{}: {}\n", label, Self::round_for_display(*value)))
            .collect()
    }

    pub fn write_to<W: Write>(stats: &Statistics, mut out: W) -> io::Result<()> {
        out.write_all(Self::render(stats).as_bytes())?;
        out.flush()
    }

    /// Rounds to zero decimals, ties to even.
    pub fn round_for_display(value: f64) -> String {
        format!("{:.0}", value.round_ties_even())
    }
}
