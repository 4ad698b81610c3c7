//! Plain-text rendering: two-column spell layout (combat left, rituals and
//! forged items right) under nation, mage, and variant headers.

use std::fmt::Write as _;

use crate::data::spell::{SpellMode, SpellRecord};
use crate::report::builder::{MageReport, NationReport};

const COLUMN_WIDTH: usize = 40;
const INDENT: usize = 4;

fn cell(spell: &SpellRecord) -> String {
    format!("{:<width$}", format!("{} {}", spell.requirement(), spell.name), width = COLUMN_WIDTH)
}

/// Lay out spells in two columns, preserving the caller's order within each
/// column. Combat spells go left; rituals and forged items go right.
pub fn spell_columns(spells: &[SpellRecord]) -> Vec<String> {
    let indent = " ".repeat(INDENT);
    let (mut left, mut right) = (Vec::new(), Vec::new());
    for spell in spells {
        match spell.mode {
            SpellMode::Combat => left.push(cell(spell)),
            SpellMode::Ritual | SpellMode::Forge => right.push(cell(spell)),
        }
    }
    let filler = " ".repeat(COLUMN_WIDTH);
    let rows = left.len().max(right.len());
    (0..rows)
        .map(|row| {
            let l = left.get(row).unwrap_or(&filler);
            let r = right.get(row).unwrap_or(&filler);
            format!("{indent}{l}{r}").trim_end().to_string()
        })
        .collect()
}

fn render_mage(out: &mut String, mage: &MageReport) {
    let _ = writeln!(out, "{} {} ({} gold)", mage.name, mage.paths, mage.gcost);
    let _ = writeln!(out, "{}", "=".repeat(20));
    if !mage.includes.is_empty() {
        let _ = writeln!(out, "includes: {}", mage.includes.join(", "));
    }
    let single = mage.variants.len() == 1;
    for variant in &mage.variants {
        if !single {
            match variant.note {
                Some(note) => {
                    let _ = writeln!(
                        out,
                        "Variant {} ({} chance, {note})",
                        variant.paths, variant.chance
                    );
                }
                None => {
                    let _ = writeln!(out, "Variant {} ({} chance)", variant.paths, variant.chance);
                }
            }
            let _ = writeln!(out, "{}", "-".repeat(25));
        }
        for line in spell_columns(&variant.spells) {
            let _ = writeln!(out, "{line}");
        }
    }
}

pub fn render_nation_report(report: &NationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", report.name, report.epithet);
    let _ = writeln!(out, "{}", "#".repeat(25));
    for mage in &report.mages {
        let _ = writeln!(out);
        render_mage(&mut out, mage);
    }
    out
}
