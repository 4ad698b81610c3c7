//! Flatten nation reports into CSV rows for spreadsheet use: one row per
//! (nation, mage, variant, spell).

use std::io;

use crate::report::builder::NationReport;

const HEADER: [&str; 9] = [
    "nation",
    "mage",
    "gcost",
    "variant",
    "chance",
    "chance_float",
    "note",
    "spell",
    "requirement",
];

pub fn write_reports_csv<W: io::Write>(
    writer: W,
    reports: &[NationReport],
) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER)?;
    for report in reports {
        for mage in &report.mages {
            let gcost = mage.gcost.to_string();
            for variant in &mage.variants {
                let note = variant.note.map(|n| n.to_string()).unwrap_or_default();
                let chance = variant.chance.to_string();
                let chance_float = variant.chance.as_f64().to_string();
                for spell in &variant.spells {
                    let requirement = spell.requirement();
                    out.write_record([
                        report.name.as_str(),
                        mage.name.as_str(),
                        gcost.as_str(),
                        variant.paths.as_str(),
                        chance.as_str(),
                        chance_float.as_str(),
                        note.as_str(),
                        spell.name.as_str(),
                        requirement.as_str(),
                    ])?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}
