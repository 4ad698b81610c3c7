//! Content-level diagnostics over a loaded dataset: bad path specs, broken
//! probability distributions, dangling mage references, duplicate hashes.
//! Run before trusting a fresh export; report generation itself fails fast
//! on the first error instead.

use std::collections::HashSet;
use std::fmt;

use crate::data::loader::GameData;
use crate::data::spell::SpellRecord;
use crate::magic::paths;
use crate::magic::Mage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }
}

fn check_spell(report: &mut ValidationReport, context: &str, spell: &SpellRecord) {
    for (slot, value) in [("path1", &spell.path1), ("path2", &spell.path2)] {
        if let Some(symbol) = paths::find_unknown_symbol(value) {
            report.push(
                ValidationSeverity::Error,
                context,
                format!("{slot} '{value}' holds unknown path symbol '{symbol}'"),
            );
        }
    }
    if spell.hash.is_empty() {
        report.push(ValidationSeverity::Error, context, "empty hash");
    }
}

fn check_duplicate_hashes(report: &mut ValidationReport, context: &str, spells: &[&SpellRecord]) {
    let mut seen = HashSet::new();
    for spell in spells {
        if !seen.insert(spell.hash.as_str()) {
            report.push(
                ValidationSeverity::Error,
                context,
                format!("duplicate hash '{}' ({})", spell.hash, spell.name),
            );
        }
    }
}

/// Walk the whole dataset and collect diagnostics. Deterministic output:
/// mages are visited in id order regardless of map iteration order.
pub fn validate_game_data(data: &GameData) -> ValidationReport {
    let mut report = ValidationReport::default();

    let mut mage_ids: Vec<u32> = data.mages.keys().copied().collect();
    mage_ids.sort_unstable();
    for id in &mage_ids {
        let record = &data.mages[id];
        let context = format!("mage[{id}] '{}'", record.name);
        if record.name.is_empty() {
            report.push(ValidationSeverity::Error, context.as_str(), "empty name");
        }
        // Construction exercises the full parse/reduce pipeline, so this
        // catches malformed tokens, unknown symbols, and mass violations.
        if let Err(err) = Mage::new(&record.name, &record.paths, record.gcost) {
            report.push(ValidationSeverity::Error, context.as_str(), err.to_string());
        }
    }

    for nation in &data.nations {
        let context = format!("nation '{}'", nation.name);
        let roles = [
            ("fort_mages", &nation.fort_mages),
            ("cap_mages", &nation.cap_mages),
            ("hero_mages", &nation.hero_mages),
            ("uw_mages", &nation.uw_mages),
        ];
        for (role, ids) in roles {
            for id in ids {
                if data.mage_record(*id).is_none() {
                    report.push(
                        ValidationSeverity::Error,
                        context.as_str(),
                        format!("{role} references unknown mage id {id}"),
                    );
                }
            }
        }
        for spell in &nation.nspells {
            check_spell(&mut report, &context, spell);
        }
        check_duplicate_hashes(&mut report, &context, &nation.nspells.iter().collect::<Vec<_>>());
    }

    for spell in data.spells.iter().chain(&data.items) {
        check_spell(&mut report, &format!("spell '{}'", spell.name), spell);
    }
    let shared: Vec<&SpellRecord> = data.spells.iter().chain(&data.items).collect();
    check_duplicate_hashes(&mut report, "spells+items", &shared);

    report.push(
        ValidationSeverity::Info,
        "dataset",
        format!(
            "{} mages, {} nations, {} spells, {} items",
            data.mages.len(),
            data.nations.len(),
            data.spells.len(),
            data.items.len()
        ),
    );
    report
}
