//! Report assembly and rendering: per-nation spell listings by mage and
//! variant, as text columns, JSON, or CSV rows.

pub mod builder;
pub mod columns;
pub mod export_csv;

pub use builder::{
    build_all_reports, build_nation_report, MageReport, NationReport, ReportOptions, VariantSpells,
};
pub use columns::{render_nation_report, spell_columns};
pub use export_csv::write_reports_csv;
