use crate::model::{ExtraHolidays, RestPeriod};
use anyhow::Context;
use chrono::NaiveDate;
use csv::WriterBuilder;
use std::fs;
use std::path::Path;

/// Parse un bloc « une date ISO (`YYYY-MM-DD`) par ligne ».
///
/// Les lignes vides ou mal formées (format ou date invalide) sont ignorées
/// silencieusement ; les doublons sont fusionnés.
pub fn parse_extra_holidays(text: &str) -> ExtraHolidays {
    text.lines()
        .filter_map(|line| NaiveDate::parse_from_str(line.trim(), "%Y-%m-%d").ok())
        .collect()
}

/// Charge des jours chômés supplémentaires depuis un fichier texte
/// (une date par ligne, mêmes règles que [`parse_extra_holidays`]).
pub fn import_extra_holidays<P: AsRef<Path>>(path: P) -> anyhow::Result<ExtraHolidays> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.as_ref().display()))?;
    Ok(parse_extra_holidays(&text))
}

/// Export JSON des recommandations (jolie mise en forme)
pub fn export_results_json<P: AsRef<Path>>(path: P, results: &[RestPeriod]) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(results)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV : header `rank,leave_start,leave_end,rest_start,rest_end,leave_days,total_rest_days`
pub fn export_results_csv<P: AsRef<Path>>(path: P, results: &[RestPeriod]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "rank",
        "leave_start",
        "leave_end",
        "rest_start",
        "rest_end",
        "leave_days",
        "total_rest_days",
    ])?;
    for (idx, r) in results.iter().enumerate() {
        w.write_record([
            (idx + 1).to_string(),
            r.leave_start.to_string(),
            r.leave_end.to_string(),
            r.rest_start.to_string(),
            r.rest_end.to_string(),
            r.leave_days.to_string(),
            r.total_rest_days.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
