/*!
 * Rendering of validation results, batch statistics and quality reports.
 *
 * Text output is meant for a terminal; JSON output wraps the data in a
 * small envelope so scripts can check `ok` before reading `data`.
 */

use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;

use crate::app_config::OutputFormat;
use crate::validation::{AggregateStats, Histogram, QualityReport, ValidationResult};

/// JSON envelope for command output
#[derive(Debug, Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Pretty JSON for any serializable report
pub fn to_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Print a list, one row per item in text mode
pub fn print_out<T: Serialize>(
    format: OutputFormat,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(&JsonOut { ok: true, data })?),
        OutputFormat::Text => {
            for d in data {
                println!("{}", row(d));
            }
        }
    }
    Ok(())
}

/// Print a single value
pub fn print_one<T: Serialize>(
    format: OutputFormat,
    data: T,
    render: impl Fn(&T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(&JsonOut { ok: true, data })?),
        OutputFormat::Text => println!("{}", render(&data)),
    }
    Ok(())
}

fn status_icon(result: &ValidationResult) -> &'static str {
    if result.is_suspicious {
        "⚠️"
    } else if result.is_valid {
        "✅"
    } else {
        "❌"
    }
}

fn shown_original(result: &ValidationResult) -> &str {
    match result.original.as_deref() {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => "(vacío)",
    }
}

/// Detail block for a single number
pub fn render_result(result: &ValidationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📱 {}", shown_original(result));
    let _ = writeln!(out, "   Categoría:     {} {}", status_icon(result), result.category);
    let _ = writeln!(out, "   Número:        {}", result.cleaned_national);
    let _ = writeln!(out, "   Internacional: {}", result.full_international);
    let _ = writeln!(out, "   Operador:      {}", result.operator);
    if !result.error_message.is_empty() {
        let _ = writeln!(out, "   Error:         {}", result.error_message);
    }
    if result.is_suspicious {
        let _ = writeln!(out, "   Sospecha:      {}", result.suspicion_reason);
    }
    out.trim_end().to_string()
}

/// One line per result, for lists
pub fn render_result_row(result: &ValidationResult) -> String {
    let detail = if result.is_suspicious {
        result.suspicion_reason.as_str()
    } else {
        result.error_message.as_str()
    };

    let mut row = format!(
        "{} {:<16} {:<20} {}",
        status_icon(result),
        shown_original(result),
        result.category,
        result.operator
    );
    if !detail.is_empty() {
        let _ = write!(row, " | {}", detail);
    }
    row
}

fn render_histogram(out: &mut String, title: &str, histogram: &Histogram) {
    let _ = writeln!(out, "{}", title);
    if histogram.is_empty() {
        let _ = writeln!(out, "   (sin datos)");
        return;
    }
    for (key, count) in histogram.iter() {
        let _ = writeln!(out, "   {:<24} {:>6}", key, count);
    }
}

/// Summary block for a batch
pub fn render_stats(stats: &AggregateStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📊 Total:       {}", stats.total);
    let _ = writeln!(
        out,
        "✅ Válidos:     {} ({:.2}%)",
        stats.valid, stats.percentage_valid
    );
    let _ = writeln!(
        out,
        "❌ Inválidos:   {} ({:.2}%)",
        stats.invalid, stats.percentage_invalid
    );
    let _ = writeln!(
        out,
        "⚠️ Sospechosos: {} ({:.2}%)",
        stats.suspicious, stats.percentage_suspicious
    );
    let _ = writeln!(out, "🔁 Duplicados:  {}", stats.duplicate_numbers);
    let _ = writeln!(out);
    render_histogram(&mut out, "Por categoría:", &stats.categories);
    render_histogram(&mut out, "Por operador:", &stats.operators);
    if !stats.top_repeated.is_empty() {
        render_histogram(&mut out, "Más repetidos:", &stats.top_repeated);
    }
    out.trim_end().to_string()
}

/// Full quality report for undelivered messages
pub fn render_quality(report: &QualityReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🔍 Análisis de calidad de datos");
    let _ = writeln!(out, "   Fallidos:          {}", report.total_failed);
    let _ = writeln!(out, "   En proceso:        {}", report.total_processing);
    let _ = writeln!(out, "   Números únicos:    {}", report.unique_phones);
    let _ = writeln!(out, "   Válidos:           {}", report.summary.valid);
    let _ = writeln!(out, "   Inválidos:         {}", report.summary.invalid);
    let _ = writeln!(out, "   Sospechosos:       {}", report.summary.suspicious);
    let _ = writeln!(out);
    render_histogram(&mut out, "Números repetidos:", &report.repeated_phones);
    render_histogram(&mut out, "Números en proceso:", &report.processing_phones);
    render_histogram(&mut out, "Prefijos más comunes:", &report.top_prefixes);
    render_histogram(&mut out, "Códigos de error:", &report.error_codes);
    render_histogram(&mut out, "Por operador:", &report.by_operator);
    render_histogram(&mut out, "Por categoría:", &report.summary.by_category);
    render_histogram(&mut out, "Problemas principales:", &report.summary.top_issues);

    if !report.invalid_numbers.is_empty() {
        let _ = writeln!(out, "Números inválidos:");
        for flagged in &report.invalid_numbers {
            let _ = writeln!(out, "   ❌ {} | {}", flagged.phone, flagged.detail);
        }
    }
    if !report.suspicious_numbers.is_empty() {
        let _ = writeln!(out, "Números sospechosos:");
        for flagged in &report.suspicious_numbers {
            let _ = writeln!(out, "   ⚠️ {} | {}", flagged.phone, flagged.detail);
        }
    }
    out.trim_end().to_string()
}
