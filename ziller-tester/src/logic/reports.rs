use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use super::{CheckOutcome, DayRow, SweepResult};

fn yes_no(value: bool) -> &'static str {
    if value { "ja" } else { "nein" }
}

pub fn generate_console_sweep_report(
    out: &mut dyn Write,
    results: &[SweepResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Sweep Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "========================".cyan())?;

    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "Total sweeps: {}", results.len())?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (results.len() - passed).to_string().red())?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(out, "{} {}", status, result.name.bold())?;
        writeln!(out, "   Days checked: {}", result.days_checked)?;
        writeln!(out, "   Time: {:?}", result.duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "   Failures ({}):", result.failure_count)?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn generate_markdown_sweep_report(out: &mut dyn Write, results: &[SweepResult]) -> Result<()> {
    writeln!(out, "# Radsport Ziller Booking Rule Sweeps\n")?;
    writeln!(out, "| Sweep | Status | Days | Failures |")?;
    writeln!(out, "|-------|--------|------|----------|")?;
    for result in results {
        let status = if result.passed { "✅ PASS" } else { "❌ FAIL" };
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            result.name, status, result.days_checked, result.failure_count
        )?;
    }
    for result in results.iter().filter(|r| !r.failures.is_empty()) {
        writeln!(out, "\n## {}\n", result.name)?;
        for failure in &result.failures {
            writeln!(out, "- {failure}")?;
        }
    }
    Ok(())
}

pub fn generate_console_calendar(out: &mut dyn Write, title: &str, rows: &[DayRow]) -> Result<()> {
    writeln!(out, "{}", format!("📅 {title}").bright_cyan().bold())?;
    writeln!(out, "{}", "-".repeat(40).cyan())?;
    for row in rows {
        let line = format!(
            "{} {:<10} {:>2} Termine{}",
            row.date.to_german(),
            row.weekday,
            row.slot_count,
            row.last_slot
                .as_ref()
                .map(|last| format!(" bis {last}"))
                .unwrap_or_default()
        );
        let line = match (&row.holiday, row.bookable, row.selectable) {
            (Some(name), _, _) => format!("{} ({name})", line.red()),
            (None, true, _) => line.green().to_string(),
            (None, false, true) => line.yellow().to_string(),
            (None, false, false) => line.dimmed().to_string(),
        };
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn generate_markdown_calendar(out: &mut dyn Write, title: &str, rows: &[DayRow]) -> Result<()> {
    writeln!(out, "# {title}\n")?;
    writeln!(out, "| Datum | Tag | Wählbar | Buchbar | Termine | Feiertag |")?;
    writeln!(out, "|-------|-----|---------|---------|---------|----------|")?;
    for row in rows {
        writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} |",
            row.date.to_german(),
            row.weekday,
            yes_no(row.selectable),
            yes_no(row.bookable),
            row.slot_count,
            row.holiday.as_deref().unwrap_or("")
        )?;
    }
    Ok(())
}

pub fn generate_console_check(out: &mut dyn Write, outcome: &CheckOutcome) -> Result<()> {
    writeln!(out, "{}", format!("🔎 {} ({})", outcome.date.to_german(), outcome.weekday).bold())?;
    writeln!(out, "Wählbar: {}", yes_no(outcome.selectable))?;
    writeln!(out, "Buchbar: {}", yes_no(outcome.bookable))?;
    if let Some(name) = &outcome.holiday {
        writeln!(out, "Feiertag: {}", name.red())?;
    }
    writeln!(out, "Uhrzeiten: {}", outcome.valid_slots.join(", "))?;
    if let Some(time) = &outcome.time {
        let kept = outcome.time_kept.unwrap_or(false);
        writeln!(
            out,
            "{time}: {}",
            if kept { "angeboten".green() } else { "nicht angeboten".red() }
        )?;
        if outcome.clears_date == Some(true) {
            writeln!(out, "{}", "Diese Uhrzeit würde das gewählte Datum zurücksetzen.".yellow())?;
        }
    }
    Ok(())
}

pub fn generate_json<T: serde::Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{check_day, month_overview, run_sweeps};
    use ziller_core::{CalendarDate, EligibilityEngine, TimeSlot};

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn markdown_calendar_has_a_row_per_day() {
        let engine = EligibilityEngine::default();
        let rows = month_overview(&engine, date(2026, 2, 1), 1, date(2026, 2, 1));
        let mut buf = Vec::new();
        generate_markdown_calendar(&mut buf, "Februar 2026", &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("# Februar 2026"));
        assert_eq!(text.lines().filter(|l| l.starts_with("| ") && l.contains(".2026")).count(), 28);
        assert!(text.contains("| 10.02.2026 | Dienstag | ja | ja | 17 |  |"));
    }

    #[test]
    fn markdown_sweeps_list_each_result() {
        let engine = EligibilityEngine::default();
        let results = run_sweeps(&engine, &["all".to_string()], 2026..=2026);
        let mut buf = Vec::new();
        generate_markdown_sweep_report(&mut buf, &results).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for result in &results {
            assert!(text.contains(&format!("| {} | ✅ PASS |", result.name)), "{text}");
        }
    }

    #[test]
    fn json_check_is_machine_readable() {
        let engine = EligibilityEngine::default();
        let outcome = check_day(&engine, date(2026, 2, 9), 1, date(2026, 2, 13), TimeSlot::from_hm(8, 0).ok());
        let mut buf = Vec::new();
        generate_json(&mut buf, &outcome).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["date"], "2026-02-13");
        assert_eq!(value["time_kept"], true);
        assert_eq!(value["valid_slots"].as_array().map(Vec::len), Some(12));
    }
}
