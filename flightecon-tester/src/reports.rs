use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use flightecon_game::{
    AircraftRoute, BruteCargoConfig, BrutePaxConfig, CargoConfig, Config, Destination,
    PaxConfig, SimulationParams, Stopover, Ticket,
};

use crate::ReportFormat;
use crate::verify::VerificationSummary;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BruteOutcome {
    Pax {
        best: BrutePaxConfig,
        closed: PaxConfig,
        closed_form_income: f64,
    },
    Cargo {
        best: BruteCargoConfig,
        closed: CargoConfig,
        closed_form_income: f64,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct BruteRun {
    pub origin: String,
    pub destination: String,
    pub aircraft: String,
    pub params: SimulationParams,
    pub outcome: BruteOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    Route {
        origin: String,
        destination: String,
        aircraft: String,
        route: AircraftRoute,
    },
    Destinations {
        origin: String,
        aircraft: String,
        destinations: Vec<Destination>,
    },
    Brute(BruteRun),
    Verify(VerificationSummary),
}

pub fn write_report(out: &mut impl Write, report: &Report, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Json => generate_json_report(out, report),
        ReportFormat::Markdown => generate_markdown_report(out, report),
        ReportFormat::Console => generate_console_report(out, report),
    }
}

pub fn generate_json_report(out: &mut impl Write, report: &Report) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_console_report(out: &mut impl Write, report: &Report) -> Result<()> {
    match report {
        Report::Route {
            origin,
            destination,
            aircraft,
            route,
        } => {
            writeln!(
                out,
                "{}",
                format!("🛫 {origin} -> {destination} with {aircraft}")
                    .bright_cyan()
                    .bold()
            )?;
            console_route(out, route)?;
        }
        Report::Destinations {
            origin,
            aircraft,
            destinations,
        } => {
            writeln!(
                out,
                "{}",
                format!("🗺️  Destinations from {origin} with {aircraft}")
                    .bright_cyan()
                    .bold()
            )?;
            writeln!(out, "Valid destinations: {}", destinations.len())?;
            writeln!(out)?;
            for (rank, dest) in destinations.iter().enumerate() {
                writeln!(
                    out,
                    "{:>3}. {:<5} {:>9.1} km  {:>6.2} h  profit {}",
                    rank + 1,
                    dest.airport.iata.bold(),
                    dest.route.full_distance(),
                    dest.route.flight_time.unwrap_or_default(),
                    money(dest.profit())
                )?;
            }
        }
        Report::Brute(run) => console_brute(out, run)?,
        Report::Verify(summary) => console_verify(out, summary)?,
    }
    Ok(())
}

fn console_route(out: &mut impl Write, route: &AircraftRoute) -> Result<()> {
    let status = if route.valid {
        "✅ VALID".green()
    } else {
        "❌ INVALID".red()
    };
    writeln!(out, "Status: {status}")?;
    for warning in &route.warnings {
        let line = format!("   • {warning}");
        if warning.is_blocking() {
            writeln!(out, "{}", line.red())?;
        } else {
            writeln!(out, "{}", line.yellow())?;
        }
    }
    writeln!(out, "Direct distance: {:.1} km", route.route.direct_distance)?;
    if let Some(stopover) = &route.stopover {
        writeln!(out, "Stopover: {}", describe_stopover(stopover))?;
    }
    if let Some(hours) = route.flight_time {
        writeln!(out, "Flight time: {hours:.2} h")?;
    }
    if let Some(fin) = &route.financials {
        writeln!(out, "Config: {}", describe_config(&fin.config))?;
        writeln!(out, "Ticket: {}", describe_ticket(&fin.ticket))?;
        writeln!(out, "Max income: {}", money(fin.max_income))?;
        writeln!(out, "Income: {}", money(fin.income))?;
        writeln!(out, "Fuel: {:.2} lbs", fin.fuel)?;
        writeln!(out, "CO2: {:.2} quotas", fin.co2)?;
        writeln!(out, "A-check: {}", money(fin.acheck_cost))?;
        writeln!(out, "Repair: {}", money(fin.repair_cost))?;
        writeln!(out, "Profit: {}", money(fin.profit).bold())?;
    }
    Ok(())
}

fn console_brute(out: &mut impl Write, run: &BruteRun) -> Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "🔎 Reference optimum {} -> {} with {}",
            run.origin, run.destination, run.aircraft
        )
        .bright_cyan()
        .bold()
    )?;
    writeln!(
        out,
        "Distance: {:.1} km, reputation {:.0}, {} flight(s) per day",
        run.params.distance, run.params.reputation, run.params.flights_per_day
    )?;
    match &run.outcome {
        BruteOutcome::Pax {
            best,
            closed,
            closed_form_income,
        } => {
            writeln!(
                out,
                "Reference: Y {} J {} F {} x{} planes, {} per plane",
                best.y,
                best.j,
                best.f,
                best.planes,
                money(best.max_income)
            )?;
            writeln!(
                out,
                "Closed form: {}, {}",
                describe_pax(closed),
                money(*closed_form_income)
            )?;
            writeln!(out, "Ratio: {}", ratio(*closed_form_income, best.max_income))?;
        }
        BruteOutcome::Cargo {
            best,
            closed,
            closed_form_income,
        } => {
            writeln!(
                out,
                "Reference: L {:.0}% H {:.0}% x{} planes, {} per plane",
                best.l_pct * 100.0,
                best.h_pct * 100.0,
                best.planes,
                money(best.max_income)
            )?;
            writeln!(
                out,
                "Closed form: {}, {}",
                describe_cargo(closed),
                money(*closed_form_income)
            )?;
            writeln!(out, "Ratio: {}", ratio(*closed_form_income, best.max_income))?;
        }
    }
    Ok(())
}

fn console_verify(out: &mut impl Write, summary: &VerificationSummary) -> Result<()> {
    writeln!(out, "{}", "📊 Allocator Verification".bright_cyan().bold())?;
    writeln!(out, "{}", "=========================".cyan())?;
    writeln!(out, "Seed: {} ({})", summary.seed, summary.mode.label())?;
    writeln!(
        out,
        "Cases: {} pax, {} cargo",
        summary.cases.len(),
        summary.cargo_cases.len()
    )?;
    writeln!(out, "Violations: {}", summary.violations.len().to_string().red())?;
    writeln!(out, "Ratio floor: {:.4}", summary.min_ratio_floor)?;
    writeln!(
        out,
        "Pax ratio: min {:.4}, mean {:.4}",
        summary.pax.min, summary.pax.mean
    )?;
    writeln!(
        out,
        "Cargo ratio: min {:.4}, mean {:.4}",
        summary.cargo.min, summary.cargo.mean
    )?;
    writeln!(out)?;
    let status = if summary.passed() {
        "✅ PASS".green()
    } else {
        "❌ FAIL".red()
    };
    writeln!(out, "{status}")?;
    for violation in &summary.violations {
        writeln!(out, "     • {}", violation.to_string().red())?;
    }
    Ok(())
}

pub fn generate_markdown_report(out: &mut impl Write, report: &Report) -> Result<()> {
    match report {
        Report::Route {
            origin,
            destination,
            aircraft,
            route,
        } => {
            writeln!(out, "# Route {origin} -> {destination} ({aircraft})\n")?;
            writeln!(out, "- **Valid**: {}", route.valid)?;
            let warnings: Vec<&str> = route.warnings.iter().map(|w| w.label()).collect();
            writeln!(out, "- **Warnings**: {}", warnings.join(", "))?;
            writeln!(
                out,
                "- **Direct distance**: {:.1} km",
                route.route.direct_distance
            )?;
            if let Some(stopover) = &route.stopover {
                writeln!(out, "- **Stopover**: {}", describe_stopover(stopover))?;
            }
            if let Some(fin) = &route.financials {
                writeln!(out, "\n| Item | Value |\n|---|---|")?;
                writeln!(out, "| Config | {} |", describe_config(&fin.config))?;
                writeln!(out, "| Ticket | {} |", describe_ticket(&fin.ticket))?;
                writeln!(out, "| Income | {:.2} |", fin.income)?;
                writeln!(out, "| Fuel | {:.2} |", fin.fuel)?;
                writeln!(out, "| CO2 | {:.2} |", fin.co2)?;
                writeln!(out, "| A-check | {:.2} |", fin.acheck_cost)?;
                writeln!(out, "| Repair | {:.2} |", fin.repair_cost)?;
                writeln!(out, "| Profit | {:.2} |", fin.profit)?;
            }
        }
        Report::Destinations {
            origin,
            aircraft,
            destinations,
        } => {
            writeln!(out, "# Destinations from {origin} ({aircraft})\n")?;
            if destinations.is_empty() {
                writeln!(out, "_No valid destinations._")?;
                return Ok(());
            }
            writeln!(out, "| # | Airport | Distance (km) | Stopover | Profit |")?;
            writeln!(out, "|---|---|---|---|---|")?;
            for (rank, dest) in destinations.iter().enumerate() {
                let via = dest
                    .route
                    .stopover
                    .as_ref()
                    .and_then(Stopover::airport)
                    .map_or("-", |ap| ap.iata.as_str());
                writeln!(
                    out,
                    "| {} | {} | {:.1} | {via} | {:.2} |",
                    rank + 1,
                    dest.airport.iata,
                    dest.route.full_distance(),
                    dest.profit()
                )?;
            }
        }
        Report::Brute(run) => {
            writeln!(
                out,
                "# Reference optimum {} -> {} ({})\n",
                run.origin, run.destination, run.aircraft
            )?;
            match &run.outcome {
                BruteOutcome::Pax {
                    best,
                    closed,
                    closed_form_income,
                } => {
                    writeln!(out, "| Source | Y | J | F | Planes | Income/plane |")?;
                    writeln!(out, "|---|---|---|---|---|---|")?;
                    writeln!(
                        out,
                        "| Reference | {} | {} | {} | {} | {:.2} |",
                        best.y, best.j, best.f, best.planes, best.max_income
                    )?;
                    writeln!(
                        out,
                        "| Closed form | {} | {} | {} | 1 | {closed_form_income:.2} |",
                        closed.y, closed.j, closed.f
                    )?;
                }
                BruteOutcome::Cargo {
                    best,
                    closed,
                    closed_form_income,
                } => {
                    writeln!(out, "| Source | L | H | Planes | Income/plane |")?;
                    writeln!(out, "|---|---|---|---|---|")?;
                    writeln!(
                        out,
                        "| Reference | {:.0}% | {:.0}% | {} | {:.2} |",
                        best.l_pct * 100.0,
                        best.h_pct * 100.0,
                        best.planes,
                        best.max_income
                    )?;
                    writeln!(
                        out,
                        "| Closed form | {}% | {}% | 1 | {closed_form_income:.2} |",
                        closed.l, closed.h
                    )?;
                }
            }
        }
        Report::Verify(summary) => {
            writeln!(out, "# Allocator Verification\n")?;
            writeln!(out, "## Summary\n")?;
            writeln!(out, "- **Seed**: {}", summary.seed)?;
            writeln!(out, "- **Cases**: {}", summary.cases.len())?;
            writeln!(out, "- **Cargo cases**: {}", summary.cargo_cases.len())?;
            writeln!(out, "- **Violations**: {}", summary.violations.len())?;
            writeln!(out, "- **Ratio floor**: {:.4}\n", summary.min_ratio_floor)?;
            writeln!(out, "| Cabin | Min ratio | Mean ratio |\n|---|---|---|")?;
            writeln!(
                out,
                "| Pax | {:.4} | {:.4} |",
                summary.pax.min, summary.pax.mean
            )?;
            writeln!(
                out,
                "| Cargo | {:.4} | {:.4} |\n",
                summary.cargo.min, summary.cargo.mean
            )?;
            if !summary.violations.is_empty() {
                writeln!(out, "## Violations\n")?;
                for violation in &summary.violations {
                    writeln!(out, "- {violation}")?;
                }
            }
        }
    }
    Ok(())
}

fn describe_pax(cfg: &PaxConfig) -> String {
    format!(
        "Y {} J {} F {} ({})",
        cfg.y,
        cfg.j,
        cfg.f,
        cfg.algorithm.label()
    )
}

fn describe_config(config: &Config) -> String {
    match config {
        Config::Pax(cfg) => describe_pax(cfg),
        Config::Cargo(cfg) => describe_cargo(cfg),
    }
}

fn describe_cargo(cfg: &CargoConfig) -> String {
    format!("L {}% H {}% ({:?})", cfg.l, cfg.h, cfg.algorithm)
}

fn describe_ticket(ticket: &Ticket) -> String {
    match ticket {
        Ticket::Pax(t) => format!("Y ${} J ${} F ${}", t.y, t.j, t.f),
        Ticket::Vip(t) => format!("VIP Y ${} J ${} F ${}", t.y, t.j, t.f),
        Ticket::Cargo(t) => format!("L ${:.2} H ${:.2}", t.l, t.h),
    }
}

fn describe_stopover(stopover: &Stopover) -> String {
    match stopover {
        Stopover::None => "none".to_string(),
        Stopover::Via {
            airport,
            full_distance,
        } => format!("via {} ({full_distance:.1} km)", airport.iata),
    }
}

fn money(value: f64) -> String {
    format!("${value:.2}")
}

fn ratio(part: f64, whole: f64) -> String {
    if whole > 0.0 {
        format!("{:.4}", part / whole)
    } else {
        "n/a".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightecon_game::{CargoAlgorithm, CargoTicket, GameSettings, PaxTicket};

    fn verify_report() -> Report {
        Report::Verify(crate::verify::run_verification(&crate::verify::VerifyConfig {
            cases: 3,
            seed: 5,
            max_capacity: 12,
            min_ratio: 0.0,
            settings: GameSettings::default(),
        }))
    }

    #[test]
    fn json_report_is_tagged() {
        let mut buf = Vec::new();
        generate_json_report(&mut buf, &verify_report()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["report"], "verify");
        assert_eq!(value["cases"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["cargo_cases"].as_array().map(Vec::len), Some(3));
        assert!(value["pax"]["min"].as_f64().is_some());
    }

    #[test]
    fn markdown_report_has_summary() {
        let mut buf = Vec::new();
        generate_markdown_report(&mut buf, &verify_report()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("# Allocator Verification"));
        assert!(text.contains("- **Cases**: 3"));
    }

    #[test]
    fn describers_cover_every_layout() {
        let cargo = Config::Cargo(CargoConfig {
            l: 80,
            h: 20,
            valid: true,
            algorithm: CargoAlgorithm::L,
        });
        assert_eq!(describe_config(&cargo), "L 80% H 20% (L)");
        let vip = Ticket::Vip(PaxTicket { y: 1, j: 2, f: 3 });
        assert_eq!(describe_ticket(&vip), "VIP Y $1 J $2 F $3");
        let freight = Ticket::Cargo(CargoTicket { l: 1.5, h: 0.25 });
        assert_eq!(describe_ticket(&freight), "L $1.50 H $0.25");
        assert_eq!(describe_stopover(&Stopover::None), "none");
        assert_eq!(ratio(1.0, 0.0), "n/a");
    }
}
