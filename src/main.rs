//! Carbon Lens command line
//!
//! Reads an activity profile (JSON or YAML), optionally estimates a commute
//! from two place names, and prints the annual footprint with advice.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

use carbon_lens::{ActivityInputs, CarbonLens, Category, FactorTable, FootprintReport, LensConfig, VehicleClass};

// ──────────────────────────────────────────────────────────────────────────────
// ARGUMENTS
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "carbon_lens", about = "Estimate an annual personal carbon footprint")]
struct CliArgs {
    /// Activity profile (.json, .yaml or .yml); all-zero inputs when omitted
    profile: Option<PathBuf>,

    /// Commute origin, resolved by name
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// Commute destination, resolved by name
    #[arg(long, requires = "from")]
    to: Option<String>,

    /// Vehicle class label or key, e.g. "Public Bus" or public_bus
    #[arg(long, default_value = "petrol_car", value_parser = VehicleClass::from_str)]
    vehicle: VehicleClass,

    /// One-way trips per day
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    trips: u32,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// List the emission factors in use and exit
    #[arg(long)]
    factors: bool,
}

// ──────────────────────────────────────────────────────────────────────────────
// PROFILE AND OUTPUT
// ──────────────────────────────────────────────────────────────────────────────

/// Read a JSON or YAML activity profile, chosen by extension
fn load_profile(path: &Path) -> Result<ActivityInputs> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&content).with_context(|| format!("Invalid YAML profile {}", path.display()))
    } else {
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON profile {}", path.display()))
    }
}

fn factor_lines(table: &FactorTable) -> Vec<String> {
    let mut lines = Vec::new();
    for category in Category::ALL {
        lines.push(format!("[{}]", category));
        for (unit, factor) in table.units(category) {
            lines.push(format!("  {:>10.6} kg CO₂e  {}", factor, unit.description()));
        }
    }
    lines
}

fn print_report(report: &FootprintReport) {
    println!("\n{}", "═".repeat(60));
    println!("🌍 Annual footprint: {:.2} kg CO₂e ({:.2} t)", report.total, report.total / 1000.0);
    println!("{}", "═".repeat(60));

    for (category, value) in report.breakdown.iter() {
        println!("  {:<10} {:>10.2} kg", category.to_string(), value);
    }

    if let Some(commute) = &report.commute {
        println!(
            "\n🧭 Commute {} → {}: {:.2} km by {}, {} trips/day",
            commute.origin, commute.destination, commute.distance_km, commute.vehicle, commute.trips_per_day
        );
    }

    let b = &report.benchmark;
    println!("\n📊 {}", b.status.message());
    println!("  vs India average:   {:+.2} kg", b.vs_india_average);
    println!("  vs Paris target:    {:+.2} kg", b.vs_paris_target);
    println!("  vs global average:  {:+.2} kg", b.vs_global_average);
    println!("  Intensity: {}%  |  Trees to offset: {}", b.intensity_percent, b.trees_to_offset);

    let source = if report.ai_generated { "AI" } else { "rule-based" };
    println!("\n💡 Recommendations ({}):", source);
    for item in &report.recommendations {
        println!("  {}", item);
    }
    println!();
}

// ──────────────────────────────────────────────────────────────────────────────
// MAIN ENTRY POINT
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = CliArgs::parse();
    let config = LensConfig::from_env()?;
    let lens = CarbonLens::from_config(&config)?;

    if cli.factors {
        for line in factor_lines(lens.accounting().factor_table()) {
            println!("{}", line);
        }
        return Ok(());
    }

    let inputs = match &cli.profile {
        Some(path) => load_profile(path)?,
        None => ActivityInputs::default(),
    };

    let result = match (&cli.from, &cli.to) {
        (Some(from), Some(to)) => {
            lens.assess_with_commute(inputs, from, to, cli.vehicle, cli.trips).await
        }
        _ => lens.assess(&inputs).await,
    };

    let report = match result {
        Ok(report) => report,
        Err(err) => {
            eprintln!("❌ {}", err.user_hint());
            return Err(err.into());
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbon_lens::TransportInput;

    #[test]
    fn test_parse_commute_flags() {
        let cli = CliArgs::try_parse_from([
            "carbon_lens", "me.yaml", "--from", "Gandhipuram", "--to", "Peelamedu", "--vehicle", "Public Bus",
            "--trips", "4",
        ])
        .unwrap();
        assert_eq!(cli.profile, Some(PathBuf::from("me.yaml")));
        assert_eq!(cli.vehicle, VehicleClass::PublicBus);
        assert_eq!(cli.trips, 4);
    }

    #[test]
    fn test_defaults() {
        let cli = CliArgs::try_parse_from(["carbon_lens"]).unwrap();
        assert_eq!(cli.profile, None);
        assert_eq!(cli.vehicle, VehicleClass::PetrolCar);
        assert_eq!(cli.trips, 2);
        assert!(!cli.json);
    }

    #[test]
    fn test_from_without_to_rejected() {
        assert!(CliArgs::try_parse_from(["carbon_lens", "--from", "Chennai"]).is_err());
        assert!(CliArgs::try_parse_from(["carbon_lens", "--to", "Madurai"]).is_err());
    }

    #[test]
    fn test_unknown_vehicle_rejected() {
        let args = ["carbon_lens", "--from", "A", "--to", "B", "--vehicle", "Hovercraft"];
        assert!(CliArgs::try_parse_from(args).is_err());
    }

    #[test]
    fn test_zero_trips_rejected() {
        assert!(CliArgs::try_parse_from(["carbon_lens", "--trips", "0"]).is_err());
    }

    #[test]
    fn test_yaml_profile_with_transport_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.yaml");
        std::fs::write(
            &path,
            "transport:\n  manual:\n    petrol_car_km: 10\nenergy:\n  electricity_kwh: 100\n  lpg_cylinders: 1\n",
        )
        .unwrap();

        let inputs = load_profile(&path).unwrap();
        assert_eq!(inputs.energy.electricity_kwh, 100.0);
        match inputs.transport {
            TransportInput::Manual(t) => assert_eq!(t.petrol_car_km, 10.0),
            other => panic!("unexpected transport input: {:?}", other),
        }
    }

    #[test]
    fn test_json_and_yaml_profiles_agree() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("profile.json");
        let yaml = dir.path().join("profile.yml");
        std::fs::write(&json, r#"{"transport": {"manual": {"bus_km": 8}}, "water": {"daily_litres": 120}}"#)
            .unwrap();
        std::fs::write(&yaml, "transport:\n  manual:\n    bus_km: 8\nwater:\n  daily_litres: 120\n").unwrap();

        assert_eq!(load_profile(&json).unwrap(), load_profile(&yaml).unwrap());
    }

    #[test]
    fn test_factor_listing_describes_units() {
        let lines = factor_lines(&FactorTable::canonical());
        assert_eq!(lines[0], "[transport]");
        assert!(lines.iter().any(|l| l.contains("km driven per day in a petrol car")));
        assert!(lines.iter().any(|l| l == "[waste]"));
    }
}
