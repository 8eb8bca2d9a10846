use clap::{Parser, Subcommand};
use lm_core::units::{Pressure, Temperature, parse_pressure, parse_temperature};
use lm_liquids::{LiquidDatabase, PureComponentModel};
use lm_mixture::{LiquidMixture, MixtureModel, MixtureResult};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "lm-cli")]
#[command(about = "Liquid mixture thermophysical properties", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in liquids
    Liquids {
        /// Only show liquids whose id, name or alias contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Validate a mixture file and list its components
    Check {
        /// Path to the mixture YAML or JSON file
        mixture_path: PathBuf,
    },
    /// Evaluate mixture properties at one state
    Props {
        /// Path to the mixture YAML or JSON file
        mixture_path: PathBuf,
        /// Pressure with unit (e.g. "1 atm", "2 bar", "101325 Pa")
        #[arg(short, long, value_parser = parse_pressure)]
        pressure: Pressure,
        /// Temperature with unit (e.g. "300 K", "25 C")
        #[arg(short, long, value_parser = parse_temperature)]
        temperature: Temperature,
        /// Mole fractions in component order, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        x: Vec<f64>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Find the bubble-point temperature at a pressure
    Boil {
        /// Path to the mixture YAML or JSON file
        mixture_path: PathBuf,
        /// Pressure with unit (e.g. "1 atm", "2 bar", "101325 Pa")
        #[arg(short, long, value_parser = parse_pressure)]
        pressure: Pressure,
        /// Mole fractions in component order, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        x: Vec<f64>,
    },
}

fn main() -> MixtureResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let db = LiquidDatabase::builtin();

    match cli.command {
        Commands::Liquids { filter } => {
            cmd_liquids(&db, filter.as_deref());
            Ok(())
        }
        Commands::Check { mixture_path } => cmd_check(&db, &mixture_path),
        Commands::Props {
            mixture_path,
            pressure,
            temperature,
            x,
            json,
        } => cmd_props(
            &db,
            &mixture_path,
            pressure.value,
            temperature.value,
            &x,
            json,
        ),
        Commands::Boil {
            mixture_path,
            pressure,
            x,
        } => cmd_boil(&db, &mixture_path, pressure.value, &x),
    }
}

fn cmd_liquids(db: &LiquidDatabase, filter: Option<&str>) {
    let entries = db.filter(filter.unwrap_or(""));
    if entries.is_empty() {
        println!("No liquids match");
        return;
    }

    println!("{:<8} {:<12} {:>10} {:>9}", "id", "name", "W", "Tc [K]");
    for entry in entries {
        println!(
            "{:<8} {:<12} {:>10.3} {:>9.2}",
            entry.canonical_id, entry.display_name, entry.coeffs.w, entry.coeffs.tc
        );
    }
}

fn cmd_check(db: &LiquidDatabase, mixture_path: &Path) -> MixtureResult<()> {
    println!("Checking mixture: {}", mixture_path.display());
    let mixture = LiquidMixture::load(mixture_path, db)?;

    println!("✓ Mixture is valid ({} components)", mixture.size());
    for (i, (id, liquid)) in mixture
        .components()
        .iter()
        .zip(mixture.properties())
        .enumerate()
    {
        println!(
            "  [{}] {} (W = {:.3}, Tc = {:.2} K)",
            i,
            id,
            liquid.molecular_weight(),
            liquid.critical_temperature()
        );
    }
    Ok(())
}

fn cmd_props(
    db: &LiquidDatabase,
    mixture_path: &Path,
    p: f64,
    t: f64,
    x: &[f64],
    json: bool,
) -> MixtureResult<()> {
    let mixture = LiquidMixture::load(mixture_path, db)?;
    info!(p, t, "evaluating mixture properties");

    let rows = [
        ("W", mixture.w(x)?, "kg/kmol"),
        ("rho", mixture.rho(p, t, x)?, "kg/m3"),
        ("pv", mixture.pv(p, t, x)?, "Pa"),
        ("hl", mixture.hl(p, t, x)?, "J/kg"),
        ("Cp", mixture.cp(p, t, x)?, "J/(kg K)"),
        ("sigma", mixture.sigma(p, t, x)?, "N/m"),
        ("mu", mixture.mu(p, t, x)?, "Pa s"),
        ("K", mixture.k(p, t, x)?, "W/(m K)"),
        ("D", mixture.d(p, t, x)?, "m2/s"),
        ("Tc", mixture.tc(x)?, "K"),
        ("Tpc", mixture.tpc(x)?, "K"),
        ("Ppc", mixture.ppc(x)?, "Pa"),
        ("Tpt", mixture.tpt(x)?, "K"),
        ("omega", mixture.omega(x)?, "-"),
    ];
    let y = mixture.mass_fractions(x)?;

    if json {
        let mut out = serde_json::Map::new();
        out.insert("p".into(), p.into());
        out.insert("T".into(), t.into());
        out.insert("components".into(), mixture.components().into());
        out.insert("X".into(), x.into());
        out.insert("Y".into(), y.as_slice().into());
        for (name, value, _) in rows {
            out.insert(name.into(), value.into());
        }
        println!("{}", serde_json::Value::Object(out));
        return Ok(());
    }

    println!("State: p = {:.1} Pa, T = {:.2} K", p, t);
    println!("\n{:<8} {:>10} {:>10}", "component", "X", "Y");
    for ((id, xi), yi) in mixture.components().iter().zip(x).zip(&y) {
        println!("{:<8} {:>10.5} {:>10.5}", id, xi, yi);
    }

    println!();
    for (name, value, unit) in rows {
        println!("  {:<6} {:>14.6e} {}", name, value, unit);
    }
    Ok(())
}

fn cmd_boil(db: &LiquidDatabase, mixture_path: &Path, p: f64, x: &[f64]) -> MixtureResult<()> {
    let mixture = LiquidMixture::load(mixture_path, db)?;
    let t = mixture.pv_invert(p, x)?;

    println!("✓ Bubble point at {:.1} Pa: {:.4} K", p, t);
    println!("  pv(T) = {:.3} Pa", mixture.pv(p, t, x)?);
    Ok(())
}
