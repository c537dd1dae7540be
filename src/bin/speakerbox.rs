use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use speakerbox::logging::setup_logger;
use speakerbox::{DesignerSettings, EnclosureDesigner, KeyValueFile, TuningOptions};

/// Design a loudspeaker enclosure from a driver's Thiele-Small parameters.
#[derive(Parser, Debug)]
#[command(version)]
struct CliArgs {
    /// Driver file with fs, qts, vas, ... as key=value lines.
    pub driver: PathBuf,

    /// Sealed, Ported, Bandpass, TransmissionLine or PassiveRadiator.
    #[clap(long, short)]
    pub topology: Option<String>,

    /// Designer settings file (port_diameter_cm, bracing_allowance_l,
    /// port_velocity_limit). Defaults to settings found in the driver file.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Target system Q (sealed).
    #[clap(long)]
    pub qtc: Option<f64>,

    /// Tuning frequency in Hz (ported).
    #[clap(long)]
    pub fb: Option<f64>,

    /// Volume ratio (bandpass).
    #[clap(long)]
    pub s: Option<f64>,

    /// Taper ratio (transmission line).
    #[clap(long)]
    pub tr: Option<f64>,

    /// Compliance ratio (passive radiator).
    #[clap(long)]
    pub delta: Option<f64>,

    /// Log at debug level unless RUST_LOG is set.
    #[clap(long)]
    pub debug: bool,
}

fn run(args: &CliArgs) -> Result<()> {
    let driver_file = KeyValueFile::open(&args.driver)
        .with_context(|| format!("failed to read driver file {}", args.driver.display()))?;
    let params = driver_file
        .load_driver_parameters()
        .with_context(|| format!("bad driver file {}", args.driver.display()))?;

    let settings = match &args.config {
        Some(path) => {
            let file = KeyValueFile::open(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            DesignerSettings::from_config(&file)
                .with_context(|| format!("bad config file {}", path.display()))?
        }
        None => DesignerSettings::from_config(&driver_file)
            .with_context(|| format!("bad settings in driver file {}", args.driver.display()))?,
    };
    let designer = EnclosureDesigner::with_settings(settings)?;

    println!("Recommended: {}", designer.recommend(params.qts));

    let Some(topology) = &args.topology else {
        return Ok(());
    };

    let options = TuningOptions {
        qtc: args.qtc,
        fb: args.fb,
        s: args.s,
        tr: args.tr,
        delta: args.delta,
    };
    let result = designer.design_named(&params, topology, &options)?;
    log::info!(
        "Calculation: {} Vb={:.2} L",
        result.topology,
        result.net_volume
    );

    println!();
    println!("{result}");
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    setup_logger(if args.debug { "debug" } else { "warn" });

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
