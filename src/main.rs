use std::collections::HashMap;

use clap::{Parser, ValueEnum};

use app_version_check::make_validator;
use app_version_check::version::policy::{VersionGranularity, update_required};
use app_version_check::version::sources::local::VERSION_KEY;

#[derive(Parser)]
#[command(name = "app-version-check")]
#[command(version, about = "Check whether an app needs an update against the App Store")]
struct Cli {
    /// Bundle identifier used for the App Store lookup
    #[arg(long)]
    bundle_id: String,

    /// Version currently installed on the device, e.g. "1.2.0"
    #[arg(long)]
    device_version: String,

    /// Granularity at which version numbers are compared
    #[arg(long, value_enum, default_value = "major")]
    granularity: Granularity,
}

#[derive(Clone, Copy, ValueEnum)]
enum Granularity {
    Major,
    Minor,
    Patch,
}

impl From<Granularity> for VersionGranularity {
    fn from(granularity: Granularity) -> Self {
        match granularity {
            Granularity::Major => VersionGranularity::Major,
            Granularity::Minor => VersionGranularity::Minor,
            Granularity::Patch => VersionGranularity::Patch,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let metadata = HashMap::from([(
        VERSION_KEY.to_string(),
        serde_json::Value::String(cli.device_version.clone()),
    )]);
    let granularity = cli.granularity.into();

    let validator = make_validator(Some(metadata), Some(cli.bundle_id), granularity);
    let (device, reference) = validator.version_numbers().await?;

    println!("Installed: {device}");
    println!("Published: {reference}");

    if update_required(device, reference, granularity) {
        println!("Update required");
    } else {
        println!("Up to date");
    }

    Ok(())
}
