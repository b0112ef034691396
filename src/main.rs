use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::{Builder, Env, Target};
use log::{error, info};
use std::{io::Write, time::Duration};
use wifi_portal::{
    config::AppConfig, http_client::ReqwestTransport, report, shell::Shell,
};
use wifi_portal_core::{
    events::{CatalogEvent, IntentEvent, SubmitEvent},
    Event, IntentField,
};

#[derive(Parser, Debug)]
#[clap(name = "wifi-portal", version, author)]
#[clap(about = "Select and join a wifi network through a captive portal")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the networks the portal can see
    Scan,
    /// Join a network with the primary radio
    Connect(Credentials),
    /// Repeat a network through the secondary radio found by the bridge service
    Repeat(Credentials),
}

#[derive(Args, Debug)]
struct Credentials {
    /// Network name; defaults to the first scanned network
    #[clap(long)]
    ssid: Option<String>,

    /// Identity for enterprise networks
    #[clap(long)]
    identity: Option<String>,

    #[clap(long)]
    passphrase: Option<String>,
}

impl Credentials {
    fn into_event(self) -> Event {
        Event::Intent(IntentEvent::UpdateMany(vec![
            IntentField::Ssid(self.ssid),
            IntentField::Identity(self.identity),
            IntentField::Passphrase(self.passphrase),
        ]))
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    initialize();

    let config = AppConfig::load().context("failed to load configuration")?;
    info!(
        "portal {} bridge {}://{}:{}",
        config.portal_origin,
        config.bridge_service.scheme,
        config.bridge_service.host,
        config.bridge_service.port
    );

    let transport = ReqwestTransport::new(Duration::from_millis(config.request_timeout_ms))?;
    let mut shell = Shell::new(transport);

    shell.dispatch(Event::Initialize {
        config: config.portal_config(),
    })?;
    shell.run_until_idle().await?;

    let events = match cli.command {
        Command::Scan => vec![Event::Catalog(CatalogEvent::Scan)],
        Command::Connect(credentials) => {
            vec![credentials.into_event(), Event::Submit(SubmitEvent::Connect)]
        }
        Command::Repeat(credentials) => {
            vec![credentials.into_event(), Event::Submit(SubmitEvent::Repeat)]
        }
    };
    for event in events {
        shell.dispatch(event)?;
    }
    shell.run_until_idle().await?;

    let view = shell.view();
    print!("{}", report::render(&view));

    anyhow::ensure!(!report::has_error(&view), "portal reported an error");

    Ok(())
}

fn initialize() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| match record.level() {
        log::Level::Error => {
            eprintln!("{}", record.args());
            Ok(())
        }
        _ => {
            writeln!(f, "{}", record.args())
        }
    });

    builder.target(Target::Stderr).init();

    info!("wifi-portal version: {}", env!("CARGO_PKG_VERSION"));
}
