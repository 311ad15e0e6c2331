//! CLI for blackbox-trigger
//!
//! Every flag falls back to an environment variable (a `.env` file is honoured)
//! and then to a literal default. `-h` is the broker host, so help is `--help`.

use std::error::Error;
use std::process::ExitCode;

use blackbox_trigger::config::{Overrides, load_config};
use blackbox_trigger::relay::Relay;
use blackbox_trigger::utils::logging;
use clap::{ArgAction, Parser};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "blackbox-trigger")]
#[command(about = "Publishes a BlackBox trigger when watched objects are detected")]
#[command(version, disable_help_flag = true)]
struct Args {
    /// Show this help message and exit
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// MQTT broker host [env: MQTT_HOST] [default: 127.0.0.1]
    #[arg(short = 'h', long)]
    host: Option<String>,

    /// MQTT broker port [env: MQTT_PORT] [default: 1883]
    #[arg(short, long)]
    port: Option<u16>,

    /// MQTT topic [env: MQTT_TOPIC] [default: #]
    #[arg(short, long)]
    topic: Option<String>,

    /// List of objects (csv) which will trigger the generation of a BlackBox; entries are trimmed
    /// and empty entries ignored [env: OBJECTS] [default: person]
    #[arg(short, long)]
    objects: Option<String>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            topic: self.topic.clone(),
            objects: self.objects.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    logging::init(logging::level_for_verbosity(args.verbose));

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                error!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let settings = load_config()?.with_overrides(args.overrides());
    let relay = Relay::new(settings)?;

    tokio::select! {
        result = relay.run() => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received. Exiting.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn parses_short_flags() {
        let args = Args::try_parse_from([
            "blackbox-trigger",
            "-v",
            "-h",
            "broker.local",
            "-p",
            "1884",
            "-t",
            "frigate/events",
            "-o",
            "person,car",
        ])
        .unwrap();

        assert!(args.verbose);
        let overrides = args.overrides();
        assert_eq!(overrides.host.as_deref(), Some("broker.local"));
        assert_eq!(overrides.port, Some(1884));
        assert_eq!(overrides.topic.as_deref(), Some("frigate/events"));
        assert_eq!(overrides.objects.as_deref(), Some("person,car"));
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::try_parse_from(["blackbox-trigger"]).unwrap();
        assert!(!args.verbose);
        assert!(args.overrides().host.is_none());
        assert!(args.overrides().port.is_none());
    }

    #[test]
    fn rejects_unparsable_port() {
        assert!(Args::try_parse_from(["blackbox-trigger", "--port", "eighty"]).is_err());
    }

    #[test]
    fn objects_help_mentions_trimming() {
        use clap::CommandFactory;

        let help = Args::command().render_long_help().to_string();
        assert!(help.contains("entries are trimmed"));
    }

    #[test]
    fn long_help_is_available() {
        let err = Args::try_parse_from(["blackbox-trigger", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
