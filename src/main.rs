//! Tagbot CLI - chat with a bot on stdin/stdout.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use tagbot::adapters::cli::{run, StdChatIo};
use tagbot::bots::{OfficeHoursBot, TeenSupportBot};
use tagbot::config::{AppConfig, LogFormat};

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.log.filter)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log.format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}

fn main() -> ExitCode {
    let config = match AppConfig::load().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    let mut io = StdChatIo::new();
    let result = match config.chat.bot.as_str() {
        "office-hours" => run::<OfficeHoursBot>(&mut io, &config.chat.prompt),
        "teen-support" => run::<TeenSupportBot>(&mut io, &config.chat.prompt),
        other => {
            eprintln!(
                "unknown bot '{}'; available bots: office-hours, teen-support",
                other
            );
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
