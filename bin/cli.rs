use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Pseudo-legal chess on an 8x8 grid, played by a random self-play driver.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity of the diagnostics written to stderr, e.g. `debug` to log every ply.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// Defaults to `play`.
    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let writer = layer()
            .pretty()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(stderr);

        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib::chess", self.verbosity)
            .with_target("lib::selfplay", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        registry().with(filter).with(writer).init();

        self.applet.unwrap_or_default().execute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_interface_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn play_is_the_default_applet() {
        let cli = Cli::try_parse_from(["cli", "--verbosity", "warn"]).unwrap();
        assert_eq!(cli.verbosity, Level::WARN);
        assert!(cli.applet.is_none());
    }

    #[test]
    fn play_accepts_a_seed_and_limits() {
        let args = ["cli", "play", "--seed", "3", "--limits", "plies(10)"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.applet, Some(Applet::Play(_))));
    }
}
