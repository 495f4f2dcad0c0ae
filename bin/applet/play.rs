use crate::io::Io;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Game;
use lib::selfplay::{Limits, Random, SelfPlay};
use std::io::{self, stdout, Write};
use std::ops::ControlFlow;
use tracing::{info, instrument};

/// Plays a game of random moves against itself.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// Seed for the random move selection, drawn from system entropy if omitted.
    #[clap(short, long)]
    seed: Option<u64>,

    /// Self-play limits, e.g. `plies(200)`.
    #[clap(short, long, default_value_t)]
    limits: Limits,

    /// Print pieces as ASCII letters rather than figurines.
    #[clap(short, long)]
    ascii: bool,
}

impl Play {
    pub fn execute(self) -> Result<(), Anyhow> {
        self.run(&mut Io::new(stdout()))
    }

    #[instrument(level = "trace", skip(self, io), err)]
    fn run<W: Write>(self, io: &mut Io<W>) -> Result<(), Anyhow> {
        let random = match self.seed {
            Some(seed) => Random::new(seed),
            None => Random::default(),
        };

        let ascii = self.ascii;
        let mut game = Game::default();
        let mut printed: io::Result<()> = Ok(());

        let report = SelfPlay::new(random, self.limits).play(&mut game, |game| {
            let Some(played) = game.last() else {
                return ControlFlow::Continue(());
            };

            printed = if ascii {
                io.send(format_args!("{}\n{}\n", played, game.board()))
            } else {
                io.send(format_args!("{}\n{:#}\n", played, game.board()))
            };

            if printed.is_ok() {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })?;

        printed?;

        match report.outcome {
            Some(outcome) => io.send(outcome)?,
            None => io.send(report)?,
        }

        info!(%report);
        Ok(io.flush()?)
    }
}
