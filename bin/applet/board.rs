use crate::io::Io;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess;
use std::io::stdout;
use tracing::instrument;

/// Prints the starting board.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Board {
    /// Print pieces as ASCII letters rather than figurines.
    #[clap(short, long)]
    ascii: bool,
}

impl Board {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut io = Io::new(stdout());
        let board = chess::Board::default();

        if self.ascii {
            io.send(board)?;
        } else {
            io.send(format_args!("{:#}", board))?;
        }

        Ok(io.flush()?)
    }
}
