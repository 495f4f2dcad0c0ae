use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod board;
mod play;

#[derive(From, Subcommand)]
pub enum Applet {
    Board(board::Board),
    Play(play::Play),
}

impl Default for Applet {
    fn default() -> Self {
        play::Play::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Board(a) => a.execute(),
            Applet::Play(a) => a.execute(),
        }
    }
}
