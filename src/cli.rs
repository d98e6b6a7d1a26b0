use crate::{
    cascade::{DEFAULT_CASCADE_PATH, ensure_haarcascade},
    logging,
    util::make_path_and_create,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Make sure a directory exists, creating it and any missing parents.
    Dir {
        /// The directory to create.
        path: PathBuf,
    },

    /// Make sure the frontal face Haar cascade is on disk, downloading it if missing.
    Cascade {
        /// Where the cascade file should live.
        #[clap(short = 'o', long = "output", default_value = DEFAULT_CASCADE_PATH)]
        path: PathBuf,
    },
}

impl Cli {
    pub async fn exec() -> Result<()> {
        Self::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Dir { path } => {
                let path = make_path_and_create(path)?;

                println!("{}", path.display());
            }

            Commands::Cascade { path } => {
                let path = ensure_haarcascade(path).await?;

                println!("{}", path.display());
            }
        }

        Ok(())
    }
}

pub async fn run() -> Result<()> {
    logging::init();
    Cli::exec().await
}
