//! # seqprep
//!
//! ```sh
//! seqprep --train train.json --valid valid.json --save_data data.json [--share_vocab]
//! ```
use seqprep::error::Error;
use seqprep::pipelines::{Pipeline, Preprocess};
use seqprep::settings::Settings;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Preprocess::from_args();
    debug!("cli args\n{:#?}", opt);

    let p = Preprocess::new(Settings::try_from(opt)?);
    let dataset = p.run()?;
    info!(
        "{} train pairs, {} valid pairs",
        dataset.train.len(),
        dataset.valid.len()
    );
    Ok(())
}
