//! blog-editor: drives the blog post form from the command line.
#![deny(clippy::all, clippy::pedantic)]

mod error;
mod handlers;
mod io;
mod print;


use blog_editor::config::{self, CliArgs, Command};
use blog_editor::infra::telemetry;
use clap::Parser;

use error::CliError;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = CliArgs::parse();
    let settings = config::load(&cli)?;
    telemetry::init(&settings.logging)?;

    match cli.command {
        Command::Show(args) => {
            let view = handlers::show(&settings, &args).await?;
            print::print_json(&view)?;
        }
        Command::Submit(args) => {
            let redirect = handlers::submit(&settings, args).await?;
            println!("{redirect}");
        }
    }

    Ok(())
}
