mod cli;
mod commands;
mod logging;

use clap::Parser;

use crate::cli::{CliArgs, Command};

fn main() {
    let opts = CliArgs::parse();
    let _logger = match logging::start(opts.log_level.as_deref()) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to start logger: {}", e);
            std::process::exit(2);
        },
    };

    if let Err(e) = run(opts) {
        log::error!("{:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(opts: CliArgs) -> anyhow::Result<()> {
    let config = cli::load_config(&opts)?;
    log::debug!("Effective config: {:?}", config);

    match opts.command.unwrap_or_default() {
        Command::Show(args) => {
            let rt = commands::runtime()?;
            rt.block_on(commands::show::run(&config, &args))
        },
        Command::Contact(args) => {
            let rt = commands::runtime()?;
            rt.block_on(commands::contact::run(&config, args))
        },
        Command::Sections => {
            commands::list_sections();
            Ok(())
        },
        Command::Config { dump } => commands::print_config(&config, dump),
    }
}
