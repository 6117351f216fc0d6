use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod output;

#[derive(Parser, Debug)]
#[command(name = "buffon")]
#[command(about = "Estimate π with Buffon's needle Monte Carlo experiment")]
struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(short = 'L', long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drop needles on the grid and emit each one with its crossing outcome
    Needles(commands::NeedlesArgs),
    /// Run a sweep and emit the cumulative π estimate sequence
    Converge(commands::ConvergeArgs),
    /// Run repeated trials per needle count and emit grouped estimates
    Groups(commands::GroupsArgs),
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init_logging(&args.log_level);

    match args.command {
        Command::Needles(needles_args) => commands::needles(&needles_args),
        Command::Converge(converge_args) => commands::converge(&converge_args),
        Command::Groups(groups_args) => commands::groups(&groups_args),
    }
}
