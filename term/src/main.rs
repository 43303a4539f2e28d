use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sweeper_core::{CellCount, Coord, Game, GameConfig};
use tracing_subscriber::filter::LevelFilter;

mod command;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Number of rows
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(Coord).range(1..))]
    height: Coord,

    /// Number of columns
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(Coord).range(1..))]
    width: Coord,

    /// Number of mines, at most height * width
    #[arg(short, long, default_value_t = 10)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn level_filter(filter: log::LevelFilter) -> LevelFilter {
    match filter {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // forwards `log` records from the engine as well
    tracing_subscriber::fmt()
        .with_max_level(level_filter(args.verbose.log_level_filter()))
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = GameConfig::new(args.height, args.width, args.mines)?;
    let mut game = Game::random(config, seed)?;

    let mut terminal = render::Terminal::new(std::io::stdout().lock());
    terminal.notice(command::HELP)?;
    session::run(&mut game, std::io::stdin().lock(), &mut terminal)
}
