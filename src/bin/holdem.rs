use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{info, warn};

use limit_holdem::players::{ActionProvider, CallingStation, Human, OnlyAces, UniformRandom};
use limit_holdem::tree::{expected_payoffs, Coloring, TreeBuilder, TreeConfig};
use limit_holdem::{HoldemError, Session, TableConfig};

#[derive(Parser)]
#[command(name = "holdem")]
#[command(about = "Heads-up fixed-limit hold'em: play hands or build the game tree")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play hands against a bot
    Play {
        /// Number of hands to play
        #[arg(long, default_value_t = 10)]
        hands: u32,
        /// Seed for dealing and strategy draws
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Opponent bot
        #[arg(long, default_value = "aces")]
        opponent: Opponent,
        /// Starting stack in chips
        #[arg(long, default_value_t = 200)]
        stack: u32,
        /// Let a uniform random bot take the human seat
        #[arg(long)]
        autoplay: bool,
    },
    /// Build the extensive-form game tree
    Tree {
        /// Betting rounds to expand
        #[arg(long, default_value_t = 4)]
        rounds: u16,
        /// Chance outcomes per street
        #[arg(long, default_value_t = 3)]
        nps: u32,
        /// Raises allowed per street (0 disables raising)
        #[arg(long, default_value_t = 3)]
        raise_cap: u8,
        /// Write a Graphviz DOT file
        #[arg(long)]
        dot: Option<PathBuf>,
        /// Write the tree as JSON
        #[arg(long)]
        json: Option<PathBuf>,
        /// Node colouring for the DOT export
        #[arg(long, default_value = "player")]
        color_by: ColorBy,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Opponent {
    Aces,
    Random,
    Station,
}

impl Opponent {
    fn provider(self) -> Box<dyn ActionProvider> {
        match self {
            Opponent::Aces => Box::new(OnlyAces),
            Opponent::Random => Box::new(UniformRandom),
            Opponent::Station => Box::new(CallingStation),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorBy {
    Player,
    Depth,
}

impl From<ColorBy> for Coloring {
    fn from(color_by: ColorBy) -> Self {
        match color_by {
            ColorBy::Player => Coloring::Player,
            ColorBy::Depth => Coloring::Depth,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            hands,
            seed,
            opponent,
            stack,
            autoplay,
        } => run_play(hands, seed, opponent, stack, autoplay)?,
        Commands::Tree {
            rounds,
            nps,
            raise_cap,
            dot,
            json,
            color_by,
        } => {
            let config = TreeConfig::new(rounds, nps).with_raise_cap(raise_cap);
            run_tree(config, dot, json, color_by.into())?;
        }
    }

    Ok(())
}

fn run_play(
    hands: u32,
    seed: u64,
    opponent: Opponent,
    stack: u32,
    autoplay: bool,
) -> Result<(), Box<dyn Error>> {
    let config = TableConfig::default()
        .with_starting_stack(stack)
        .with_seed(seed);

    let (hero, hero_name): (Box<dyn ActionProvider>, &str) = if autoplay {
        (Box::new(UniformRandom), "random")
    } else {
        (Box::new(Human), "you")
    };

    let mut session = Session::new(config, hero, opponent.provider())
        .with_names(hero_name, format!("{opponent:?}").to_lowercase());

    let played = session.play_hands(hands)?;
    let table = session.finish();

    println!("{table}");
    info!("played {played} of {hands} hands");
    Ok(())
}

fn run_tree(
    config: TreeConfig,
    dot: Option<PathBuf>,
    json: Option<PathBuf>,
    coloring: Coloring,
) -> Result<(), Box<dyn Error>> {
    let expected = expected_payoffs(&config).ok_or_else(|| {
        HoldemError::InvalidConfig(format!("{config:?} has more than u64::MAX payoffs"))
    })?;
    info!("building tree {config:?}, expecting {expected} payoffs");

    let built = TreeBuilder::new(config)?.build();
    info!("payoff count: {}", built.payoffs);
    info!("{}", built.tree.stats());
    if built.payoffs != expected {
        warn!("payoff count {} differs from closed form {expected}", built.payoffs);
    }

    if let Some(path) = dot {
        std::fs::write(&path, built.tree.to_dot(coloring))?;
        info!("wrote {}", path.display());
    }
    if let Some(path) = json {
        let file = std::io::BufWriter::new(std::fs::File::create(&path)?);
        serde_json::to_writer(file, &built.tree)?;
        info!("wrote {}", path.display());
    }
    Ok(())
}
