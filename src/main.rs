#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, AiPlayer, CliPlayer, Field, GameNode, InMemoryTransport, Outcome, Player,
    TcpTransport, Transport, TurnSession,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Two-player sea battle over a direct TCP connection", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum PlayerType {
    Human,
    Ai,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Host a game and wait for the opponent to connect. The opponent shoots first.
    Host {
        #[arg(long)]
        port: u16,
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        player: PlayerType,
        #[arg(long, help = "Give up on a silent peer after this many seconds")]
        timeout_secs: Option<u64>,
    },
    /// Connect to a hosted game and take the first shot.
    Connect {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long)]
        port: u16,
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        player: PlayerType,
        #[arg(long, help = "Give up on a silent peer after this many seconds")]
        timeout_secs: Option<u64>,
    },
    /// Watch two AI players fight on the local machine.
    Local {
        #[arg(long, help = "Fix RNG seed for a reproducible game (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn make_player(kind: PlayerType) -> Box<dyn Player> {
    match kind {
        PlayerType::Human => Box::new(CliPlayer::new()),
        PlayerType::Ai => Box::new(AiPlayer::new()),
    }
}

#[cfg(feature = "std")]
async fn play(
    transport: Box<dyn Transport>,
    player: Box<dyn Player>,
    mut rng: SmallRng,
    my_initiative: bool,
) -> anyhow::Result<Outcome> {
    let field = Field::generate_random(&mut rng);
    let session = TurnSession::new(field, my_initiative);
    let mut node = GameNode::new(player, session, transport);
    node.run(&mut rng).await
}

#[cfg(feature = "std")]
fn report(result: anyhow::Result<Outcome>) {
    match result {
        Ok(outcome) => log::info!("session finished: {:?}", outcome),
        Err(e) => eprintln!("Game ended with an error: {}", e),
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Host {
            port,
            seed,
            player,
            timeout_secs,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (fleet will be reproducible)", s);
            }
            println!("Waiting for a player to connect on port {}...", port);
            let (mut transport, peer) = TcpTransport::accept_one(("0.0.0.0", port)).await?;
            transport.set_timeout(timeout_secs.map(Duration::from_secs));
            println!("Player connected from {}", peer);

            report(play(Box::new(transport), make_player(player), make_rng(seed), false).await);
        }
        Commands::Connect {
            host,
            port,
            seed,
            player,
            timeout_secs,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (fleet will be reproducible)", s);
            }
            println!("Connecting to {}:{}...", host, port);
            let mut transport = TcpTransport::connect((host.as_str(), port)).await?;
            transport.set_timeout(timeout_secs.map(Duration::from_secs));
            log::info!("connected to {}", transport.peer_addr()?);
            println!("Connected successfully!");

            report(play(Box::new(transport), make_player(player), make_rng(seed), true).await);
        }
        Commands::Local { seed } => {
            println!("Starting local AI vs AI game...");
            let rng1 = make_rng(seed);
            let rng2 = make_rng(seed.map(|s| s.wrapping_add(1)));
            let (t1, t2) = InMemoryTransport::pair();

            let (r1, r2) = tokio::join!(
                play(Box::new(t1), Box::new(AiPlayer::new()), rng1, true),
                play(Box::new(t2), Box::new(AiPlayer::new()), rng2, false),
            );
            match (r1?, r2?) {
                (Outcome::Won, _) => println!("Player 1 wins"),
                (_, Outcome::Won) => println!("Player 2 wins"),
                (a, b) => println!("No winner ({:?} / {:?})", a, b),
            }
        }
    }
    Ok(())
}
