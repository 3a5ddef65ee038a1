use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{AiPlayer, Field, GameNode, InMemoryTransport, Outcome, TurnSession};
use serde::Serialize;

#[derive(Serialize)]
struct PlayerReport {
    outcome: Outcome,
    shots: usize,
    segments_left: usize,
}

#[derive(Serialize)]
struct SimReport {
    player1: PlayerReport,
    player2: PlayerReport,
    winner: Option<&'static str>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let s1 = TurnSession::new(Field::generate_random(&mut rng1), true);
    let s2 = TurnSession::new(Field::generate_random(&mut rng2), false);

    let (t1, t2) = InMemoryTransport::pair();

    let f1 = async move {
        let mut node = GameNode::new(Box::new(AiPlayer::new()), s1, Box::new(t1));
        let outcome = node.run(&mut rng1).await?;
        Ok::<PlayerReport, anyhow::Error>(PlayerReport {
            outcome,
            shots: node.shots_fired(),
            segments_left: node.session().own_field().remaining_segments(),
        })
    };

    let f2 = async move {
        let mut node = GameNode::new(Box::new(AiPlayer::new()), s2, Box::new(t2));
        let outcome = node.run(&mut rng2).await?;
        Ok::<PlayerReport, anyhow::Error>(PlayerReport {
            outcome,
            shots: node.shots_fired(),
            segments_left: node.session().own_field().remaining_segments(),
        })
    };

    let (player1, player2) = tokio::try_join!(f1, f2)?;

    let winner = match (player1.outcome, player2.outcome) {
        (Outcome::Won, Outcome::Lost) => Some("player1"),
        (Outcome::Lost, Outcome::Won) => Some("player2"),
        _ => None,
    };

    let report = SimReport {
        player1,
        player2,
        winner,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
