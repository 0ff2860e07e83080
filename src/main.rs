use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::info;

use gambit_core::{PieceKind, Square};
use gambit_game::{Game, GameConfig};

/// A move given on the command line in coordinate form, e.g. `e2e4`, `e7e8q`.
struct CoordMove {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
}

fn parse_move(text: &str) -> Result<CoordMove> {
    if !text.is_ascii() {
        bail!("expected a move like e2e4 or e7e8q, got {text:?}");
    }
    let (from, to, promo) = match text.len() {
        4 => (&text[..2], &text[2..4], None),
        5 => (&text[..2], &text[2..4], text[4..].chars().next()),
        _ => bail!("expected a move like e2e4 or e7e8q, got {text:?}"),
    };
    let promotion = match promo {
        Some(c) => Some(
            PieceKind::from_letter(c).with_context(|| format!("unknown piece {c:?} in {text}"))?,
        ),
        None => None,
    };
    Ok(CoordMove {
        from: from.parse().with_context(|| format!("bad square in {text}"))?,
        to: to.parse().with_context(|| format!("bad square in {text}"))?,
        promotion,
    })
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(GameConfig, Vec<CoordMove>)> {
    let mut config = GameConfig::default();
    let mut moves = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--minutes" {
            let value = args.next().context("--minutes needs a value")?;
            let minutes: u64 = value
                .parse()
                .with_context(|| format!("invalid --minutes value {value:?}"))?;
            config = config.with_time_per_side(Duration::from_secs(minutes.saturating_mul(60)));
        } else {
            moves.push(parse_move(&arg)?);
        }
    }
    Ok((config, moves))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("gambit starting");

    let (config, moves) = parse_args(std::env::args().skip(1))?;
    let mut game = Game::new(config);

    for (ply, mv) in moves.iter().enumerate() {
        game.attempt_move(mv.from, mv.to, mv.promotion)
            .with_context(|| format!("move {} ({}{}) rejected", ply + 1, mv.from, mv.to))?;
    }

    println!("{}", game.board().pretty());
    println!();
    for (i, pair) in game.formatted_history().chunks(2).enumerate() {
        println!("{}. {}", i + 1, pair.join(" "));
    }
    println!("{:?}", game.status());
    Ok(())
}
