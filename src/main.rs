use anyhow::Result;
use clap::{Parser, ValueEnum};
use junglebot::game::Game;
use junglebot::{Move, Player, Searcher, StrengthProfile, Tier};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Two humans at one terminal
    Pvp,
    /// Human against the engine
    Pve,
    /// Engine against engine
    Eve,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Jungle (Dou Shou Qi) in the terminal", long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value_t = Mode::Pve)]
    mode: Mode,

    /// Engine strength
    #[arg(long, value_enum, default_value_t = Tier::Amateur)]
    difficulty: Tier,

    /// Strength of the blue engine in eve mode (defaults to --difficulty)
    #[arg(long, value_enum)]
    blue_difficulty: Option<Tier>,

    /// Your side in pve mode
    #[arg(long, value_enum, default_value_t = Player::Red)]
    human: Player,

    /// Seed the engines for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Stop eve games after this many plies
    #[arg(long, default_value_t = 300)]
    max_plies: usize,

    /// Print the state as JSON after every move
    #[arg(long)]
    json: bool,
}

fn searcher(tier: Tier, seed: Option<u64>) -> Searcher {
    let profile = StrengthProfile::for_tier(tier);
    match seed {
        Some(s) => Searcher::seeded(profile, s),
        None => Searcher::new(profile),
    }
}

fn print_state(game: &Game, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&game.state().view())?);
    } else {
        println!("\n{}", game.state().board);
    }
    Ok(())
}

/// Reads moves until a legal one arrives. `None` on end of input or "quit".
fn read_human_move(game: &Game, input: &mut impl BufRead) -> Result<Option<Move>> {
    let legal = game.state().legal_moves(game.side_to_move());
    loop {
        print!("{} to move (e.g. 6,4 5,4): ", game.side_to_move());
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 { return Ok(None); }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") { return Ok(None); }
        if line.eq_ignore_ascii_case("moves") {
            let list: Vec<String> = legal.iter().map(|m| m.to_string()).collect();
            println!("{}", list.join(" | "));
            continue;
        }
        match Move::from_str(line) {
            Ok(mv) if legal.contains(&mv) => return Ok(Some(mv)),
            Ok(mv) => println!("Illegal move {mv}"),
            Err(e) => println!("{e}"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let red_tier = args.difficulty;
    let blue_tier = args.blue_difficulty.unwrap_or(args.difficulty);
    let mut red = searcher(red_tier, args.seed);
    let mut blue = searcher(blue_tier, args.seed.map(|s| s.wrapping_add(1)));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut game = Game::new();

    while !game.is_over() {
        print_state(&game, args.json)?;
        let side = game.side_to_move();
        let human = match args.mode {
            Mode::Pvp => true,
            Mode::Pve => side == args.human,
            Mode::Eve => false,
        };

        if human {
            match read_human_move(&game, &mut input)? {
                Some(mv) => { game.play(mv)?; }
                None => {
                    println!("Bye.");
                    return Ok(());
                }
            }
            continue;
        }

        if args.mode == Mode::Eve && game.history().len() >= args.max_plies {
            println!("\nStopped after {} plies without a winner.", args.max_plies);
            return Ok(());
        }
        let engine = match side { Player::Red => &mut red, Player::Blue => &mut blue };
        let t0 = Instant::now();
        match game.ai_move(engine)? {
            Some(mv) => println!("{side} ({}) plays {mv} in {:.2}s", engine.profile().tier, t0.elapsed().as_secs_f64()),
            None => println!("{side} has no legal move."),
        }
    }

    print_state(&game, args.json)?;
    match game.winner() {
        Some(p) => println!("\n{p} wins after {} plies.", game.history().len()),
        None => println!("\nGame over."),
    }
    Ok(())
}
