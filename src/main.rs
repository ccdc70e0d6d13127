use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use domino_minimax::display::{CYAN, GREEN, MAGENTA, RED, RESET, YELLOW};
use domino_minimax::logging::setup_logging;
use domino_minimax::{
    deal_new_game, AiPlayer, Difficulty, DominoError, DominoGame, GameConfig, HumanPlayer, Seat,
};

#[derive(Parser, Debug)]
#[command(name = "domino_minimax", about = "Play dominoes against a minimax computer opponent")]
struct Config {
    /// AI difficulty (asked interactively when omitted)
    #[arg(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Seed for the deal and the AI's random choices
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Highest face value in the set (6 for double-six)
    #[arg(long, default_value_t = 6)]
    max_dots: u8,

    /// Tiles dealt to each player
    #[arg(long, default_value_t = 7)]
    hand_size: usize,

    /// Fallback log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Write logs to rotating files in this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn ask_difficulty(input: &mut impl BufRead, output: &mut impl Write) -> Result<Difficulty, DominoError> {
    loop {
        writeln!(output, "\n{CYAN}Choose the AI difficulty:{RESET}")?;
        writeln!(output, "  1: {GREEN}Easy{RESET}")?;
        writeln!(output, "  2: {YELLOW}Medium{RESET}")?;
        writeln!(output, "  3: {RED}Hard{RESET}")?;
        write!(output, "\nEnter the difficulty (1-3): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(DominoError::InputClosed);
        }
        match line.trim().parse::<u8>() {
            Ok(level) => match Difficulty::try_from(level) {
                Ok(difficulty) => return Ok(difficulty),
                Err(_) => writeln!(output, "{RED}Invalid choice. Please enter 1, 2 or 3.{RESET}")?,
            },
            Err(_) => writeln!(output, "{RED}Please enter a number.{RESET}")?,
        }
    }
}

fn run(config: Config) -> Result<(), DominoError> {
    let mut stdout = io::stdout();
    writeln!(stdout, "\n{MAGENTA}===== DOMINOES ====={RESET}\n")?;
    writeln!(stdout, "{CYAN}Welcome to terminal dominoes!{RESET}")?;

    let difficulty = match config.difficulty {
        Some(difficulty) => difficulty,
        None => ask_difficulty(&mut io::stdin().lock(), &mut stdout)?,
    };

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("seed={} difficulty={}", seed, difficulty);
    let mut rng = StdRng::seed_from_u64(seed);

    let game_config = GameConfig {
        max_dots: config.max_dots,
        hand_size: config.hand_size,
    };
    let mut deal = deal_new_game(&game_config, &mut rng)?;
    let ai_hand = deal.hands.pop().unwrap_or_default();
    let human_hand = deal.hands.pop().unwrap_or_default();

    let human = HumanPlayer::new(io::stdin().lock(), io::stdout());
    let ai = AiPlayer::new(difficulty, StdRng::seed_from_u64(rng.random()));

    let mut game = DominoGame::new(
        [
            Seat::new("Player", human_hand, Box::new(human)),
            Seat::new("Computer", ai_hand, Box::new(ai)),
        ],
        deal.stock,
    );

    writeln!(stdout, "{GREEN}Starting the game! ({difficulty} opponent){RESET}")?;
    game.play(&mut stdout)?;
    writeln!(stdout, "\n{GREEN}Thanks for playing!{RESET}")?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logger = setup_logging(&config.log_level, config.log_dir.as_deref())?;

    match run(config) {
        Err(DominoError::InputClosed) => {
            println!("\n{YELLOW}Game ended by the user. Goodbye!{RESET}");
            Ok(())
        }
        other => Ok(other?),
    }
}
