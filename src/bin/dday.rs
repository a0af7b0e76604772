extern crate doomsday_trainer as lib;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use flexi_logger::{FileSpec, Logger};
use num_traits::FromPrimitive;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use structopt::StructOpt;
use termion::color;

use lib::calendar::{Date, Weekday};
use lib::config::Config;
use lib::error::{Error, ErrorKind};
use lib::picker::DatePicker;

const TITLE: &str = r"
================================================================

                    D O O M S D A Y   T R A I N E R

================================================================

Speed training for Conway's doomsday method to work out the day
of the week for a given date.
";

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dday",
    about = "Speed trainer for Conway's doomsday method."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    #[structopt(long = "seed", help = "fixed RNG seed for a reproducible session")]
    pub seed: Option<u64>,

    #[structopt(short = "n", long = "rounds", help = "stop after this many rounds")]
    pub rounds: Option<u64>,

    #[structopt(long = "plain", help = "disable colored output")]
    pub plain: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = &args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file.clone())?)
            .print_message();
    }

    logger.start()?;

    let mut config = lib::config::load_suitable_config(args.configfile.as_deref())?;
    if args.plain {
        config.color = false;
    }

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    println!("{}", TITLE);
    print_key_mapping();

    let picker = DatePicker::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut played = 0;
    while args.rounds.map_or(true, |rounds| played < rounds) {
        if !run_round(&picker, &mut rng, &mut input, &config)? {
            break;
        }
        played += 1;
    }

    Ok(())
}

fn print_key_mapping() {
    println!("Answer keyboard mapping:\n");
    for code in 0..7 {
        let day = Weekday::from_u32(code).expect("codes 0-6 are weekdays");
        println!("{}. {}", code + 1, day);
    }
    println!("\nPress CTRL+C to quit :-)\n");
}

/// Plays one round. Returns `false` once stdin is exhausted.
fn run_round<R: Rng>(
    picker: &DatePicker,
    rng: &mut R,
    input: &mut impl BufRead,
    config: &Config,
) -> Result<bool, Error> {
    let date = picker.pick(rng);
    let answer = date.weekday();
    log::debug!("Drew {}, the answer is {}", date, answer);

    let guess = match read_guess(&date, input, config)? {
        Some(guess) => guess,
        None => return Ok(false),
    };

    println!("You've gone for {}", guess);

    if guess == answer {
        print_correct(config);
    } else {
        print_wrong(answer, config);
    }

    Ok(true)
}

/// Prompts for an answer key and reads it back, re-prompting on invalid
/// input up to the configured number of attempts. Returns `None` on EOF.
fn read_guess(
    date: &Date,
    input: &mut impl BufRead,
    config: &Config,
) -> Result<Option<Weekday>, Error> {
    for _ in 0..config.input_attempts {
        ask(date, config)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            reset_color(config);
            println!();
            return Ok(None);
        }

        reset_color(config);
        let line = line.trim();

        match line.chars().next() {
            Some(key @ '1'..='7') if line.len() == 1 => {
                let code = key as u32 - '1' as u32;
                return Ok(Some(
                    Weekday::from_u32(code).expect("keys 1-7 map to codes 0-6"),
                ));
            }
            _ => println!("Please only input a number between 1 - 7"),
        }
    }

    Err(Error::new(ErrorKind::InputExhausted, "no valid answer entered"))
}

fn ask(date: &Date, config: &Config) -> io::Result<()> {
    if config.color {
        print!(
            "{}Calculate the day for: -- {} --: {}",
            color::Fg(color::Green),
            date,
            color::Fg(color::LightGreen)
        );
    } else {
        print!("Calculate the day for: -- {} --: ", date);
    }

    io::stdout().flush()
}

fn print_correct(config: &Config) {
    if config.color {
        println!(
            "{}\n★ ★ ★   Congratulations! That is correct!   ★ ★ ★\n{}",
            color::Fg(color::Yellow),
            color::Fg(color::Reset)
        );
    } else {
        println!("\n★ ★ ★   Congratulations! That is correct!   ★ ★ ★\n");
    }
}

fn print_wrong(answer: Weekday, config: &Config) {
    if config.color {
        println!(
            "{}\n☠ ☠ ☠   Wrong! The answer was {}.   ☠ ☠ ☠\n{}",
            color::Fg(color::Red),
            answer,
            color::Fg(color::Reset)
        );
    } else {
        println!("\n☠ ☠ ☠   Wrong! The answer was {}.   ☠ ☠ ☠\n", answer);
    }
}

fn reset_color(config: &Config) {
    if config.color {
        print!("{}", color::Fg(color::Reset));
    }
}
