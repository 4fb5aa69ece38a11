use crate::error;
use crate::lang::{Dialect, Error};
use crate::mach::{Halt, Interpreter, Options, Report, DEFAULT_INSTRUCTION_BUDGET};
use crate::world::{self, EscapeVia, Heading, KeyRule, Map, Pos, Robot, World};
use ansi_term::Style;
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type Result<T> = std::result::Result<T, Error>;

#[derive(Parser, Debug)]
#[command(name = "vault", version, about = "Run a Vault Runner program")]
struct Cli {
    /// Program file, one or more instructions per line.
    program: PathBuf,
    /// `corridor`, `room`, `multi-key` or the path of a text map.
    #[arg(short, long, default_value = "corridor")]
    world: String,
    /// Steps allowed before the run is stopped.
    #[arg(short, long, default_value_t = DEFAULT_INSTRUCTION_BUDGET)]
    budget: usize,
    /// Accept the extended keyword set.
    #[arg(short, long)]
    extended: bool,
    /// Seed for RTURN, for repeatable runs.
    #[arg(long)]
    seed: Option<u64>,
    /// Print this many of the last steps.
    #[arg(long, default_value_t = 0)]
    history: usize,
    /// Draw the world after the run.
    #[arg(short, long)]
    show: bool,
}

pub fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

/// `RUST_LOG` picks what the library logs; warnings only when unset.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let lines = load(&cli.program)?;
    let options = Options {
        instruction_budget: cli.budget,
        dialect: if cli.extended {
            Dialect::Extended
        } else {
            Dialect::Core
        },
        history: cli.history,
    };
    let mut interpreter = Interpreter::with_options(lines, options)?;
    let mut robot = build_robot(&cli.world)?;
    if let Some(seed) = cli.seed {
        robot = robot.with_seed(seed);
    }
    info!(world = %cli.world, program = %cli.program.display(), "loaded");
    let outcome = interpreter.execute(&mut robot);
    let bold = Style::new().bold();
    match outcome {
        Ok(halt) => {
            let steps = interpreter.instruction_count();
            let headline = match halt {
                Halt::Escaped => format!(
                    "ESCAPED THROUGH {} AFTER {} STEPS",
                    match robot.escape_via() {
                        Some(EscapeVia::Door) => "DOOR",
                        _ => "EXIT",
                    },
                    steps
                ),
                Halt::Completed => format!("COMPLETED AFTER {} STEPS", steps),
                Halt::BudgetExceeded => format!("STEP LIMIT REACHED AFTER {} STEPS", steps),
            };
            println!("{}", bold.paint(headline));
            if halt != Halt::Escaped {
                println!("{}", position_line(&robot));
            }
        }
        Err(_) => println!("{}", position_line(&robot)),
    }
    if cli.history > 0 {
        for step in interpreter.history() {
            println!("{}", step);
        }
    }
    if cli.show {
        println!("{}", report_line(&interpreter.report()));
        print!("{}", world::render(&robot));
    }
    outcome.map(|_| ())
}

fn position_line(robot: &Robot) -> String {
    let (x, y) = robot.position();
    let mut s = format!("ROBOT AT ({}, {}) FACING {}", x, y, robot.heading());
    if robot.has_key() {
        s.push_str(" WITH KEY");
    }
    if robot.door_opened() {
        s.push_str("; DOOR OPEN");
    }
    s
}

fn report_line(report: &Report) -> String {
    format!(
        "{} TOKENS, {} DISTINCT, {} BLOCKS, DEPTH {}, SCORE {}",
        report.total_tokens,
        report.distinct_tokens,
        report.control_structures,
        report.max_nesting_depth,
        report.complexity_score
    )
}

fn build_robot(name: &str) -> Result<Robot> {
    let robot = match name {
        "corridor" => Robot::new(world::corridor(), (0, 0), Heading::East),
        "room" => Robot::new(world::room(), (0, 0), Heading::North),
        "multi-key" => {
            let (world, key): (World, Pos) = world::multi_key();
            Robot::new(world, (4, 3), Heading::North).with_key_rule(KeyRule::Only(key))
        }
        path => {
            let map: Map = load(Path::new(path))?.join("\n").parse()?;
            match map.start {
                Some((position, heading)) => Robot::new(map.world, position, heading),
                None => return Err(error!(InvalidMap; "NO ROBOT ON MAP")),
            }
        }
    };
    debug!(world = name, tiles = robot.world().len(), "world ready");
    Ok(robot)
}

fn load(path: &Path) -> Result<Vec<String>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            return Err(match error.kind() {
                ErrorKind::NotFound => error!(FileNotFound; path.display().to_string()),
                _ => error!(InternalError; error.to_string().to_uppercase()),
            })
        }
    };
    let mut lines = vec![];
    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) => lines.push(line),
            Err(error) => return Err(error!(InternalError; error.to_string().to_uppercase())),
        }
    }
    Ok(lines)
}
