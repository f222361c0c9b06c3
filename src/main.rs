use std::fs;

use clap::Parser;
use scical::{
    AngleMode, Calculator, balance_parentheses, interpreter::parser::core::DEFAULT_MAX_DEPTH,
};
use tracing_subscriber::EnvFilter;

/// scical evaluates scientific calculator expressions in a sandbox: only
/// arithmetic, comparisons and a fixed set of math functions are available.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate, e.g. "sin(30) + 2^3".
    #[arg(allow_hyphen_values = true, required_unless_present = "file")]
    expression: Option<String>,

    /// Evaluates every non-empty line of this file instead.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<String>,

    /// How trigonometric arguments are read: "deg" or "rad".
    #[arg(short, long, default_value_t = AngleMode::Degrees)]
    mode: AngleMode,

    /// Evaluates the expression with `x` bound to this number.
    #[arg(long, allow_negative_numbers = true, conflicts_with = "plot")]
    at: Option<f64>,

    /// Samples the expression over `x` in [MIN, MAX] and prints the points.
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], allow_negative_numbers = true)]
    plot: Option<Vec<f64>>,

    /// Number of points taken by --plot.
    #[arg(long, default_value_t = 100)]
    samples: usize,

    /// Closes unbalanced parentheses before evaluating.
    #[arg(short, long)]
    auto_close: bool,

    /// Rejects expressions nested deeper than this.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Logs more; repeat for more detail. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let calc = Calculator::new().with_max_depth(args.max_depth);
    calc.set_angle_mode(args.mode);

    let expressions = match (&args.file, &args.expression) {
        (Some(path), _) => {
            let contents = fs::read_to_string(path).unwrap_or_else(|_| {
                               eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                               std::process::exit(1);
                           });
            contents.lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect()
        },
        (None, Some(expression)) => vec![expression.clone()],
        (None, None) => Vec::new(),
    };

    for expression in expressions {
        let expression = if args.auto_close {
            balance_parentheses(&expression)
        } else {
            expression
        };
        run(&calc, &args, &expression);
    }
}

fn run(calc: &Calculator, args: &Args, expression: &str) {
    if let Some(range) = &args.plot {
        match calc.sample(expression, range[0], range[1], args.samples) {
            Ok(samples) => {
                if !samples.has_valid_points() {
                    eprintln!("No valid points to plot for '{expression}'");
                }
                for (x, y) in samples.points() {
                    match y {
                        Some(y) => println!("{x}\t{y}"),
                        None => println!("{x}\t-"),
                    }
                }
            },
            Err(e) => eprintln!("{e}"),
        }
        return;
    }

    if let Some(x) = args.at {
        match calc.evaluate_at(expression, x) {
            Some(y) => println!("{y}"),
            None => println!("undefined"),
        }
        return;
    }

    println!("{}", calc.calculate(expression));
}

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}
