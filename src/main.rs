mod timings;
mod util;

use std::collections::HashMap;
use std::{fmt::Display, str::FromStr};

use anyhow::{anyhow, Context};
use clap::Parser;
use mathsym::{parser, MathOp};
use rustyline::error::ReadlineError;

use crate::timings::Timings;

#[derive(clap::Parser, Debug)]
#[command(
    version = "0.1",
    about = "mathsym -- symbolic differentiation and simplification"
)]
struct Args {
    /// Fully parenthesized expression, e.g. "(x * (y + 2))". Starts a REPL when omitted.
    math_expr: Option<String>,
    /// Differentiate with respect to this variable.
    #[clap(short, long, value_name = "VAR")]
    derive: Option<String>,
    #[clap(short, long)]
    simplify: bool,
    /// Bind a variable and evaluate the result, e.g. `-e x=3`.
    #[clap(short = 'e', long = "eval", value_name = "NAME=VALUE", value_parser = parse_binding)]
    bindings: Vec<(String, f64)>,
    #[clap(short, long, default_value_t = Mode::Render)]
    mode: Mode,
    #[clap(short, long)]
    verbose: bool,
    #[clap(short, long)]
    timings: bool,
}

#[derive(Debug, Clone, Copy)]
enum Mode {
    Render,
    Parens,
    Repr,
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Mode::Render => "render",
                Mode::Parens => "parens",
                Mode::Repr => "repr",
            }
        )
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "render" | "r" | "infix" => Ok(Mode::Render),
            "parens" | "p" | "parenthesized" => Ok(Mode::Parens),
            "repr" | "debug" => Ok(Mode::Repr),
            _ => Err(anyhow!(
                "invalid selection, wanted 'render', 'parens' or 'repr'"
            )),
        }
    }
}

impl Mode {
    fn show(self, op: &MathOp) -> String {
        match self {
            Mode::Render => op.to_string(),
            Mode::Parens => op.parenthesized().to_string(),
            Mode::Repr => op.repr().to_string(),
        }
    }
}

fn parse_binding(s: &str) -> anyhow::Result<(String, f64)> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{s}'"))?;
    let value = value
        .trim()
        .parse()
        .with_context(|| format!("invalid value for '{}'", name.trim()))?;
    Ok((name.trim().to_string(), value))
}

fn main() {
    let args = Args::parse();
    if let Some(expr) = &args.math_expr {
        if let Err(e) = run_repl_expr(expr, &args) {
            report(&e);
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = repl(&args) {
        report(&e);
        std::process::exit(1);
    }
}

fn report(e: &anyhow::Error) {
    eprintln!("Error:");
    for cause in e.chain() {
        eprintln!("{cause}");
    }
}

fn repl(args: &Args) -> anyhow::Result<()> {
    println!("mathsym ({} mode)", args.mode);
    let mut editor = rustyline::DefaultEditor::new()?;
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if let Err(e) = editor.add_history_entry(line) {
                    eprintln!("could not record history: {e}");
                }
                if let Err(e) = run_repl_expr(line, args) {
                    report(&e);
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e.into()),
        }
    }
}

/// Attaches the highlighted source text to errors that point into it.
fn in_source(input: &str, err: mathsym::Error) -> anyhow::Error {
    match err.span() {
        Some(span) => {
            let shown = util::error_message(input, span);
            anyhow::Error::new(err).context(format!("could not read expression{shown}"))
        }
        None => err.into(),
    }
}

fn run_repl_expr(math_expr: &str, args: &Args) -> anyhow::Result<()> {
    let mut timings = Timings::start();
    let mut parser = parser::Parser::new(math_expr).map_err(|e| in_source(math_expr, e))?;
    timings.lap("tokenize");
    if args.verbose {
        let kinds = parser.tokens().iter().map(|t| &t.kind).collect::<Vec<_>>();
        eprintln!("tokens: {kinds:?}");
    }

    let mut op = parser.parse().map_err(|e| in_source(math_expr, e))?;
    timings.lap("parse");
    if args.verbose {
        eprintln!("parsed: {}", op.repr());
    }

    if let Some(wrt) = &args.derive {
        op = op.derivative(wrt);
        timings.lap("derive");
        if args.verbose {
            eprintln!("derivative: {}", op.repr());
        }
    }

    if args.simplify {
        op = op.simplify().context("while simplifying")?;
        timings.lap("simplify");
    }

    println!("{}", args.mode.show(&op));

    if !args.bindings.is_empty() || op.variables().is_empty() {
        let bindings = args.bindings.iter().cloned().collect::<HashMap<_, _>>();
        let value = mathsym::evaluate(&op, &bindings).context("while evaluating")?;
        timings.lap("evaluate");
        println!("= {value}");
    }

    if args.timings {
        println!("{}", timings.report());
    }
    Ok(())
}
