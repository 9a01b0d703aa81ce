mod messages;

use anyhow::{bail, Context, Result};
use arithmetic_evaluator::interpreter::options::EvaluationOptions;
use arithmetic_evaluator::interpreter::{evaluate_with, to_postfix_notation};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use std::io;
use std::io::BufRead;

/// Evaluates arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. Without one, every line of standard input is evaluated.
    expression: Option<String>,

    /// Print the expression in postfix notation instead of its value
    #[clap(long)]
    rpn: bool,

    /// Reject expressions that leave more than one operand behind
    #[clap(long)]
    strict: bool,

    /// Report division by zero instead of returning infinity or NaN
    #[clap(long)]
    reject_zero_division: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

impl Arguments {
    fn options(&self) -> EvaluationOptions {
        EvaluationOptions {
            reject_zero_division: self.reject_zero_division,
            reject_leftover_operands: self.strict,
        }
    }
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match &args.expression {
        Some(expression) => match render(expression, &args) {
            Ok(output) => {
                println!("{}", output);
                Ok(())
            }
            Err(message) => bail!("{}", message),
        },
        None => evaluate_lines(&args),
    }
}

/// Evaluates each line as it is entered, like a text box re-evaluating on every edit.
fn evaluate_lines(args: &Arguments) -> Result<()> {
    info!("Reading expressions from standard input");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read expression from standard input")?;
        match render(&line, args) {
            Ok(output) => println!("{}", output),
            Err(message) => eprintln!("{}", message),
        }
    }
    Ok(())
}

/// Renders the outcome of one expression as the text to show the user.
fn render(expression: &str, args: &Arguments) -> Result<String, String> {
    if expression.trim().is_empty() {
        return Ok(messages::message("empty_result").to_string());
    }
    debug!("Evaluating {:?}", expression);

    let outcome = if args.rpn {
        to_postfix_notation(expression)
    } else {
        evaluate_with(expression, &args.options())
            .map(|value| messages::format_message("expression_result", value))
    };
    outcome.map_err(|error| messages::error_message(&error).to_string())
}
