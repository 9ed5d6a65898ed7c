// ============================================================================
// Longhand REPL
// Interactive step calculator over stdin
// ============================================================================

use longhand::config;
use longhand::prelude::*;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

const HELP: &str = "\
commands:
  add <step>   queue a step: +N -N *N /N %N ^N, fac (or !), sin cos tan csc sec cot
  rem          remove the most recent step
  clear        remove all steps
  eval         run the steps from zero and print the result
  digits <n>   set the division budget in significant digits (default 100)
  sign+ sign-  always / only-when-negative result sign prefix
  help         this text
  quit         leave";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();

    let mut stack = StepStack::with_observer(Arc::new(LoggingStepObserver));
    let mut sign_mode = SignMode::NegativeOnly;

    println!("longhand step calculator; 'help' lists commands");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "eval" => match stack.evaluate() {
                Ok(result) => println!("= {}", result.format_with(sign_mode)),
                Err(err) => println!("error: {err}"),
            },
            "rem" => match stack.pop() {
                Some(step) => println!("removed {step}"),
                None => println!("nothing to remove"),
            },
            "clear" => {
                stack.clear();
                println!("cleared");
            },
            "sign+" => sign_mode = SignMode::Always,
            "sign-" => sign_mode = SignMode::NegativeOnly,
            _ => {
                if let Some(rest) = input.strip_prefix("add") {
                    match rest.parse::<Step>() {
                        Ok(step) => {
                            println!("[{}] {step}", stack.len() + 1);
                            stack.push(step);
                        },
                        Err(err) => println!("error: {err}"),
                    }
                } else if let Some(rest) = input.strip_prefix("digits") {
                    match rest.trim().parse::<usize>() {
                        Ok(digits) => {
                            config::set_division_digits(digits);
                            println!("division budget set to {digits}");
                        },
                        Err(_) => println!("error: 'digits' needs a whole number"),
                    }
                } else {
                    println!("unrecognized input; 'help' lists commands");
                }
            },
        }
    }
    Ok(())
}
