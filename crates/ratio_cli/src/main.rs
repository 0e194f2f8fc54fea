//! Interactive REPL over `ratio_core`.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use ratio_core::{format_value, prime_factors, Fraction, RepeatCycle};

fn main() -> rustyline::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("ratio — exact fractions over lenient numeric input");
    println!("Commands:");
    println!("  add|sub|mul|div A , B    arithmetic on two inputs");
    println!("  reduce X                 lowest terms");
    println!("  factor N                 prime factors");
    println!("  repeat X                 repeating-decimal cycle");
    println!("  approx BASE X            snap X onto BASE-ths");
    println!("  <ratio>                  inspect any accepted notation");
    println!("  quit");

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("ratio> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "quit" || line == "exit" {
                    break;
                }
                let _ = editor.add_history_entry(line);
                dispatch(line);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                println!("Error: {e}");
                break;
            }
        }
    }
    Ok(())
}

fn dispatch(line: &str) {
    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    match command {
        "add" | "sub" | "mul" | "div" => binary(command, rest.trim()),
        "reduce" => println!("{}", Fraction::parse(rest.trim()).reduce()),
        "factor" => {
            let factors = prime_factors(rest.trim());
            if factors.is_empty() {
                println!("no prime factors");
            } else {
                let rendered: Vec<String> = factors.iter().map(u64::to_string).collect();
                println!("{}", rendered.join(" x "));
            }
        }
        "repeat" => match RepeatCycle::of(rest.trim()) {
            Some(c) => println!("{}.{}({})", c.integer, c.prefix, c.cycle),
            None => println!("no repeating cycle"),
        },
        "approx" => {
            let mut parts = rest.trim().splitn(2, char::is_whitespace);
            let base = parts.next().unwrap_or("");
            let target = parts.next().unwrap_or("");
            println!("{}", Fraction::parse(target).approximate_to(base));
        }
        _ => inspect(line),
    }
}

fn binary(op: &str, rest: &str) {
    let Some((a, b)) = rest.split_once(',') else {
        println!("usage: {op} A , B");
        return;
    };
    let lhs = Fraction::parse(a.trim());
    let rhs = b.trim();
    let result = match op {
        "add" => lhs + rhs,
        "sub" => lhs - rhs,
        "mul" => lhs * rhs,
        _ => lhs / rhs,
    };
    println!("{}   ({})", result, result.to_mixed_string());
}

fn inspect(line: &str) {
    match line.parse::<Fraction>() {
        Ok(x) => {
            println!("raw     : {x}");
            println!("mixed   : {}", x.to_mixed_string());
            println!("value   : {}", format_value(x.value()));
            println!("reduced : {}", x.reduce());
        }
        Err(e) => println!("Error: {e}"),
    }
}
