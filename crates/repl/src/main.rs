use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::result::Result as StdResult;

use parser::{parse_expr, ParseError};
use typecheck::{env::Env, finalize, unify, Inference, Ty, TypeError};

type ReplResult<T> = StdResult<T, String>;

fn main() -> StdResult<(), ReadlineError> {
    println!("miniml REPL v0.1.0");
    println!("Type expressions to see their types, or :quit to exit");
    println!();

    let mut rl = DefaultEditor::new()?;
    let env = create_initial_env();
    let mut trace = false;

    loop {
        let readline = rl.readline("- ");
        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }
                if line == ":quit" || line == ":q" {
                    break;
                }
                if line == ":help" || line == ":h" {
                    print_help();
                    continue;
                }
                if line == ":env" {
                    print_env(&env);
                    continue;
                }
                if line == ":trace" {
                    trace = !trace;
                    println!("trace output {}", if trace { "on" } else { "off" });
                    continue;
                }

                rl.add_history_entry(line)?;

                match process_expression(line, &env, trace) {
                    Ok(ty) => {
                        println!("it : {}", ty);
                    }
                    Err(error) => {
                        println!("Error: {}", error);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

fn process_expression(input: &str, env: &Env, trace: bool) -> ReplResult<Ty> {
    let expr = parse_expr(input).map_err(|e| format_parse_error(&e))?;
    if trace {
        println!("Running:\n{}", expr);
    }

    let mut session = Inference::new();
    let (ty, constraints) = session
        .infer(env, &expr)
        .map_err(|e| format_type_error(&e, &expr.to_string()))?;
    if trace {
        println!("\nInferred type: {}", ty);
        println!("Constraints:");
        for c in &constraints {
            println!("  {}", c);
        }
    }

    let solution = unify(&constraints).map_err(|e| format_type_error(&e, &expr.to_string()))?;
    if trace {
        println!("Solved constraints:");
        for s in solution.iter() {
            println!("  {}", s);
        }
    }

    finalize(&solution, &ty).map_err(|e| format_type_error(&e, &expr.to_string()))
}

fn format_parse_error(error: &ParseError) -> String {
    format!(
        "Parse error: {} at position {}",
        error.message, error.span.lo
    )
}

fn format_type_error(error: &TypeError, expr: &str) -> String {
    format!("Type error: {error}\n  in: {expr}")
}

fn create_initial_env() -> Env {
    let int_binop = Ty::arrow(Ty::INT, Ty::arrow(Ty::INT, Ty::INT));
    let int_compare = Ty::arrow(Ty::INT, Ty::arrow(Ty::INT, Ty::BOOL));

    Env::from_pairs([
        ("+", int_binop.clone()),
        ("-", int_binop.clone()),
        ("*", int_binop.clone()),
        ("div", int_binop),
        ("<=", int_compare.clone()),
        (">=", int_compare.clone()),
        ("<", int_compare.clone()),
        (">", int_compare),
        ("not", Ty::arrow(Ty::BOOL, Ty::BOOL)),
    ])
}

fn print_help() {
    println!("Available commands:");
    println!("  :help, :h     - Show this help message");
    println!("  :quit, :q     - Exit the REPL");
    println!("  :env          - Show the initial environment");
    println!("  :trace        - Toggle constraint/solution trace output");
    println!();
    println!("Type any expression to see its inferred type.");
    println!("Examples:");
    println!("  42");
    println!("  fun x -> x end");
    println!("  +(3)(4)");
    println!("  let id = fun x -> x end in id(true) end");
}

fn print_env(env: &Env) {
    println!("Initial bindings:");
    for (name, ty) in env.iter() {
        println!("  {} : {}", name, ty);
    }
}
