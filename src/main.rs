use std::env;
use std::fs;
use std::process;

use holeyc::config::Config;
use holeyc::error::ErrorFormatter;
use holeyc::lexer::Lexer;
use holeyc::parser::Parser;
use holeyc::unparse;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config = Config::default();
    let mut input_file = None;
    let mut output_file = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--ast-json" => config.emit_ast = true,
            "-o" => {
                i += 1;
                match args.get(i) {
                    Some(path) => output_file = Some(path.clone()),
                    None => {
                        eprintln!("Missing argument for -o");
                        process::exit(1);
                    }
                }
            }
            arg if input_file.is_none() => input_file = Some(arg.to_string()),
            arg => {
                eprintln!("Unexpected argument '{}'", arg);
                process::exit(1);
            }
        }
        i += 1;
    }

    let input_file = match input_file {
        Some(file) => file,
        None => {
            eprintln!("Usage: {} <input.hc> [-o <output>] [--ast-json]", args[0]);
            process::exit(1);
        }
    };

    let source = match fs::read_to_string(&input_file) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("Error reading file '{}': {}", input_file, err);
            process::exit(1);
        }
    };

    let mut lexer = Lexer::new(source.clone());
    let tokens = match lexer.tokenize() {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!(
                "{}",
                ErrorFormatter::new(&err, &source)
                    .with_filename(&input_file)
                    .format()
            );
            process::exit(1);
        }
    };

    let mut parser = Parser::new(tokens);
    let (program, errors) = parser.parse_with_recovery();
    if errors.has_errors() {
        for error in errors.errors() {
            eprintln!(
                "{}\n",
                ErrorFormatter::new(error, &source)
                    .with_filename(&input_file)
                    .format()
            );
        }
        eprintln!("{} error(s)", errors.len());
        process::exit(1);
    }

    let output = if config.emit_ast {
        match serde_json::to_string_pretty(&program) {
            Ok(json) => json,
            Err(err) => {
                eprintln!("Error serializing tree: {}", err);
                process::exit(1);
            }
        }
    } else {
        unparse::unparse(&program)
    };

    match output_file {
        Some(path) => {
            if let Err(err) = fs::write(&path, output) {
                eprintln!("Error writing output file '{}': {}", path, err);
                process::exit(1);
            }
        }
        None => print!("{}", output),
    }
}
