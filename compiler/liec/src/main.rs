//! lie compiler CLI.

use liec::{init_tracing, lex, parse, Command, USAGE};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::from_args(&args) {
        Ok(command) => command,
        Err(usage) => {
            eprintln!("{usage}");
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let result = match &command {
        Command::Help => {
            println!("{USAGE}");
            return;
        }
        Command::Lex(input) => lex(input, &mut stdout.lock(), &mut stderr.lock()),
        Command::Parse(input) => parse(input, &mut stdout.lock(), &mut stderr.lock()),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: cannot write output: {err}");
            std::process::exit(1);
        }
    }
}
