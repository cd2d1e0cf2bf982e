#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn file_commands() {
    assert_eq!(
        Command::from_args(&args(&["lex", "main.lie"])),
        Ok(Command::Lex(Input::File(PathBuf::from("main.lie"))))
    );
    assert_eq!(
        Command::from_args(&args(&["parse", "dir/main.lie"])),
        Ok(Command::Parse(Input::File(PathBuf::from("dir/main.lie"))))
    );
}

#[test]
fn inline_source() {
    assert_eq!(
        Command::from_args(&args(&["parse", "-e", "1 + 2.\n"])),
        Ok(Command::Parse(Input::Source("1 + 2.\n".to_owned())))
    );
}

#[test]
fn help() {
    assert_eq!(Command::from_args(&[]), Ok(Command::Help));
    assert_eq!(Command::from_args(&args(&["--help"])), Ok(Command::Help));
    assert_eq!(Command::from_args(&args(&["help"])), Ok(Command::Help));
}

#[test]
fn usage_errors() {
    assert_eq!(
        Command::from_args(&args(&["build", "x.lie"])),
        Err("error: unknown command 'build'".to_owned())
    );
    let usage = "Usage: liec lex <file.lie> | liec lex -e <source>".to_owned();
    assert_eq!(Command::from_args(&args(&["lex"])), Err(usage.clone()));
    assert_eq!(Command::from_args(&args(&["lex", "-e"])), Err(usage.clone()));
    assert_eq!(Command::from_args(&args(&["lex", "a", "b"])), Err(usage));
}

#[test]
fn tracing_init_is_idempotent() {
    init_tracing();
    init_tracing();
}
