#![allow(dead_code)]
use basic::lang::parse_program;
use basic::mach::{Event, Interpreter};

pub fn interpreter(source: &str) -> Interpreter {
    match parse_program(source) {
        Ok(program) => Interpreter::new(program).with_seed(1964),
        Err(errors) => panic!("{:?}", errors),
    }
}

pub fn exec(source: &str) -> String {
    exec_with_input(source, &[])
}

/// Run to the end, answering INPUT prompts from `answers` in order, and
/// return the console joined with newlines.
pub fn exec_with_input(source: &str, answers: &[&str]) -> String {
    let mut r = interpreter(source);
    run_with_input(&mut r, answers);
    r.console().join("\n")
}

pub fn run_with_input(r: &mut Interpreter, answers: &[&str]) -> Event {
    let mut answers = answers.iter();
    loop {
        match r.run() {
            Event::Input(request) => match answers.next() {
                Some(text) => {
                    r.supply_input(request.token, text).unwrap();
                }
                None => return Event::Input(request),
            },
            event => return event,
        }
    }
}
