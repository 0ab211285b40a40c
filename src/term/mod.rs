extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use basic::lang::parse_program;
use basic::mach::{Event, Interpreter, Snapshot};
use linefeed::{Interface, ReadResult, Signal, Terminal};
use std::io::{Error, ErrorKind};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: basic FILE [--delay MS] [--seed N] [--trace] [--json]";

pub fn main() {
    let filter = EnvFilter::try_from_env("BASIC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(msg) => {
            if !msg.is_empty() {
                eprintln!("{}", msg);
            }
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };
    match main_loop(&options) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

#[derive(Debug, Default, PartialEq)]
struct Options {
    path: String,
    delay: u64,
    seed: Option<u64>,
    trace: bool,
    json: bool,
}

impl Options {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Options, String> {
        let mut options = Options::default();
        let mut path: Option<String> = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--delay" => options.delay = number(args.next(), "--delay")?,
                "--seed" => options.seed = Some(number(args.next(), "--seed")?),
                "--trace" => options.trace = true,
                "--json" => options.json = true,
                "-h" | "--help" => return Err(String::new()),
                s if s.starts_with("--") => return Err(format!("unknown option {}", s)),
                _ if path.is_some() => return Err(format!("unexpected argument {}", arg)),
                _ => path = Some(arg),
            }
        }
        match path {
            Some(path) => {
                options.path = path;
                Ok(options)
            }
            None => Err("missing program file".to_string()),
        }
    }
}

fn number(arg: Option<String>, flag: &str) -> Result<u64, String> {
    match arg.as_ref().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => Ok(n),
        _ => Err(format!("{} needs a number", flag)),
    }
}

/// Returns false if the program could not be parsed or ended in an error.
fn main_loop(options: &Options) -> std::io::Result<bool> {
    let source = std::fs::read_to_string(&options.path)?;
    let program = match parse_program(&source) {
        Ok(program) => program,
        Err(errors) => {
            for error in errors.iter() {
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
            }
            return Ok(false);
        }
    };
    let mut interpreter = Interpreter::new(program);
    if let Some(seed) = options.seed {
        interpreter = interpreter.with_seed(seed);
    }
    interpreter.set_speed(options.delay);
    if options.trace {
        interpreter.set_step_callback(Box::new(|snapshot: &Snapshot| {
            if let Some(line) = snapshot.current_line {
                eprintln!("[{}]", line);
            }
        }));
    }
    let control = interpreter.control();
    ctrlc::set_handler(move || control.stop())
        .map_err(|error| Error::new(ErrorKind::Other, error.to_string()))?;

    let interface = Interface::new("BASIC")?;
    interface.set_report_signal(Signal::Interrupt, true);
    let mut echo = Echo::default();
    let success = loop {
        let event = interpreter.run();
        echo.flush(&interface, &interpreter.state())?;
        match event {
            Event::Input(request) => {
                interface.set_prompt(&request.prompt)?;
                match interface.read_line()? {
                    ReadResult::Input(text) => {
                        match interpreter.supply_input(request.token, &text) {
                            Ok(Event::Error(_)) => {
                                echo.flush(&interface, &interpreter.state())?;
                                break false;
                            }
                            Ok(_) => {}
                            Err(error) => {
                                eprintln!("{}", Style::new().bold().paint(error.to_string()));
                                break false;
                            }
                        }
                        interface.add_history_unique(text);
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => interpreter.stop(),
                }
            }
            Event::Error(_) => break false,
            Event::Stepped | Event::Paused | Event::Finished => break true,
        }
    };
    echo.flush(&interface, &interpreter.state())?;
    if options.json {
        println!("{}", interpreter.state().to_json()?);
    }
    Ok(success)
}

/// How much of the console has already been written to the terminal.
#[derive(Debug, Default)]
struct Echo {
    lines: usize,
    chars: usize,
}

impl Echo {
    fn flush<T: Terminal>(&mut self, interface: &Interface<T>, snapshot: &Snapshot) -> std::io::Result<()> {
        let console = &snapshot.console;
        while let Some(line) = console.get(self.lines) {
            let rest: String = line.chars().skip(self.chars).collect();
            if self.lines + 1 == console.len() && snapshot.console_open {
                interface.write_fmt(format_args!("{}", rest))?;
                self.chars = line.chars().count();
                break;
            }
            if line.starts_with("ERROR at line ") {
                interface.write_fmt(format_args!("{}\n", Style::new().bold().paint(rest)))?;
            } else {
                interface.write_fmt(format_args!("{}\n", rest))?;
            }
            self.lines += 1;
            self.chars = 0;
        }
        Ok(())
    }
}
