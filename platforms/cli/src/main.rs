//! Command-line runner: loads a machine definition or an embedded sample, runs it on the
//! given tape and prints the final state and tape content.

use clap::Parser;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;
use turing_tape::{
    MachineDefinition, ProgramLoader, ProgramManager, Step, TuringMachine, TuringMachineError,
};

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// The machine definition file (JSON) to execute
    #[clap(short, long, conflicts_with = "sample")]
    program: Option<String>,

    /// Name of an embedded sample machine to execute
    #[clap(short, long)]
    sample: Option<String>,

    /// The initial tape content, or `-` to read it from stdin
    #[clap(short, long)]
    input: Option<String>,

    /// Position of the first input symbol
    #[clap(short, long, allow_hyphen_values = true)]
    offset: Option<i64>,

    /// Initial head position
    #[clap(long, allow_hyphen_values = true)]
    head: Option<i64>,

    /// Blank symbol
    #[clap(short, long)]
    blank: Option<char>,

    /// Print each step of the execution
    #[clap(short = 'd', long)]
    debug: bool,
}

const STDIN_INPUT: &str = "-";

fn load_definition(cli: &Cli) -> Result<MachineDefinition, TuringMachineError> {
    match (&cli.program, &cli.sample) {
        (Some(path), _) => ProgramLoader::load_program(Path::new(path)),
        (None, Some(name)) => ProgramManager::get_program_by_name(name),
        (None, None) => Err(TuringMachineError::MissingArgument("program or sample")),
    }
}

/// Picks the tape content: `--input -` reads it from `source`, any other `--input` is used
/// as given, and without `--input` the definition's own input applies.
fn read_input(
    input: Option<&str>,
    definition: &MachineDefinition,
    mut source: impl Read,
) -> Result<String, TuringMachineError> {
    match input {
        Some(STDIN_INPUT) => {
            let mut buffer = String::new();
            source.read_to_string(&mut buffer).map_err(|e| {
                TuringMachineError::FileError(format!("Failed to read stdin: {}", e))
            })?;
            Ok(buffer.trim_end_matches(['\n', '\r']).to_string())
        }
        Some(input) => Ok(input.to_string()),
        None => Ok(definition.input.content.clone()),
    }
}

fn print_state(machine: &TuringMachine) -> Result<(), TuringMachineError> {
    println!(
        "Step: {}, State: {}, Head: {}, Tape: [{}]",
        machine.step_count()?,
        machine.current_state_name()?,
        machine.head_position()?,
        machine.content()?
    );
    Ok(())
}

fn execute(cli: &Cli) -> Result<bool, TuringMachineError> {
    let definition = load_definition(cli)?;
    let mut machine = definition.build()?;

    let content = read_input(cli.input.as_deref(), &definition, io::stdin())?;
    let offset = cli.offset.unwrap_or(definition.input.offset);
    let head = cli.head.unwrap_or(definition.input.head);
    let blank = cli.blank.unwrap_or(definition.blank);

    let halt = if cli.debug {
        machine.start(&content, offset, head, blank)?;
        print_state(&machine)?;

        loop {
            match machine.step()? {
                Step::Continue => print_state(&machine)?,
                Step::Halt(halt) => break halt,
            }
        }
    } else {
        machine.run(&content, offset, head, blank)?
    };

    if cli.debug {
        println!("\nMachine halted: {:?}", halt);
    }

    let accepted = machine.is_accepted()?;
    println!(
        "State: {} ({})",
        machine.current_state_name()?,
        if accepted { "accepted" } else { "rejected" }
    );
    println!("{}", machine.content()?);

    Ok(accepted)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
