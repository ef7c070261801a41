//! The `wordvm` binary.

pub(crate) mod args;
pub(crate) mod error;
pub(crate) mod log_args;
pub(crate) mod output;

use std::{process::ExitCode, time::Instant};

use args::{Arguments, RunArgs, Subcommands};
use clap::Parser;
use colored::Colorize;
use error::Error;
use output::{format_memory, format_stack};
use tracing::{debug, info};

use wordvm_common::{bytecode::get_bytecode_from_target, utils::io::file::write_file};
use wordvm_config::{config, Configuration};
use wordvm_disassembler::disassemble;
use wordvm_vm::core::{opcodes::opcode_name, vm::Interpreter};

fn main() -> Result<ExitCode, Error> {
    let args = Arguments::parse();

    // setup logging
    let _guard = args.logs.init_tracing();

    let configuration = Configuration::load()
        .map_err(|e| Error::Generic(format!("failed to load configuration: {}", e)))?;
    match args.sub {
        Subcommands::Run(cmd) => return run(cmd, &configuration),

        Subcommands::Disassemble(cmd) => {
            let assembly = disassemble(cmd.clone())?;

            if cmd.output.is_empty() {
                print!("{assembly}");
            } else {
                write_file(&cmd.output, &assembly)
                    .map_err(|e| Error::Generic(format!("failed to write assembly: {}", e)))?;
                info!("wrote assembly to '{}'", cmd.output);
            }
        }

        Subcommands::Config(cmd) => {
            config(cmd).map_err(|e| Error::Generic(format!("failed to configure: {}", e)))?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Runs the target to completion, printing the final stack. A reverted run prints the revert
/// reason and exits with a failure code.
fn run(cmd: RunArgs, configuration: &Configuration) -> Result<ExitCode, Error> {
    let bytecode = get_bytecode_from_target(&cmd.target)?;

    // flags override the configuration for this run only
    let memory_size = match memory_size(&cmd, configuration) {
        Ok(memory_size) => memory_size,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            return Ok(ExitCode::FAILURE);
        }
    };
    let gas_limit = cmd.gas_limit.unwrap_or_else(|| configuration.effective_gas_limit());

    let start_time = Instant::now();
    let mut vm = Interpreter::new(&bytecode, memory_size, gas_limit);

    if cmd.trace {
        while let Ok(Some(state)) = vm.step() {
            println!(
                "{:06x} {}",
                state.last_instruction.instruction,
                opcode_name(state.last_instruction.opcode)
            );
            println!("{}", format_stack(state.stack.iter()));
        }
    }

    // a failed step leaves the interpreter untouched, so resuming replays it and records the
    // revert in the result
    let result = vm.execute();
    debug!("execution took {:?}", start_time.elapsed());

    println!("stack:");
    println!("{}", format_stack(&result.stack));

    if cmd.memory {
        println!("memory:");
        println!("{}", format_memory(&result.memory, configuration.memory_dump_size));
    }

    if !result.is_success() {
        eprintln!("{} {}", "[ERROR]".red().bold(), result.status);
        return Ok(ExitCode::FAILURE);
    }

    info!("executed {} instructions using {} gas", result.steps, result.gas_used);
    Ok(ExitCode::SUCCESS)
}

/// The memory capacity for a run, preferring the command line flag over the configuration.
fn memory_size(
    cmd: &RunArgs,
    configuration: &Configuration,
) -> Result<usize, wordvm_config::error::Error> {
    Configuration::check_memory_size(cmd.memory_size.unwrap_or(configuration.memory_size))
}
