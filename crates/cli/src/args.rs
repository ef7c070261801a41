use clap::{Args, Parser, Subcommand};

use crate::log_args::LogArgs;
use wordvm_config::ConfigArgs;
use wordvm_disassembler::DisassemblerArgs;

#[derive(Debug, Parser)]
#[clap(name = "wordvm", version)]
pub(crate) struct Arguments {
    #[clap(subcommand)]
    pub(crate) sub: Subcommands,

    #[clap(flatten)]
    pub(crate) logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(about = "wordvm is a deterministic interpreter for a 256-bit word stack machine.")]
pub(crate) enum Subcommands {
    #[clap(name = "run", about = "Execute bytecode and print the final machine state")]
    Run(RunArgs),

    #[clap(name = "disassemble", about = "Disassemble bytecode to assembly")]
    Disassemble(DisassemblerArgs),

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),
}

/// Arguments for the `run` command
#[derive(Debug, Clone, Args)]
#[clap(override_usage = "wordvm run <TARGET> [OPTIONS]")]
pub(crate) struct RunArgs {
    /// The target to execute, either a bytecode file or raw hex bytecode.
    #[clap(required = true)]
    pub(crate) target: String,

    /// Print the stack after every executed instruction.
    #[clap(long, short)]
    pub(crate) trace: bool,

    /// Print the start of linear memory after the run.
    #[clap(long, short)]
    pub(crate) memory: bool,

    /// The capacity of linear memory in bytes. Overrides the configured value.
    #[clap(long = "memory-size", value_name = "BYTES")]
    pub(crate) memory_size: Option<usize>,

    /// The gas available to the run. Overrides the configured value.
    #[clap(long = "gas-limit", value_name = "GAS")]
    pub(crate) gas_limit: Option<u64>,
}
