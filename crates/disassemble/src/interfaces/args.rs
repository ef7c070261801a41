use clap::Parser;
use derive_builder::Builder;
use wordvm_common::bytecode::get_bytecode_from_target;

use crate::error::Error;

/// Arguments for the `disassemble` command
#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Disassembles wordvm bytecode to assembly",
    override_usage = "wordvm disassemble <TARGET> [OPTIONS]"
)]
pub struct DisassemblerArgs {
    /// The target to disassemble, either a bytecode file or raw hex bytecode.
    #[clap(required = true)]
    pub target: String,

    /// Whether to use base-10 for the program counter.
    #[clap(long = "decimal-counter", short = 'd')]
    pub decimal_counter: bool,

    /// The file to write the listing to. The listing is printed when unset.
    #[clap(long = "output", short = 'o', default_value = "", hide_default_value = true)]
    pub output: String,
}

impl DisassemblerArgs {
    /// Resolves the target into bytecode.
    pub fn get_bytecode(&self) -> Result<Vec<u8>, Error> {
        Ok(get_bytecode_from_target(&self.target)?)
    }
}

impl DisassemblerArgsBuilder {
    /// Creates a builder with every field set to its command line default.
    pub fn new() -> Self {
        Self {
            target: Some(String::new()),
            decimal_counter: Some(false),
            output: Some(String::new()),
        }
    }
}
