mod args;

pub use args::{DisassemblerArgs, DisassemblerArgsBuilder};
