use std::time::Instant;

use crate::{error::Error, interfaces::DisassemblerArgs};
use tracing::{debug, info};
use wordvm_common::utils::strings::encode_hex;
use wordvm_vm::core::opcodes::{opcode_name, OpCodeInfo};

/// Disassembles bytecode into readable assembly instructions
///
/// Each instruction is listed at its offset, followed by its name and, for instructions with
/// inline operands, the operand bytes in hex. The opcode table decides how many operand bytes an
/// instruction owns. A truncated operand at the end of the bytecode lists the bytes that exist.
/// Bytes with no table entry are listed as `unknown`.
///
/// ```
/// use wordvm_disassembler::{disassemble, DisassemblerArgsBuilder};
///
/// let args = DisassemblerArgsBuilder::new().target("0x602a5b".to_string()).build().unwrap();
/// assert_eq!(disassemble(args).unwrap(), "000000 PUSH1 2a\n000002 JUMPDEST \n");
/// ```
pub fn disassemble(args: DisassemblerArgs) -> Result<String, Error> {
    let start_time = Instant::now();

    // get the bytecode from the target
    let start_fetch_time = Instant::now();
    let bytecode = args.get_bytecode()?;
    debug!("fetching target bytecode took {:?}", start_fetch_time.elapsed());

    let listing = disassemble_bytecode(&bytecode, args.decimal_counter);

    info!("disassembled {} bytes successfully", bytecode.len());
    debug!("disassembly took {:?}", start_time.elapsed());
    Ok(listing)
}

/// Lists each instruction of `bytecode` on its own line.
fn disassemble_bytecode(bytecode: &[u8], decimal_counter: bool) -> String {
    let mut program_counter = 0;
    let mut asm = String::new();

    while let Some(&opcode) = bytecode.get(program_counter) {
        let operand_size = OpCodeInfo::get(opcode).map_or(0, |info| info.advance_by() as usize);
        let operand_start = (program_counter + 1).min(bytecode.len());
        let operand_end = (operand_start + operand_size).min(bytecode.len());

        asm.push_str(&format!(
            "{} {} {}\n",
            if decimal_counter { program_counter.to_string() } else { format!("{program_counter:06x}") },
            opcode_name(opcode),
            encode_hex(&bytecode[operand_start..operand_end])
        ));

        program_counter += 1 + operand_size;
    }

    asm
}
