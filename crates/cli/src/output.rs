use alloy::primitives::U256;
use wordvm_vm::core::{memory::Memory, word::word_to_bytes};

/// Formats the stack one word per line, top first. Each word is printed as its 32 big-endian
/// bytes in hex, separated by commas.
pub(crate) fn format_stack<'a>(stack: impl IntoIterator<Item = &'a U256>) -> String {
    stack
        .into_iter()
        .map(|word| {
            word_to_bytes(*word).iter().map(|byte| format!("{byte:02x}")).collect::<Vec<_>>().join(", ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats the first `size` bytes of memory, one `mem[<dec> = <hex>] = <hex>` line per byte.
pub(crate) fn format_memory(memory: &Memory, size: usize) -> String {
    memory
        .memory
        .iter()
        .take(size)
        .enumerate()
        .map(|(offset, byte)| format!("mem[{offset} = {offset:x}] = {byte:x}"))
        .collect::<Vec<_>>()
        .join("\n")
}
