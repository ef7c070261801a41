/// The size of a machine word, in bytes.
pub const WORD_SIZE: usize = 32;

/// The maximum number of words the operand stack may hold.
pub const MAX_STACK_SIZE: usize = 1024;

/// The default capacity of linear memory, in bytes.
pub const DEFAULT_MEMORY_SIZE: usize = 100_000;

/// The largest linear memory capacity a run may request, in bytes (1 GiB).
pub const MAX_MEMORY_SIZE: usize = 1 << 30;

/// Shift amounts above this value always produce the zero word.
pub const MAX_SHIFT: u8 = 255;
