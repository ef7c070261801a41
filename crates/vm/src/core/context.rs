use super::{error::RevertError, memory::Memory, stack::Stack};

/// The [`ExecutionContext`] is the mutable state of a single run.
///
/// It is owned exclusively by the [`Interpreter`] and lent to one opcode handler at a time. A
/// handler either transforms it and returns `Ok`, or returns an error without having touched it.
///
/// [`Interpreter`]: crate::core::vm::Interpreter
#[derive(Clone, Debug)]
pub struct ExecutionContext {
    /// Offset of the next instruction in the bytecode.
    pub program_counter: usize,

    /// The bytecode being executed. Set once at load time.
    pub bytecode: Vec<u8>,

    /// The bounded operand stack.
    pub stack: Stack,

    /// The fixed-capacity linear memory.
    pub memory: Memory,

    /// The gas available when the run started.
    pub gas_limit: u64,

    /// The amount of gas remaining for execution.
    pub gas_remaining: u64,

    /// The amount of gas used so far during execution.
    pub gas_used: u64,
}

impl ExecutionContext {
    /// Creates a fresh context for the given bytecode.
    ///
    /// ```
    /// use wordvm_vm::core::context::ExecutionContext;
    ///
    /// let context = ExecutionContext::new(&[0x5f], 1024, u64::MAX);
    /// assert_eq!(context.program_counter, 0);
    /// assert!(context.stack.is_empty());
    /// assert_eq!(context.memory.capacity(), 1024);
    /// ```
    pub fn new(bytecode: &[u8], memory_size: usize, gas_limit: u64) -> ExecutionContext {
        ExecutionContext {
            program_counter: 0,
            bytecode: bytecode.to_vec(),
            stack: Stack::new(),
            memory: Memory::new(memory_size),
            gas_limit,
            gas_remaining: gas_limit,
            gas_used: 0,
        }
    }

    /// Whether the program counter still points inside the bytecode.
    pub fn is_running(&self) -> bool {
        self.program_counter < self.bytecode.len()
    }

    /// The opcode at the program counter, if any.
    pub fn current_opcode(&self) -> Option<u8> {
        self.bytecode.get(self.program_counter).copied()
    }

    /// Fails with [`RevertError::GasExceeded`] if `amount` exceeds the remaining gas.
    pub fn check_gas(&self, amount: u64) -> Result<(), RevertError> {
        if amount > self.gas_remaining {
            return Err(RevertError::GasExceeded);
        }
        Ok(())
    }

    /// Consume gas units, failing without any change if out of gas.
    ///
    /// ```
    /// use wordvm_vm::core::context::ExecutionContext;
    ///
    /// let mut context = ExecutionContext::new(&[], 32, 10);
    /// context.consume_gas(4).unwrap();
    /// assert_eq!(context.gas_remaining, 6);
    /// assert!(context.consume_gas(7).is_err());
    /// assert_eq!(context.gas_used, 4);
    /// ```
    pub fn consume_gas(&mut self, amount: u64) -> Result<(), RevertError> {
        self.check_gas(amount)?;
        self.gas_remaining -= amount;
        self.gas_used += amount;
        Ok(())
    }

    /// Rewinds the context for a new run over the same bytecode.
    pub fn reset(&mut self) {
        self.program_counter = 0;
        self.stack.clear();
        self.memory.clear();
        self.gas_remaining = self.gas_limit;
        self.gas_used = 0;
    }
}
