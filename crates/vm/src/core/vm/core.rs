#[cfg(feature = "step-tracing")]
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::core::{
    context::ExecutionContext,
    error::RevertError,
    opcodes::{self, OpCodeInfo},
};

use super::{
    execution::{ExecutionResult, ExitStatus, Instruction, State},
    handlers::{self, Control},
};

/// The [`Interpreter`] owns an [`ExecutionContext`] and drives it through the bytecode one opcode
/// at a time.
///
/// Execution is single-threaded and synchronous. A run ends when the program counter reaches the
/// end of the bytecode, or when a step fails.
#[derive(Clone, Debug)]
pub struct Interpreter {
    /// The state of the current run.
    pub context: ExecutionContext,

    /// The number of steps that completed successfully in the current run.
    pub steps: u64,
}

impl Interpreter {
    /// Creates a new [`Interpreter`] for the given bytecode, memory capacity and gas limit.
    ///
    /// ```
    /// use wordvm_vm::core::vm::Interpreter;
    ///
    /// let interpreter = Interpreter::new(&[0x5f], 1024, u64::MAX);
    /// assert!(interpreter.is_running());
    /// ```
    pub fn new(bytecode: &[u8], memory_size: usize, gas_limit: u64) -> Interpreter {
        Interpreter { context: ExecutionContext::new(bytecode, memory_size, gas_limit), steps: 0 }
    }

    /// Replaces the bytecode and resets the run.
    pub fn load_bytecode(&mut self, bytecode: &[u8]) {
        bytecode.clone_into(&mut self.context.bytecode);
        self.reset();
    }

    /// Resets the VM state for a new execution over the same bytecode.
    ///
    /// ```
    /// use wordvm_vm::core::vm::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new(&[0x60, 0x01], 1024, u64::MAX);
    /// interpreter.execute();
    /// assert!(!interpreter.is_running());
    ///
    /// interpreter.reset();
    /// assert!(interpreter.is_running());
    /// assert!(interpreter.context.stack.is_empty());
    /// ```
    pub fn reset(&mut self) {
        self.context.reset();
        self.steps = 0;
    }

    /// Whether there are instructions left to execute.
    pub fn is_running(&self) -> bool {
        self.context.is_running()
    }

    /// Fetches, dispatches and retires the instruction at the program counter.
    fn _step(&mut self, opcode: u8) -> Result<Instruction, RevertError> {
        let last_instruction = self.context.program_counter;
        let info = OpCodeInfo::get(opcode).ok_or(RevertError::UnknownOpcode(opcode))?;
        let inputs = self.context.stack.peek_n(info.inputs() as usize);
        self.context.check_gas(info.gas().into())?;

        #[cfg(feature = "step-tracing")]
        let start_time = Instant::now();

        let control = match opcode {
            opcodes::SHL => handlers::bitwise::shl(&mut self.context)?,

            opcodes::MLOAD => handlers::memory::mload(&mut self.context)?,
            opcodes::MSTORE => handlers::memory::mstore(&mut self.context)?,

            opcodes::JUMP => handlers::control::jump(&mut self.context)?,
            opcodes::JUMPDEST => handlers::control::jumpdest()?,

            (opcodes::PUSH0..=opcodes::PUSH32) => {
                handlers::stack::push_n(&mut self.context, opcode)?
            }
            (opcodes::DUP1..=opcodes::DUP16) => handlers::stack::dup_n(&mut self.context, opcode)?,
            (opcodes::SWAP1..=opcodes::SWAP16) => {
                handlers::stack::swap_n(&mut self.context, opcode)?
            }

            _ => return Err(RevertError::UnknownOpcode(opcode)),
        };

        self.context.consume_gas(info.gas().into())?;
        if control == Control::Continue {
            self.context.program_counter = self
                .context
                .program_counter
                .saturating_add(1 + info.advance_by() as usize);
        }
        self.steps += 1;

        let outputs = self.context.stack.peek_n(info.outputs() as usize);

        trace!(
            pc = last_instruction,
            opcode = info.name(),
            stack = %self.context.stack,
            "executed opcode"
        );

        #[cfg(feature = "step-tracing")]
        trace!(
            elapsed = ?start_time.elapsed(),
            gas_remaining = self.context.gas_remaining,
            stack_size = self.context.stack.size(),
            "_step.end"
        );

        Ok(Instruction { instruction: last_instruction, opcode, inputs, outputs })
    }

    /// Executes the next instruction and returns a snapshot of the VM state after executing it,
    /// or `None` if the run has already reached the end of the bytecode.
    ///
    /// A failed step leaves the state unchanged, so the caller can still inspect it.
    ///
    /// ```
    /// use wordvm_vm::core::vm::Interpreter;
    /// use alloy::primitives::U256;
    ///
    /// let mut interpreter = Interpreter::new(&[0x60, 0xff], 1024, u64::MAX);
    ///
    /// let state = interpreter.step().expect("step failed").expect("halted");
    /// assert_eq!(state.stack.peek(0).unwrap(), U256::from(0xff));
    /// assert!(interpreter.step().expect("step failed").is_none());
    /// ```
    pub fn step(&mut self) -> Result<Option<State>, RevertError> {
        let Some(opcode) = self.context.current_opcode() else {
            return Ok(None);
        };

        let instruction = self._step(opcode)?;

        Ok(Some(State {
            last_instruction: instruction,
            gas_used: self.context.gas_used,
            gas_remaining: self.context.gas_remaining,
            stack: self.context.stack.clone(),
        }))
    }

    /// View the next n states without executing them on this interpreter.
    ///
    /// Stops early when the run would halt, normally or with a failure.
    ///
    /// ```
    /// use wordvm_vm::core::vm::Interpreter;
    ///
    /// let interpreter = Interpreter::new(&[0x5f, 0x5f, 0x5f], 1024, u64::MAX);
    ///
    /// assert_eq!(interpreter.peek(2).len(), 2);
    /// assert_eq!(interpreter.peek(10).len(), 3);
    /// assert!(interpreter.context.stack.is_empty());
    /// ```
    pub fn peek(&self, n: usize) -> Vec<State> {
        let mut states = Vec::new();
        let mut vm_clone = self.clone();

        for _ in 0..n {
            match vm_clone.step() {
                Ok(Some(state)) => states.push(state),
                _ => break,
            }
        }

        states
    }

    /// Executes the code until finished, classifying how the run ended.
    ///
    /// ```
    /// use wordvm_vm::core::vm::{ExitStatus, Interpreter};
    /// use alloy::primitives::U256;
    ///
    /// // PUSH1 0x2a PUSH1 0x00 MSTORE PUSH1 0x00 MLOAD
    /// let mut interpreter =
    ///     Interpreter::new(&[0x60, 0x2a, 0x60, 0x00, 0x52, 0x60, 0x00, 0x51], 1024, u64::MAX);
    ///
    /// let result = interpreter.execute();
    /// assert_eq!(result.status, ExitStatus::Normal);
    /// assert_eq!(result.top(), Some(U256::from(42)));
    /// ```
    pub fn execute(&mut self) -> ExecutionResult {
        let status = loop {
            let instruction = self.context.program_counter;
            let opcode = match self.context.current_opcode() {
                Some(opcode) => opcode,
                None => break ExitStatus::Normal,
            };

            if let Err(error) = self._step(opcode) {
                break ExitStatus::Reverted { error, opcode, instruction };
            }
        };

        match &status {
            ExitStatus::Normal => debug!(steps = self.steps, "execution finished"),
            ExitStatus::Reverted { .. } => warn!(steps = self.steps, "{status}"),
        }

        ExecutionResult {
            status,
            stack: self.context.stack.iter().copied().collect(),
            memory: self.context.memory.clone(),
            gas_used: self.context.gas_used,
            gas_remaining: self.context.gas_remaining,
            instruction: self.context.program_counter,
            steps: self.steps,
        }
    }
}
