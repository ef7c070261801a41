use crate::core::{
    constants::WORD_SIZE,
    context::ExecutionContext,
    error::RevertError,
    word::{bytes_to_word, word_to_bytes},
};

use super::Control;

/// MLOAD - Load word from memory
pub fn mload(context: &mut ExecutionContext) -> Result<Control, RevertError> {
    let offset = context.stack.peek(0)?;
    let offset = context.memory.resolve(offset, WORD_SIZE)?;

    let result = bytes_to_word(context.memory.read(offset, WORD_SIZE)?)?;

    context.stack.pop()?;
    context.stack.push(result)?;
    Ok(Control::Continue)
}

/// MSTORE - Save word to memory
pub fn mstore(context: &mut ExecutionContext) -> Result<Control, RevertError> {
    context.stack.require(2)?;
    let offset = context.stack.peek(0)?;
    let value = context.stack.peek(1)?;
    let offset = context.memory.resolve(offset, WORD_SIZE)?;

    context.memory.store(offset, &word_to_bytes(value))?;
    context.stack.pop()?;
    context.stack.pop()?;
    Ok(Control::Continue)
}
