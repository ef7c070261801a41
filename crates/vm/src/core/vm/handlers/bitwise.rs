use alloy::primitives::U256;

use crate::core::{constants::MAX_SHIFT, context::ExecutionContext, error::RevertError};

use super::Control;

/// SHL - Shift left operation
pub fn shl(context: &mut ExecutionContext) -> Result<Control, RevertError> {
    context.stack.require(2)?;
    let shift = context.stack.pop()?;
    let value = context.stack.pop()?;

    let shift: usize = shift.try_into().unwrap_or(usize::MAX);
    let result = if shift > MAX_SHIFT as usize { U256::ZERO } else { value << shift };

    context.stack.push(result)?;
    Ok(Control::Continue)
}
