use std::{collections::VecDeque, fmt::Display};

use alloy::primitives::U256;

use super::{constants::MAX_STACK_SIZE, error::RevertError};

/// The [`Stack`] struct represents the VM operand stack.
/// It is a bounded LIFO data structure that holds a VecDeque of [`U256`] words.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Stack {
    /// The collection of words in LIFO order.
    ///
    /// The front of the deque represents the top of the stack.
    pub stack: VecDeque<U256>,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    /// Creates a new, empty [`Stack`].
    ///
    /// ```
    /// use wordvm_vm::core::stack::Stack;
    ///
    /// let stack = Stack::new();
    /// assert_eq!(stack.size(), 0);
    /// ```
    pub fn new() -> Stack {
        Stack { stack: VecDeque::with_capacity(MAX_STACK_SIZE) }
    }

    /// Fails with [`RevertError::StackUnderflow`] unless the stack holds at least `n` items.
    pub fn require(&self, n: usize) -> Result<(), RevertError> {
        if self.stack.len() < n {
            return Err(RevertError::StackUnderflow);
        }
        Ok(())
    }

    /// Fails with [`RevertError::StackOverflow`] unless `n` more items fit on the stack.
    pub fn require_room(&self, n: usize) -> Result<(), RevertError> {
        if self.stack.len().saturating_add(n) > MAX_STACK_SIZE {
            return Err(RevertError::StackOverflow);
        }
        Ok(())
    }

    /// Push a value onto the stack.
    ///
    /// ```
    /// use wordvm_vm::core::stack::Stack;
    /// use alloy::primitives::U256;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(U256::from(0x00)).unwrap();
    /// assert_eq!(stack.size(), 1);
    /// ```
    pub fn push(&mut self, value: U256) -> Result<(), RevertError> {
        self.require_room(1)?;
        self.stack.push_front(value);
        Ok(())
    }

    /// Pop a value off the stack.
    ///
    /// ```
    /// use wordvm_vm::core::stack::Stack;
    /// use alloy::primitives::U256;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(U256::from(0x01)).unwrap();
    ///
    /// assert_eq!(stack.pop().unwrap(), U256::from(0x01));
    /// assert!(stack.pop().is_err());
    /// ```
    pub fn pop(&mut self) -> Result<U256, RevertError> {
        self.stack.pop_front().ok_or(RevertError::StackUnderflow)
    }

    /// Swap the top value and the nth value below it.
    ///
    /// ```
    /// use wordvm_vm::core::stack::Stack;
    /// use alloy::primitives::U256;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(U256::from(0x00)).unwrap();
    /// stack.push(U256::from(0x01)).unwrap();
    ///
    /// // stack is now [0x01, 0x00]
    /// stack.swap(1).unwrap();
    ///
    /// // stack is now [0x00, 0x01]
    /// assert_eq!(stack.pop().unwrap(), U256::from(0x00));
    /// assert_eq!(stack.pop().unwrap(), U256::from(0x01));
    /// ```
    pub fn swap(&mut self, n: usize) -> Result<(), RevertError> {
        self.require(n + 1)?;
        self.stack.swap(0, n);
        Ok(())
    }

    /// Duplicate the nth value on the stack, counting from 1 at the top.
    ///
    /// ```
    /// use wordvm_vm::core::stack::Stack;
    /// use alloy::primitives::U256;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(U256::from(10)).unwrap();
    /// stack.push(U256::from(20)).unwrap();
    ///
    /// // stack is now [20, 10]
    /// stack.dup(2).unwrap();
    ///
    /// // stack is now [10, 20, 10]
    /// assert_eq!(stack.pop().unwrap(), U256::from(10));
    /// assert_eq!(stack.pop().unwrap(), U256::from(20));
    /// assert_eq!(stack.pop().unwrap(), U256::from(10));
    /// ```
    pub fn dup(&mut self, n: usize) -> Result<(), RevertError> {
        let item = match n.checked_sub(1).and_then(|index| self.stack.get(index)) {
            Some(item) => *item,
            None => return Err(RevertError::StackUnderflow),
        };
        self.push(item)
    }

    /// Peek at the value `index` items below the top of the stack.
    ///
    /// ```
    /// use wordvm_vm::core::stack::Stack;
    /// use alloy::primitives::U256;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(U256::from(0x00)).unwrap();
    ///
    /// assert_eq!(stack.peek(0).unwrap(), U256::from(0x00));
    /// assert!(stack.peek(1).is_err());
    /// ```
    pub fn peek(&self, index: usize) -> Result<U256, RevertError> {
        self.stack.get(index).copied().ok_or(RevertError::StackUnderflow)
    }

    /// gets the top n values of the stack, or fewer if the stack is shallower
    pub fn peek_n(&self, n: usize) -> Vec<U256> {
        self.stack.iter().take(n).copied().collect()
    }

    /// Get the size of the stack
    pub fn size(&self) -> usize {
        self.stack.len()
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Iterates over the words from the top of the stack down.
    pub fn iter(&self) -> impl Iterator<Item = &U256> {
        self.stack.iter()
    }

    /// Removes every item from the stack.
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

impl Display for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let words = self.stack.iter().map(|word| format!("{word:#x}")).collect::<Vec<String>>();
        write!(f, "[{}]", words.join(", "))
    }
}
