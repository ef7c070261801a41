use alloy::primitives::U256;

use super::{constants::DEFAULT_MEMORY_SIZE, error::RevertError};

/// The [`Memory`] struct represents the linear memory of the VM.
///
/// Memory is allocated once with a fixed capacity, zero-initialized, and never resized. Every
/// access is bounds-checked against that capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    /// Vector storing memory data
    pub memory: Vec<u8>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_SIZE)
    }
}

impl Memory {
    /// Creates a new zero-filled [`Memory`] holding `capacity` bytes.
    ///
    /// ```
    /// use wordvm_vm::core::memory::Memory;
    ///
    /// let memory = Memory::new(64);
    /// assert_eq!(memory.capacity(), 64);
    /// ```
    pub fn new(capacity: usize) -> Memory {
        Memory { memory: vec![0u8; capacity] }
    }

    /// Gets the capacity of the memory in bytes.
    pub fn capacity(&self) -> usize {
        self.memory.len()
    }

    /// Resolves a stack-provided offset into a byte index, ensuring that `size` bytes starting
    /// there lie within the memory.
    ///
    /// ```
    /// use wordvm_vm::core::memory::Memory;
    /// use alloy::primitives::U256;
    ///
    /// let memory = Memory::new(64);
    /// assert_eq!(memory.resolve(U256::from(32), 32).unwrap(), 32);
    /// assert!(memory.resolve(U256::from(33), 32).is_err());
    /// assert!(memory.resolve(U256::MAX, 1).is_err());
    /// ```
    pub fn resolve(&self, offset: U256, size: usize) -> Result<usize, RevertError> {
        let out_of_bounds = || RevertError::MemoryOutOfBounds { offset, size };

        let start: usize = offset.try_into().map_err(|_| out_of_bounds())?;
        match start.checked_add(size) {
            Some(end) if end <= self.capacity() => Ok(start),
            _ => Err(out_of_bounds()),
        }
    }

    /// Store the given bytes in the memory at the given offset.
    ///
    /// ```
    /// use wordvm_vm::core::memory::Memory;
    ///
    /// let mut memory = Memory::new(64);
    /// memory.store(30, &[0xaa, 0xbb]).unwrap();
    /// assert_eq!(memory.read(30, 2).unwrap(), &[0xaa, 0xbb]);
    /// assert!(memory.store(63, &[0x01, 0x02]).is_err());
    /// ```
    pub fn store(&mut self, offset: usize, value: &[u8]) -> Result<(), RevertError> {
        let start = self.resolve(U256::from(offset), value.len())?;
        self.memory[start..start + value.len()].copy_from_slice(value);
        Ok(())
    }

    /// Read the given number of bytes from the memory at the given offset.
    pub fn read(&self, offset: usize, size: usize) -> Result<&[u8], RevertError> {
        let start = self.resolve(U256::from(offset), size)?;
        Ok(&self.memory[start..start + size])
    }

    /// Zeroes every byte, keeping the capacity.
    pub fn clear(&mut self) {
        self.memory.fill(0);
    }
}
