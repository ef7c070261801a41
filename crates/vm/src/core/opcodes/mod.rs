//! Opcode constants and the static opcode metadata table.
//!
//! The table maps each supported opcode byte to its name, the number of inline operand bytes the
//! interpreter must skip after executing it, its stack effect, and its gas cost. Bytes with no
//! entry are unknown opcodes.
//!
//! Gas costs are nominal step weights for bounding run length, not economic pricing.
//!
//! The table layout is partially adapted from https://github.com/bluealloy/revm

/// Information about opcode, such as name, inline operand width and stack inputs and outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OpCodeInfo {
    /// Name
    name: &'static str,
    /// Inline operand bytes following the opcode.
    advance_by: u8,
    /// Stack inputs.
    inputs: u8,
    /// Stack outputs.
    outputs: u8,
    /// Gas charged for executing the opcode.
    gas: u16,
}

impl OpCodeInfo {
    /// Creates a new opcode info with the given name and default values.
    pub const fn new(name: &'static str) -> Self {
        Self { name, advance_by: 0, inputs: 0, outputs: 0, gas: 0 }
    }

    /// Returns the name of the opcode.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the number of inline operand bytes that follow the opcode in the bytecode.
    #[inline]
    pub const fn advance_by(&self) -> u8 {
        self.advance_by
    }

    /// Returns the number of stack inputs.
    #[inline]
    pub const fn inputs(&self) -> u8 {
        self.inputs
    }

    /// Returns the number of stack outputs.
    #[inline]
    pub const fn outputs(&self) -> u8 {
        self.outputs
    }

    /// Returns the gas charged for executing the opcode.
    #[inline]
    pub const fn gas(&self) -> u16 {
        self.gas
    }

    /// Looks up the info of a supported opcode.
    ///
    /// ```
    /// use wordvm_vm::core::opcodes::{OpCodeInfo, PUSH2};
    ///
    /// assert_eq!(OpCodeInfo::get(PUSH2).map(|info| info.advance_by()), Some(2));
    /// assert!(OpCodeInfo::get(0xfe).is_none());
    /// ```
    #[inline]
    pub fn get(opcode: u8) -> Option<Self> {
        OPCODE_INFO_TABLE[opcode as usize]
    }
}

/// Sets the number of stack inputs and outputs.
#[inline]
pub const fn stack_io(mut op: OpCodeInfo, inputs: u8, outputs: u8) -> OpCodeInfo {
    op.inputs = inputs;
    op.outputs = outputs;
    op
}

/// Sets the number of inline operand bytes.
#[inline]
pub const fn immediate(mut op: OpCodeInfo, advance_by: u8) -> OpCodeInfo {
    op.advance_by = advance_by;
    op
}

/// Sets the gas required to execute the opcode.
#[inline]
pub const fn min_gas(mut op: OpCodeInfo, gas: u16) -> OpCodeInfo {
    op.gas = gas;
    op
}

macro_rules! opcodes {
    ($($val:literal => $name:ident => $($modifier:ident $(( $($modifier_arg:expr),* ))?),*);* $(;)?) => {
        // create a constant for each opcode
        $(
            #[doc = concat!("The `", stringify!($val), "` (\"", stringify!($name),"\") opcode.")]
            pub const $name: u8 = $val;
        )*

        /// Maps each opcode to its info.
        pub const OPCODE_INFO_TABLE: [Option<OpCodeInfo>; 256] = {
            let mut map = [None; 256];
            let mut prev: u8 = 0;
            $(
                let val: u8 = $val;
                assert!(val == 0 || val > prev, "opcodes must be sorted in ascending order");
                prev = val;
                let info = OpCodeInfo::new(
                    stringify!($name)
                );
                $(
                let info = $modifier(info, $($($modifier_arg),*)?);
                )*
                map[$val] = Some(info);
            )*
            let _ = prev;
            map
        };

        /// Maps each opcode to its name. (So we dont need to load [`OpCodeInfo`] to get the name)
        pub const OPCODE_NAME_TABLE: [&'static str; 256] = {
            let mut map = ["unknown"; 256];
            $(
                map[$val] = stringify!($name);
            )*
            map
        };
    }
}

/// Get the name of an opcode.
#[inline]
pub fn opcode_name(opcode: u8) -> &'static str {
    OPCODE_NAME_TABLE[opcode as usize]
}

opcodes! {
    0x1b => SHL => stack_io(2, 1), min_gas(3);

    0x51 => MLOAD => stack_io(1, 1), min_gas(3);
    0x52 => MSTORE => stack_io(2, 0), min_gas(3);
    0x56 => JUMP => stack_io(1, 0), min_gas(8);
    0x5b => JUMPDEST => min_gas(1);

    0x5f => PUSH0 => stack_io(0, 1), min_gas(2);
    0x60 => PUSH1 => immediate(1), stack_io(0, 1), min_gas(3);
    0x61 => PUSH2 => immediate(2), stack_io(0, 1), min_gas(3);
    0x62 => PUSH3 => immediate(3), stack_io(0, 1), min_gas(3);
    0x63 => PUSH4 => immediate(4), stack_io(0, 1), min_gas(3);
    0x64 => PUSH5 => immediate(5), stack_io(0, 1), min_gas(3);
    0x65 => PUSH6 => immediate(6), stack_io(0, 1), min_gas(3);
    0x66 => PUSH7 => immediate(7), stack_io(0, 1), min_gas(3);
    0x67 => PUSH8 => immediate(8), stack_io(0, 1), min_gas(3);
    0x68 => PUSH9 => immediate(9), stack_io(0, 1), min_gas(3);
    0x69 => PUSH10 => immediate(10), stack_io(0, 1), min_gas(3);
    0x6a => PUSH11 => immediate(11), stack_io(0, 1), min_gas(3);
    0x6b => PUSH12 => immediate(12), stack_io(0, 1), min_gas(3);
    0x6c => PUSH13 => immediate(13), stack_io(0, 1), min_gas(3);
    0x6d => PUSH14 => immediate(14), stack_io(0, 1), min_gas(3);
    0x6e => PUSH15 => immediate(15), stack_io(0, 1), min_gas(3);
    0x6f => PUSH16 => immediate(16), stack_io(0, 1), min_gas(3);
    0x70 => PUSH17 => immediate(17), stack_io(0, 1), min_gas(3);
    0x71 => PUSH18 => immediate(18), stack_io(0, 1), min_gas(3);
    0x72 => PUSH19 => immediate(19), stack_io(0, 1), min_gas(3);
    0x73 => PUSH20 => immediate(20), stack_io(0, 1), min_gas(3);
    0x74 => PUSH21 => immediate(21), stack_io(0, 1), min_gas(3);
    0x75 => PUSH22 => immediate(22), stack_io(0, 1), min_gas(3);
    0x76 => PUSH23 => immediate(23), stack_io(0, 1), min_gas(3);
    0x77 => PUSH24 => immediate(24), stack_io(0, 1), min_gas(3);
    0x78 => PUSH25 => immediate(25), stack_io(0, 1), min_gas(3);
    0x79 => PUSH26 => immediate(26), stack_io(0, 1), min_gas(3);
    0x7a => PUSH27 => immediate(27), stack_io(0, 1), min_gas(3);
    0x7b => PUSH28 => immediate(28), stack_io(0, 1), min_gas(3);
    0x7c => PUSH29 => immediate(29), stack_io(0, 1), min_gas(3);
    0x7d => PUSH30 => immediate(30), stack_io(0, 1), min_gas(3);
    0x7e => PUSH31 => immediate(31), stack_io(0, 1), min_gas(3);
    0x7f => PUSH32 => immediate(32), stack_io(0, 1), min_gas(3);

    0x80 => DUP1 => stack_io(1, 2), min_gas(3);
    0x81 => DUP2 => stack_io(2, 3), min_gas(3);
    0x82 => DUP3 => stack_io(3, 4), min_gas(3);
    0x83 => DUP4 => stack_io(4, 5), min_gas(3);
    0x84 => DUP5 => stack_io(5, 6), min_gas(3);
    0x85 => DUP6 => stack_io(6, 7), min_gas(3);
    0x86 => DUP7 => stack_io(7, 8), min_gas(3);
    0x87 => DUP8 => stack_io(8, 9), min_gas(3);
    0x88 => DUP9 => stack_io(9, 10), min_gas(3);
    0x89 => DUP10 => stack_io(10, 11), min_gas(3);
    0x8a => DUP11 => stack_io(11, 12), min_gas(3);
    0x8b => DUP12 => stack_io(12, 13), min_gas(3);
    0x8c => DUP13 => stack_io(13, 14), min_gas(3);
    0x8d => DUP14 => stack_io(14, 15), min_gas(3);
    0x8e => DUP15 => stack_io(15, 16), min_gas(3);
    0x8f => DUP16 => stack_io(16, 17), min_gas(3);

    0x90 => SWAP1 => stack_io(2, 2), min_gas(3);
    0x91 => SWAP2 => stack_io(3, 3), min_gas(3);
    0x92 => SWAP3 => stack_io(4, 4), min_gas(3);
    0x93 => SWAP4 => stack_io(5, 5), min_gas(3);
    0x94 => SWAP5 => stack_io(6, 6), min_gas(3);
    0x95 => SWAP6 => stack_io(7, 7), min_gas(3);
    0x96 => SWAP7 => stack_io(8, 8), min_gas(3);
    0x97 => SWAP8 => stack_io(9, 9), min_gas(3);
    0x98 => SWAP9 => stack_io(10, 10), min_gas(3);
    0x99 => SWAP10 => stack_io(11, 11), min_gas(3);
    0x9a => SWAP11 => stack_io(12, 12), min_gas(3);
    0x9b => SWAP12 => stack_io(13, 13), min_gas(3);
    0x9c => SWAP13 => stack_io(14, 14), min_gas(3);
    0x9d => SWAP14 => stack_io(15, 15), min_gas(3);
    0x9e => SWAP15 => stack_io(16, 16), min_gas(3);
    0x9f => SWAP16 => stack_io(17, 17), min_gas(3);
}
