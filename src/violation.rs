use core::fmt;
#[cfg(any(feature = "std", test))]
use std::error;

/// A precondition that a caller failed to meet.
///
/// Every operation in this crate checks all of its arguments and returns one of these instead
/// of producing partial output. They indicate a programming defect at the call site rather than
/// a transient condition, so retrying with the same arguments will always fail the same way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// A required pointer was null. Only the C ABI can produce this.
    NullArgument,
    /// The output buffer is smaller than the operation requires.
    InsufficientCapacity {
        /// Bytes the operation needs, including any terminator.
        required: usize,
        /// Bytes the caller provided.
        available: usize,
    },
    /// The input length is not valid for the operation: a block that isn't 1 to 3 bytes when
    /// encoding, or encoded text that isn't a multiple of 4 when decoding.
    InvalidLength(usize),
    /// A byte that is neither an alphabet symbol nor correctly placed padding was found.
    /// The offset and offending byte are provided.
    InvalidByte(usize, u8),
    /// A pad byte at the given offset is not in the final one or two positions of the final
    /// block.
    InvalidPadding(usize),
    /// A zero length block was given to the block encoder.
    EmptyBlock,
}

/// The category a [Violation] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    /// A required argument was absent.
    NullArgument,
    /// The output capacity was smaller than the length required by the input.
    Capacity,
    /// Decode input of the wrong length, with an unresolvable character, or with misplaced
    /// padding.
    MalformedInput,
    /// Zero length input to the block encoder.
    DegenerateInput,
}

impl Violation {
    /// Returns the category of this violation.
    pub fn kind(&self) -> ViolationKind {
        match *self {
            Violation::NullArgument => ViolationKind::NullArgument,
            Violation::InsufficientCapacity { .. } => ViolationKind::Capacity,
            Violation::InvalidLength(_)
            | Violation::InvalidByte(_, _)
            | Violation::InvalidPadding(_) => ViolationKind::MalformedInput,
            Violation::EmptyBlock => ViolationKind::DegenerateInput,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Violation::NullArgument => write!(f, "Required pointer argument is null."),
            Violation::InsufficientCapacity {
                required,
                available,
            } => write!(
                f,
                "Output buffer too small: {} bytes required, {} available.",
                required, available
            ),
            Violation::InvalidLength(len) => write!(f, "Invalid input length {}.", len),
            Violation::InvalidByte(index, byte) => {
                write!(f, "Invalid byte {}, offset {}.", byte, index)
            }
            Violation::InvalidPadding(index) => write!(f, "Invalid padding, offset {}.", index),
            Violation::EmptyBlock => write!(f, "Cannot encode an empty block."),
        }
    }
}

#[cfg(any(feature = "std", test))]
impl error::Error for Violation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(ViolationKind::NullArgument, Violation::NullArgument.kind());
        assert_eq!(
            ViolationKind::Capacity,
            Violation::InsufficientCapacity {
                required: 5,
                available: 4
            }
            .kind()
        );
        assert_eq!(ViolationKind::MalformedInput, Violation::InvalidLength(5).kind());
        assert_eq!(
            ViolationKind::MalformedInput,
            Violation::InvalidByte(0, b'*').kind()
        );
        assert_eq!(ViolationKind::MalformedInput, Violation::InvalidPadding(1).kind());
        assert_eq!(ViolationKind::DegenerateInput, Violation::EmptyBlock.kind());
    }

    #[test]
    fn display_mentions_details() {
        assert_eq!(
            "Output buffer too small: 9 bytes required, 8 available.",
            Violation::InsufficientCapacity {
                required: 9,
                available: 8
            }
            .to_string()
        );
        assert_eq!(
            "Invalid byte 42, offset 3.",
            Violation::InvalidByte(3, b'*').to_string()
        );
    }
}
