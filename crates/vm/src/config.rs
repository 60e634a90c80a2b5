//! Resource limits for a machine.

/// Largest address a machine may touch by default: `2^31 - 1`.
pub const DEFAULT_MAX_ADDRESS: usize = i32::MAX as usize;

/// Width of the widest instruction. Addresses stay this far below
/// `usize::MAX` so operand offsets never wrap.
const HEADROOM: usize = 4;

/// Sanity ceilings applied while a machine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Highest valid memory address. Anything above fails with
    /// `RuntimeError::AddressOverflow`.
    pub max_address: usize,
}

impl Limits {
    /// Limits with a custom address ceiling, clamped below `usize::MAX`.
    pub fn with_max_address(max_address: usize) -> Self {
        Self {
            max_address: max_address.min(usize::MAX - HEADROOM),
        }
    }

    /// The effective highest address, even for a hand-built `Limits`.
    pub fn ceiling(&self) -> usize {
        self.max_address.min(usize::MAX - HEADROOM)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_address: DEFAULT_MAX_ADDRESS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ceiling_is_i32_max() {
        assert_eq!(Limits::default().max_address, 2_147_483_647);
    }

    #[test]
    fn custom_ceiling() {
        assert_eq!(Limits::with_max_address(1024).max_address, 1024);
        assert_eq!(Limits::with_max_address(1024).ceiling(), 1024);
    }

    #[test]
    fn ceiling_leaves_room_for_operands() {
        assert_eq!(Limits::with_max_address(usize::MAX).max_address, usize::MAX - 4);
        let raw = Limits {
            max_address: usize::MAX,
        };
        assert_eq!(raw.ceiling(), usize::MAX - 4);
    }
}
