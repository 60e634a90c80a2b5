//! Human-readable rendering of the instruction under the pointer.
//!
//! ```text
//! [ 0](1002),   4,   3,   4 # [4](33) * !(3) -> [4](33)
//! ```
//! Position operands render as `[addr](value)`, immediates as `!(value)`,
//! relative operands as `[base + offset](value)`.

use crate::error::RuntimeError;
use crate::machine::Machine;
use intcode_common::{Instruction, Mode, Opcode};

impl<I, O> Machine<I, O> {
    /// Render the current instruction with its resolved operands.
    pub fn describe(&self) -> Result<String, RuntimeError> {
        let instr = self.current()?;
        let header = format!(
            "[{:2}]({:04}),{:4},{:4},{:4}",
            self.pointer,
            self.memory.get(self.pointer),
            self.raw_arg(0),
            self.raw_arg(1),
            self.raw_arg(2),
        );

        let operation = match instr.opcode {
            Opcode::Add => format!(
                "{} + {} -> {}",
                self.operand(&instr, 0)?,
                self.operand(&instr, 1)?,
                self.operand(&instr, 2)?
            ),
            Opcode::Multiply => format!(
                "{} * {} -> {}",
                self.operand(&instr, 0)?,
                self.operand(&instr, 1)?,
                self.operand(&instr, 2)?
            ),
            Opcode::Input => format!("input -> {}", self.operand(&instr, 0)?),
            Opcode::Output => format!("{} -> output", self.operand(&instr, 0)?),
            Opcode::JumpIfTrue => format!(
                "if {} != 0 jump to {}",
                self.operand(&instr, 0)?,
                self.operand(&instr, 1)?
            ),
            Opcode::JumpIfFalse => format!(
                "if {} == 0 jump to {}",
                self.operand(&instr, 0)?,
                self.operand(&instr, 1)?
            ),
            Opcode::LessThan => format!(
                "{} < {} -> {}",
                self.operand(&instr, 0)?,
                self.operand(&instr, 1)?,
                self.operand(&instr, 2)?
            ),
            Opcode::Equals => format!(
                "{} == {} -> {}",
                self.operand(&instr, 0)?,
                self.operand(&instr, 1)?,
                self.operand(&instr, 2)?
            ),
            Opcode::AdjustRelativeBase => format!(
                "!({}) + {} -> relative",
                self.relative_base,
                self.operand(&instr, 0)?
            ),
            Opcode::Halt => "halt".to_string(),
        };

        Ok(format!("{header} # {operation}"))
    }

    fn operand(&self, instr: &Instruction, arg: usize) -> Result<String, RuntimeError> {
        let raw = self.raw_arg(arg);
        let digit = instr.mode_digit(arg);
        let mode = Mode::try_from(digit).map_err(|_| RuntimeError::InvalidAddressingMode {
            at: self.pointer,
            arg,
            mode: digit,
        })?;

        Ok(match mode {
            Mode::Position => format!("[{raw}]({})", self.memory.read(&raw)?),
            Mode::Immediate => format!("!({raw})"),
            Mode::Relative => {
                let address = &self.relative_base + &raw;
                format!(
                    "[{} + {raw}]({})",
                    self.relative_base,
                    self.memory.read(&address)?
                )
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::machine::Machine;
    use crate::port::{Captured, Queue};
    use intcode_common::Program;

    fn machine(cells: &[i64]) -> Machine {
        Machine::new(&Program::from_i64s(cells), Queue::new(), Captured::new())
    }

    #[test]
    fn describes_mixed_mode_multiply() {
        let m = machine(&[1002, 4, 3, 4, 33]);
        assert_eq!(
            m.describe().unwrap(),
            "[ 0](1002),   4,   3,   4 # [4](33) * !(3) -> [4](33)"
        );
    }

    #[test]
    fn describes_relative_output() {
        let mut m = machine(&[109, 1, 204, -1, 99]);
        m.step().unwrap();
        assert_eq!(
            m.describe().unwrap(),
            "[ 2](0204),  -1,  99,   0 # [1 + -1](109) -> output"
        );
    }

    #[test]
    fn describes_adjust_base_and_halt() {
        let mut m = machine(&[109, 19, 99]);
        assert!(m.describe().unwrap().ends_with("# !(0) + !(19) -> relative"));
        m.step().unwrap();
        assert!(m.describe().unwrap().ends_with("# halt"));
    }

    #[test]
    fn describes_jumps_and_input() {
        let m = machine(&[3, 9, 99]);
        assert!(m.describe().unwrap().ends_with("# input -> [9](0)"));
        let m = machine(&[1105, 1, 7, 99]);
        assert!(m.describe().unwrap().ends_with("# if !(1) != 0 jump to !(7)"));
    }

    #[test]
    fn describe_fails_on_invalid_opcode() {
        assert!(machine(&[77]).describe().is_err());
    }
}
