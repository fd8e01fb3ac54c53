use std::fmt;

/// Three-address operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Label,
    Jump,
    If,
    Goto,
    Read,
    Write,
    Return,
}

/// Assembly operations a record can be rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsmOp {
    Move,
    Add,
    Sub,
    Mul,
    Div,
    Store,
    Load,
}

impl AsmOp {
    #[must_use]
    pub fn mnemonic(self) -> &'static str {
        match self {
            AsmOp::Move => "MOV",
            AsmOp::Add => "ADD",
            AsmOp::Sub => "SUB",
            AsmOp::Mul => "MUL",
            AsmOp::Div => "DIV",
            AsmOp::Store => "STR",
            AsmOp::Load => "LOAD",
        }
    }
}

impl IrOp {
    /// How the assembly emitter renders this op; control-flow and I/O ops
    /// have no assembly form yet.
    #[must_use]
    pub fn asm_op(self) -> Option<AsmOp> {
        match self {
            IrOp::Assign => Some(AsmOp::Move),
            IrOp::Add => Some(AsmOp::Add),
            IrOp::Sub => Some(AsmOp::Sub),
            IrOp::Mul => Some(AsmOp::Mul),
            IrOp::Div => Some(AsmOp::Div),
            IrOp::Label
            | IrOp::Jump
            | IrOp::If
            | IrOp::Goto
            | IrOp::Read
            | IrOp::Write
            | IrOp::Return => None,
        }
    }

    fn operator(self) -> Option<char> {
        match self {
            IrOp::Add => Some('+'),
            IrOp::Sub => Some('-'),
            IrOp::Mul => Some('*'),
            IrOp::Div => Some('/'),
            _ => None,
        }
    }
}

/// One three-address instruction: `result = arg1 op arg2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrRecord {
    pub op: IrOp,
    pub arg1: String,
    pub arg2: String,
    pub result: String,
}

impl IrRecord {
    pub fn new(op: IrOp, result: impl Into<String>, arg1: impl Into<String>, arg2: impl Into<String>) -> Self {
        Self {
            op,
            arg1: arg1.into(),
            arg2: arg2.into(),
            result: result.into(),
        }
    }

    pub fn assign(result: impl Into<String>, arg1: impl Into<String>) -> Self {
        Self::new(IrOp::Assign, result, arg1, String::new())
    }
}

impl fmt::Display for IrRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.op {
            IrOp::Assign => write!(f, "{} = {}", self.result, self.arg1),
            IrOp::Add | IrOp::Sub | IrOp::Mul | IrOp::Div => {
                let operator = self.op.operator().unwrap_or('?');
                write!(f, "{} = {} {} {}", self.result, self.arg1, operator, self.arg2)
            }
            IrOp::Label => write!(f, "{}:", self.result),
            IrOp::Jump => write!(f, "jump {}", self.result),
            IrOp::Goto => write!(f, "goto {}", self.result),
            IrOp::If => write!(f, "if {} goto {}", self.arg1, self.result),
            IrOp::Read => write!(f, "read {}", self.result),
            IrOp::Write => write!(f, "write {}", self.arg1),
            IrOp::Return => write!(f, "return {}", self.arg1),
        }
    }
}

/// Name of the `index`-th compiler temporary
#[must_use]
pub fn temp_name(index: usize) -> String {
    format!("temp{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temporaries_are_numbered() {
        assert_eq!(temp_name(0), "temp0");
        assert_eq!(temp_name(12), "temp12");
    }

    #[test]
    fn only_assign_and_arithmetic_have_asm_forms() {
        assert_eq!(IrOp::Assign.asm_op(), Some(AsmOp::Move));
        assert_eq!(IrOp::Div.asm_op(), Some(AsmOp::Div));
        assert_eq!(IrOp::Label.asm_op(), None);
        assert_eq!(IrOp::Return.asm_op(), None);
    }

    #[test]
    fn records_display_as_three_address_code() {
        assert_eq!(IrRecord::assign("x", "0").to_string(), "x = 0");
        assert_eq!(
            IrRecord::new(IrOp::Mul, temp_name(1), "a", "b").to_string(),
            "temp1 = a * b"
        );
        assert_eq!(IrRecord::new(IrOp::If, "L1", "c", "").to_string(), "if c goto L1");
        assert_eq!(IrRecord::new(IrOp::Label, "L1", "", "").to_string(), "L1:");
        assert_eq!(IrRecord::new(IrOp::Return, "", "x", "").to_string(), "return x");
    }
}
