use declc::codegen::{generate_assembly, render, CodeGenerator};
use declc::config::Limits;
use declc::ir::{lower, temp_name, IrBuilder, IrOp, IrRecord, LowerError};
use declc::lexer::{tokenize, Position};
use declc::parser::{parse, Assignment, Expression, Program, TypeName, Variable};
use tempfile::NamedTempFile;
use test_log::test;

fn program_for(source: &str) -> Program {
    let lexed = tokenize(source).expect("tokenize failed");
    parse(&lexed.tokens).program
}

fn var(name: &str) -> Variable {
    Variable {
        name: name.to_string(),
        pos: Position::start(),
    }
}

#[test]
fn declaration_lowers_to_zero_assignment() {
    let ir = lower(&program_for("int x;"), &Limits::default()).expect("lowering failed");
    assert_eq!(ir, vec![IrRecord::assign("x", "0")]);
    assert_eq!(ir[0].op, IrOp::Assign);
    assert_eq!(ir[0].result, "x");
    assert_eq!(ir[0].arg1, "0");
}

#[test]
fn records_follow_source_order() {
    let ir = lower(&program_for("int c; char a; float b;"), &Limits::default())
        .expect("lowering failed");
    let results: Vec<&str> = ir.iter().map(|r| r.result.as_str()).collect();
    assert_eq!(results, vec!["c", "a", "b"]);
}

#[test]
fn malformed_declaration_contributes_nothing() {
    let ir = lower(&program_for("int x"), &Limits::default()).expect("lowering failed");
    assert!(ir.is_empty());
}

#[test]
fn record_limit_is_fatal() {
    let limits = Limits::default().with_max_ir_records(2);
    let err = lower(&program_for("int a; int b; int c;"), &limits).expect_err("limit not enforced");
    assert_eq!(err, LowerError::TooManyRecords(2));
}

#[test]
fn assignment_of_variable_emits_move() {
    let mut builder = IrBuilder::new(Limits::DEFAULT_MAX_IR_RECORDS);
    let assignment = Assignment {
        target: var("x"),
        value: Expression::Variable(var("y")),
    };
    builder.lower_assignment(&assignment).expect("lowering failed");
    assert_eq!(builder.records(), &[IrRecord::assign("x", "y")]);
    assert_eq!(generate_assembly(builder.records()), vec!["MOV x, y"]);
}

#[test]
fn assignment_of_type_name_is_accepted() {
    let mut builder = IrBuilder::new(Limits::DEFAULT_MAX_IR_RECORDS);
    let assignment = Assignment {
        target: var("x"),
        value: Expression::Type(TypeName {
            lexeme: "int".to_string(),
            pos: Position::start(),
        }),
    };
    builder.lower_assignment(&assignment).expect("lowering failed");
    assert_eq!(builder.finish(), vec![IrRecord::assign("x", "int")]);
}

#[test]
fn integer_expressions_are_unsupported() {
    let mut builder = IrBuilder::new(Limits::DEFAULT_MAX_IR_RECORDS);
    let assignment = Assignment {
        target: var("x"),
        value: Expression::Integer {
            value: "5".to_string(),
            pos: Position::new(3, 7),
        },
    };
    let err = builder.lower_assignment(&assignment).expect_err("should be unsupported");
    assert_eq!(
        err,
        LowerError::UnsupportedExpression("5".to_string(), Position::new(3, 7))
    );
    assert!(builder.records().is_empty());
}

#[test]
fn assembly_mnemonics() {
    let records = vec![
        IrRecord::assign("x", "0"),
        IrRecord::new(IrOp::Add, temp_name(0), "a", "b"),
        IrRecord::new(IrOp::Sub, temp_name(1), "a", "b"),
        IrRecord::new(IrOp::Mul, temp_name(2), "a", "b"),
        IrRecord::new(IrOp::Div, temp_name(3), "a", "b"),
        IrRecord::new(IrOp::Goto, "L1", "", ""),
    ];
    assert_eq!(
        generate_assembly(&records),
        vec![
            "MOV x, 0",
            "ADD temp0, a, b",
            "SUB temp1, a, b",
            "MUL temp2, a, b",
            "DIV temp3, a, b",
            "Unknown operation",
        ]
    );
}

#[test]
fn emitter_leaves_records_untouched() {
    let records = vec![IrRecord::assign("x", "0"), IrRecord::assign("y", "0")];
    let before = records.clone();
    let mut codegen = CodeGenerator::new();
    codegen.generate(&records);
    assert_eq!(records, before);
    assert_eq!(codegen.print_to_string(), "MOV x, 0\nMOV y, 0\n");
    assert_eq!(render(&records[1]), "MOV y, 0");
}

#[test]
fn listing_can_be_written_to_file() {
    let mut codegen = CodeGenerator::new();
    codegen.generate(&[IrRecord::assign("x", "0")]);

    let file = NamedTempFile::new().expect("temp file");
    codegen.write_to_file(file.path()).expect("write failed");
    let written = std::fs::read_to_string(file.path()).expect("read back");
    assert_eq!(written, "MOV x, 0\n");
}
