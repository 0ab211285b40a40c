mod common;
use basic::mach::Val;
use common::*;

#[test]
fn test_abs_int_sgn() {
    assert_eq!(exec("10 PRINT ABS(-3); INT(2.7); INT(-2.5); SGN(-9); SGN(0); SGN(4)"), "32-3-101");
}

#[test]
fn test_sqr() {
    assert_eq!(exec("10 PRINT SQR(16)"), "4");
    assert_eq!(
        exec("10 PRINT SQR(-1)"),
        "ERROR at line 10: ILLEGAL FUNCTION CALL; SQR OF NEGATIVE NUMBER"
    );
}

#[test]
fn test_trig() {
    assert_eq!(exec("10 PRINT SIN(0); COS(0); ATN(0)"), "010");
    assert_eq!(exec("10 PRINT 4 * ATN(1)"), "3.141593");
}

#[test]
fn test_exp_log() {
    assert_eq!(exec("10 PRINT EXP(0); LOG(1)"), "10");
    assert_eq!(exec("10 PRINT LOG(EXP(2))"), "2");
    assert_eq!(
        exec("10 PRINT LOG(0)"),
        "ERROR at line 10: ILLEGAL FUNCTION CALL; LOG OF NON-POSITIVE NUMBER"
    );
    assert_eq!(exec("10 PRINT EXP(1000)"), "ERROR at line 10: OVERFLOW");
}

#[test]
fn test_string_argument() {
    assert_eq!(exec("10 PRINT ABS(\"X\")"), "ERROR at line 10: TYPE MISMATCH");
}

#[test]
fn test_rnd_range() {
    let mut r = interpreter("10 FOR I = 1 TO 100\n20 LET X = RND(1)\n30 IF X < 0 THEN 60\n40 IF X >= 1 THEN 60\n50 NEXT I\n60 PRINT I");
    r.run();
    assert_eq!(r.console(), &["101".to_string()]);
}

#[test]
fn test_rnd_seeded_replay() {
    let s = "10 LET A = RND(1)\n20 LET B = RND(1)";
    let mut first = interpreter(s);
    first.run();
    let mut second = interpreter(s);
    second.run();
    let a = first.state();
    let b = second.state();
    assert_eq!(a.variable("A"), b.variable("A"));
    assert_eq!(a.variable("B"), b.variable("B"));
    assert_ne!(a.variable("A"), a.variable("B"));

    first.reset();
    first.run();
    assert_eq!(first.state().variable("A"), b.variable("A"));
}

#[test]
fn test_tab() {
    assert_eq!(exec("10 PRINT \"A\"; TAB(5); \"B\""), "A   B");
    assert_eq!(exec("10 PRINT \"ABCDEF\"; TAB(3); \"G\""), "ABCDEFG");
    assert_eq!(exec("10 LET X = TAB(7)\n20 PRINT X"), "7");
}

#[test]
fn test_value_in_state() {
    let mut r = interpreter("10 LET A = INT(9.9)");
    r.run();
    assert_eq!(r.state().variable("A"), Some(&Val::Number(9.0)));
}
