mod common;
use common::*;

#[test]
fn test_print_and_end() {
    let s = r#"
10 PRINT "HELLO"
20 END
30 PRINT "NEVER"
"#;
    assert_eq!(exec(s), "HELLO");
}

#[test]
fn test_run_off_the_end() {
    assert_eq!(exec("10 PRINT 1\n20 PRINT 2"), "1\n2");
}

#[test]
fn test_stop() {
    assert_eq!(exec("10 PRINT 1\n20 STOP\n30 PRINT 2"), "1");
}

#[test]
fn test_let_and_default_zero() {
    let s = r#"
10 LET A = 5
20 B = A * 2
30 PRINT A; B; C
40 PRINT "["; X$; "]"
"#;
    assert_eq!(exec(s), "5100\n[]");
}

#[test]
fn test_goto() {
    let s = r#"
10 GOTO 30
20 PRINT "SKIPPED"
30 PRINT "LANDED"
"#;
    assert_eq!(exec(s), "LANDED");
}

#[test]
fn test_goto_undefined_line() {
    assert_eq!(
        exec("10 GOTO 50"),
        "ERROR at line 10: UNDEFINED LINE; 50"
    );
}

#[test]
fn test_if_then_line() {
    let s = r#"
10 LET A = 1
20 IF A = 1 THEN 50
30 PRINT "NO"
40 END
50 PRINT "YES"
"#;
    assert_eq!(exec(s), "YES");
}

#[test]
fn test_if_then_statement() {
    let s = r#"
10 IF 1 < 2 THEN PRINT "A"
20 IF 2 < 1 THEN PRINT "B"
30 IF "X" = "X" THEN LET C = 3
40 PRINT C
"#;
    assert_eq!(exec(s), "A\n3");
}

#[test]
fn test_for_next() {
    let s = r#"
10 FOR I = 1 TO 5
20 PRINT I;
30 NEXT I
40 PRINT
50 PRINT I
"#;
    assert_eq!(exec(s), "12345\n6");
}

#[test]
fn test_for_step_down() {
    let s = r#"
10 FOR I = 5 TO 1 STEP -1
20 PRINT I;
30 NEXT I
"#;
    assert_eq!(exec(s), "54321");
}

#[test]
fn test_for_fractional_step() {
    let s = r#"
10 FOR X = 0 TO 1 STEP 0.25
20 PRINT X;" ";
30 NEXT X
"#;
    assert_eq!(exec(s), "0 0.25 0.5 0.75 1 ");
}

#[test]
fn test_for_body_runs_once_past_end() {
    let s = r#"
10 FOR I = 5 TO 1
20 PRINT "BODY"
30 NEXT I
40 PRINT I
"#;
    assert_eq!(exec(s), "BODY\n6");
}

#[test]
fn test_nested_for() {
    let s = r#"
10 FOR I = 1 TO 2
20 FOR J = 1 TO 3
30 PRINT I * 10 + J;" ";
40 NEXT J
50 NEXT I
"#;
    assert_eq!(exec(s), "11 12 13 21 22 23 ");
}

#[test]
fn test_goto_out_of_for() {
    let s = r#"
10 FOR I = 1 TO 2
20 FOR J = 1 TO 3
30 PRINT I * 10 + J
40 IF J = 1 THEN 60
50 NEXT J
60 NEXT I
"#;
    assert_eq!(exec(s), "11\n21");
}

#[test]
fn test_next_without_for() {
    assert_eq!(
        exec("10 NEXT J"),
        "ERROR at line 10: NEXT WITHOUT FOR; J"
    );
}

#[test]
fn test_gosub_return() {
    let s = r#"
10 GOSUB 100
20 PRINT "BACK"
30 END
100 PRINT "SUB"
110 RETURN
"#;
    assert_eq!(exec(s), "SUB\nBACK");
}

#[test]
fn test_nested_gosub() {
    let s = r#"
10 GOSUB 100
20 PRINT "DONE"
30 END
100 PRINT "A"
110 GOSUB 200
120 PRINT "C"
130 RETURN
200 PRINT "B"
210 RETURN
"#;
    assert_eq!(exec(s), "A\nB\nC\nDONE");
}

#[test]
fn test_return_without_gosub() {
    assert_eq!(
        exec("10 RETURN"),
        "ERROR at line 10: RETURN WITHOUT GOSUB"
    );
}

#[test]
fn test_gosub_undefined_line() {
    let mut r = interpreter("10 GOSUB 99\n20 END");
    r.run();
    assert_eq!(
        r.console(),
        &["ERROR at line 10: UNDEFINED LINE; 99".to_string()]
    );
    assert!(r.state().call_stack.is_empty());
}

#[test]
fn test_read_data_restore() {
    let s = r#"
10 READ A, B$
20 PRINT A; B$
30 RESTORE
40 READ C
50 PRINT C
60 DATA 7, "SEVEN"
"#;
    assert_eq!(exec(s), "7SEVEN\n7");
}

#[test]
fn test_data_spans_lines() {
    let s = r#"
10 DATA 1, 2
20 FOR I = 1 TO 3
30 READ X
40 PRINT X;
50 NEXT I
60 DATA -3
"#;
    assert_eq!(exec(s), "12-3");
}

#[test]
fn test_out_of_data() {
    assert_eq!(
        exec("10 DATA 1\n20 READ A, B"),
        "ERROR at line 20: OUT OF DATA"
    );
}

#[test]
fn test_read_type_mismatch() {
    assert_eq!(
        exec("10 DATA \"X\"\n20 READ A"),
        "ERROR at line 20: TYPE MISMATCH; A"
    );
}

#[test]
fn test_rem_is_skipped() {
    assert_eq!(exec("10 REM PRINT 1\n20 PRINT 2"), "2");
}

#[test]
fn test_string_assignment_mismatch() {
    assert_eq!(
        exec("10 LET A$ = 1"),
        "ERROR at line 10: TYPE MISMATCH; A$"
    );
}

#[test]
fn test_lines_run_in_number_order() {
    assert_eq!(exec("20 PRINT 2\n10 PRINT 1"), "1\n2");
}

#[test]
fn test_error_halts() {
    let s = r#"
10 PRINT 1
20 PRINT 1 / 0
30 PRINT 3
"#;
    assert_eq!(exec(s), "1\nERROR at line 20: DIVISION BY ZERO");
}
