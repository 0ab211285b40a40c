//! # Dartmouth BASIC
//!
//! The BASIC programming language as it was in 1964, with an interpreter
//! that can be driven one statement at a time and inspected in between.
//!
//! Source text is turned into a [`ProgramNode`](lang::ast::ProgramNode) by
//! [`lang::parse_program`], then executed by a [`mach::Interpreter`].
//!
//! ```
//! use basic::lang::parse_program;
//! use basic::mach::{Event, Interpreter};
//!
//! let program = parse_program("10 FOR I = 1 TO 3\n20 PRINT I;\n30 NEXT I\n").unwrap();
//! let mut interpreter = Interpreter::new(program);
//! assert_eq!(interpreter.run(), Event::Finished);
//! assert_eq!(interpreter.console(), &["123".to_string()]);
//! ```
//!
//! Lines may be stepped through instead, with the state inspected after
//! each one.
//! ```
//! use basic::lang::parse_program;
//! use basic::mach::{Event, Interpreter, Val};
//!
//! let program = parse_program("10 DIM A(3)\n20 LET A(2) = 7\n").unwrap();
//! let mut interpreter = Interpreter::new(program);
//! interpreter.step();
//! interpreter.step();
//! let snapshot = interpreter.state();
//! assert_eq!(snapshot.element("A", &[2]), Some(Val::Number(7.0)));
//! assert_eq!(interpreter.step(), Event::Finished);
//! ```

pub mod lang;
pub mod mach;
