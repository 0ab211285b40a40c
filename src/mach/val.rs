use crate::error;
use crate::lang::Error;
use serde::Serialize;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime value

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Val {
    Number(f64),
    String(String),
}

impl Val {
    /// Wrap an arithmetic result, rejecting infinities and NaN.
    pub fn finite(n: f64) -> Result<Val> {
        if n.is_finite() {
            Ok(Val::Number(n))
        } else if n.is_nan() {
            Err(error!(DomainError))
        } else {
            Err(error!(Overflow))
        }
    }

    /// Nonzero numbers and nonempty strings are true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Val::Number(n) => *n != 0.0,
            Val::String(s) => !s.is_empty(),
        }
    }

    pub fn from_bool(b: bool) -> Val {
        Val::Number(if b { 1.0 } else { 0.0 })
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::String(s) => write!(f, "{}", s),
            Val::Number(n) => write!(f, "{}", format_number(*n)),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }
    let s = format!("{:.6}", n);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

impl TryFrom<Val> for f64 {
    type Error = Error;
    fn try_from(val: Val) -> std::result::Result<Self, Self::Error> {
        match val {
            Val::Number(n) => Ok(n),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }
}

impl TryFrom<&Val> for f64 {
    type Error = Error;
    fn try_from(val: &Val) -> std::result::Result<Self, Self::Error> {
        match val {
            Val::Number(n) => Ok(*n),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }
}
