use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

/// ## Operators
///
/// Arithmetic is numbers only. Comparisons take two numbers or two
/// strings and produce 1 or 0. Logical operators use truthiness and always
/// receive both operands already evaluated.

pub struct Operation {}

impl Operation {
    pub fn negate(val: Val) -> Result<Val> {
        match val {
            Val::Number(n) => Ok(Val::Number(-n)),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn not(val: Val) -> Result<Val> {
        Ok(Val::from_bool(!val.is_truthy()))
    }

    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        if l == 0.0 && r < 0.0 {
            return Err(error!(DivisionByZero));
        }
        Val::finite(l.powf(r))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Val::finite(l * r)
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Val::finite(l / r)
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Val::finite(l + r)
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Val::finite(l - r)
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::compare(lhs, rhs)? == Ordering::Equal))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::compare(lhs, rhs)? != Ordering::Equal))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::compare(lhs, rhs)? == Ordering::Less))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::compare(lhs, rhs)? != Ordering::Greater))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::compare(lhs, rhs)? == Ordering::Greater))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::compare(lhs, rhs)? != Ordering::Less))
    }

    pub fn and(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(lhs.is_truthy() && rhs.is_truthy()))
    }

    pub fn or(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(lhs.is_truthy() || rhs.is_truthy()))
    }

    fn numbers(lhs: Val, rhs: Val) -> Result<(f64, f64)> {
        match (lhs, rhs) {
            (Val::Number(l), Val::Number(r)) => Ok((l, r)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    fn compare(lhs: Val, rhs: Val) -> Result<Ordering> {
        match (lhs, rhs) {
            // Values are always finite so partial_cmp never fails.
            (Val::Number(l), Val::Number(r)) => Ok(l.partial_cmp(&r).unwrap_or(Ordering::Equal)),
            (Val::String(l), Val::String(r)) => Ok(l.cmp(&r)),
            _ => Err(error!(TypeMismatch)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn n(v: f64) -> Val {
        Val::Number(v)
    }

    fn s(v: &str) -> Val {
        Val::String(v.to_string())
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Operation::sum(n(2.0), n(3.0)), Ok(n(5.0)));
        assert_eq!(Operation::subtract(n(2.0), n(3.0)), Ok(n(-1.0)));
        assert_eq!(Operation::multiply(n(2.0), n(3.0)), Ok(n(6.0)));
        assert_eq!(Operation::divide(n(3.0), n(2.0)), Ok(n(1.5)));
        assert_eq!(Operation::power(n(2.0), n(10.0)), Ok(n(1024.0)));
    }

    #[test]
    fn test_division_by_zero() {
        let e = Operation::divide(n(1.0), n(0.0)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DivisionByZero);
        let e = Operation::power(n(0.0), n(-1.0)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DivisionByZero);
    }

    #[test]
    fn test_strings_are_not_arithmetic() {
        let e = Operation::sum(s("A"), s("B")).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch);
        let e = Operation::negate(s("A")).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(Operation::less(n(1.0), n(2.0)), Ok(n(1.0)));
        assert_eq!(Operation::greater_equal(n(1.0), n(2.0)), Ok(n(0.0)));
        assert_eq!(Operation::equal(s("ABC"), s("ABC")), Ok(n(1.0)));
        assert_eq!(Operation::less(s("ABC"), s("ABD")), Ok(n(1.0)));
        let e = Operation::equal(s("1"), n(1.0)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_logic() {
        assert_eq!(Operation::and(n(2.0), s("X")), Ok(n(1.0)));
        assert_eq!(Operation::and(n(2.0), s("")), Ok(n(0.0)));
        assert_eq!(Operation::or(n(0.0), n(-1.0)), Ok(n(1.0)));
        assert_eq!(Operation::not(n(0.0)), Ok(n(1.0)));
        assert_eq!(Operation::not(s("X")), Ok(n(0.0)));
    }

    #[test]
    fn test_overflow() {
        let e = Operation::multiply(n(1e300), n(1e300)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::Overflow);
    }
}
