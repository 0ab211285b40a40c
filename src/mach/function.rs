use super::Val;
use crate::error;
use crate::lang;
use crate::lang::Error;
use rand::Rng;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Built-in functions

pub struct Function {}

impl Function {
    pub fn call<R: Rng>(function: lang::Function, val: Val, rng: &mut R) -> Result<Val> {
        use lang::Function::*;
        match function {
            Abs => Function::abs(val),
            Sqr => Function::sqr(val),
            Int => Function::int(val),
            Sgn => Function::sgn(val),
            Sin => Function::sin(val),
            Cos => Function::cos(val),
            Atn => Function::atn(val),
            Exp => Function::exp(val),
            Log => Function::log(val),
            Rnd => Ok(Function::rnd(rng)),
            Tab => Function::tab(val),
        }
    }

    pub fn abs(val: Val) -> Result<Val> {
        Ok(Val::Number(f64::try_from(val)?.abs()))
    }

    pub fn sqr(val: Val) -> Result<Val> {
        let n = f64::try_from(val)?;
        if n < 0.0 {
            return Err(error!(DomainError; "SQR OF NEGATIVE NUMBER"));
        }
        Ok(Val::Number(n.sqrt()))
    }

    pub fn int(val: Val) -> Result<Val> {
        Ok(Val::Number(f64::try_from(val)?.floor()))
    }

    pub fn sgn(val: Val) -> Result<Val> {
        let n = f64::try_from(val)?;
        Ok(Val::Number(if n > 0.0 {
            1.0
        } else if n < 0.0 {
            -1.0
        } else {
            0.0
        }))
    }

    pub fn sin(val: Val) -> Result<Val> {
        Ok(Val::Number(f64::try_from(val)?.sin()))
    }

    pub fn cos(val: Val) -> Result<Val> {
        Ok(Val::Number(f64::try_from(val)?.cos()))
    }

    pub fn atn(val: Val) -> Result<Val> {
        Ok(Val::Number(f64::try_from(val)?.atan()))
    }

    pub fn exp(val: Val) -> Result<Val> {
        Val::finite(f64::try_from(val)?.exp())
    }

    pub fn log(val: Val) -> Result<Val> {
        let n = f64::try_from(val)?;
        if n <= 0.0 {
            return Err(error!(DomainError; "LOG OF NON-POSITIVE NUMBER"));
        }
        Ok(Val::Number(n.ln()))
    }

    /// The argument is ignored; the result is in [0, 1).
    pub fn rnd<R: Rng>(rng: &mut R) -> Val {
        Val::Number(rng.gen::<f64>())
    }

    /// Only a column hint for PRINT; evaluates to its argument.
    pub fn tab(val: Val) -> Result<Val> {
        Ok(Val::Number(f64::try_from(val)?))
    }
}
