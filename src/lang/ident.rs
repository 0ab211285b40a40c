// Used in Token, Cst and Ast

use serde::{Deserialize, Serialize};

/// A variable name. A trailing `$` makes it a string variable.
#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ident {
    Plain(String),
    String(String),
}

impl Ident {
    pub fn from_name(name: &str) -> Ident {
        let name = name.to_ascii_uppercase();
        if name.ends_with('$') {
            Ident::String(name)
        } else {
            Ident::Plain(name)
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Ident::Plain(s) | Ident::String(s) => s,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Ident::String(_))
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Function {
    Abs,
    Sqr,
    Int,
    Sgn,
    Sin,
    Cos,
    Atn,
    Exp,
    Log,
    Rnd,
    Tab,
}

impl Function {
    pub const ALL: [Function; 11] = [
        Function::Abs,
        Function::Sqr,
        Function::Int,
        Function::Sgn,
        Function::Sin,
        Function::Cos,
        Function::Atn,
        Function::Exp,
        Function::Log,
        Function::Rnd,
        Function::Tab,
    ];
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Function::*;
        match self {
            Abs => write!(f, "ABS"),
            Sqr => write!(f, "SQR"),
            Int => write!(f, "INT"),
            Sgn => write!(f, "SGN"),
            Sin => write!(f, "SIN"),
            Cos => write!(f, "COS"),
            Atn => write!(f, "ATN"),
            Exp => write!(f, "EXP"),
            Log => write!(f, "LOG"),
            Rnd => write!(f, "RND"),
            Tab => write!(f, "TAB"),
        }
    }
}
