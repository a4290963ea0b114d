//! Shared test fixture: a small pattern lattice over tagged runtime values.
//!
//! `EvenInt` and `PositiveInt` are runtime predicates rather than type tests:
//! mutually incomparable, both below `Int`, and both admitting `Val::Int(4)`.

#![allow(dead_code)]

use std::fmt;

use multidispatch::{TupleSignature, TypePattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ty {
    Int,
    Float,
    Number,
    Any,
    EvenInt,
    PositiveInt,
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Val {
    Int(i64),
    Float(f64),
}

impl TypePattern for Ty {
    type Value = Val;

    fn admits(&self, value: &Val) -> bool {
        match self {
            Ty::Int => matches!(value, Val::Int(_)),
            Ty::Float => matches!(value, Val::Float(_)),
            Ty::Number => matches!(value, Val::Int(_) | Val::Float(_)),
            Ty::Any => true,
            Ty::EvenInt => matches!(value, Val::Int(n) if n % 2 == 0),
            Ty::PositiveInt => matches!(value, Val::Int(n) if *n > 0),
        }
    }

    fn generalizes(&self, other: &Ty) -> bool {
        use Ty::*;
        if self == other {
            return true;
        }
        match (self, other) {
            (Any, _) => true,
            (Number, Int | Float | EvenInt | PositiveInt) => true,
            (Int, EvenInt | PositiveInt) => true,
            _ => false,
        }
    }
}

pub type Sig = TupleSignature<Ty, &'static str, Ty>;

pub fn sig(params: Vec<Ty>, name: &'static str) -> Sig {
    TupleSignature::new(params, name, Ty::Any)
}
