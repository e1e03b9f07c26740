//! Single-method function shapes.
//!
//! Each contract has a blanket impl over the matching closure type, so a
//! closure literal bound to a variable is already an implementation.

use crate::utils::error::Result;

/// Takes nothing, returns nothing but the outcome of its side effect.
pub trait EmptyFunction {
    fn run(&mut self) -> Result<()>;
}

impl<F> EmptyFunction for F
where
    F: FnMut() -> Result<()>,
{
    fn run(&mut self) -> Result<()> {
        self()
    }
}

/// Takes one text value, returns one text value.
pub trait StringFunction {
    fn transform(&self, input: &str) -> String;
}

impl<F> StringFunction for F
where
    F: Fn(&str) -> String,
{
    fn transform(&self, input: &str) -> String {
        self(input)
    }
}

/// Takes two integers, returns one integer.
pub trait DualFunction {
    fn combine(&self, a: i32, b: i32) -> i32;
}

impl<F> DualFunction for F
where
    F: Fn(i32, i32) -> i32,
{
    fn combine(&self, a: i32, b: i32) -> i32 {
        self(a, b)
    }
}

/// Accepts one decimal value per call.
pub trait Consumer {
    fn accept(&mut self, value: f64) -> Result<()>;
}

impl<F> Consumer for F
where
    F: FnMut(f64) -> Result<()>,
{
    fn accept(&mut self, value: f64) -> Result<()> {
        self(value)
    }
}
