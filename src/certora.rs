//! Formal verification rules for the calculator.

use crate::{add, divide, Error};

use cvlr::prelude::*;

/// Verifies that `add` computes the sum of two numbers that do not overflow.
#[rule]
pub fn rule_add_is_correct() {
    let x: u64 = nondet();
    let y: u64 = nondet();
    cvlr_assume!(x <= u64::MAX - y);
    let result = add(x, y);
    cvlr_assert_eq!(result, x + y);
}

#[rule]
pub fn rule_add_is_commutative() {
    let x: u64 = nondet();
    let y: u64 = nondet();
    cvlr_assume!(x <= u64::MAX - y);
    cvlr_assert_eq!(add(x, y), add(y, x));
}

#[rule]
pub fn rule_add_zero_is_identity() {
    let x: u64 = nondet();
    cvlr_assert_eq!(add(x, 0), x);
}

/// Verifies that a zero divisor is reported as an error instead of trapping.
#[rule]
pub fn rule_divide_by_zero_is_rejected() {
    let x: u64 = nondet();
    cvlr_assert!(divide(x, 0) == Err(Error::DivisionByZero));
}

#[rule]
pub fn rule_divide_by_nonzero_succeeds() {
    let x: u64 = nondet();
    let y: u64 = nondet();
    cvlr_assume!(y != 0);
    cvlr_assert!(divide(x, y).is_ok());
}
