//! The built-in operator table.
//!
//! Entries are listed in their semantic grouping, which is the order shown by
//! `--help`. Lookups go through the sorted view built in [`super::Registry`].
//!
//! For binary operators `a` is the deeper operand and `b` the one on top, so
//! `10 3 -` computes `a - b` with `a = 10`, `b = 3`.

use super::{Kernel, Operation};
use crate::Value;
use core::f64::consts;

pub(super) static CATALOG: &[Operation] = &[
    // ========================================================================
    // Stack manipulation
    // ========================================================================
    Operation {
        symbol: "swap",
        kernel: Kernel::Exchange(|a, b| (b, a)),
        description: "swap the top two values on the stack",
    },
    // ========================================================================
    // Arithmetic
    // ========================================================================
    Operation {
        symbol: "+",
        kernel: Kernel::Binary(|a, b| a + b),
        description: "add",
    },
    Operation {
        symbol: "-",
        kernel: Kernel::Binary(|a, b| a - b),
        description: "subtract the top value from the value below",
    },
    Operation {
        symbol: "*",
        kernel: Kernel::Binary(|a, b| a * b),
        description: "multiply",
    },
    Operation {
        symbol: "/",
        kernel: Kernel::Binary(|a, b| a / b),
        description: "divide the value below by the top value",
    },
    Operation {
        symbol: "//",
        kernel: Kernel::Binary(|a, b| (a / b).floor()),
        description: "integer divide: divide, then floor",
    },
    Operation {
        symbol: "%",
        kernel: Kernel::Binary(ieee_remainder),
        description: "remainder: divide, returning the remainder",
    },
    Operation {
        symbol: "^",
        kernel: Kernel::Binary(Value::powf),
        description: "power: raise value below to the power of the top",
    },
    Operation {
        symbol: "root",
        kernel: Kernel::Binary(|a, b| a.powf(1.0 / b)),
        description: "root: take value below to the root of the top",
    },
    Operation {
        symbol: "sqrt",
        kernel: Kernel::Unary(Value::sqrt),
        description: "square root",
    },
    Operation {
        symbol: "cbrt",
        kernel: Kernel::Unary(Value::cbrt),
        description: "cube root",
    },
    // ========================================================================
    // Trigonometry (radians)
    // ========================================================================
    Operation {
        symbol: "sin",
        kernel: Kernel::Unary(Value::sin),
        description: "sine",
    },
    Operation {
        symbol: "cos",
        kernel: Kernel::Unary(Value::cos),
        description: "cosine",
    },
    Operation {
        symbol: "tan",
        kernel: Kernel::Unary(Value::tan),
        description: "tangent",
    },
    Operation {
        symbol: "asin",
        kernel: Kernel::Unary(Value::asin),
        description: "inverse sine",
    },
    Operation {
        symbol: "acos",
        kernel: Kernel::Unary(Value::acos),
        description: "inverse cosine",
    },
    Operation {
        symbol: "atan",
        kernel: Kernel::Unary(Value::atan),
        description: "inverse tangent",
    },
    // ========================================================================
    // Exponentials
    // ========================================================================
    Operation {
        symbol: "exp",
        kernel: Kernel::Unary(Value::exp),
        description: "natural exponent",
    },
    Operation {
        symbol: "log",
        kernel: Kernel::Unary(Value::ln),
        description: "natural logarithm",
    },
    // ========================================================================
    // Constants
    // ========================================================================
    Operation {
        symbol: "pi",
        kernel: Kernel::Constant(|| consts::PI),
        description: "pi",
    },
    Operation {
        symbol: "e",
        kernel: Kernel::Constant(|| consts::E),
        description: "Euler's number",
    },
];

/// IEEE 754 remainder: `a - n * b` where `n` is `a / b` rounded to the
/// nearest integer, ties to even. The result lies in `[-|b|/2, |b|/2]`.
///
/// Rust's `%` truncates the quotient instead, so `7 % 4` is `3` there but
/// `-1` here.
pub(crate) fn ieee_remainder(a: Value, b: Value) -> Value {
    if a.is_nan() || b.is_nan() || a.is_infinite() || b == 0.0 {
        return Value::NAN;
    }
    if b.is_infinite() {
        return a;
    }

    let divisor = b.abs();
    // Reduce modulo 2|b| first (exact), so at most two subtractions remain.
    let mut r = if divisor <= Value::MAX / 2.0 {
        a % (2.0 * divisor)
    } else {
        a
    }
    .abs();

    if divisor < 2.0 * Value::MIN_POSITIVE {
        // Halving would lose precision on subnormal divisors.
        if r + r > divisor {
            r -= divisor;
            if r + r >= divisor {
                r -= divisor;
            }
        }
    } else {
        let half = 0.5 * divisor;
        if r > half {
            r -= divisor;
            if r >= half {
                r -= divisor;
            }
        }
    }

    if a.is_sign_negative() { -r } else { r }
}
