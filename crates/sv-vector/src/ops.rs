//! Arithmetic intrinsics
//!
//! Lane semantics follow shader `uint` arithmetic: add, subtract and
//! multiply wrap, and a zero divisor yields `u32::MAX` for both quotient
//! and remainder. No operation panics.

use std::fmt;

/// Element-wise binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Rem,
    ];

    /// Operator token in shader source
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
        }
    }

    /// Apply the operator to a single lane
    #[inline]
    pub const fn apply(self, lhs: u32, rhs: u32) -> u32 {
        match self {
            BinaryOp::Add => lhs.wrapping_add(rhs),
            BinaryOp::Sub => lhs.wrapping_sub(rhs),
            BinaryOp::Mul => lhs.wrapping_mul(rhs),
            BinaryOp::Div => match lhs.checked_div(rhs) {
                Some(q) => q,
                None => u32::MAX,
            },
            BinaryOp::Rem => match lhs.checked_rem(rhs) {
                Some(r) => r,
                None => u32::MAX,
            },
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Implements an operator trait, its scalar form and its assigning form
/// for a vector type in terms of [`BinaryOp`].
macro_rules! impl_binary_op {
    ($name:ident, $op:ident, $tr:ident, $method:ident, $tr_assign:ident, $method_assign:ident) => {
        impl std::ops::$tr for $name {
            type Output = $name;

            #[inline]
            fn $method(self, rhs: $name) -> $name {
                self.map2(rhs, $crate::ops::BinaryOp::$op)
            }
        }

        impl std::ops::$tr<u32> for $name {
            type Output = $name;

            #[inline]
            fn $method(self, rhs: u32) -> $name {
                self.map2($name::splat(rhs), $crate::ops::BinaryOp::$op)
            }
        }

        impl std::ops::$tr_assign for $name {
            #[inline]
            fn $method_assign(&mut self, rhs: $name) {
                *self = self.map2(rhs, $crate::ops::BinaryOp::$op);
            }
        }

        impl std::ops::$tr_assign<u32> for $name {
            #[inline]
            fn $method_assign(&mut self, rhs: u32) {
                *self = self.map2($name::splat(rhs), $crate::ops::BinaryOp::$op);
            }
        }
    };
}

pub(crate) use impl_binary_op;
