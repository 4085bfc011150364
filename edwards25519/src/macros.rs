//! Internal macros.

/// Derive the owned and mixed-borrow variants of a binary operator from its
/// `&LHS op &RHS` implementation.
macro_rules! define_binop_variants {
    ($trait:ident, $method:ident, LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        impl<'b> $trait<&'b $rhs> for $lhs {
            type Output = $out;

            fn $method(self, rhs: &'b $rhs) -> $out {
                $trait::$method(&self, rhs)
            }
        }

        impl<'a> $trait<$rhs> for &'a $lhs {
            type Output = $out;

            fn $method(self, rhs: $rhs) -> $out {
                $trait::$method(self, &rhs)
            }
        }

        impl $trait<$rhs> for $lhs {
            type Output = $out;

            fn $method(self, rhs: $rhs) -> $out {
                $trait::$method(&self, &rhs)
            }
        }
    };
}

/// Derive `OpAssign<RHS>` and `OpAssign<&RHS>` from `&LHS op &RHS`.
macro_rules! define_assign_variants {
    ($trait:ident, $method:ident, $op:tt, LHS = $lhs:ty, RHS = $rhs:ty) => {
        impl<'b> $trait<&'b $rhs> for $lhs {
            fn $method(&mut self, rhs: &'b $rhs) {
                *self = &*self $op rhs;
            }
        }

        impl $trait<$rhs> for $lhs {
            fn $method(&mut self, rhs: $rhs) {
                *self = &*self $op &rhs;
            }
        }
    };
}
