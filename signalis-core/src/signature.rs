//! # Slot Call Contract
//!
//! A signal stores its slots as boxed trait objects (`Box<dyn FnMut(..) -> R>`)
//! so that free functions, closures and bound methods can sit side by side.
//! The traits here connect that erased form to concrete callables and to the
//! argument tuples passed to `invoke`.
//!
//! # Supported Shapes
//!
//! | Slot type | Argument tuple | Fan-out |
//! |---|---|---|
//! | `dyn FnMut(A1, .., An) -> R` (n = 0..=6) | `(A1, .., An)` | cloned per slot, last slot gets the original |
//! | `dyn FnMut(&T, A1, .., An) -> R` (n = 0..=5) | `(&T, A1, .., An)` | `&T` shared, the rest as above |
//! | `dyn FnMut(&mut T, A1, .., An) -> R` (n = 0..=5) | `(&mut T, A1, .., An)` | `&mut T` reborrowed so writes are visible to later slots, the rest as above |
//!
//! Only the first parameter may be an elided-lifetime reference. A signature
//! such as `dyn FnMut(&mut State, &Event)` is not covered; pass the event by
//! value or as `&'static`.
//!
//! By-value arguments that are not `Clone` cannot be handed to more than one
//! slot. Signals expose `invoke_with` for that case, where the caller builds a
//! fresh value for each slot.

#![allow(coherence_leak_check)]

/// Hands one argument tuple to a slot.
///
/// Implemented for the `dyn FnMut` shapes listed in the module docs. A signal
/// calls [`forward`](Signature::forward) for every slot but the last, which
/// receives the arguments through [`consume`](Signature::consume).
#[diagnostic::on_unimplemented(
    message = "slots of type `{Self}` cannot be called with arguments `{Args}`",
    label = "argument tuple does not match the slot signature",
    note = "Pass arguments as a tuple, e.g. `invoke((1, 'a'))`; by-value arguments must be `Clone`."
)]
pub trait Signature<Args> {
    /// The value each slot returns.
    type Output;

    /// Calls the slot, leaving the arguments usable for the next slot.
    fn forward(&mut self, args: &mut Args) -> Self::Output;

    /// Calls the slot, handing over ownership of the arguments.
    fn consume(&mut self, args: Args) -> Self::Output;
}

/// Conversion from a concrete callable into the boxed slot type `S`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be connected as a `{S}` slot",
    label = "callable does not match the signal signature",
    note = "Closures taking references need annotated parameters, e.g. `|x: &mut i32| ..`."
)]
pub trait IntoSlot<S: ?Sized>: Sized {
    /// Boxes the callable behind the slot trait object.
    fn into_slot(self) -> Box<S>;
}

// Every shape with a leading reference also unifies with the by-value impl of
// the same arity once its higher-ranked lifetime is ignored. rustc accepts the
// pair and reports it through `coherence_leak_check` (rust-lang/rust#56105),
// the same overlap wasm-bindgen relies on for `dyn Fn(A)` next to
// `dyn Fn(&A)`. Should that lint become a hard error, the borrowed shapes
// have to move behind their own slot types.

macro_rules! by_value {
    ($($arg:ident $idx:tt),*) => {
        #[allow(unused_variables)]
        impl<'a, $($arg: Clone,)* R> Signature<($($arg,)*)> for dyn FnMut($($arg),*) -> R + 'a {
            type Output = R;

            #[inline]
            fn forward(&mut self, args: &mut ($($arg,)*)) -> R {
                (*self)($(args.$idx.clone()),*)
            }

            #[inline]
            fn consume(&mut self, args: ($($arg,)*)) -> R {
                (*self)($(args.$idx),*)
            }
        }

        impl<'a, F, $($arg,)* R> IntoSlot<dyn FnMut($($arg),*) -> R + 'a> for F
        where
            F: FnMut($($arg),*) -> R + 'a,
        {
            fn into_slot(self) -> Box<dyn FnMut($($arg),*) -> R + 'a> {
                Box::new(self)
            }
        }
    };
}

by_value!();
by_value!(A0 0);
by_value!(A0 0, A1 1);
by_value!(A0 0, A1 1, A2 2);
by_value!(A0 0, A1 1, A2 2, A3 3);
by_value!(A0 0, A1 1, A2 2, A3 3, A4 4);
by_value!(A0 0, A1 1, A2 2, A3 3, A4 4, A5 5);

// A leading `&T` or `&mut T` is higher-ranked (`for<'r> FnMut(&'r T, ..)`),
// which the generic impls above cannot name. The remaining arguments follow
// the by-value rules.
macro_rules! borrowed {
    ($($arg:ident $idx:tt),*) => {
        impl<'a, 'b, T: ?Sized, $($arg: Clone,)* R> Signature<(&'b T, $($arg,)*)>
            for dyn FnMut(&T $(, $arg)*) -> R + 'a
        {
            type Output = R;

            #[inline]
            fn forward(&mut self, args: &mut (&'b T, $($arg,)*)) -> R {
                (*self)(args.0 $(, args.$idx.clone())*)
            }

            #[inline]
            fn consume(&mut self, args: (&'b T, $($arg,)*)) -> R {
                (*self)(args.0 $(, args.$idx)*)
            }
        }

        impl<'a, 'b, T: ?Sized, $($arg: Clone,)* R> Signature<(&'b mut T, $($arg,)*)>
            for dyn FnMut(&mut T $(, $arg)*) -> R + 'a
        {
            type Output = R;

            #[inline]
            fn forward(&mut self, args: &mut (&'b mut T, $($arg,)*)) -> R {
                (*self)(&mut *args.0 $(, args.$idx.clone())*)
            }

            #[inline]
            fn consume(&mut self, args: (&'b mut T, $($arg,)*)) -> R {
                (*self)(args.0 $(, args.$idx)*)
            }
        }

        impl<'a, F, T: ?Sized, $($arg,)* R> IntoSlot<dyn FnMut(&T $(, $arg)*) -> R + 'a> for F
        where
            F: FnMut(&T $(, $arg)*) -> R + 'a,
        {
            fn into_slot(self) -> Box<dyn FnMut(&T $(, $arg)*) -> R + 'a> {
                Box::new(self)
            }
        }

        impl<'a, F, T: ?Sized, $($arg,)* R> IntoSlot<dyn FnMut(&mut T $(, $arg)*) -> R + 'a> for F
        where
            F: FnMut(&mut T $(, $arg)*) -> R + 'a,
        {
            fn into_slot(self) -> Box<dyn FnMut(&mut T $(, $arg)*) -> R + 'a> {
                Box::new(self)
            }
        }
    };
}

borrowed!();
borrowed!(A1 1);
borrowed!(A1 1, A2 2);
borrowed!(A1 1, A2 2, A3 3);
borrowed!(A1 1, A2 2, A3 3, A4 4);
borrowed!(A1 1, A2 2, A3 3, A4 4, A5 5);

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn test_forward_clones_and_consume_moves() {
        let clones = Rc::new(Cell::new(0));

        struct Counted(Rc<Cell<usize>>);
        impl Clone for Counted {
            fn clone(&self) -> Self {
                self.0.set(self.0.get() + 1);
                Counted(self.0.clone())
            }
        }

        let mut slot: Box<dyn FnMut(Counted) -> usize> =
            IntoSlot::into_slot(|c: Counted| c.0.get());
        let mut args = (Counted(clones.clone()),);

        assert_eq!(slot.forward(&mut args), 1);
        assert_eq!(slot.consume(args), 1);
        assert_eq!(clones.get(), 1);
    }

    #[test]
    fn test_multiple_arguments() {
        let mut slot: Box<dyn FnMut(i32, char) -> String> =
            IntoSlot::into_slot(|n: i32, c: char| format!("{c}{n}"));
        assert_eq!(slot.forward(&mut (3, 'x')), "x3");
        assert_eq!(slot.consume((4, 'y')), "y4");
    }

    #[test]
    fn test_no_arguments() {
        let mut slot: Box<dyn FnMut() -> u8> = IntoSlot::into_slot(|| 9);
        assert_eq!(slot.forward(&mut ()), 9);
        assert_eq!(slot.consume(()), 9);
    }

    #[test]
    fn test_shared_reference() {
        let mut slot: Box<dyn FnMut(&str) -> usize> = IntoSlot::into_slot(|s: &str| s.len());
        let text = String::from("hello");
        assert_eq!(slot.forward(&mut (text.as_str(),)), 5);
    }

    #[test]
    fn test_mutable_reference_is_reborrowed() {
        let mut slot: Box<dyn FnMut(&mut i32)> = IntoSlot::into_slot(|x: &mut i32| *x *= 2);
        let mut value = 5;
        let mut args = (&mut value,);
        slot.forward(&mut args);
        slot.forward(&mut args);
        slot.consume(args);
        assert_eq!(value, 40);
    }

    #[test]
    fn test_mutable_reference_with_trailing_arguments() {
        let mut slot: Box<dyn FnMut(&mut Vec<String>, String, usize) -> usize> =
            IntoSlot::into_slot(|out: &mut Vec<String>, word: String, times: usize| {
                out.push(word.repeat(times));
                out.len()
            });
        let mut out = Vec::new();
        let mut args = (&mut out, String::from("ab"), 2);
        assert_eq!(slot.forward(&mut args), 1);
        assert_eq!(slot.consume(args), 2);
        assert_eq!(out, ["abab", "abab"]);
    }

    #[test]
    fn test_shared_reference_with_trailing_argument() {
        let mut slot: Box<dyn FnMut(&[i32], i32) -> bool> =
            IntoSlot::into_slot(|items: &[i32], needle: i32| items.contains(&needle));
        let items = [1, 2, 3];
        assert!(slot.forward(&mut (&items[..], 2)));
        assert!(!slot.consume((&items[..], 7)));
    }

    #[test]
    fn test_function_item() {
        fn double(x: &mut i32) {
            *x *= 2;
        }

        let mut slot: Box<dyn FnMut(&mut i32)> = IntoSlot::into_slot(double);
        let mut value = 1;
        slot.consume((&mut value,));
        assert_eq!(value, 2);
    }
}
