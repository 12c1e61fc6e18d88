//! Type bounds and checked coercion.
//!
//! Sorting and aggregation are expressed as trait bounds, so unsupported
//! element types are rejected by the compiler. [`coerce`] remains for the
//! rare caller that really holds a value of unknown concrete type.

use std::any::{Any, type_name};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};

/// Element types with a total order usable by the sort helpers.
///
/// Floats order by [`f64::total_cmp`], so NaN sorts after every other value
/// instead of poisoning the comparison.
pub trait Sortable {
    /// Compares two values.
    fn sort_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! sortable_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sortable for $t {
                fn sort_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

sortable_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String,
);

impl Sortable for f32 {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Sortable for f64 {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Sortable for &str {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// Reinterprets `value` as `V`.
///
/// # Errors
///
/// Returns a type mismatch error naming both types when the runtime type of
/// `value` is not `V`. The error points at the caller.
#[track_caller]
pub fn coerce<I: Any, V: Any>(value: I) -> Result<V> {
    let boxed: Box<dyn Any> = Box::new(value);
    match boxed.downcast::<V>() {
        Ok(v) => Ok(*v),
        Err(_) => Err(Error::type_mismatch(type_name::<V>(), type_name::<I>())),
    }
}

/// Borrowing form of [`coerce`].
///
/// # Errors
///
/// Returns a type mismatch error when `value` is not a `V`.
#[track_caller]
pub fn coerce_ref<I: Any, V: Any>(value: &I) -> Result<&V> {
    let any: &dyn Any = value;
    match any.downcast_ref::<V>() {
        Some(v) => Ok(v),
        None => Err(Error::type_mismatch(type_name::<V>(), type_name::<I>())),
    }
}

/// Values that have a recognizable "blank" state.
pub trait Blank {
    /// Returns true for the zero value of the type.
    fn is_blank(&self) -> bool;
}

macro_rules! blank_zero {
    ($($t:ty),* $(,)?) => {
        $(
            impl Blank for $t {
                fn is_blank(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

blank_zero!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Blank for f32 {
    fn is_blank(&self) -> bool {
        *self == 0.0
    }
}

impl Blank for f64 {
    fn is_blank(&self) -> bool {
        *self == 0.0
    }
}

impl Blank for bool {
    fn is_blank(&self) -> bool {
        !*self
    }
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.is_none()
    }
}

impl<T> Blank for [T] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Blank for HashMap<K, V, S> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Blank for BTreeMap<K, V> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

/// Returns true if `value` is blank.
#[must_use]
pub fn is_empty<T: Blank + ?Sized>(value: &T) -> bool {
    value.is_blank()
}

/// Returns true if `value` is not blank.
#[must_use]
pub fn is_not_empty<T: Blank + ?Sized>(value: &T) -> bool {
    !value.is_blank()
}
