//! Iteration over the valid value of a [`Validated`].
//!
//! A `Validated` yields its value once when valid and nothing when invalid,
//! the same way an `Option` does, so the iterators are `Option`'s own.
use crate::validated::core::Validated;

/// Borrowing iterator over the valid value.
pub type Iter<'a, A> = core::option::IntoIter<&'a A>;

/// Mutably borrowing iterator over the valid value.
pub type IterMut<'a, A> = core::option::IntoIter<&'a mut A>;

/// Owning iterator over the valid value.
pub type IntoIter<A> = core::option::IntoIter<A>;

impl<E, A> Validated<E, A> {
    /// Iterates over the valid value; yields nothing when invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Validated;
    ///
    /// assert_eq!(Validated::<&str, i32>::ok(2).iter().sum::<i32>(), 2);
    /// assert_eq!(Validated::<&str, i32>::error("bad").iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, A> {
        self.value().into_iter()
    }

    /// Mutably iterates over the valid value; yields nothing when invalid.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
        .into_iter()
    }
}

impl<E, A> IntoIterator for Validated<E, A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}

impl<'a, E, A> IntoIterator for &'a Validated<E, A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E, A> IntoIterator for &'a mut Validated<E, A> {
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
