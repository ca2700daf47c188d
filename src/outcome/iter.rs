//! Zero-or-one iteration: `Ok` yields its value once, `Err` yields nothing.

use crate::outcome::Outcome;

pub struct Iter<'a, V> {
    inner: Option<&'a V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> core::iter::FusedIterator for Iter<'_, V> {}

pub struct IterMut<'a, V> {
    inner: Option<&'a mut V>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}
impl<V> core::iter::FusedIterator for IterMut<'_, V> {}

pub struct IntoIter<V> {
    inner: Option<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
impl<V> core::iter::FusedIterator for IntoIter<V> {}

impl<V, E> IntoIterator for Outcome<V, E> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

impl<'a, V, E> IntoIterator for &'a Outcome<V, E> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V, E> IntoIterator for &'a mut Outcome<V, E> {
    type Item = &'a mut V;
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<V, E> Outcome<V, E> {
    /// Iterates over the success value, if any.
    ///
    /// Borrowing, so iteration is restartable: a fresh `iter` re-yields the
    /// stored value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rz = Outcome::<i32, String>::ok(3);
    /// assert_eq!(rz.iter().count(), 1);
    /// assert_eq!(rz.iter().copied().collect::<Vec<_>>(), vec![3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        match self {
            Outcome::Ok(value) => Iter { inner: Some(value) },
            _ => Iter { inner: None },
        }
    }

    /// Mutable counterpart of [`iter`](Self::iter).
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        match self {
            Outcome::Ok(value) => IterMut { inner: Some(value) },
            _ => IterMut { inner: None },
        }
    }
}
