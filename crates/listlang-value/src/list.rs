//! The listlang integer list
//!
//! Lists own their elements outright. Every operation that yields a list
//! (`slice`, `concat`, `multiply`, `remove_every`, `clone`) builds fresh
//! storage, so results never alias their operands.

use crate::IndexError;
use std::collections::{VecDeque, vec_deque};
use std::fmt;
use std::io::{self, Write};
use std::ops::{Add, Mul};

/// Ordered, mutable sequence of integers with list-language semantics
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntegerList {
    items: VecDeque<i64>,
}

impl IntegerList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Build a list holding a copy of `seq`
    #[must_use]
    pub fn from_sequence(seq: &[i64]) -> Self {
        Self {
            items: seq.iter().copied().collect(),
        }
    }

    pub fn add_first(&mut self, n: i64) {
        self.items.push_front(n);
    }

    pub fn add_last(&mut self, n: i64) {
        self.items.push_back(n);
    }

    /// Remove the element at `index` and return it
    ///
    /// # Errors
    ///
    /// Returns `IndexError` if `index` is outside `[0, len)`
    pub fn remove_at(&mut self, index: i64) -> Result<i64, IndexError> {
        let position = self.checked_index(index)?;
        self.items
            .remove(position)
            .ok_or_else(|| IndexError::out_of_range(index, self.items.len()))
    }

    /// # Errors
    ///
    /// Returns `IndexError` if `index` is outside `[0, len)`
    pub fn get(&self, index: i64) -> Result<i64, IndexError> {
        self.checked_index(index).map(|position| self.items[position])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empty lists are false, everything else is true
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !self.items.is_empty()
    }

    #[must_use]
    pub fn to_int(&self) -> i64 {
        i64::from(self.is_truthy())
    }

    /// Value equality as the integer the `==` operator produces
    #[must_use]
    pub fn equal(&self, other: &Self) -> i64 {
        i64::from(self == other)
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.items.iter().copied()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<i64> {
        self.items.iter().copied().collect()
    }

    /// Elements with index in `[begin, end)`
    ///
    /// # Errors
    ///
    /// Returns `IndexError` if `begin < 0`, `end > len` or `begin > end`
    pub fn slice(&self, begin: i64, end: i64) -> Result<Self, IndexError> {
        let len = self.items.len();
        let (start, stop) = usize::try_from(begin)
            .ok()
            .zip(usize::try_from(end).ok())
            .filter(|&(start, stop)| start <= stop && stop <= len)
            .ok_or_else(|| IndexError::invalid_range(begin, end, len))?;

        Ok(self.items.range(start..stop).copied().collect())
    }

    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.items.extend(other.items.iter().copied());
        result
    }

    /// `times` copies of this list back to back; non-positive counts give an empty list
    #[must_use]
    pub fn multiply(&self, times: i64) -> Self {
        let copies = usize::try_from(times).unwrap_or(0);
        if copies == 0 || self.items.is_empty() {
            return Self::new();
        }

        let mut result = Self {
            items: VecDeque::with_capacity(self.items.len().saturating_mul(copies)),
        };
        for _ in 0..copies {
            result.items.extend(self.items.iter().copied());
        }
        result
    }

    /// Copy of this list without any element equal to `n`
    #[must_use]
    pub fn remove_every(&self, n: i64) -> Self {
        self.items.iter().copied().filter(|&item| item != n).collect()
    }

    /// `++list`: prepend 0
    pub fn pre_increment(&mut self) -> &mut Self {
        self.add_first(0);
        self
    }

    /// `--list`: drop the first element
    ///
    /// # Errors
    ///
    /// Returns `IndexError` if the list is empty
    pub fn pre_decrement(&mut self) -> Result<&mut Self, IndexError> {
        self.items.pop_front().ok_or_else(IndexError::empty)?;
        Ok(self)
    }

    /// `list++`: append 0
    pub fn post_increment(&mut self) -> &mut Self {
        self.add_last(0);
        self
    }

    /// `list--`: drop the last element
    ///
    /// # Errors
    ///
    /// Returns `IndexError` if the list is empty
    pub fn post_decrement(&mut self) -> Result<&mut Self, IndexError> {
        self.items.pop_back().ok_or_else(IndexError::empty)?;
        Ok(self)
    }

    /// Write the display form to stdout without a trailing newline
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if stdout cannot be written
    pub fn print(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)?;
        stdout.flush()
    }

    /// # Errors
    ///
    /// Returns the underlying I/O error from `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")
    }

    fn checked_index(&self, index: i64) -> Result<usize, IndexError> {
        usize::try_from(index)
            .ok()
            .filter(|&position| position < self.items.len())
            .ok_or_else(|| IndexError::out_of_range(index, self.items.len()))
    }
}

impl fmt::Display for IntegerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl From<Vec<i64>> for IntegerList {
    fn from(items: Vec<i64>) -> Self {
        Self {
            items: VecDeque::from(items),
        }
    }
}

impl From<&[i64]> for IntegerList {
    fn from(seq: &[i64]) -> Self {
        Self::from_sequence(seq)
    }
}

impl FromIterator<i64> for IntegerList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<i64> for IntegerList {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for IntegerList {
    type Item = i64;
    type IntoIter = vec_deque::IntoIter<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntegerList {
    type Item = &'a i64;
    type IntoIter = vec_deque::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Add for &IntegerList {
    type Output = IntegerList;

    fn add(self, other: Self) -> IntegerList {
        self.concat(other)
    }
}

impl Mul<i64> for &IntegerList {
    type Output = IntegerList;

    fn mul(self, times: i64) -> IntegerList {
        self.multiply(times)
    }
}
