//! The operand stack.
//!
//! Values live in an owning `Vec` with the top of the stack at the end, so
//! push and pop are amortized O(1) and the element count can never disagree
//! with the presence of a top element.

use crate::{Value, format::format_general};
use core::fmt;
use std::io::{self, Write};

/// Width of the value column in the stack display box.
const DISPLAY_WIDTH: usize = 12;

/// Significant digits shown per value in the stack display box.
const DISPLAY_PRECISION: usize = 5;

/// A LIFO stack of numeric values.
///
/// Reading a value from an empty stack is a contract violation: the evaluator
/// checks the depth before every operation, so [`Stack::pop`] and
/// [`Stack::peek`] panic instead of returning an error.
///
/// # Examples
///
/// ```
/// use rpncalc_core::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1.0);
/// stack.push(2.0);
/// assert_eq!(stack.pop(), 2.0);
/// assert_eq!(stack.peek(), 1.0);
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack {
    /// Bottom-to-top storage; the last element is the top of the stack.
    items: Vec<Value>,
}

/// A full copy of a stack's contents, taken so a failed evaluation can put
/// the stack back exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    items: Vec<Value>,
}

impl Snapshot {
    /// Number of values captured.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Stack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Pushes a value as the new top.
    #[inline]
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Removes and returns the top value.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty. Callers must check [`Stack::len`] first.
    #[inline]
    pub fn pop(&mut self) -> Value {
        match self.items.pop() {
            Some(value) => value,
            None => panic!("Stack::pop: cannot pop empty stack"),
        }
    }

    /// Returns the top value without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Value {
        match self.items.last() {
            Some(value) => *value,
            None => panic!("Stack::peek: cannot peek empty stack"),
        }
    }

    /// Number of values on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replaces the contents of this stack with a value-for-value copy of
    /// `source`, preserving order. Whatever this stack held before is lost.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpncalc_core::Stack;
    ///
    /// let source: Stack = [1.0, 2.0].into_iter().collect();
    /// let mut target: Stack = [9.0].into_iter().collect();
    /// target.duplicate(&source);
    /// assert_eq!(target, source);
    /// ```
    pub fn duplicate(&mut self, source: &Stack) {
        self.items.clone_from(&source.items);
    }

    /// Copies the current contents for a later [`Stack::restore`].
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            items: self.items.clone(),
        }
    }

    /// Replaces the contents of this stack with a snapshot, consuming it.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.items = snapshot.items;
    }

    /// Iterates the values from top to bottom.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Value> + '_ {
        self.items.iter().rev().copied()
    }

    /// Writes the stack display box to `out`, top of stack first.
    pub fn print_to(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Writes the stack display box to stderr.
    pub fn print(&self) {
        // A broken diagnostic stream is not worth failing an evaluation over.
        self.print_to(&mut io::stderr()).ok();
    }
}

impl FromIterator<Value> for Stack {
    /// Builds a stack by pushing the values in iteration order, so the last
    /// value becomes the top.
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Value> for Stack {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl core::ops::Index<usize> for Stack {
    type Output = Value;

    /// Indexes the stack from the top: `stack[0]` is the top value.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    fn index(&self, index: usize) -> &Self::Output {
        let len = self.items.len();
        assert!(
            index < len,
            "Stack index out of bounds: index {} but stack has {} elements",
            index,
            len
        );
        &self.items[len - 1 - index]
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(DISPLAY_WIDTH + 2);
        writeln!(f, ".{border}.")?;
        for value in self.iter() {
            writeln!(
                f,
                "[ {:>width$} ]",
                format_general(value, DISPLAY_PRECISION),
                width = DISPLAY_WIDTH
            )?;
        }
        writeln!(f, "'{border}'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_stack() {
        let stack = Stack::new();
        assert_eq!(stack.len(), 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_pop() {
        let mut stack = Stack::new();
        stack.push(1.0);
        stack.push(2.0);
        stack.push(3.0);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), 3.0);
        assert_eq!(stack.pop(), 2.0);
        assert_eq!(stack.pop(), 1.0);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_returns_reverse_push_order() {
        let mut stack = Stack::new();
        let values: Vec<Value> = (0..1000).map(|i| i as Value * 0.5).collect();
        for value in &values {
            stack.push(*value);
        }

        let popped: Vec<Value> = (0..values.len()).map(|_| stack.pop()).collect();
        let expected: Vec<Value> = values.into_iter().rev().collect();
        assert_eq!(popped, expected);
    }

    #[test]
    fn test_peek() {
        let mut stack = Stack::new();
        stack.push(42.0);
        assert_eq!(stack.peek(), 42.0);
        assert_eq!(stack.len(), 1); // Peek doesn't remove

        stack.push(17.0);
        assert_eq!(stack.peek(), 17.0);
    }

    #[test]
    #[should_panic(expected = "cannot pop empty stack")]
    fn test_pop_empty_panics() {
        Stack::new().pop();
    }

    #[test]
    #[should_panic(expected = "cannot peek empty stack")]
    fn test_peek_empty_panics() {
        Stack::new().peek();
    }

    #[test]
    fn test_clear() {
        let mut stack: Stack = [1.0, 2.0, 3.0].into_iter().collect();
        stack.clear();
        assert_eq!(stack.len(), 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_duplicate_discards_previous_contents() {
        let source: Stack = [1.0, 2.0, 3.0].into_iter().collect();
        let mut target: Stack = [7.0, 8.0].into_iter().collect();

        target.duplicate(&source);
        assert_eq!(target.iter().collect::<Vec<_>>(), vec![3.0, 2.0, 1.0]);

        // The copy is independent of the source.
        target.push(4.0);
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn test_duplicate_empty_source() {
        let mut target: Stack = [7.0].into_iter().collect();
        target.duplicate(&Stack::new());
        assert!(target.is_empty());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut stack: Stack = [1.0, 2.0].into_iter().collect();
        let snapshot = stack.snapshot();
        assert_eq!(snapshot.len(), 2);

        stack.pop();
        stack.push(10.0);
        stack.push(20.0);
        stack.restore(snapshot);

        assert_eq!(stack, Stack::from_iter([1.0, 2.0]));
    }

    #[test]
    fn test_index_from_top() {
        let stack: Stack = [10.0, 20.0, 30.0].into_iter().collect();
        assert_eq!(stack[0], 30.0);
        assert_eq!(stack[1], 20.0);
        assert_eq!(stack[2], 10.0);
    }

    #[test]
    #[should_panic(expected = "Stack index out of bounds")]
    fn test_index_out_of_bounds() {
        let stack: Stack = [10.0].into_iter().collect();
        let _ = stack[1];
    }

    #[test]
    fn test_display_box() {
        let stack: Stack = [1.0, 2.5, 123456.0].into_iter().collect();
        let expected = concat!(
            ".--------------.\n",
            "[   1.2346e+05 ]\n",
            "[          2.5 ]\n",
            "[            1 ]\n",
            "'--------------'\n",
        );
        assert_eq!(stack.to_string(), expected);
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(
            Stack::new().to_string(),
            ".--------------.\n'--------------'\n"
        );
    }

    #[test]
    fn test_print_to_writer() {
        let stack: Stack = [3.0].into_iter().collect();
        let mut out = Vec::new();
        stack.print_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ".--------------.\n[            3 ]\n'--------------'\n"
        );
    }
}
