//! # Stack
//!
//! A last-in-first-out container backed by a `Vec`.
//!
//! `pop` and `peek` on an empty stack are programmer errors and come back as
//! [`StackError::Empty`] rather than `None`, so callers propagate them with `?`.
//!
//! ```rust
//! use storefront_core::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.size(), 1);
//! ```

use crate::error::StackError;

/// LIFO stack. Not shared between threads; all mutation goes through `&mut`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Puts `item` on top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Empty)
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items currently on the stack.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_grows_size() {
        let mut stack = Stack::new();
        stack.push(1);
        assert_eq!(stack.size(), 1);
    }

    #[test]
    fn test_pop_returns_top_item() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);

        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.size(), 1);
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_on_empty_stack_fails() {
        let mut stack: Stack<i32> = Stack::new();
        let err = stack.pop().unwrap_err();
        assert!(err.to_string().to_lowercase().contains("empty"));
    }

    #[test]
    fn test_peek_returns_top_without_removing() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);

        assert_eq!(stack.peek(), Ok(&2));
        assert_eq!(stack.size(), 2);
    }

    #[test]
    fn test_peek_on_empty_stack_fails() {
        let stack: Stack<i32> = Stack::new();
        assert_eq!(stack.peek(), Err(StackError::Empty));
    }

    #[test]
    fn test_is_empty() {
        let mut stack = Stack::default();
        assert!(stack.is_empty());
        assert_eq!(stack.size(), 0);

        stack.push("a");
        assert!(!stack.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.clear();

        assert_eq!(stack.size(), 0);
        assert!(stack.pop().is_err());
    }

    #[test]
    fn test_owned_values() {
        let mut stack = Stack::new();
        stack.push(String::from("first"));
        stack.push(String::from("second"));

        let top = stack.pop().unwrap();
        assert_eq!(top, "second");
        assert_eq!(stack.peek().map(String::as_str), Ok("first"));
    }
}
