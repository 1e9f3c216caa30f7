use crate::error::stack_error::{OutOfMemory, Underflow};

/// Number of slots a fresh stack reserves up front.
pub const INITIAL_CAPACITY: usize = 10;

/// A growable last-in, first-out container.
///
/// The stack owns its storage exclusively and releases it when dropped, so
/// every exit path of the phase that created it frees the memory. Growth
/// doubles the capacity and uses fallible reservation: running out of memory
/// is reported as [`OutOfMemory`] instead of aborting the process.
///
/// # Example
/// ```
/// use infixcalc::interpreter::stack::Stack;
///
/// let mut stack = Stack::new().unwrap();
/// stack.push(1.0).unwrap();
/// stack.push(2.0).unwrap();
///
/// assert_eq!(stack.peek(), Some(&2.0));
/// assert_eq!(stack.pop(), Ok(2.0));
/// assert_eq!(stack.pop(), Ok(1.0));
/// assert!(stack.pop().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack with [`INITIAL_CAPACITY`] slots reserved.
    ///
    /// # Errors
    /// Returns [`OutOfMemory`] if the initial reservation fails.
    pub fn new() -> Result<Self, OutOfMemory> {
        let mut items = Vec::new();
        items.try_reserve_exact(INITIAL_CAPACITY)?;
        Ok(Self { items })
    }

    /// Pushes an item on top of the stack, doubling the capacity when full.
    ///
    /// # Errors
    /// Returns [`OutOfMemory`] if the stack is full and cannot grow. The stack
    /// is left unchanged in that case.
    pub fn push(&mut self, item: T) -> Result<(), OutOfMemory> {
        if self.items.len() == self.items.capacity() {
            self.grow()?;
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    /// Returns [`Underflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, Underflow> {
        self.items.pop().ok_or(Underflow)
    }

    /// Returns the top item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items the stack can hold before it has to grow.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Iterates from the bottom of the stack to the top, i.e. in push order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    fn grow(&mut self) -> Result<(), OutOfMemory> {
        let additional = self.items.capacity().max(INITIAL_CAPACITY);
        self.items.try_reserve_exact(additional)?;
        log::trace!("stack grew to {} slots", self.items.capacity());
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_initial_capacity() {
        let stack: Stack<u8> = Stack::new().unwrap();
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), INITIAL_CAPACITY);
    }

    #[test]
    fn doubles_when_full() {
        let mut stack = Stack::new().unwrap();
        for i in 0..INITIAL_CAPACITY {
            stack.push(i).unwrap();
        }
        assert_eq!(stack.capacity(), INITIAL_CAPACITY);

        stack.push(INITIAL_CAPACITY).unwrap();
        assert_eq!(stack.capacity(), INITIAL_CAPACITY * 2);
        assert_eq!(stack.len(), INITIAL_CAPACITY + 1);
    }

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = Stack::new().unwrap();
        for i in 0..25 {
            stack.push(i).unwrap();
        }
        for i in (0..25).rev() {
            assert_eq!(stack.pop(), Ok(i));
        }
        assert_eq!(stack.pop(), Err(Underflow));
    }

    #[test]
    fn iterates_bottom_to_top() {
        let mut stack = Stack::new().unwrap();
        stack.push('a').unwrap();
        stack.push('b').unwrap();
        stack.push('c').unwrap();

        let order: String = stack.iter().collect();
        assert_eq!(order, "abc");
        assert_eq!(stack.peek(), Some(&'c'));
    }
}
