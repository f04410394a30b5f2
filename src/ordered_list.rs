use std::fmt;

/// An ordered sequence of integers backed by a singly-linked chain.
///
/// The list owns the first node and every node exclusively owns its
/// successor, so the chain is acyclic by construction and no node is ever
/// reachable from two lists at once. `size` caches the node count and is
/// kept in lockstep with the chain by every mutating operation.
pub struct OrderedList {
    head: Option<Box<Node>>,
    size: usize,
}

struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

impl Node {
    fn new(value: i32, next: Option<Box<Node>>) -> Node {
        Node { value, next }
    }
}

impl OrderedList {
    pub fn new() -> OrderedList {
        OrderedList {
            head: None,
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Pushes `value` onto the front of the list. O(1).
    pub fn push_front(&mut self, value: i32) {
        let new_node = Box::new(Node::new(value, self.head.take()));
        self.head = Some(new_node);
        self.size += 1;
    }

    /// Appends `value` after the current tail. O(n) tail scan.
    pub fn push_back(&mut self, value: i32) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node::new(value, None)));
        self.size += 1;
    }

    /// Splices `value` in at `index`: `insert_at(0, v)` prepends and
    /// `insert_at(len(), v)` appends. Returns false and leaves the list
    /// untouched when `index > len()`.
    pub fn insert_at(&mut self, index: usize, value: i32) -> bool {
        // Walk to the link that will own the new node; running off the
        // tail before taking `index` steps means the index is out of range.
        let mut link = &mut self.head;
        for _ in 0..index {
            link = match link {
                Some(node) => &mut node.next,
                None => return false,
            };
        }
        let rest = link.take();
        *link = Some(Box::new(Node::new(value, rest)));
        self.size += 1;
        true
    }

    /// Unlinks and drops the node at `index`, relinking its predecessor to
    /// its successor. Returns false and leaves the list untouched when
    /// `index >= len()` (which covers the empty list).
    pub fn remove_at(&mut self, index: usize) -> bool {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = match link {
                Some(node) => &mut node.next,
                None => return false,
            };
        }
        match link.take() {
            Some(node) => {
                *link = node.next;
                self.size -= 1;
                true
            }
            None => false,
        }
    }

    /// Removes the first node holding `value`, scanning head to tail; later
    /// occurrences are untouched. Returns false and leaves the list
    /// untouched when no node matches.
    pub fn remove_value(&mut self, value: i32) -> bool {
        match self.iter().position(|v| v == value) {
            Some(index) => self.remove_at(index),
            None => false,
        }
    }

    /// Returns the element at `index`.
    ///
    /// Panics when `index >= len()`. An out-of-range read is a caller bug,
    /// not a runtime condition, so unlike the mutating operations it is not
    /// reported through a return value.
    pub fn get_at(&self, index: usize) -> i32 {
        let mut current = &self.head;
        let mut remaining = index;
        while let Some(node) = current {
            if remaining == 0 {
                return node.value;
            }
            remaining -= 1;
            current = &node.next;
        }
        panic!(
            "index {} out of bounds for list of length {}",
            index, self.size
        );
    }

    pub fn contains(&self, value: i32) -> bool {
        let mut current = &self.head;
        while let Some(node) = current {
            if node.value == value {
                return true;
            }
            current = &node.next;
        }
        false
    }

    /// Drops every node and resets the list to the empty state. Safe to
    /// call on an already-empty list, and the list is reusable afterwards.
    pub fn clear(&mut self) {
        // Unlink iteratively so very long chains do not overflow the stack
        // with recursive Box drops.
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.size = 0;
    }

    /// Returns a lazy head-to-tail iterator over the elements. The list is
    /// not mutated; call again to restart the traversal.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            current: &self.head,
        }
    }
}

pub struct Iter<'a> {
    current: &'a Option<Box<Node>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.current.as_ref()?;
        self.current = &node.next;
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a OrderedList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl Default for OrderedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OrderedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Display for OrderedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut current = &self.head;
        while let Some(node) = current {
            write!(f, "{}", node.value)?;
            if node.next.is_some() {
                write!(f, ", ")?;
            }
            current = &node.next;
        }
        write!(f, "]")
    }
}

impl Clone for OrderedList {
    fn clone(&self) -> Self {
        let mut list = OrderedList::new();
        for value in self {
            list.push_back(value);
        }
        list
    }
}

impl PartialEq for OrderedList {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for OrderedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
