//! # Back Stack
//!
//! Ordered history of activated routes, top = most recently pushed.
//! The router keeps at least one entry (the current screen) at all times.

use std::collections::VecDeque;
use std::time::Instant;

use crate::errors::{NavError, NavResult};
use crate::route::Route;

/// One activation of a route
#[derive(Debug)]
pub struct BackStackEntry<S> {
    route: Route,
    screen: S,
    seq: u64,
    created_at: Instant,
}

impl<S> BackStackEntry<S> {
    /// Create an entry; its sequence index is assigned on push
    pub fn new(route: Route, screen: S) -> Self {
        Self {
            route,
            screen,
            seq: 0,
            created_at: Instant::now(),
        }
    }

    /// Route this entry activated
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Screen built for the route
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Mutable access to the screen
    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    /// Monotonic push order across the stack's lifetime
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// When the entry was created
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Split into route and screen
    pub fn into_parts(self) -> (Route, S) {
        (self.route, self.screen)
    }
}

/// LIFO stack of [`BackStackEntry`].
///
/// Non-empty by construction: the root entry is held apart from the entries
/// pushed above it, so there is always a top.
#[derive(Debug)]
pub struct BackStack<S> {
    root: BackStackEntry<S>,
    above: VecDeque<BackStackEntry<S>>,
    next_seq: u64,
    max_depth: Option<usize>,
}

impl<S> BackStack<S> {
    /// Create a stack holding only `root`. `max_depth` of `None` means
    /// unbounded; a cap below 2 is treated as 2.
    pub fn new(mut root: BackStackEntry<S>, max_depth: Option<usize>) -> Self {
        root.seq = 0;
        Self {
            root,
            above: VecDeque::new(),
            next_seq: 1,
            max_depth: max_depth.map(|depth| depth.max(2)),
        }
    }

    /// Append `entry` as the new top.
    ///
    /// Never fails. Unbounded stacks only grow; with an opt-in cap, the
    /// oldest entry above the root is evicted once the cap is exceeded.
    pub fn push(&mut self, mut entry: BackStackEntry<S>) {
        entry.seq = self.take_seq();
        self.above.push_back(entry);
        if let Some(max) = self.max_depth {
            if self.len() > max {
                if let Some(evicted) = self.above.pop_front() {
                    tracing::debug!(route = %evicted.route, "Evicted oldest history entry");
                }
            }
        }
    }

    /// Remove and return the top entry.
    ///
    /// The root is never popped: fails with [`NavError::EmptyStack`] unless
    /// [`can_pop`](Self::can_pop) holds.
    pub fn pop(&mut self) -> NavResult<BackStackEntry<S>> {
        self.above.pop_back().ok_or(NavError::EmptyStack)
    }

    /// Whether an entry sits above the root
    pub fn can_pop(&self) -> bool {
        !self.above.is_empty()
    }

    /// Clear the stack and make `entry` its only element.
    ///
    /// Returns how many entries were discarded.
    pub fn replace_all(&mut self, mut entry: BackStackEntry<S>) -> usize {
        let discarded = self.len();
        self.above.clear();
        entry.seq = self.take_seq();
        self.root = entry;
        discarded
    }

    /// Swap the top entry for `entry` without growing the stack.
    pub fn replace_top(&mut self, mut entry: BackStackEntry<S>) -> BackStackEntry<S> {
        entry.seq = self.take_seq();
        std::mem::replace(self.top_mut(), entry)
    }

    /// Peek at the top entry
    pub fn top(&self) -> &BackStackEntry<S> {
        self.above.back().unwrap_or(&self.root)
    }

    /// Mutable peek at the top entry
    pub fn top_mut(&mut self) -> &mut BackStackEntry<S> {
        match self.above.back_mut() {
            Some(entry) => entry,
            None => &mut self.root,
        }
    }

    /// Bottom entry
    pub fn root(&self) -> &BackStackEntry<S> {
        &self.root
    }

    /// Number of entries, root included
    pub fn len(&self) -> usize {
        self.above.len().saturating_add(1)
    }

    /// Configured depth cap
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Entries from root to top
    pub fn iter(&self) -> impl Iterator<Item = &BackStackEntry<S>> {
        std::iter::once(&self.root).chain(self.above.iter())
    }

    /// Routes from root to top
    pub fn routes(&self) -> Vec<Route> {
        self.iter().map(|entry| entry.route.clone()).collect()
    }

    fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.saturating_add(1);
        seq
    }
}
