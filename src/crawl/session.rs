// src/crawl/session.rs
// =============================================================================
// This module holds the crawl state: the fact store and the frontier.
//
// What lives here:
// - Fact: one subject -> predicate -> object assertion, plus the URL of the
//   catalogue it came from (context)
// - FactStore: insertion-ordered, deduplicated collection of facts
// - Frontier: URLs still to visit (a stack) and URLs already visited (a set)
// - CrawlSession: the two of them bundled together, passed around explicitly
//   so there's no global mutable state and tests can spin up fresh sessions
//
// Rust concepts:
// - HashSet: O(1) membership checks for dedup and visited tracking
// - Vec as a stack: push/pop from the end gives LIFO order
// =============================================================================

use std::collections::HashSet;

// One quad: subject, predicate and object are the assertion itself,
// context records which catalogue document the assertion was derived from.
// All four are opaque strings - either URIs or literal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub subject: String,
    pub predicate: String,
    pub object: String,
    pub context: String,
}

// Append-only, deduplicated store of facts.
//
// Dedup is on the (subject, predicate, object) triple ONLY - context is
// deliberately not part of the key, so the same triple discovered in two
// different catalogues keeps whichever context arrived first.
#[derive(Debug, Default)]
pub struct FactStore {
    facts: Vec<Fact>,
    // Index of triples we've already stored, for O(1) dedup
    seen: HashSet<(String, String, String)>,
}

impl FactStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Stores a fact unless the same triple is already present.
    // Returns true if the fact was actually inserted.
    pub fn store(&mut self, fact: Fact) -> bool {
        let key = (
            fact.subject.clone(),
            fact.predicate.clone(),
            fact.object.clone(),
        );

        if !self.seen.insert(key) {
            // Already have this triple - first insertion wins
            return false;
        }

        self.facts.push(fact);
        true
    }

    // Facts in insertion order
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

// The set of URLs driving the traversal.
//
// unexplored is a LIFO stack: the most recently discovered catalogue is
// visited first, which makes the traversal depth-first. enqueue() does NOT
// dedup - duplicates are filtered at pop time by the driver checking
// is_explored(). explored only ever grows.
#[derive(Debug, Default)]
pub struct Frontier {
    unexplored: Vec<String>,
    explored: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    // Appends a URL to the pending stack, duplicates and all
    pub fn enqueue(&mut self, url: impl Into<String>) {
        self.unexplored.push(url.into());
    }

    pub fn has_work(&self) -> bool {
        !self.unexplored.is_empty()
    }

    // Removes and returns the most recently enqueued URL
    pub fn take_next(&mut self) -> Option<String> {
        self.unexplored.pop()
    }

    pub fn is_explored(&self, url: &str) -> bool {
        self.explored.contains(url)
    }

    pub fn mark_explored(&mut self, url: impl Into<String>) {
        self.explored.insert(url.into());
    }
}

// Everything one crawl touches, in one place.
//
// The driver and expander take &mut CrawlSession, the serializers take the
// finished store by shared reference. A fresh session per test means no
// cross-test state.
#[derive(Debug, Default)]
pub struct CrawlSession {
    pub frontier: Frontier,
    pub facts: FactStore,
}

impl CrawlSession {
    // Creates a session seeded with the root catalogue URL
    pub fn seeded(root_url: impl Into<String>) -> Self {
        let mut session = Self::default();
        session.frontier.enqueue(root_url);
        session
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why impl Into<String> for parameters?
//    - Callers can pass either a String or a &str
//    - .into() converts whichever they passed into an owned String
//    - Saves callers from writing .to_string() everywhere
//
// 2. Why clone the fields for the dedup key?
//    - HashSet needs to own its keys
//    - The tuple key duplicates the three strings, which is fine at this
//      scale (catalogues are small documents)
//
// 3. Why Vec instead of VecDeque for the frontier?
//    - We only ever push and pop at the same end (a stack)
//    - Vec does that natively; VecDeque is for queues (both ends)
//    - LIFO popping is what makes the crawl depth-first
// -----------------------------------------------------------------------------
