//! Index-addressed storage for token segments.
//!
//! Chains are built and torn down through the arena: the factories
//! allocate segments and the linkers splice fragment chains together.
//! [`SegmentArena::release`] walks both link dimensions returning every
//! reachable slot to the free list. A [`SegmentId`] is a plain index;
//! looking one up after its slot was released is an ownership bug and
//! panics.

use log::trace;

use crate::escape::decode_escapes;
use crate::segment::{Segment, TokenKind};

/// Index of one segment inside a [`SegmentArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentId(u32);

impl SegmentId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Dense slot storage for [`Segment`]s.
///
/// Released slots are reused through a free list, so ids are only
/// meaningful while their segment is alive.
#[derive(Debug, Default)]
pub struct SegmentArena {
    slots: Vec<Option<Segment>>,
    free: Vec<SegmentId>,
}

impl SegmentArena {
    pub fn new() -> Self {
        SegmentArena::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SegmentArena {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Number of live segments.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a live segment.
    ///
    /// # Panics
    ///
    /// Panics if `id` was already released; a stale id means chain
    /// ownership was violated somewhere upstream.
    pub fn get(&self, id: SegmentId) -> &Segment {
        self.slots[id.index()]
            .as_ref()
            .expect("segment id used after release")
    }

    fn get_mut(&mut self, id: SegmentId) -> &mut Segment {
        self.slots[id.index()]
            .as_mut()
            .expect("segment id used after release")
    }

    fn alloc(&mut self, segment: Segment) -> SegmentId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(segment);
                id
            }
            None => {
                let id = SegmentId(self.slots.len() as u32);
                self.slots.push(Some(segment));
                id
            }
        }
    }

    /// Create a segment from a lexer token.
    ///
    /// `StatementEnd` tokens carry nothing into the output and produce no
    /// segment. `Quoted` tokens lose their surrounding quote characters
    /// and have their interior escapes decoded; everything else is stored
    /// verbatim.
    pub fn token(&mut self, text: &str, kind: TokenKind) -> Option<SegmentId> {
        if kind == TokenKind::StatementEnd {
            return None;
        }
        let text = if kind == TokenKind::Quoted {
            let interior = if text.len() >= 2 {
                text.get(1..text.len() - 1).unwrap_or("")
            } else {
                ""
            };
            decode_escapes(interior)
        } else {
            text.to_owned()
        };
        Some(self.alloc(Segment::new(text.into_boxed_str(), kind)))
    }

    /// Create a segment from process-internal text, bypassing quote
    /// stripping and escape decoding.
    pub fn literal(&mut self, text: &str, kind: TokenKind) -> SegmentId {
        self.alloc(Segment::new(text.into(), kind))
    }

    /// Splice fragment chains into one sequential chain.
    ///
    /// Parser reductions hand over a window of value-stack slots, some of
    /// which are empty. Every present fragment is walked to its tail and
    /// the following fragment's head is attached there. Returns the head
    /// of the combined chain; `group` links are left untouched.
    pub fn link<I>(&mut self, fragments: I) -> Option<SegmentId>
    where
        I: IntoIterator<Item = Option<SegmentId>>,
    {
        let mut head = None;
        let mut tail: Option<SegmentId> = None;
        for fragment in fragments.into_iter().flatten() {
            match tail {
                Some(t) => self.get_mut(t).next = Some(fragment),
                None => head = Some(fragment),
            }
            tail = Some(self.tail_of(fragment));
        }
        head
    }

    /// Chain expression heads into a concatenation list along the `group`
    /// dimension. Every id must be a chain head.
    pub fn link_group<I>(&mut self, expressions: I) -> Option<SegmentId>
    where
        I: IntoIterator<Item = Option<SegmentId>>,
    {
        let mut head = None;
        let mut tail: Option<SegmentId> = None;
        for expression in expressions.into_iter().flatten() {
            match tail {
                Some(t) => self.get_mut(t).group = Some(expression),
                None => head = Some(expression),
            }
            tail = Some(self.group_tail_of(expression));
        }
        head
    }

    fn tail_of(&self, id: SegmentId) -> SegmentId {
        let mut cur = id;
        while let Some(next) = self.get(cur).next {
            cur = next;
        }
        cur
    }

    fn group_tail_of(&self, id: SegmentId) -> SegmentId {
        let mut cur = id;
        while let Some(group) = self.get(cur).group {
            cur = group;
        }
        cur
    }

    /// Start building a chain by appending chunks one at a time.
    pub fn builder(&mut self) -> ChainBuilder<'_> {
        ChainBuilder {
            arena: self,
            head: None,
            tail: None,
        }
    }

    /// Iterate the segments of one expression, following `next` links.
    pub fn chain_iter(&self, root: SegmentId) -> ChainIter<'_> {
        ChainIter {
            arena: self,
            cursor: Some(root),
        }
    }

    /// Iterate the expression heads of a concatenation list, starting at
    /// `root` and following `group` links.
    pub fn group_iter(&self, root: SegmentId) -> GroupIter<'_> {
        GroupIter {
            arena: self,
            cursor: Some(root),
        }
    }

    /// Release every segment reachable from `root` over both link
    /// dimensions, returning their slots to the free list.
    ///
    /// Links move out together with each segment, so every reachable
    /// segment is visited exactly once. Returns the number of released
    /// segments.
    ///
    /// # Panics
    ///
    /// Panics if `root` (or anything it still links to) was already
    /// released.
    pub fn release(&mut self, root: SegmentId) -> usize {
        let mut pending = vec![root];
        let mut released = 0;
        while let Some(id) = pending.pop() {
            let segment = self.slots[id.index()]
                .take()
                .expect("segment id used after release");
            if let Some(next) = segment.next {
                pending.push(next);
            }
            if let Some(group) = segment.group {
                pending.push(group);
            }
            self.free.push(id);
            released += 1;
        }
        trace!("released {released} segments from {root:?}");
        released
    }
}

/// Incremental chain construction with `_` concatenation between chunks.
///
/// Chunks pushed after the first get a [`TokenKind::Underscore`] segment
/// spliced in front of them, so pushing `a` then `b` builds the chain
/// `a _ b`.
#[derive(Debug)]
pub struct ChainBuilder<'a> {
    arena: &'a mut SegmentArena,
    head: Option<SegmentId>,
    tail: Option<SegmentId>,
}

impl ChainBuilder<'_> {
    /// Append one chunk. The text is stored verbatim, like
    /// [`SegmentArena::literal`].
    pub fn push(&mut self, text: &str, kind: TokenKind) {
        if self.head.is_some() {
            self.append(Segment::new("_".into(), TokenKind::Underscore));
        }
        self.append(Segment::new(text.into(), kind));
    }

    fn append(&mut self, segment: Segment) {
        let id = self.arena.alloc(segment);
        match self.tail {
            Some(tail) => self.arena.get_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// The head of the built chain, or `None` if nothing was pushed.
    pub fn finish(self) -> Option<SegmentId> {
        self.head
    }
}

/// Iterator over one expression's segments. See
/// [`SegmentArena::chain_iter`].
pub struct ChainIter<'a> {
    arena: &'a SegmentArena,
    cursor: Option<SegmentId>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Segment;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.arena.get(self.cursor?);
        self.cursor = segment.next();
        Some(segment)
    }
}

/// Iterator over a concatenation list's expression heads. See
/// [`SegmentArena::group_iter`].
pub struct GroupIter<'a> {
    arena: &'a SegmentArena,
    cursor: Option<SegmentId>,
}

impl Iterator for GroupIter<'_> {
    type Item = SegmentId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.arena.get(id).group();
        Some(id)
    }
}
