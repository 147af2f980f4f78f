use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// A permutation of library positions: every position `0..len` exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOrder {
    positions: Vec<usize>,
}

impl PlayOrder {
    /// Uniformly random permutation of `0..len` (Fisher-Yates).
    pub fn shuffled<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut positions: Vec<usize> = (0..len).collect();
        positions.shuffle(rng);
        Self { positions }
    }

    /// Uniformly random permutation whose first element is not in `avoid`.
    ///
    /// Draws an unconstrained shuffle, and if it opens with an avoided
    /// position, swaps the head with a uniformly chosen admissible slot. Every
    /// admissible permutation is reached from exactly one unconstrained draw
    /// plus one swap per avoided element, so the result stays uniform. When
    /// `avoid` covers every position the plain shuffle is returned.
    pub fn shuffled_avoiding_first<R: Rng + ?Sized>(
        len: usize,
        avoid: &[usize],
        rng: &mut R,
    ) -> Self {
        let mut order = Self::shuffled(len, rng);
        if order.first().is_some_and(|head| avoid.contains(&head)) {
            let admissible: Vec<usize> = (1..len)
                .filter(|&slot| !avoid.contains(&order.positions[slot]))
                .collect();
            if let Some(&slot) = admissible.choose(rng) {
                order.positions.swap(0, slot);
            }
        }
        order
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Library position at `slot` in the play order.
    pub fn get(&self, slot: usize) -> Option<usize> {
        self.positions.get(slot).copied()
    }

    pub fn first(&self) -> Option<usize> {
        self.positions.first().copied()
    }

    pub fn last(&self) -> Option<usize> {
        self.positions.last().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.positions
    }
}
