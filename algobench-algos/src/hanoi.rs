//! Towers of Hanoi move-sequence generation.
//!
//! The iterative solver derives each move directly from the move index
//! with bit tricks: the moved disk is `1 + trailing_zeros(i)`, and the
//! source/destination pegs follow a fixed 3-cycle over the logical peg
//! order. For an even disk count the two non-source pegs swap roles so
//! the tower always ends on [`Peg::C`].
//!
//! Both solvers are pure: they produce the move sequence and nothing
//! else. Rendering the moves is an exporter concern, kept out of the
//! timed workload.

/// One of the three pegs. All disks start on `A` and end on `C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Peg {
    /// The source peg.
    A,
    /// The auxiliary peg.
    B,
    /// The target peg.
    C,
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Peg::A => write!(f, "A"),
            Peg::B => write!(f, "B"),
            Peg::C => write!(f, "C"),
        }
    }
}

/// A single move: carry `disk` (1 = smallest) from one peg to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Disk number, 1-based from the smallest.
    pub disk: u32,
    /// Peg the disk is lifted from.
    pub from: Peg,
    /// Peg the disk lands on.
    pub to: Peg,
}

/// Solve the n-disk puzzle without recursion or an explicit stack.
///
/// Produces exactly `2^n - 1` moves in order.
pub fn solve_iterative(n: u32) -> Vec<Move> {
    if n == 0 {
        return Vec::new();
    }

    // Logical peg indices: 0 = source, and the 3-cycle lands the tower
    // on logical peg 2 for odd n, logical peg 1 for even n. The label
    // order below maps the end peg to C in both cases.
    let pegs = if n % 2 == 0 {
        [Peg::A, Peg::C, Peg::B]
    } else {
        [Peg::A, Peg::B, Peg::C]
    };

    let total = (1u64 << n) - 1;
    let mut moves = Vec::with_capacity(total as usize);
    for i in 1..=total {
        let disk = i.trailing_zeros() + 1;
        let from = ((i & (i - 1)) % 3) as usize;
        let to = (((i | (i - 1)) + 1) % 3) as usize;
        moves.push(Move {
            disk,
            from: pegs[from],
            to: pegs[to],
        });
    }
    moves
}

/// Solve the n-disk puzzle with the classic recursive decomposition.
///
/// Produces the same move sequence as [`solve_iterative`].
pub fn solve_recursive(n: u32) -> Vec<Move> {
    let mut moves = Vec::with_capacity(((1u64 << n) - 1) as usize);
    recurse(n, Peg::A, Peg::C, Peg::B, &mut moves);
    moves
}

fn recurse(n: u32, from: Peg, to: Peg, via: Peg, moves: &mut Vec<Move>) {
    if n == 0 {
        return;
    }
    recurse(n - 1, from, via, to, moves);
    moves.push(Move { disk: n, from, to });
    recurse(n - 1, via, to, from, moves);
}
