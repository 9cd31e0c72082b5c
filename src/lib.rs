//! chain-hashmap: a single-threaded separate-chaining hash map with
//! owned collision chains and load-factor-driven growth.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: implement the classic chained hash table in safe, verifiable
//!   layers so each piece can be reasoned about independently.
//! - Layers:
//!   - ChainTable<K, V, S>: structural table that owns a bucket array of
//!     singly linked chains; hashing, probing, unlinking, and the
//!     doubling rehash all live here.
//!   - ChainHashMap<K, V, S>: public API over the table; convenience
//!     constructors, checked indexed access (`at`), `Index` sugar, and
//!     lazy default insertion.
//!
//! Constraints
//! - Single-threaded: no locking, no atomics; callers needing sharing
//!   serialize externally.
//! - Every bucket slot owns its chain head and every node owns its
//!   successor, so deletion and rehash are plain ownership transfers;
//!   no shared or raw pointers take part in chain surgery.
//! - The maximum load factor is fixed at construction. Immediately after
//!   any insert returns, `len / bucket_count` is at or below it; growth
//!   doubles the bucket array and is triggered only by inserts.
//! - Removal never shrinks the bucket array.
//! - No ordering is promised across buckets or within a chain.
//!
//! Why this split?
//! - Localize invariants: the table layer alone maintains the count and
//!   placement invariants; the map layer cannot break them.
//! - The public surface stays small while the structural layer keeps the
//!   probe/unlink/rehash machinery testable in isolation.
//!
//! Hasher and rehashing invariants
//! - Each node stores its full `u64` hash, computed once at insertion;
//!   bucket indexing always reduces the stored hash against the current
//!   bucket count, so `K: Hash` is never invoked after insertion and a
//!   rehash never calls back into key code.
//!
//! Notes and non-goals
//! - Keys must be `Eq + Hash`; values carry no bounds. Lookups accept
//!   borrowed forms of the key (`K: Borrow<Q>`).
//! - `get` signals absence through `Option`; only the checked accessors
//!   `at`/`at_mut` surface `KeyNotFound`, and the `Index` sugar panics
//!   on a read miss.
//! - No iteration-order guarantees, no thread safety, no allocator
//!   control, no persistence.

mod chain_hash_map;
mod chain_table;
mod chain_table_proptest;

// Public surface
pub use chain_hash_map::{ChainHashMap, KeyNotFound};
pub use chain_table::{ChainTable, Iter, IterMut};
