//! String interning for identifiers.
//!
//! A [`Symbol`] is a compact handle to an interned string. The same text
//! always yields the same handle, so symbol comparison is an integer
//! comparison and identifier text is stored once regardless of how many
//! lexemes or AST nodes mention it.

use std::fmt;
use std::hash::BuildHasherDefault;
use std::sync::{OnceLock, RwLock};

use indexmap::IndexSet;
use rustc_hash::FxHasher;

/// Insertion-ordered set of interned strings. The index of a string in
/// the set is its symbol value.
type Table = IndexSet<&'static str, BuildHasherDefault<FxHasher>>;

static TABLE: OnceLock<RwLock<Table>> = OnceLock::new();

fn table() -> &'static RwLock<Table> {
    TABLE.get_or_init(|| RwLock::new(IndexSet::default()))
}

/// An interned string handle.
///
/// # Example
///
/// ```
/// use lc_util::Symbol;
///
/// let a = Symbol::intern("main");
/// let b = Symbol::intern("main");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "main");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Interns `string` and returns its handle.
    ///
    /// Interned text lives for the rest of the process; the table only
    /// ever grows, which keeps every previously handed out `Symbol`
    /// valid.
    pub fn intern(string: &str) -> Symbol {
        let table = table();
        if let Some(index) = table.read().unwrap().get_index_of(string) {
            return Symbol(index as u32);
        }

        let mut table = table.write().unwrap();
        // Re-check under the write lock: another thread may have won the
        // race between the read above and this point.
        if let Some(index) = table.get_index_of(string) {
            return Symbol(index as u32);
        }
        let owned: &'static str = Box::leak(string.to_owned().into_boxed_str());
        let (index, _) = table.insert_full(owned);
        Symbol(index as u32)
    }

    /// Returns the interned text.
    pub fn as_str(self) -> &'static str {
        table()
            .read()
            .unwrap()
            .get_index(self.0 as usize)
            .copied()
            .expect("symbol index points into the intern table")
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}
