//! Operator registry.
//!
//! A fixed catalog of named operations. Each operation declares its arity
//! through a typed [`Kernel`], so the number of operands it consumes can never
//! disagree with the function that computes it.
//!
//! The catalog is declared in semantic order (see `catalog.rs`) and sorted
//! once, lazily, into the view used for lookup:
//!
//! ```
//! use rpncalc_core::registry::{self, Arity};
//!
//! registry::initialize_catalog();
//! let op = registry::lookup("sqrt").unwrap();
//! assert_eq!(op.arity(), Arity::Unary);
//! assert!(registry::lookup("nope").is_none());
//! ```

mod catalog;

use crate::{Stack, Value};
use core::fmt;
use once_cell::sync::Lazy;
use tracing::debug;

/// Number of operands an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Arity {
    Constant,
    Unary,
    Binary,
}

impl Arity {
    /// The operand count as a number.
    pub fn count(self) -> usize {
        match self {
            Arity::Constant => 0,
            Arity::Unary => 1,
            Arity::Binary => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Arity::Constant => "constant",
            Arity::Unary => "unary",
            Arity::Binary => "binary",
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.count(), self.name())
    }
}

/// The function behind an operation.
///
/// Binary kernels receive `(a, b)` where `b` was on top of the stack.
#[derive(Debug, Clone, Copy)]
pub enum Kernel {
    Constant(fn() -> Value),
    Unary(fn(Value) -> Value),
    Binary(fn(Value, Value) -> Value),
    /// Consumes two operands and pushes two back, in the returned order.
    Exchange(fn(Value, Value) -> (Value, Value)),
}

impl Kernel {
    pub fn arity(&self) -> Arity {
        match self {
            Kernel::Constant(_) => Arity::Constant,
            Kernel::Unary(_) => Arity::Unary,
            Kernel::Binary(_) | Kernel::Exchange(_) => Arity::Binary,
        }
    }
}

/// An entry in the operator catalog.
#[derive(Debug)]
pub struct Operation {
    /// Token that invokes the operation; unique across the catalog.
    pub symbol: &'static str,
    pub kernel: Kernel,
    /// Human-readable text for help output.
    pub description: &'static str,
}

impl Operation {
    pub fn arity(&self) -> Arity {
        self.kernel.arity()
    }

    /// Pops the operands, runs the kernel and pushes the result. Returns the
    /// new top of the stack.
    ///
    /// # Panics
    ///
    /// Panics if the stack holds fewer values than the operation's arity.
    /// The evaluator checks the depth before calling this.
    pub fn apply(&self, stack: &mut Stack) -> Value {
        match self.kernel {
            Kernel::Constant(f) => stack.push(f()),
            Kernel::Unary(f) => {
                let a = stack.pop();
                stack.push(f(a));
            }
            Kernel::Binary(f) => {
                let b = stack.pop();
                let a = stack.pop();
                stack.push(f(a, b));
            }
            Kernel::Exchange(f) => {
                let b = stack.pop();
                let a = stack.pop();
                let (lower, upper) = f(a, b);
                stack.push(lower);
                stack.push(upper);
            }
        }
        stack.peek()
    }
}

/// Order in which [`describe_all`] lists the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrder {
    /// Semantic grouping, as declared.
    Declaration,
    /// Byte-wise ascending by symbol, as used for lookup.
    Sorted,
}

/// The sorted view of the catalog.
pub struct Registry {
    sorted: Vec<&'static Operation>,
}

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::build);

impl Registry {
    fn build() -> Self {
        let mut sorted: Vec<&'static Operation> = catalog::CATALOG.iter().collect();
        sorted.sort_by(|a, b| a.symbol.cmp(b.symbol));
        for pair in sorted.windows(2) {
            assert!(
                pair[0].symbol != pair[1].symbol,
                "duplicate operator symbol '{}' in catalog",
                pair[0].symbol
            );
        }
        debug!(operators = sorted.len(), "operator catalog initialized");
        Self { sorted }
    }

    /// The process-wide registry, sorting the catalog on first use.
    pub fn global() -> &'static Registry {
        &REGISTRY
    }

    /// Binary search for `symbol`.
    pub fn lookup(&self, symbol: &str) -> Option<&'static Operation> {
        self.sorted
            .binary_search_by(|op| op.symbol.cmp(symbol))
            .ok()
            .map(|index| self.sorted[index])
    }

    /// Operations in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Operation> + '_ {
        self.sorted.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

/// Sorts the catalog for lookup. Safe to call more than once; only the first
/// call does any work.
pub fn initialize_catalog() {
    Lazy::force(&REGISTRY);
}

/// Whether [`initialize_catalog`] (or a lookup) has already run.
pub fn is_initialized() -> bool {
    Lazy::get(&REGISTRY).is_some()
}

/// Finds the operation for `symbol` in the global registry.
pub fn lookup(symbol: &str) -> Option<&'static Operation> {
    Registry::global().lookup(symbol)
}

/// Operations in declaration order. Does not initialize the registry.
pub fn declared() -> impl Iterator<Item = &'static Operation> {
    catalog::CATALOG.iter()
}

/// Formats the catalog as a table for help output. Every line starts with
/// `prefix`, which callers use for indentation.
pub fn describe_all(prefix: &str, order: CatalogOrder) -> String {
    let mut out = format!(
        "{prefix}Available operators:\n{prefix}SYMBOL\t# ARGUMENTS\tDESCRIPTION\n"
    );
    let mut describe = |op: &Operation| {
        out.push_str(&format!(
            "{prefix}'{}':\t{}\t{}\n",
            op.symbol,
            op.arity(),
            op.description
        ));
    };
    match order {
        CatalogOrder::Declaration => declared().for_each(&mut describe),
        CatalogOrder::Sorted => Registry::global().iter().for_each(&mut describe),
    }
    out
}
