/// The base trait for any value that can appear in a variable's domain.
///
/// This is a marker trait: any type that is cloneable, debuggable, equatable,
/// and hashable qualifies. Domain values are compared by predicates during
/// propagation and hashed during duplicate detection.
pub trait ValueEquality: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> ValueEquality for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}

/// The base trait for variable keys.
///
/// Keys are opaque to the engine. Encoders pick whatever identifies a
/// variable naturally: a coordinate struct for grid puzzles, a region name
/// for map colouring. Composite keys should be proper structs, not
/// concatenated strings.
pub trait VariableKey: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> VariableKey for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
