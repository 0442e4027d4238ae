// Crib: lexical overlap detection for plain-text documents
//
// This is the library root. Each module corresponds to one stage of the
// comparison pipeline: load/normalize, count, compare, interactive lookup.

pub mod compare;
pub mod frequency;
pub mod loader;
pub mod lookup;
pub mod output;
