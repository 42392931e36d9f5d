//! Chunking module - groups normalized utterances into length-bounded chunks
//!
//! Every normalizer feeds (raw, markup) pairs into a [`ChunkAccumulator`];
//! the sealed chunks become both the pages of the HTML document and the
//! documents of the search index.

mod accumulator;

pub use accumulator::ChunkAccumulator;

#[cfg(test)]
mod tests;
