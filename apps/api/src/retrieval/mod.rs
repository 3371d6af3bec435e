//! Lexical retrieval over the career dataset.
//!
//! A TF-IDF vector space is fitted once over the career documents at startup and
//! queried read-only afterwards, so one `LexicalRetriever` is shared by all handlers.

pub mod retriever;
pub mod tokenizer;
pub mod vectorizer;

pub use retriever::LexicalRetriever;
