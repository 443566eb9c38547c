//! Feature modules
//!
//! Each feature is a vertical slice with its own domain types, ports and
//! infrastructure:
//!
//! - `corpus/`        - Snippet and ordered corpus
//! - `parsing/`       - Structural analyzer (tree-sitter, pre-order DFS)
//! - `lexical/`       - Incremental Python lexer
//! - `embedding/`     - Backend port + generator with alignment checks
//! - `projection/`    - Per-backend PCA to 2D
//! - `visualization/` - Plot sinks

pub mod corpus;
pub mod embedding;
pub mod lexical;
pub mod parsing;
pub mod projection;
pub mod visualization;
