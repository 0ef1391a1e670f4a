pub mod backends;
pub mod table;

pub use backends::{FsStore, MemoryStore};
pub use table::{MemoryTable, PgArticleTable};

pub mod prelude {
    pub use super::backends::*;
    pub use super::table::*;
    pub use ns_core::{ArticleTable, ObjectStore};
}
