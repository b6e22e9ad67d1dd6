/// Data layer: core types, loading, and ordering.
///
/// Architecture:
/// ```text
///   data.csv  (date;file_name;…)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<Record>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   sort    │  SortMode → new Vec<Record>
///   └──────────┘
///      │     │
///      ▼     ▼
///   number  date   sort keys
/// ```

pub mod date;
pub mod loader;
pub mod model;
pub mod number;
pub mod sort;

pub use loader::{load, load_with, LoaderOptions};
pub use model::Record;
pub use number::extract_number;
pub use sort::{sort_records, sort_records_strict, SortMode};
