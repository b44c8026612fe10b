/// Data layer: sample discovery, parsing, and splitting.
///
/// Architecture:
/// ```text
///  data_dir/sam_1.csv, sam_2.csv, ... sam_10.csv
///        │
///        ▼
///   ┌──────────┐
///   │  reader   │  list "sam*" files, natural sort  → ReadCsv
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse each CSV → Array2, stack → Array3
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  split    │  shuffle along axis 0 → (train, test)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod natural;
pub mod reader;
pub mod split;
