/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  data/penguins.csv ──┐
///                      ├─▶ ┌──────────┐
///  embedded excerpt ───┘   │  loader  │  first source that parses → Dataset
///                          └──────────┘
///                               │
///                               ▼
///                          ┌──────────┐
///                          │ Dataset  │  Vec<Record>, typed cells
///                          └──────────┘
///                               │
///                               ▼
///                          ┌──────────┐
///                          │  filter  │  plottable rows → indices
///                          └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
