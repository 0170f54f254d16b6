pub mod builder;
pub mod filtering;
pub mod prelude;
pub mod sorting;
pub mod types;
pub mod view;

pub use builder::PageQueryBuilder;
pub use sorting::{ParallelSort, SerialSort, SortStrategy};
pub use types::*;
pub use view::{PagedView, paginate, paginate_with, view};
