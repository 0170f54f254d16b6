//! The filter → sort → paginate pipeline.

use super::builder::PageQueryBuilder;
use super::filtering::SearchFilter;
use super::sorting::{KeyedEntry, OptionalKey, ParallelSort, SerialSort, SortStrategy};
use super::types::{Page, PageRequest, PageWindow};
use crate::config::PagingConfig;
use pageview_model::{FieldAccess, ValueRef};
use tracing::{debug, trace};

/// Configured paging executor.
///
/// Holds no per-call state; one instance can serve any number of list views
/// and threads.
#[derive(Debug)]
pub struct PagedView {
    config: PagingConfig,
    strategy: Box<dyn SortStrategy>,
}

impl Default for PagedView {
    fn default() -> Self {
        Self::new(PagingConfig::default())
    }
}

impl PagedView {
    /// Pick the sort strategy from `config.parallel_sort_threshold`.
    pub fn new(config: PagingConfig) -> Self {
        let strategy: Box<dyn SortStrategy> = match config.parallel_sort_threshold {
            Some(threshold) => Box::new(ParallelSort::with_threshold(threshold)),
            None => Box::new(SerialSort),
        };
        Self { config, strategy }
    }

    pub fn with_strategy(config: PagingConfig, strategy: impl SortStrategy + 'static) -> Self {
        Self {
            config,
            strategy: Box::new(strategy),
        }
    }

    pub fn config(&self) -> &PagingConfig {
        &self.config
    }

    pub fn strategy(&self) -> &dyn SortStrategy {
        self.strategy.as_ref()
    }

    /// A request builder seeded with the configured default page size.
    pub fn request(&self) -> PageQueryBuilder {
        PageQueryBuilder::new().page_size(self.config.default_page_size)
    }

    /// Filter, sort and slice `items`, cloning only the returned page.
    pub fn paginate<T>(&self, items: &[T], request: &PageRequest) -> Page<T>
    where
        T: FieldAccess + Clone,
    {
        self.view(items, request).cloned()
    }

    /// Like [`paginate`](Self::paginate) but borrows the page items.
    pub fn view<'a, T>(&self, items: &'a [T], request: &PageRequest) -> Page<&'a T>
    where
        T: FieldAccess,
    {
        self.view_with(items, request, |item: &'a T, name: &str| item.field(name))
    }

    /// Page over records through a caller-supplied accessor instead of
    /// [`FieldAccess`].
    pub fn view_with<'a, T, F>(
        &self,
        items: &'a [T],
        request: &PageRequest,
        accessor: F,
    ) -> Page<&'a T>
    where
        F: Fn(&'a T, &str) -> Option<ValueRef<'a>>,
    {
        run_pipeline(
            items,
            request,
            accessor,
            self.strategy.as_ref(),
            self.config.max_page_size,
        )
    }
}

/// Filter, sort and slice `items` with default settings.
pub fn paginate<T>(items: &[T], request: &PageRequest) -> Page<T>
where
    T: FieldAccess + Clone,
{
    view(items, request).cloned()
}

/// Borrowing variant of [`paginate`].
pub fn view<'a, T>(items: &'a [T], request: &PageRequest) -> Page<&'a T>
where
    T: FieldAccess,
{
    run_pipeline(
        items,
        request,
        |item: &'a T, name: &str| item.field(name),
        &SerialSort,
        None,
    )
}

/// [`paginate`] through a caller-supplied accessor.
pub fn paginate_with<'a, T, F>(items: &'a [T], request: &PageRequest, accessor: F) -> Page<T>
where
    T: Clone,
    F: Fn(&'a T, &str) -> Option<ValueRef<'a>>,
{
    run_pipeline(items, request, accessor, &SerialSort, None).cloned()
}

fn run_pipeline<'a, T, F>(
    items: &'a [T],
    request: &PageRequest,
    accessor: F,
    strategy: &dyn SortStrategy,
    max_page_size: Option<usize>,
) -> Page<&'a T>
where
    F: Fn(&'a T, &str) -> Option<ValueRef<'a>>,
{
    let window = PageWindow::for_request(request, max_page_size);

    let filter = request.search.as_ref().and_then(SearchFilter::from_search);
    let mut matched: Vec<usize> = match filter {
        Some(filter) => {
            let field = filter.field();
            let kept: Vec<usize> = items
                .iter()
                .enumerate()
                .filter(|&(_, item)| filter.matches(accessor(item, field)))
                .map(|(index, _)| index)
                .collect();
            trace!(
                field,
                kept = kept.len(),
                dropped = items.len() - kept.len(),
                "search stage"
            );
            kept
        }
        None => (0..items.len()).collect(),
    };

    if let Some(order_by) = request.active_order() {
        let order = order_by.order();
        let mut entries: Vec<KeyedEntry<'a>> = matched
            .iter()
            .map(|&index| {
                let key = OptionalKey::new(accessor(&items[index], order_by.field.as_str()));
                KeyedEntry::new(key, index)
            })
            .collect();
        trace!(
            field = %order_by.field,
            order = order.as_str(),
            strategy = strategy.name_for(entries.len()),
            entries = entries.len(),
            "sort stage"
        );
        strategy.sort_entries(&mut entries, order);
        matched = entries.into_iter().map(|entry| entry.index).collect();
    }

    let item_total = matched.len();
    let range = window.range(item_total);
    trace!(start = range.start, end = range.end, "page window");

    let page_items: Vec<&'a T> = matched[range].iter().map(|&index| &items[index]).collect();

    debug!(
        input = items.len(),
        item_total,
        page_num = window.page_num,
        page_size = window.page_size,
        returned = page_items.len(),
        "paginated collection"
    );

    Page {
        items: page_items,
        item_total,
        page_num: window.page_num,
        page_size: window.page_size,
    }
}
