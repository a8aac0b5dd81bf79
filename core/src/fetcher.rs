use alloc::vec::Vec;

use crate::*;

/// External collaborator that knows how to look up one category by identifier.
#[allow(async_fn_in_trait)]
pub trait CategorySource {
    type Error;

    async fn fetch_category(&self, id: CategoryId) -> core::result::Result<Category, Self::Error>;
}

/// Fetches `ids` one after another, appending each category to `categories` in request order.
///
/// Each retrieval is awaited before the next one starts. The first failure aborts the sequence,
/// leaving whatever was fetched before it in `categories`.
pub async fn fetch_categories<S: CategorySource>(
    source: &S,
    ids: &[CategoryId],
    categories: &mut Vec<Category>,
) -> core::result::Result<(), FetchError<S::Error>> {
    for (position, &id) in ids.iter().enumerate() {
        log::debug!("fetching category {} ({}/{})", id, position + 1, ids.len());
        match source.fetch_category(id).await {
            Ok(category) => categories.push(category),
            Err(err) => {
                log::warn!("fetching category {} failed, aborting", id);
                return Err(FetchError {
                    position,
                    id,
                    source: err,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;
    use core::cell::RefCell;
    use core::future::Future;
    use core::pin::pin;
    use core::task::{Context, Poll, Waker};

    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    #[error("unavailable")]
    struct Unavailable;

    /// Answers immediately, failing for the listed identifiers and recording every request.
    struct FakeSource {
        failing: Vec<CategoryId>,
        requested: RefCell<Vec<CategoryId>>,
    }

    impl FakeSource {
        fn new(failing: &[CategoryId]) -> Self {
            Self {
                failing: failing.to_vec(),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl CategorySource for FakeSource {
        type Error = Unavailable;

        async fn fetch_category(
            &self,
            id: CategoryId,
        ) -> core::result::Result<Category, Self::Error> {
            self.requested.borrow_mut().push(id);
            if self.failing.contains(&id) {
                return Err(Unavailable);
            }
            Ok(Category::new(format!("category {}", id), Vec::new()))
        }
    }

    fn run<F: Future>(future: F) -> F::Output {
        let mut future = pin!(future);
        let mut cx = Context::from_waker(Waker::noop());
        match future.as_mut().poll(&mut cx) {
            Poll::Ready(output) => output,
            Poll::Pending => panic!("fake source never suspends"),
        }
    }

    fn titles(categories: &[Category]) -> Vec<String> {
        categories.iter().map(|c| c.title.clone()).collect()
    }

    #[test]
    fn fetches_all_in_request_order() {
        let source = FakeSource::new(&[]);
        let mut categories = Vec::new();

        run(fetch_categories(&source, &[6, 5, 4, 3, 2, 1], &mut categories)).unwrap();

        assert_eq!(categories.len(), CATEGORY_COUNT);
        assert_eq!(
            titles(&categories),
            ["category 6", "category 5", "category 4", "category 3", "category 2", "category 1"]
        );
        assert_eq!(*source.requested.borrow(), [6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn failure_aborts_and_keeps_earlier_entries() {
        let source = FakeSource::new(&[3]);
        let mut categories = Vec::new();

        let err = run(fetch_categories(&source, &[1, 2, 3, 4, 5, 6], &mut categories)).unwrap_err();

        assert_eq!(
            err,
            FetchError {
                position: 2,
                id: 3,
                source: Unavailable,
            }
        );
        assert_eq!(titles(&categories), ["category 1", "category 2"]);
        assert_eq!(*source.requested.borrow(), [1, 2, 3]);
    }

    #[test]
    fn duplicate_ids_are_fetched_twice() {
        let source = FakeSource::new(&[]);
        let mut categories = Vec::new();

        run(fetch_categories(&source, &[9, 9], &mut categories)).unwrap();

        assert_eq!(titles(&categories), ["category 9", "category 9"]);
    }
}
