//! Category filtering for the projects gallery and the tech-stack listing.
//!
//! A filter is either the `All` sentinel or one concrete category, so the
//! only representable values are the enumerated categories plus "no
//! filter". Filtering keeps the original order of the list.

/// A closed set of display categories.
pub trait Category: Copy + Eq + Send + Sync + 'static {
    /// Every category in display order.
    const ALL: &'static [Self];

    /// Human-readable label, also used as the filter button text.
    fn label(self) -> &'static str;
}

/// Anything that belongs to exactly one category.
pub trait Categorized {
    type Category: Category;

    fn category(&self) -> Self::Category;
}

/// Label of the sentinel filter value.
pub const ALL_LABEL: &str = "All";

/// The selected filter value of a category bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: Category> CategoryFilter<C> {
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    /// Items accepted by this filter, in their original order.
    pub fn apply<'a, T>(self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Categorized<Category = C>,
    {
        items
            .iter()
            .filter(|item| self.matches(item.category()))
            .collect()
    }

    /// `All` followed by every category of `C`, whether used or not.
    pub fn every_option() -> Vec<Self> {
        std::iter::once(CategoryFilter::All)
            .chain(C::ALL.iter().copied().map(CategoryFilter::Only))
            .collect()
    }

    /// `All` followed by the distinct categories present in `items`, in
    /// order of first appearance.
    pub fn options_for<T>(items: &[T]) -> Vec<Self>
    where
        T: Categorized<Category = C>,
    {
        let mut options = vec![CategoryFilter::All];
        for item in items {
            let option = CategoryFilter::Only(item.category());
            if !options.contains(&option) {
                options.push(option);
            }
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Fruit {
        Apple,
        Pear,
        Plum,
    }

    impl Category for Fruit {
        const ALL: &'static [Self] = &[Fruit::Apple, Fruit::Pear, Fruit::Plum];

        fn label(self) -> &'static str {
            match self {
                Fruit::Apple => "Apple",
                Fruit::Pear => "Pear",
                Fruit::Plum => "Plum",
            }
        }
    }

    #[derive(Debug, PartialEq)]
    struct Crate(&'static str, Fruit);

    impl Categorized for Crate {
        type Category = Fruit;

        fn category(&self) -> Fruit {
            self.1
        }
    }

    const CRATES: &[Crate] = &[
        Crate("a", Fruit::Pear),
        Crate("b", Fruit::Apple),
        Crate("c", Fruit::Pear),
    ];

    fn names(items: Vec<&Crate>) -> Vec<&'static str> {
        items.into_iter().map(|c| c.0).collect()
    }

    #[test]
    fn all_keeps_everything_in_order() {
        assert_eq!(names(CategoryFilter::All.apply(CRATES)), vec!["a", "b", "c"]);
    }

    #[test]
    fn only_keeps_exact_matches() {
        assert_eq!(
            names(CategoryFilter::Only(Fruit::Pear).apply(CRATES)),
            vec!["a", "c"]
        );
        assert_eq!(names(CategoryFilter::Only(Fruit::Apple).apply(CRATES)), vec!["b"]);
    }

    #[test]
    fn unused_category_yields_empty_list() {
        assert!(CategoryFilter::Only(Fruit::Plum).apply(CRATES).is_empty());
    }

    #[test]
    fn default_is_all() {
        assert_eq!(CategoryFilter::<Fruit>::default(), CategoryFilter::All);
        assert_eq!(CategoryFilter::<Fruit>::All.label(), "All");
    }

    #[test]
    fn every_option_lists_declared_categories() {
        let labels: Vec<_> = CategoryFilter::<Fruit>::every_option()
            .into_iter()
            .map(CategoryFilter::label)
            .collect();
        assert_eq!(labels, vec!["All", "Apple", "Pear", "Plum"]);
    }

    #[test]
    fn options_for_lists_distinct_categories_by_first_appearance() {
        let labels: Vec<_> = CategoryFilter::options_for(CRATES)
            .into_iter()
            .map(CategoryFilter::label)
            .collect();
        assert_eq!(labels, vec!["All", "Pear", "Apple"]);
    }
}
