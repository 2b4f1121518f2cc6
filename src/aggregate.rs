use crate::models::{
    CategoriesData, CategoryInfo, CategoryKind, ClassifiedEvent, DailyAggregate, LogEntry,
    PeriodAggregate,
};
use std::collections::BTreeMap;

pub type CategoryIndex = BTreeMap<u32, CategoryInfo>;

/// Builds the id -> category lookup used by `classify` and `aggregate`.
/// Duplicate ids in the catalog resolve to the last occurrence.
pub fn build_index(catalog: &CategoriesData) -> CategoryIndex {
    let mut index = CategoryIndex::new();
    for category in &catalog.data {
        index.insert(
            category.id,
            CategoryInfo {
                kind: category.kind,
                name: category.name.clone(),
            },
        );
    }
    index
}

/// Splits each entry's category references into positive and negative name
/// lists, one output per entry, entry order and id order preserved.
///
/// Ids missing from the index are skipped: a category deleted from the
/// catalog must not break entries that still reference it.
pub fn classify(entries: &[LogEntry], index: &CategoryIndex) -> Vec<ClassifiedEvent> {
    entries
        .iter()
        .map(|entry| {
            let mut positive = Vec::new();
            let mut negative = Vec::new();
            for id in &entry.category_ids {
                if let Some(info) = index.get(id) {
                    match info.kind {
                        CategoryKind::Positive => positive.push(info.name.clone()),
                        CategoryKind::Negative => negative.push(info.name.clone()),
                    }
                }
            }
            ClassifiedEvent {
                date: entry.date.clone(),
                positive,
                negative,
            }
        })
        .collect()
}

/// Counts positive and negative references per entry and in total.
///
/// One `DailyAggregate` is produced per entry, in input order; entries that
/// share a date are not merged, and `total_days` counts entries rather than
/// distinct dates. Ids missing from the index follow the same skip policy as
/// `classify` and are tallied into `unknown_categories`.
pub fn aggregate(entries: &[LogEntry], index: &CategoryIndex) -> PeriodAggregate {
    let mut total_positive = 0u64;
    let mut total_negative = 0u64;
    let mut unknown_categories = 0u64;
    let mut daily = Vec::with_capacity(entries.len());

    for entry in entries {
        let mut positive = 0u64;
        let mut negative = 0u64;
        for id in &entry.category_ids {
            match index.get(id) {
                Some(info) => match info.kind {
                    CategoryKind::Positive => positive += 1,
                    CategoryKind::Negative => negative += 1,
                },
                None => unknown_categories += 1,
            }
        }

        total_positive += positive;
        total_negative += negative;
        daily.push(DailyAggregate {
            id: entry.id.clone(),
            date: entry.date.clone(),
            positive,
            negative,
        });
    }

    PeriodAggregate {
        daily,
        total_positive,
        total_negative,
        total_days: entries.len() as u64,
        unknown_categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn category(id: u32, name: &str, kind: CategoryKind) -> Category {
        Category {
            id,
            name: name.to_string(),
            kind,
        }
    }

    fn catalog() -> CategoriesData {
        CategoriesData {
            data: vec![
                category(1, "Slept well", CategoryKind::Positive),
                category(2, "Argument", CategoryKind::Negative),
                category(3, "Exercised", CategoryKind::Positive),
            ],
        }
    }

    fn entry(id: &str, date: &str, category_ids: Vec<u32>) -> LogEntry {
        LogEntry {
            id: id.to_string(),
            date: date.to_string(),
            category_ids,
            memo: None,
        }
    }

    #[test]
    fn empty_inputs_yield_empty_outputs() {
        let index = build_index(&catalog());

        assert!(classify(&[], &index).is_empty());

        let summary = aggregate(&[], &index);
        assert!(summary.daily.is_empty());
        assert_eq!(summary.total_positive, 0);
        assert_eq!(summary.total_negative, 0);
        assert_eq!(summary.total_days, 0);
        assert_eq!(summary.unknown_categories, 0);
    }

    #[test]
    fn empty_catalog_yields_empty_index() {
        let index = build_index(&CategoriesData::default());
        assert!(index.is_empty());
    }

    #[test]
    fn mixed_entry_counts_each_kind() {
        let index = build_index(&catalog());
        let entries = [entry("a", "2024-06-01", vec![1, 2])];

        let summary = aggregate(&entries, &index);
        assert_eq!(
            summary.daily,
            vec![DailyAggregate {
                id: "a".to_string(),
                date: "2024-06-01".to_string(),
                positive: 1,
                negative: 1,
            }]
        );
        assert_eq!(summary.total_positive, 1);
        assert_eq!(summary.total_negative, 1);
        assert_eq!(summary.total_days, 1);
    }

    #[test]
    fn duplicate_ids_are_counted_twice() {
        let index = build_index(&catalog());
        let entries = [entry("a", "2024-06-01", vec![1, 1])];

        let summary = aggregate(&entries, &index);
        assert_eq!(summary.daily[0].positive, 2);
        assert_eq!(summary.total_positive, 2);

        let events = classify(&entries, &index);
        assert_eq!(events[0].positive, vec!["Slept well", "Slept well"]);
    }

    #[test]
    fn unknown_ids_are_skipped_by_both_passes() {
        let index = build_index(&catalog());
        let entries = [entry("a", "2024-06-01", vec![999])];

        let events = classify(&entries, &index);
        assert_eq!(events[0].date, "2024-06-01");
        assert!(events[0].positive.is_empty());
        assert!(events[0].negative.is_empty());

        let summary = aggregate(&entries, &index);
        assert_eq!(summary.daily[0].positive, 0);
        assert_eq!(summary.daily[0].negative, 0);
        assert_eq!(summary.unknown_categories, 1);
    }

    #[test]
    fn same_date_entries_stay_separate() {
        let index = build_index(&catalog());
        let entries = [
            entry("a", "2024-06-02", vec![1]),
            entry("b", "2024-06-02", vec![2]),
        ];

        let summary = aggregate(&entries, &index);
        assert_eq!(summary.daily.len(), 2);
        assert_eq!(summary.daily[0].id, "a");
        assert_eq!(summary.daily[1].id, "b");
        assert_eq!(summary.total_days, 2);
    }

    #[test]
    fn classify_preserves_entry_and_name_order() {
        let index = build_index(&catalog());
        let entries = [
            entry("b", "2024-06-03", vec![3, 2, 1]),
            entry("a", "2024-06-01", vec![1]),
        ];

        let events = classify(&entries, &index);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date, "2024-06-03");
        assert_eq!(events[0].positive, vec!["Exercised", "Slept well"]);
        assert_eq!(events[0].negative, vec!["Argument"]);
        assert_eq!(events[1].date, "2024-06-01");
        assert_eq!(events[1].positive, vec!["Slept well"]);
    }

    #[test]
    fn duplicate_catalog_ids_take_the_last_occurrence() {
        let catalog = CategoriesData {
            data: vec![
                category(1, "Old name", CategoryKind::Positive),
                category(1, "New name", CategoryKind::Negative),
            ],
        };

        let index = build_index(&catalog);
        assert_eq!(index.len(), 1);
        let info = index.get(&1).expect("missing id");
        assert_eq!(info.name, "New name");
        assert_eq!(info.kind, CategoryKind::Negative);
    }

    #[test]
    fn totals_account_for_every_referenced_id() {
        let index = build_index(&catalog());
        let entries = [
            entry("a", "2024-06-01", vec![1, 2, 3, 999]),
            entry("b", "2024-06-02", vec![2, 2]),
        ];

        let summary = aggregate(&entries, &index);
        let referenced: u64 = entries.iter().map(|e| e.category_ids.len() as u64).sum();
        assert_eq!(
            summary.total_positive + summary.total_negative + summary.unknown_categories,
            referenced
        );
    }

    #[test]
    fn aggregation_is_pure() {
        let index = build_index(&catalog());
        let entries = [
            entry("a", "2024-06-01", vec![1, 2]),
            entry("b", "2024-06-05", vec![3]),
        ];

        assert_eq!(aggregate(&entries, &index), aggregate(&entries, &index));
        assert_eq!(classify(&entries, &index), classify(&entries, &index));
    }
}
