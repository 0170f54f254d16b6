//! Tests for sorting strategy implementations

#[cfg(test)]
mod tests {
    use crate::query::sorting::{
        KeyedEntry, OptionalKey, ParallelSort, SerialSort, SortStrategy,
    };
    use crate::query::types::SortOrder;
    use pageview_model::{FieldAccess, Record, Value};

    fn create_test_record(id: i64, name: &str, score: Option<Value>) -> Record {
        let mut record = Record::new().with("id", id).with("name", name);
        if let Some(score) = score {
            record.insert("score", score);
        }
        record
    }

    fn create_test_records() -> Vec<Record> {
        vec![
            create_test_record(1, "Zebra", Some(Value::Int(5))),
            create_test_record(2, "Apple", Some(Value::Float(2.5))),
            create_test_record(3, "Mango", None),
            create_test_record(4, "Banana", Some(Value::Int(5))),
            create_test_record(5, "Cherry", Some(Value::Null)),
            create_test_record(6, "Date", Some(Value::Float(7.25))),
        ]
    }

    fn sorted_ids(
        records: &[Record],
        field: &str,
        order: SortOrder,
        strategy: &dyn SortStrategy,
    ) -> Vec<i64> {
        let mut entries: Vec<KeyedEntry<'_>> = records
            .iter()
            .enumerate()
            .map(|(index, record)| KeyedEntry::new(OptionalKey::new(record.field(field)), index))
            .collect();
        strategy.sort_entries(&mut entries, order);
        entries
            .iter()
            .map(|entry| match records[entry.index].get("id") {
                Some(Value::Int(id)) => *id,
                _ => panic!("record without id"),
            })
            .collect()
    }

    #[test]
    fn test_text_sort_both_directions() {
        let records = create_test_records();

        let asc = sorted_ids(&records, "name", SortOrder::Ascending, &SerialSort);
        assert_eq!(asc, vec![2, 4, 5, 6, 3, 1]);

        let desc = sorted_ids(&records, "name", SortOrder::Descending, &SerialSort);
        assert_eq!(desc, vec![1, 3, 6, 5, 4, 2]);
    }

    #[test]
    fn test_mixed_numbers_with_missing_values() {
        let records = create_test_records();

        // Missing and null scores trail in both directions, ties keep input order
        let asc = sorted_ids(&records, "score", SortOrder::Ascending, &SerialSort);
        assert_eq!(asc, vec![2, 1, 4, 6, 3, 5]);

        let desc = sorted_ids(&records, "score", SortOrder::Descending, &SerialSort);
        assert_eq!(desc, vec![6, 1, 4, 2, 3, 5]);
    }

    #[test]
    fn test_unknown_field_keeps_input_order() {
        let records = create_test_records();
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let ids = sorted_ids(&records, "missing", order, &SerialSort);
            assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn test_parallel_sort_small_dataset() {
        let records = create_test_records();
        // Threshold above the dataset size falls back to the serial path
        let parallel = ParallelSort::new();
        assert!(!parallel.applies_to(records.len()));

        for order in [SortOrder::Ascending, SortOrder::Descending] {
            assert_eq!(
                sorted_ids(&records, "score", order, &parallel),
                sorted_ids(&records, "score", order, &SerialSort)
            );
        }
    }

    #[test]
    fn test_parallel_sort_forced() {
        let records = create_test_records();
        let parallel = ParallelSort::with_threshold(1);
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            assert_eq!(
                sorted_ids(&records, "name", order, &parallel),
                sorted_ids(&records, "name", order, &SerialSort)
            );
        }
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(SerialSort.name(), "serial");
        let expected = if cfg!(feature = "parallel-sorting") {
            "parallel"
        } else {
            "serial"
        };
        assert_eq!(ParallelSort::new().name(), expected);
    }
}
