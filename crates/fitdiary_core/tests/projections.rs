use fitdiary_core::{chart_series, ordered_view, EntryInput, Record, SortMode};

fn record(id: i64, water_cups: u32) -> Record {
    Record::new(
        id,
        EntryInput {
            exercise_minutes: 10,
            calories: 100,
            water_cups,
        },
    )
}

fn ids(records: &[Record]) -> Vec<i64> {
    records.iter().map(|record| record.id).collect()
}

fn waters(records: &[Record]) -> Vec<u32> {
    records.iter().map(|record| record.water_cups).collect()
}

#[test]
fn recent_mode_orders_newest_first() {
    let collection = vec![record(100, 3), record(200, 9), record(300, 5)];

    let view = ordered_view(&collection, SortMode::Recent);
    assert_eq!(ids(&view), vec![300, 200, 100]);
}

#[test]
fn max_water_mode_orders_by_water_descending() {
    let collection = vec![record(100, 3), record(200, 9), record(300, 5)];

    let view = ordered_view(&collection, SortMode::MaxWater);
    assert_eq!(waters(&view), vec![9, 5, 3]);
}

#[test]
fn max_water_ties_keep_insertion_order() {
    let collection = vec![record(100, 9), record(200, 3), record(300, 9)];

    let view = ordered_view(&collection, SortMode::MaxWater);
    assert_eq!(ids(&view), vec![100, 300, 200]);
}

#[test]
fn ordered_view_is_a_permutation_and_leaves_input_untouched() {
    let collection = vec![record(300, 5), record(100, 3), record(200, 9)];
    let original = collection.clone();

    for mode in [SortMode::Recent, SortMode::MaxWater] {
        let view = ordered_view(&collection, mode);
        assert_eq!(view.len(), collection.len());

        let mut sorted_view = ids(&view);
        sorted_view.sort_unstable();
        let mut sorted_input = ids(&collection);
        sorted_input.sort_unstable();
        assert_eq!(sorted_view, sorted_input);
    }

    assert_eq!(collection, original);
}

#[test]
fn chart_needs_at_least_two_records() {
    assert!(chart_series(&[]).is_none());
    assert!(chart_series(&[record(100, 3)]).is_none());
    assert!(chart_series(&[record(100, 3), record(200, 9)]).is_some());
}

#[test]
fn chart_is_chronological_and_parallel() {
    let collection = vec![record(100, 3), record(200, 9), record(300, 5)];

    let series = chart_series(&collection).unwrap();
    assert_eq!(series.labels.len(), collection.len());
    assert_eq!(series.water_cups, vec![3, 9, 5]);
    for label in &series.labels {
        assert_eq!(label.len(), 5, "unexpected label shape: {label}");
        assert_eq!(&label[2..3], "/");
    }
}

#[test]
fn chart_ignores_input_order() {
    // Same records handed over newest-first; the series must still be
    // oldest-first.
    let reversed = vec![record(300, 5), record(200, 9), record(100, 3)];

    let series = chart_series(&reversed).unwrap();
    assert_eq!(series.water_cups, vec![3, 9, 5]);
}

#[test]
fn list_and_chart_orderings_are_independent() {
    // Insertion order (increasing id) with waters [3, 9, 5].
    let collection = vec![record(100, 3), record(200, 9), record(300, 5)];

    assert_eq!(
        waters(&ordered_view(&collection, SortMode::MaxWater)),
        vec![9, 5, 3]
    );
    assert_eq!(
        waters(&ordered_view(&collection, SortMode::Recent)),
        vec![5, 9, 3]
    );
    assert_eq!(chart_series(&collection).unwrap().water_cups, vec![3, 9, 5]);
}
