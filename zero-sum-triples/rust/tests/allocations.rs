use zero_sum_triples::find_zero_sum_triples;

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

// Duplicate runs are skipped in place: one sorted copy plus the result
// buffer, with no per-duplicate or dedup allocations.
#[test]
fn duplicate_runs_allocate_bounded() {
    const N: usize = 10_000;
    let mut values = vec![0; N];
    values.extend([-3, -3, 1, 2, 2, 1]);

    let _profiler = dhat::Profiler::builder().testing().build();

    let result = find_zero_sum_triples(&values);
    assert_eq!(result.len(), 2);

    let stats = dhat::HeapStats::get();
    dhat::assert!(stats.total_blocks <= 8);
    dhat::assert!(stats.max_bytes <= values.len() * std::mem::size_of::<i32>() + 4096);
}
