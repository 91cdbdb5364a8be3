use asynccond::{each_series, series, CondError, Report, Seq, Shared, Step, Task};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokio::runtime::Runtime; // To run async code within Criterion

// Using CondError directly for benchmark simplicity.
type BenchError = CondError;

// --- Helper: step that completes without suspending ---
fn sync_increment_step() -> Step<u64, BenchError> {
  Step::value(|n: u64| async move { Report::next(n.wrapping_add(1)) })
}

// --- Helper: continuation-style step reported from a spawned task ---
fn spawned_increment_step() -> Step<u64, BenchError> {
  Step::value_cb(|n: u64, next| {
    tokio::spawn(async move { next.ok(n.wrapping_add(1)) });
  })
}

fn failing_then_trapped(num_steps: usize) -> Seq<u64, BenchError> {
  let mut builder = Seq::builder().then(|n: u64| async move {
    Report::fail(CondError::ContinuationDropped { step: None }, n)
  });
  for _ in 0..num_steps {
    builder = builder.step(sync_increment_step());
  }
  builder.trap(|_err, n| async move { Report::next(n) }).build()
}

// --- Benchmark Functions ---

fn bench_seq_sync_steps(c: &mut Criterion) {
  let mut group = c.benchmark_group("SeqSyncSteps");
  let rt = Runtime::new().unwrap();

  for num_steps in [1usize, 10, 100, 1000].iter() {
    let pipeline: Seq<u64, BenchError> = (0..*num_steps).map(|_| sync_increment_step()).collect();
    group.throughput(Throughput::Elements(*num_steps as u64));
    group.bench_with_input(BenchmarkId::from_parameter(num_steps), num_steps, |b, _| {
      b.to_async(&rt).iter(|| async { pipeline.run(0).await });
    });
  }
  group.finish();
}

fn bench_seq_spawned_steps(c: &mut Criterion) {
  let mut group = c.benchmark_group("SeqSpawnedSteps");
  let rt = Runtime::new().unwrap();

  for num_steps in [1usize, 10, 100].iter() {
    let pipeline: Seq<u64, BenchError> = (0..*num_steps).map(|_| spawned_increment_step()).collect();
    group.throughput(Throughput::Elements(*num_steps as u64));
    group.bench_with_input(BenchmarkId::from_parameter(num_steps), num_steps, |b, _| {
      b.to_async(&rt).iter(|| async { pipeline.run(0).await });
    });
  }
  group.finish();
}

fn bench_seq_skip_to_trap(c: &mut Criterion) {
  let mut group = c.benchmark_group("SeqSkipToTrap");
  let rt = Runtime::new().unwrap();

  for num_skipped in [10usize, 100, 1000].iter() {
    let pipeline = failing_then_trapped(*num_skipped);
    group.bench_with_input(BenchmarkId::from_parameter(num_skipped), num_skipped, |b, _| {
      b.to_async(&rt).iter(|| async { pipeline.run(0).await });
    });
  }
  group.finish();
}

fn bench_series_and_each(c: &mut Criterion) {
  let mut group = c.benchmark_group("SeriesAndEach");
  let rt = Runtime::new().unwrap();

  for num_tasks in [10usize, 100].iter() {
    group.bench_with_input(BenchmarkId::new("series", num_tasks), num_tasks, |b, &n| {
      b.to_async(&rt).iter(|| async move {
        let counter = Shared::new(0u64);
        let tasks: Vec<Task<u64, BenchError>> = (0..n)
          .map(|_| {
            let counter = counter.clone();
            Task::new(move || {
              let counter = counter.clone();
              async move { Report::next(counter.update(|c| *c += 1)) }
            })
          })
          .collect();
        series(tasks).await
      });
    });

    group.bench_with_input(BenchmarkId::new("each_series", num_tasks), num_tasks, |b, &n| {
      b.to_async(&rt).iter(|| async move {
        each_series(0..n as u64, |item| async move { Report::<_, BenchError>::next(item * 2) }).await
      });
    });
  }
  group.finish();
}

criterion_group!(
  benches,
  bench_seq_sync_steps,
  bench_seq_spawned_steps,
  bench_seq_skip_to_trap,
  bench_series_and_each
);
criterion_main!(benches);
