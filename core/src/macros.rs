// asynccond/src/macros.rs

/// Builds a [`Seq`](crate::Seq) from steps listed in execution order.
///
/// ```
/// use asynccond::{seq, Report, Seq, Step};
///
/// let pipeline: Seq<i32, String> = seq![
///   Step::value(|n: i32| async move { Report::next(n + 1) }),
///   Step::trap(|_err: String, n: i32| async move { Report::next(n) }),
/// ];
/// assert_eq!(pipeline.len(), 2);
/// ```
#[macro_export]
macro_rules! seq {
  ($($step:expr),* $(,)?) => {
    $crate::Seq::new(::std::vec![$($step),*])
  };
}
