use crate::memory::*;

/// Enum with possible abort strategies.
/// These strategies specify when a running clustering is stopped before `max_iterations` is reached.
///
/// Every strategy stops as soon as an assignment pass moved no point into another cluster:
/// at that point the clustering is a fixed point and further passes can not change anything.
#[derive(Clone, Debug, Default)]
pub enum AbortStrategy<T: Primitive> {
	/// Stop after the first pass in which no point changed its cluster.
	#[default]
	NoReassignment,
	/// This strategy additionally aborts the calculation directly after a pass produced no improvement
	/// of the inertia where `improvement > threshold` for the first time.
	/// ## Fields:
	/// - **threshold**: Threshold, used to detect an improvement (`improvement > threshold`)
	NoImprovement { threshold: T },
	/// This strategy additionally aborts the calculation, when there have not been any improvements
	/// after **x** passes, where `improvement > threshold`.
	/// ## Fields:
	/// - **x**: The amount of consecutive passes without improvement, after which the calculation is aborted
	/// - **threshold**: Threshold, used to detect an improvement (`improvement > threshold`)
	/// - **abort_on_negative**: Specifies whether the strategy instantly aborts when a negative improvement occured (**true**), or if
	/// negative improvements are handled as "no improvements" (**false**).
	NoImprovementForXIterations { x: usize, threshold: T, abort_on_negative: bool }
}
impl<T: Primitive> AbortStrategy<T> {
	pub(crate) fn create_logic(&self) -> Box<dyn AbortStrategyLogic<T>> {
		match *self {
			AbortStrategy::NoReassignment => Box::new(NoReassignmentLogic),
			AbortStrategy::NoImprovementForXIterations{x,threshold,abort_on_negative} => Box::new(NoImprovementForXIterationsLogic {
				x, threshold, abort_on_negative,
				prev_error: T::infinity(),
				no_improvement_counter: 0
			}),
			AbortStrategy::NoImprovement{threshold} => Box::new(NoImprovementLogic {
				threshold,
				prev_error: T::infinity()
			})
		}
	}
}

pub(crate) trait AbortStrategyLogic<T: Primitive> {
	/// Function that has to be called once an assignment pass of the calculation ended.
	/// ## Arguments
	/// - **reassigned**: Whether any point changed its cluster during the pass
	/// - **error**: The inertia (distsum) measured during the pass
	/// ## Returns
	/// - **true** if the calculation should continue
	/// - **false** if the calculation should abort
	fn next(&mut self, reassigned: bool, error: T) -> bool;
}


pub(crate) struct NoReassignmentLogic;
impl<T: Primitive> AbortStrategyLogic<T> for NoReassignmentLogic {
	fn next(&mut self, reassigned: bool, _error: T) -> bool {
		reassigned
	}
}


pub(crate) struct NoImprovementLogic<T: Primitive> {
	threshold: T,
	prev_error: T
}
impl<T: Primitive> AbortStrategyLogic<T> for NoImprovementLogic<T> {
	fn next(&mut self, reassigned: bool, error: T) -> bool {
		let improvement = self.prev_error - error;
		self.prev_error = error;
		reassigned && improvement > self.threshold
	}
}


pub(crate) struct NoImprovementForXIterationsLogic<T: Primitive> {
	x: usize,
	threshold: T,
	abort_on_negative: bool,
	prev_error: T,
	no_improvement_counter: usize
}
impl<T: Primitive> AbortStrategyLogic<T> for NoImprovementForXIterationsLogic<T> {
	fn next(&mut self, reassigned: bool, error: T) -> bool {
		if !reassigned {
			return false;
		}
		let improvement = self.prev_error - error;
		self.prev_error = error;
		if self.abort_on_negative && improvement < T::zero() { // Negative improvement, and instant abort is requested
			return false;
		}
		if improvement > self.threshold { // positive improvement: reset no-improv-counter
			self.no_improvement_counter = 0;
		} else { // Still no improvement, count 1 up
			self.no_improvement_counter += 1;
		}
		self.no_improvement_counter < self.x
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn v<T: Primitive>(val: f64) -> T { cast(val) }

	#[test] fn test_no_reassignment_f32() { test_no_reassignment::<f32>(); }
	#[test] fn test_no_reassignment_f64() { test_no_reassignment::<f64>(); }

	fn test_no_reassignment<T: Primitive>() {
		let mut abort_strategy = AbortStrategy::<T>::default().create_logic();
		assert_eq!(abort_strategy.next(true, v(3000.0)), true);
		// inertia is ignored
		assert_eq!(abort_strategy.next(true, v(3000.0)), true);
		assert_eq!(abort_strategy.next(true, v(4000.0)), true);
		assert_eq!(abort_strategy.next(false, v(1.0)), false);
	}

	#[test] fn test_no_improvement_f32() { test_no_improvement::<f32>(); }
	#[test] fn test_no_improvement_f64() { test_no_improvement::<f64>(); }

	fn test_no_improvement<T: Primitive>() {
		{
			let mut abort_strategy = AbortStrategy::NoImprovement { threshold: v::<T>(0.0005) }.create_logic();
			assert_eq!(abort_strategy.next(true, v(3000.0)), true);
			assert_eq!(abort_strategy.next(true, v(3000.0)), false);
		}
		{
			let mut abort_strategy = AbortStrategy::NoImprovement { threshold: v::<T>(0.0005) }.create_logic();
			assert_eq!(abort_strategy.next(true, v(3000.0)), true);
			assert_eq!(abort_strategy.next(true, v(2000.0)), true);
			assert_eq!(abort_strategy.next(true, v(1999.99)), true);
			assert_eq!(abort_strategy.next(true, v(1999.99999999)), false);
		}
		{ // No reassignment always stops, regardless of improvement
			let mut abort_strategy = AbortStrategy::NoImprovement { threshold: v::<T>(0.0005) }.create_logic();
			assert_eq!(abort_strategy.next(true, v(3000.0)), true);
			assert_eq!(abort_strategy.next(false, v(1000.0)), false);
		}
	}

	#[test] fn test_no_improvement_for_x_iterations_f32() { test_no_improvement_for_x_iterations::<f32>(); }
	#[test] fn test_no_improvement_for_x_iterations_f64() { test_no_improvement_for_x_iterations::<f64>(); }

	fn test_no_improvement_for_x_iterations<T: Primitive>() {
		{
			let mut abort_strategy = AbortStrategy::NoImprovementForXIterations {
				x: 1, threshold: v::<T>(0.0005), abort_on_negative: false}.create_logic();
			assert_eq!(abort_strategy.next(true, v(3000.0)), true);
			assert_eq!(abort_strategy.next(true, v(3000.0)), false);
		}
		{
			let mut abort_strategy = AbortStrategy::NoImprovementForXIterations {
				x: 2, threshold: v::<T>(0.0005), abort_on_negative: false}.create_logic();
			assert_eq!(abort_strategy.next(true, v(3000.0)), true);
			assert_eq!(abort_strategy.next(true, v(2000.0)), true);
			assert_eq!(abort_strategy.next(true, v(2000.0)), true);
			assert_eq!(abort_strategy.next(true, v(1999.0)), true);
			assert_eq!(abort_strategy.next(true, v(1999.0)), true);
			assert_eq!(abort_strategy.next(true, v(1999.0)), false);
		}
		{ // Negative improvement before no_improvement_counter == 2
			let mut abort_strategy = AbortStrategy::NoImprovementForXIterations {
				x: 2, threshold: v::<T>(0.0005), abort_on_negative: true}.create_logic();
			assert_eq!(abort_strategy.next(true, v(3000.0)), true);
			assert_eq!(abort_strategy.next(true, v(2000.0)), true);
			assert_eq!(abort_strategy.next(true, v(2999.0)), false);
		}
		{ // Same as directly above, but negative improvements only count as "no improvement"
			let mut abort_strategy = AbortStrategy::NoImprovementForXIterations {
				x: 2, threshold: v::<T>(0.0005), abort_on_negative: false}.create_logic();
			assert_eq!(abort_strategy.next(true, v(3000.0)), true);
			assert_eq!(abort_strategy.next(true, v(2000.0)), true);
			assert_eq!(abort_strategy.next(true, v(2999.0)), true);
			assert_eq!(abort_strategy.next(true, v(2999.0)), false);
		}
		{
			let mut abort_strategy = AbortStrategy::NoImprovementForXIterations {
				x: 5, threshold: v::<T>(0.0005), abort_on_negative: false}.create_logic();
			assert_eq!(abort_strategy.next(true, v(3000.0)), true);
			assert_eq!(abort_strategy.next(false, v(2000.0)), false);
		}
	}
}
