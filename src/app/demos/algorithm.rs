use super::write_listing;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use std::collections::BinaryHeap;
use std::io::Write;

pub struct AlgorithmDemo {
    sample_size: usize,
    seed: Option<u64>,
}

impl AlgorithmDemo {
    pub fn new(sample_size: usize, seed: Option<u64>) -> Self {
        Self { sample_size, seed }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Picks `amount` elements without replacement, keeping their original relative order.
pub fn ordered_sample<T: Copy>(items: &[T], amount: usize, rng: &mut StdRng) -> Vec<T> {
    let amount = amount.min(items.len());
    let mut picked = index::sample(rng, items.len(), amount).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| items[i]).collect()
}

impl Demo for AlgorithmDemo {
    fn name(&self) -> &'static str {
        "algorithm"
    }

    fn title(&self) -> &'static str {
        "Algorithm Demo"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\n=== Algorithm Demo ===")?;

        let nums: Vec<i32> = (1..=10).collect();

        let count_evens = nums.iter().filter(|&&x| x % 2 == 0).count();
        writeln!(out, "Even numbers: {}", count_evens)?;

        if let Some(first_even) = nums.iter().find(|&&x| x % 2 == 0) {
            writeln!(out, "First even number: {}", first_even)?;
        }

        let squares: Vec<i32> = nums.iter().map(|x| x * x).collect();
        let evens: Vec<i32> = nums.iter().copied().filter(|x| x % 2 == 0).collect();
        tracing::debug!("squares={:?} evens={:?}", squares, evens);

        let mut unsorted = vec![5, 3, 8, 1, 2, 9, 4, 7, 6];
        unsorted.sort();
        let has_five = unsorted.binary_search(&5).is_ok();
        writeln!(out, "Contains 5: {}", if has_five { "Yes" } else { "No" })?;

        let heap: BinaryHeap<i32> = unsorted.into_iter().collect();
        if let Some(max) = heap.peek() {
            writeln!(out, "Max element: {}", max)?;
        }

        if let (Some(min), Some(max)) = (nums.iter().min(), nums.iter().max()) {
            writeln!(out, "Min: {}, Max: {}", min, max)?;
        }

        let sum: i32 = nums.iter().sum();
        let product: i32 = nums.iter().product();
        writeln!(out, "Sum: {}, Product: {}", sum, product)?;

        let mut with_dupes = vec![1, 2, 2, 3, 4, 4, 4, 5];
        with_dupes.dedup();
        write_listing(out, "Without adjacent duplicates", &with_dupes)?;

        let mut rng = self.rng();
        let sample = ordered_sample(&nums, self.sample_size, &mut rng);
        write_listing(
            out,
            &format!("Random sample of {} elements", sample.len()),
            &sample,
        )?;

        writeln!(out, "Algorithm demo completed.")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::demos::capture;

    #[test]
    fn test_algorithm_demo_reductions() {
        let text = capture(&AlgorithmDemo::new(3, Some(7)));
        assert!(text.contains("Even numbers: 5"));
        assert!(text.contains("First even number: 2"));
        assert!(text.contains("Contains 5: Yes"));
        assert!(text.contains("Max element: 9"));
        assert!(text.contains("Min: 1, Max: 10"));
        assert!(text.contains("Sum: 55, Product: 3628800"));
        assert!(text.contains("Without adjacent duplicates: 1 2 3 4 5 "));
    }

    #[test]
    fn test_seeded_sample_is_repeatable() {
        let first = capture(&AlgorithmDemo::new(3, Some(42)));
        let second = capture(&AlgorithmDemo::new(3, Some(42)));
        assert_eq!(first, second);
        assert!(first.contains("Random sample of 3 elements: "));
    }

    #[test]
    fn test_ordered_sample_keeps_relative_order() {
        let items: Vec<i32> = (1..=10).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let sample = ordered_sample(&items, 4, &mut rng);
        assert_eq!(sample.len(), 4);
        assert!(sample.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_ordered_sample_clamps_to_len() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(ordered_sample(&[1, 2], 5, &mut rng), vec![1, 2]);
    }
}
