use super::write_listing;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use chrono::{DateTime, Local, TimeDelta, Utc};
use std::collections::{BTreeSet, VecDeque};
use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

/// `ctime(3)` layout, without the trailing newline.
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

pub struct ContainerUtilsDemo {
    busy_loop_iterations: u64,
    sleep_ms: u64,
}

impl ContainerUtilsDemo {
    pub fn new(busy_loop_iterations: u64, sleep_ms: u64) -> Self {
        Self {
            busy_loop_iterations,
            sleep_ms,
        }
    }

    fn queues(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\n1. Queue (FIFO) Demo:")?;
        let mut queue = VecDeque::from([10, 20, 30]);
        write!(out, "Queue elements (FIFO order): ")?;
        while let Some(front) = queue.pop_front() {
            write!(out, "{} ", front)?;
        }
        writeln!(out)?;

        writeln!(out, "\n2. Deque Demo:")?;
        let mut deque = VecDeque::from([1, 2, 3]);
        deque.push_front(0);
        deque.push_back(4);
        write_listing(out, "Deque elements", &deque)?;
        if let (Some(front), Some(back)) = (deque.front(), deque.back()) {
            writeln!(out, "Front: {}, Back: {}", front, back)?;
        }

        writeln!(out, "\n3. Stack (LIFO) Demo:")?;
        let mut stack = vec![1, 2, 3];
        write!(out, "Stack elements (LIFO order): ")?;
        while let Some(top) = stack.pop() {
            write!(out, "{} ", top)?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn numeric_and_functional(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\n4. Numeric Algorithms:")?;
        let nums = [1, 2, 3, 4, 5];
        let sum: i32 = nums.iter().sum();
        let product = nums.iter().fold(1, |acc, x| acc * x);
        writeln!(out, "Sum: {}, Product: {}", sum, product)?;

        let v1 = [1, 2, 3];
        let v2 = [4, 5, 6];
        let dot: i32 = v1.iter().zip(v2.iter()).map(|(a, b)| a * b).sum();
        writeln!(out, "Dot product: {}", dot)?;

        writeln!(out, "\n5. Functional Programming:")?;
        let numbers: Vec<i32> = (1..=10).collect();
        write_listing(out, "Even numbers", numbers.iter().filter(|&&n| n % 2 == 0))?;

        let is_greater_than = |x: i32, y: i32| x > y;
        let is_greater_than_5 = |x: i32| is_greater_than(x, 5);
        write_listing(
            out,
            "Numbers > 5",
            numbers.iter().copied().filter(|&n| is_greater_than_5(n)),
        )?;

        writeln!(out, "\n6. for_each Demo:")?;
        write!(out, "Squared numbers: ")?;
        numbers
            .iter()
            .try_for_each(|n| write!(out, "{} ", n * n))?;
        writeln!(out)?;

        writeln!(out, "\n7. Combined Example:")?;
        let mut data = VecDeque::from([5, 3, 8, 1, 9, 4, 7, 2, 6]);
        write_listing(out, "Original data", &data)?;
        for _ in 0..3 {
            if let Some(front) = data.pop_front() {
                data.push_back(front);
            }
        }
        write_listing(out, "After moving first 3 to end", &data)?;
        Ok(())
    }

    fn sets_and_tuples(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\n8. Set and Tuple Demo:")?;

        writeln!(out, "\nSet Demo:")?;
        let mut fruits: BTreeSet<&str> = ["apple", "banana", "orange", "mango"].into();
        let inserted = fruits.insert("banana");
        writeln!(
            out,
            "Insert 'banana' again: {}",
            if inserted {
                "Inserted"
            } else {
                "Not inserted (duplicate)"
            }
        )?;
        fruits.insert("grape");
        if fruits.contains("apple") {
            writeln!(out, "Found 'apple' in the set")?;
        }
        write_listing(out, "All fruits (sorted)", &fruits)?;

        writeln!(out, "\nTuple Demo:")?;
        let student1: (String, i32, f64) = ("Kim".to_string(), 25, 3.8);
        let student2 = ("Lee".to_string(), 23, 4.2);
        writeln!(
            out,
            "Student 1: {}, {} years old, GPA: {}",
            student1.0, student1.1, student1.2
        )?;

        let (name, age, gpa) = &student2;
        writeln!(out, "Student 2: {}, {} years old, GPA: {}", name, age, gpa)?;

        // Lexicographic: names are compared first.
        if student1 > student2 {
            writeln!(out, "Student 1 is ordered after Student 2")?;
        } else {
            writeln!(out, "Student 1 is ordered before Student 2")?;
        }

        let mut score = 85;
        let student3 = (name, age, &mut score);
        *student3.2 = 90;
        writeln!(
            out,
            "Updated score through tuple reference: {}",
            student3.2
        )?;

        writeln!(out, "Set and Tuple demo completed.")?;
        Ok(())
    }

    fn time(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\n9. Time Library Demo:")?;

        writeln!(out, "\n1. Time Durations:")?;
        let one_second = Duration::from_secs(1);
        let half_second = Duration::from_millis(500);
        let total = one_second + half_second;
        writeln!(out, "1s + 500ms = {}ms", total.as_millis())?;
        writeln!(out, "In seconds: {}s", total.as_secs())?;

        writeln!(out, "\n2. Time Measurement:")?;
        let start = Instant::now();
        let mut calc_sum: u64 = 0;
        for i in 0..self.busy_loop_iterations {
            calc_sum = calc_sum.wrapping_add(i);
        }
        std::hint::black_box(calc_sum);
        let elapsed = start.elapsed();
        writeln!(out, "Calculation took {} ns", elapsed.as_nanos())?;
        writeln!(out, "Or {} microseconds", elapsed.as_micros())?;

        writeln!(out, "\n3. System Clock:")?;
        let now: DateTime<Local> = Local::now();
        writeln!(out, "Current time: {}", now.format(CTIME_FORMAT))?;
        let tomorrow = now + TimeDelta::hours(24);
        writeln!(out, "This time tomorrow: {}", tomorrow.format(CTIME_FORMAT))?;

        writeln!(out, "\n4. Time Since Epoch:")?;
        let since_epoch = Utc::now().timestamp();
        writeln!(out, "Seconds since epoch: {}s", since_epoch)?;
        writeln!(out, "Hours since epoch: {}h", since_epoch / 3600)?;

        writeln!(out, "\n5. Monotonic Clock (for measurements):")?;
        let steady_start = Instant::now();
        thread::sleep(Duration::from_millis(self.sleep_ms));
        let steady = steady_start.elapsed();
        writeln!(out, "Operation took {}ms (using Instant)", steady.as_millis())?;

        writeln!(out, "Time demo completed.")?;
        Ok(())
    }
}

impl Demo for ContainerUtilsDemo {
    fn name(&self) -> &'static str {
        "container-utils"
    }

    fn title(&self) -> &'static str {
        "Container Utilities Demo"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\n=== Container Utilities Demo ===")?;
        self.queues(out)?;
        self.numeric_and_functional(out)?;
        self.sets_and_tuples(out)?;
        self.time(out)?;
        writeln!(out, "Container utilities demo completed.")?;
        Ok(())
    }
}
