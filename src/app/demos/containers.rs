use super::write_listing;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashSet, LinkedList, VecDeque};
use std::io::Write;

/// The less common containers: linked lists, heaps, multisets, fixed arrays.
pub struct ContainersDemo;

impl Demo for ContainersDemo {
    fn name(&self) -> &'static str {
        "containers"
    }

    fn title(&self) -> &'static str {
        "Additional Container Demos"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\n=== Additional Container Demos ===")?;

        let mut deque = VecDeque::from([1, 2, 3]);
        deque.push_front(0);
        deque.push_back(4);
        write_listing(out, "Deque", &deque)?;

        // Splice the tail `[3, 4, 5]` in front of the head.
        let mut list: LinkedList<i32> = (1..=5).collect();
        let mut tail = list.split_off(2);
        tail.append(&mut list);
        let list = tail;
        write_listing(out, "List after splice", &list)?;

        let mut singly: LinkedList<i32> = (1..=3).collect();
        singly.push_front(0);
        write_listing(out, "List after push_front", &singly)?;

        let mut stack = vec![1, 2];
        stack.pop();
        write_listing(out, "Stack after pop", &stack)?;

        let mut queue = VecDeque::from([1, 2]);
        queue.pop_front();
        write_listing(out, "Queue after pop", &queue)?;

        let mut max_heap = BinaryHeap::new();
        max_heap.push(3);
        max_heap.push(1);
        max_heap.push(4);
        if let Some(top) = max_heap.peek() {
            writeln!(out, "Priority queue top: {}", top)?;
        }

        let mut set: BTreeSet<i32> = [3, 1, 4, 1, 5].into();
        if set.insert(4) {
            writeln!(out, "Successfully inserted 4 into the set")?;
        } else {
            writeln!(out, "4 already exists in the set")?;
        }

        let mut multiset: BTreeMap<i32, usize> = BTreeMap::new();
        for value in [1, 2, 2, 3] {
            *multiset.entry(value).or_insert(0) += 1;
        }
        write_listing(
            out,
            "Multiset",
            multiset
                .iter()
                .flat_map(|(&value, &count)| std::iter::repeat(value).take(count)),
        )?;

        let hashed: HashSet<&str> = ["apple", "banana", "cherry"].into();
        writeln!(out, "Hash set holds {} fruits", hashed.len())?;

        let arr: [i32; 3] = [1, 2, 3];
        write_listing(out, "Array elements", arr)?;

        writeln!(out, "Container demos completed.")?;
        Ok(())
    }
}
