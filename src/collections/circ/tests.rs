#![cfg(test)]

use std::cell::Cell;
use std::collections::{LinkedList, VecDeque};
use std::fmt::Debug;
use std::mem;
use std::rc::Rc;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

fn exercise_backing<B: Backing<i32> + Debug>(mut buf: RingBuffer<i32, 10, B>) {
    assert!(buf.is_empty());
    assert_eq!(buf.front(), None, "An empty buffer should have no front.");

    for i in 1..=10 {
        buf.push(i);
        assert_eq!(buf.front(), Some(&1), "The first item should stay at the front.");
        assert_eq!(buf.len(), i as usize);
        assert_eq!(buf.is_full(), i == 10, "Only the 10th push should fill the buffer.");
    }
    assert_eq!(buf.len(), buf.capacity());
    assert_eq!(buf.back(), None, "A full buffer should have no free slot.");

    buf.push(11);
    assert_eq!(buf.front(), Some(&2), "Pushing into a full buffer should evict the oldest item.");
    buf.push(12);
    assert_eq!(buf.front(), Some(&3));
    buf.push(13);
    assert_eq!(buf.front(), Some(&4));
    assert_eq!(buf.len(), 10, "Evicting pushes shouldn't change the length.");

    buf.reset();
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.capacity(), 10, "Reset shouldn't change the capacity.");
    assert_eq!(buf.backing().len(), 10, "Reset should leave every slot in the backing.");

    for i in 1..=10 {
        buf.push(20 + i);
        assert_eq!(buf.front(), Some(&21));
        assert_eq!(buf.len(), i as usize);
    }
    assert!(buf.is_full());

    buf.push(42);
    assert_eq!(buf.front(), Some(&22));
    assert_eq!(
        buf.iter().copied().collect::<Vec<_>>(),
        [22, 23, 24, 25, 26, 27, 28, 29, 30, 42]
    );
}

#[test]
fn test_array_backing() {
    exercise_backing(RingBuffer::from_array([0; 10]));
}

#[test]
fn test_vec_backing() {
    exercise_backing(RingBuffer::<_, 10, Vec<i32>>::new());
}

#[test]
fn test_vec_deque_backing() {
    exercise_backing(RingBuffer::<_, 10, VecDeque<i32>>::new());
}

#[test]
fn test_linked_list_backing() {
    exercise_backing(RingBuffer::<_, 10, LinkedList<i32>>::new());
}

#[test]
fn test_boxed_slice_backing() {
    exercise_backing(
        RingBuffer::<_, 10, Box<[i32]>>::with_backing(vec![0; 10].into_boxed_slice())
            .expect("Backing has exactly enough slots."),
    );
}

#[test]
fn test_eviction_order() {
    let mut buf = RingBuffer::from_array([0; 3]);
    buf.extend([1, 2, 3, 4]);
    assert_eq!(buf.front(), Some(&2));

    let mut buf = RingBuffer::from_array([0; 3]);
    buf.extend([1, 2, 3, 4, 5]);
    assert_eq!(buf.front(), Some(&3));
    assert_eq!(buf.pop(), Some(3));
    assert_eq!(buf.pop(), Some(4));
    assert_eq!(buf.pop(), Some(5));
    assert_eq!(buf.pop(), None);
}

#[test]
fn test_growth() {
    let mut buf: RingBuffer<i32, 4, Vec<i32>> = RingBuffer::new();
    buf.push(1);
    buf.push(2);
    assert_eq!(buf.backing(), &vec![1, 2], "The backing should only grow as needed.");

    buf.advance_front();
    buf.advance_front();
    assert!(buf.is_empty());

    buf.push(3);
    assert_eq!(
        buf.backing(),
        &vec![3, 2],
        "Once emptied, existing slots should be reused before growing."
    );

    buf.extend([4, 5, 6]);
    assert_eq!(buf.backing(), &vec![3, 4, 5, 6]);
    assert!(buf.is_full());

    buf.push(7);
    assert_eq!(buf.backing(), &vec![7, 4, 5, 6], "A full backing should never grow.");
    assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [4, 5, 6, 7]);
}

#[test]
fn test_growth_after_partial_pop() {
    let mut buf: RingBuffer<i32, 5, Vec<i32>> = RingBuffer::new();
    buf.extend([1, 2, 3]);
    buf.pop_front();
    buf.extend([4, 5, 6]);

    assert_eq!(buf.backing(), &vec![6, 2, 3, 4, 5]);
    assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [2, 3, 4, 5, 6]);
    assert!(buf.is_full());
}

#[test]
fn test_fill() {
    let mut buf: RingBuffer<i32, 6, Vec<i32>> = RingBuffer::new();
    buf.extend([1, 2, 3]);
    buf.fill(7);
    assert!(buf.is_full());
    assert_eq!(buf.len(), 6);
    assert!(buf.iter().all(|i| *i == 7), "Every live item should equal the fill value.");

    let mut buf = RingBuffer::from_array([0; 4]);
    buf.extend([1, 2, 3, 4, 5, 6]);
    buf.fill(-1);
    assert!(buf.is_full());
    assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [-1; 4]);
}

#[test]
fn test_clone_isolation() {
    let mut original: RingBuffer<i32, 10, Vec<i32>> = RingBuffer::new();
    original.fill(0);
    original.push(1);

    let copy = original.clone();
    assert_eq!(copy, original, "A clone should hold the same items.");

    for slot in original.slots_mut() {
        *slot = 9;
    }
    drop(original);

    assert_eq!(copy.front(), Some(&0), "Writing to the original shouldn't affect the clone.");
    assert!(copy.is_full());
    assert_eq!(copy.back(), None);
    assert_eq!(copy.backing(), &vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(copy.iter().last(), Some(&1), "The newest item should be the last pushed.");
}

#[test]
fn test_clone_from() {
    let mut source = RingBuffer::from_array([0; 4]);
    source.extend(1..=6);

    let mut target = RingBuffer::from_array([0; 4]);
    target.push(100);
    target.clone_from(&source);
    assert_eq!(target, source);

    source.push(7);
    assert_eq!(target.front(), Some(&3));
    assert_eq!(source.front(), Some(&4));

    let empty: RingBuffer<i32, 5, Vec<i32>> = RingBuffer::new();
    let copy = empty.clone();
    assert!(copy.is_empty());
}

#[test]
fn test_move() {
    let mut buf: RingBuffer<i32, 4, Vec<i32>> = RingBuffer::new();
    buf.fill(1);
    buf.push(2);

    let moved = buf;
    assert_eq!(moved.front(), Some(&1));
    assert_eq!(moved.iter().copied().collect::<Vec<_>>(), [1, 1, 1, 2]);

    let mut source = moved;
    let taken = mem::take(&mut source);
    assert_eq!(taken.len(), 4);

    // The buffer left behind should still be usable.
    source.push(3);
    assert_eq!(source.front(), Some(&3));
    source.advance_front();
    assert!(source.is_empty());
}

#[test]
fn test_manual_slot_protocol() {
    let mut buf = RingBuffer::from_array([0; 3]);
    for i in 1..=3 {
        let slot = buf.back_mut().expect("The buffer isn't full yet.");
        *slot = i * 10;
        buf.advance_back();
    }
    assert!(buf.is_full());
    assert_eq!(buf.back_mut(), None);
    assert_eq!(buf.front(), Some(&10));

    buf.advance_front();
    *buf.back_mut().expect("Advancing the front should free a slot.") = 40;
    buf.advance_back();
    assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [20, 30, 40]);

    let mut buf: RingBuffer<i32, 3, Vec<i32>> = RingBuffer::new();
    assert_eq!(buf.back(), None, "A slot that hasn't been appended can't be written.");
    assert_eq!(buf.try_advance_back(), Err(NoFreeSlot { len: 0, cap: 3 }));

    buf.extend([1, 2, 3]);
    buf.reset();
    assert_eq!(buf.back(), Some(&1), "After a reset, the first slot should be free again.");
    *buf.back_mut().expect("The first slot exists.") = 4;
    buf.advance_back();
    assert_eq!(buf.front(), Some(&4));
}

#[test]
fn test_contract_violations() {
    assert_panics!(
        {
            let mut buf = RingBuffer::from_array([0; 2]);
            buf.advance_front();
        },
        "empty ring buffer"
    );

    assert_panics!(
        {
            let mut buf: RingBuffer<i32, 2, Vec<i32>> = RingBuffer::new();
            buf.push(1);
            buf.pop_front();
            buf.pop_front();
        },
        "empty ring buffer"
    );

    assert_panics!(
        {
            let mut buf = RingBuffer::from_array([0; 2]);
            buf.fill(1);
            buf.advance_back();
        },
        "No free slot"
    );

    let mut buf = RingBuffer::from_array([0; 2]);
    assert_eq!(buf.try_advance_front(), Err(BufferEmpty));
    buf.fill(1);
    assert_eq!(buf.try_advance_back(), Err(NoFreeSlot { len: 2, cap: 2 }));
    assert_eq!(buf.try_advance_front(), Ok(()));
    assert_eq!(buf.try_advance_back(), Ok(()));
}

#[test]
fn test_backing_validation() {
    let err = RingBuffer::<i32, 3, Vec<i32>>::with_backing(vec![1, 2, 3, 4]).unwrap_err();
    assert_eq!(err, BackingError::TooLong(BackingTooLong { len: 4, cap: 3 }));

    let err = RingBuffer::<i32, 3, Box<[i32]>>::with_backing(vec![1, 2].into_boxed_slice())
        .unwrap_err();
    assert!(err.is_too_short());
    assert_eq!(
        err.to_string(),
        "Backing can hold at most 2 slots, short of ring buffer capacity 3!"
    );

    let mut buf = RingBuffer::<i32, 3, Vec<i32>>::with_backing(vec![7, 8])
        .expect("A vector can grow to any capacity.");
    assert!(buf.is_empty(), "Existing slots should be treated as free.");
    buf.extend([1, 2, 3]);
    assert_eq!(buf.backing(), &vec![1, 2, 3]);

    assert_panics!(
        {
            RingBuffer::<i32, 3, Box<[i32]>>::new();
        },
        "short of ring buffer capacity"
    );
}

#[test]
fn test_zero_capacity() {
    let mut buf: RingBuffer<i32, 0, Vec<i32>> = RingBuffer::new();
    assert!(buf.is_empty());
    assert!(buf.is_full());

    buf.push(1);
    buf.fill(2);
    assert_eq!(buf.len(), 0);
    assert!(buf.backing().is_empty(), "Nothing should be stored with capacity 0.");
    assert_eq!(buf.front(), None);
    assert_eq!(buf.try_advance_front(), Err(BufferEmpty));
    assert!(buf.try_advance_back().is_err());
    assert_eq!(buf.to_string(), "[empty ring buffer]");
}

#[test]
fn test_capacity_one() {
    let mut buf = RingBuffer::from_array([0]);
    for i in 1..=3 {
        buf.push(i);
        assert_eq!(buf.front(), Some(&i));
        assert!(buf.is_full());
    }
    buf.advance_front();
    assert!(buf.is_empty());
    buf.push(4);
    assert_eq!(buf.front(), Some(&4));
}

#[test]
fn test_drop() {
    let drops = Rc::new(Cell::new(0));
    let mut buf: RingBuffer<CountedDrop, 2, Vec<CountedDrop>> = RingBuffer::new();
    buf.push(CountedDrop::new(0, &drops));
    buf.push(CountedDrop::new(1, &drops));
    assert_eq!(drops.get(), 0);

    buf.push(CountedDrop::new(2, &drops));
    assert_eq!(drops.get(), 1, "Overwriting a slot should drop the evicted item.");
    assert_eq!(buf.front().map(|i| i.id), Some(1));

    buf.advance_front();
    buf.reset();
    assert_eq!(drops.get(), 1, "Removed items should stay in the backing until overwritten.");

    buf.push(CountedDrop::new(3, &drops));
    assert_eq!(drops.get(), 2);

    drop(buf);
    assert_eq!(drops.get(), 4, "Dropping the buffer should drop every slot.");
}

#[test]
fn test_zst_support() {
    let mut buf: RingBuffer<ZeroSizedType, 4, Vec<ZeroSizedType>> = RingBuffer::new();
    for _ in 0..6 {
        buf.push(ZeroSizedType);
    }
    assert!(buf.is_full());
    assert_eq!(buf.backing().len(), 4);
    assert_eq!(buf.iter().count(), 4);
}

#[test]
fn test_push_with() {
    let mut calls = 0;
    let mut buf = RingBuffer::from_array([String::new(), String::new()]);
    for word in ["a", "b", "c"] {
        buf.push_with(|| {
            calls += 1;
            word.to_owned()
        });
    }
    assert_eq!(calls, 3);
    assert_eq!(buf.front().map(String::as_str), Some("b"));
}

#[test]
fn test_iterators() {
    let mut buf = RingBuffer::from_array([0; 3]);
    buf.extend(1..=5);

    let mut iter = buf.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.next(), Some(&4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    assert_eq!((&buf).into_iter().rev().copied().collect::<Vec<_>>(), [5, 4, 3]);

    if let Some(front) = buf.front_mut() {
        *front = 30;
    }
    if let Some(item) = buf.get_mut(2) {
        *item = 50;
    }
    assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [30, 4, 50]);

    let collected: RingBuffer<i32, 3, Vec<i32>> = (1..=5).collect();
    assert_eq!(collected.len(), 3);
    assert_eq!(collected.front(), Some(&3));
}

#[test]
fn test_equality() {
    let mut arr = RingBuffer::from_array([0; 3]);
    arr.extend([1, 2, 3, 4]);

    let mut list: RingBuffer<i32, 3, LinkedList<i32>> = RingBuffer::new();
    list.extend([2, 3, 4]);

    assert_eq!(arr, list, "Equality should only consider live items, in order.");

    list.push(5);
    assert_ne!(arr, list);
}

#[test]
fn test_display() {
    let mut buf: RingBuffer<i32, 3, Vec<i32>> = RingBuffer::new();
    assert_eq!(buf.to_string(), "[empty ring buffer]");

    buf.push(1);
    assert_eq!(buf.to_string(), "[1]");

    buf.extend([2, 3, 4]);
    assert_eq!(buf.to_string(), "4],[2,3");

    buf.reset();
    assert_eq!(buf.to_string(), "[]4,2,3");

    let mut list: RingBuffer<i32, 4, LinkedList<i32>> = RingBuffer::new();
    list.extend([1, 2, 3, 4, 5, 6]);
    list.pop_front();
    assert_eq!(list.to_string(), "5,6],3,[4");
}

#[cfg(feature = "heapless")]
#[test]
fn test_heapless_backing() {
    let mut buf: RingBuffer<u8, 4, heapless::Vec<u8, 4>> = RingBuffer::new();
    buf.extend(1..=6);
    assert_eq!(buf.backing().as_slice(), &[5, 6, 3, 4]);
    assert_eq!(buf.front(), Some(&3));

    let err = RingBuffer::<u8, 4, heapless::Vec<u8, 2>>::with_backing(heapless::Vec::new())
        .unwrap_err();
    assert_eq!(err, BackingError::TooShort(BackingTooShort { max_len: 2, cap: 4 }));
}
