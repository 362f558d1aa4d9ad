use std::collections::LinkedList;
use std::fmt::Display;

use circ_buffer::collections::circ::{Backing, RingBuffer};
use log::{LevelFilter, info};

fn show<T: Display, const CAP: usize, B: Backing<T>>(label: &str, buf: &RingBuffer<T, CAP, B>) {
    println!("{label:>20}: {buf}  (len {}, cap {})", buf.len(), buf.capacity());
}

fn walk<B: Backing<i32> + Clone>(mut buf: RingBuffer<i32, 6, B>) {
    show("Empty", &buf);
    for i in 1..=8 {
        buf.push(i);
        show(&format!("After pushing {i}"), &buf);
    }

    buf.advance_front();
    show("After advance_front", &buf);

    buf.reset();
    show("After reset", &buf);

    buf.fill(0);
    buf.push(1);
    show("After fill and push", &buf);

    let copy = buf.clone();
    for slot in buf.slots_mut() {
        *slot = 9;
    }
    show("Original overwritten", &buf);
    show("Clone", &copy);
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Array backing");
    walk(RingBuffer::from_array([0; 6]));

    info!("Vec backing");
    walk(RingBuffer::<_, 6, Vec<i32>>::new());

    info!("LinkedList backing");
    walk(RingBuffer::<_, 6, LinkedList<i32>>::new());
}
