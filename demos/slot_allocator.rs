use word_bitmap::{capacity_words, clear_bit, find_next_clear, set_bit, weight, zero};

const SLOTS: usize = 24;

/// Claims the lowest free slot, or returns `None` when the table is full.
fn acquire(table: &mut [usize]) -> Option<usize> {
    let slot = find_next_clear(table, SLOTS, 0);
    if slot == SLOTS {
        return None;
    }
    set_bit(table, slot);
    Some(slot)
}

fn release(table: &mut [usize], slot: usize) {
    clear_bit(table, slot);
}

fn main() {
    let mut table = [0usize; capacity_words(SLOTS)];
    zero(&mut table, SLOTS);

    for _ in 0..5 {
        let slot = acquire(&mut table).unwrap();
        println!("acquired slot {slot}");
    }

    release(&mut table, 1);
    release(&mut table, 3);
    println!("released slots 1 and 3");

    // the lowest released slot is handed out again first
    let slot = acquire(&mut table).unwrap();
    println!("acquired slot {slot}");

    println!("{} of {SLOTS} slots in use", weight(&table, SLOTS));
}
