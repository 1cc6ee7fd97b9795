//! Small tour of the crate's collections.

use ringlist::prelude::*;

fn main() {
    let mut deque: AnchoredDeque<&str> = AnchoredDeque::new();
    deque.push_back("beta");
    deque.push_back("gamma");
    deque.push_front("alpha");

    println!("deque: {deque:?} (len {})", deque.len());
    println!("head: {:?}, tail: {:?}", deque.front(), deque.back());

    if let Some(handle) = deque.find(|word| word.len() == 5) {
        let removed = deque.remove_handle(handle);
        println!("removed first 5-letter word: {removed:?}");
    }

    print!("forward:");
    for word in deque.iter() {
        print!(" {word}");
    }
    println!();

    print!("reverse:");
    for word in deque.rev_iter() {
        print!(" {word}");
    }
    println!();

    let scores = cons![3 => 1 => 4 => 1 => 5];
    println!("scores: {scores:?}");
    println!("sorted: {:?}", scores.sorted_by(&Natural));
    println!("descending: {:?}", scores.sorted_by(&Reversed(Natural)));
    println!("odd only: {:?}", scores.filter(|v| v % 2 == 1));
    println!("sum: {}", scores.fold_right(0, |v, acc| v + acc));
}
