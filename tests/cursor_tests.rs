use cursorseq::Sequence;

#[test]
fn test_new_sequence_has_no_current_item() {
    let seq: Sequence<i32> = Sequence::new(5);

    assert_eq!(seq.size(), 0);
    assert!(seq.is_empty());
    assert!(!seq.is_item());
    assert_eq!(seq.position(), None);
}

#[test]
fn test_start_on_empty_sequence() {
    let mut seq: Sequence<i32> = Sequence::new(5);
    seq.start();
    assert!(!seq.is_item());
}

#[test]
fn test_start_selects_first_item() {
    let mut seq = Sequence::new(5);
    seq.attach(1);
    seq.attach(2);
    seq.attach(3);
    assert_eq!(*seq.current(), 3);

    seq.start();
    assert!(seq.is_item());
    assert_eq!(*seq.current(), 1);
    assert_eq!(seq.position(), Some(0));
}

#[test]
fn test_advance_walks_every_item() {
    let mut seq: Sequence<i32> = (1..=4).collect();

    let mut visited = Vec::new();
    seq.start();
    while seq.is_item() {
        visited.push(*seq.current());
        seq.advance();
    }

    assert_eq!(visited, vec![1, 2, 3, 4]);
    assert_eq!(seq.position(), None);
}

#[test]
fn test_advance_from_last_item_ends_iteration() {
    let mut seq = Sequence::new(3);
    seq.attach("a");
    seq.attach("b");
    assert_eq!(seq.position(), Some(1));

    seq.advance();
    assert!(!seq.is_item());
    // The sentinel sits right after the last item
    assert_eq!(seq.size(), 2);
}

#[test]
fn test_advance_moves_to_next_item() {
    let mut seq: Sequence<char> = "xyz".chars().collect();
    seq.start();
    seq.advance();
    assert_eq!(*seq.current(), 'y');
    seq.advance();
    assert_eq!(*seq.current(), 'z');
}

#[test]
fn test_current_mut_edits_in_place() {
    let mut seq: Sequence<String> = ["one", "two"].iter().map(|s| s.to_string()).collect();
    seq.start();
    seq.current_mut().push_str("!");

    assert_eq!(seq.as_slice(), &["one!".to_string(), "two".to_string()]);
    assert_eq!(seq.position(), Some(0));
}

#[test]
#[should_panic(expected = "No current item: cursor 0 is at the end of a sequence of length 0")]
fn test_current_on_empty_panics() {
    let seq: Sequence<i32> = Sequence::new(1);
    let _ = seq.current();
}

#[test]
#[should_panic(expected = "No current item: cursor 2 is at the end of a sequence of length 2")]
fn test_advance_past_end_panics() {
    let mut seq = Sequence::new(2);
    seq.attach(1);
    seq.attach(2);
    seq.advance();
    seq.advance();
}

#[test]
#[should_panic(expected = "No current item")]
fn test_current_mut_without_item_panics() {
    let mut seq = Sequence::new(2);
    seq.attach(1);
    seq.advance();
    let _ = seq.current_mut();
}
