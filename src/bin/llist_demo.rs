//! Singly-linked list demonstration: head and tail tracking under
//! every mutation operation, with errors handled as values.
//!
//! Run with: cargo run --bin llist_demo

use llist::{LinkedList, ListError, Node};

fn main() -> Result<(), ListError> {
    println!("=== Singly-linked list with head and tail tracking ===\n");

    // =========================================================================
    // Endpoint inserts
    // =========================================================================
    println!("Endpoint inserts (O(1))");
    println!("{}", "=".repeat(60));

    let mut list = LinkedList::new();
    println!("empty list:                  {}", list);

    list.add_first(Node::new("a"));
    println!("after add_first(\"a\"):        {}", list);

    list.add_last(Node::new("z"));
    println!("after add_last(\"z\"):         {}", list);
    print_endpoints(&list);

    // =========================================================================
    // Value-relative inserts
    // =========================================================================
    println!("\nValue-relative inserts (O(n), first match wins)");
    println!("{}", "=".repeat(60));

    list.add_after(&"z", Node::new("b"))?;
    println!("after add_after(\"z\", \"b\"):   {}", list);
    print_endpoints(&list);

    list.add_before(&"z", Node::new("1"))?;
    println!("after add_before(\"z\", \"1\"):  {}", list);
    print_endpoints(&list);

    // =========================================================================
    // Removal by value
    // =========================================================================
    println!("\nRemoval by value hands the data back");
    println!("{}", "=".repeat(60));

    let data = list.remove(&"a")?;
    println!("remove(\"a\") returned {:?}:    {}", data, list);
    print_endpoints(&list);

    let data = list.remove(&"b")?;
    println!("remove(\"b\") returned {:?}:    {}", data, list);
    print_endpoints(&list);

    // =========================================================================
    // Errors are values
    // =========================================================================
    println!("\nFailed scans report errors and leave the list untouched");
    println!("{}", "=".repeat(60));

    if let Err(err) = list.remove(&"missing") {
        println!("remove(\"missing\"):           {}", err);
    }
    if let Err(err) = list.add_after(&"missing", Node::new("x")) {
        println!("add_after(\"missing\", ..):    {}", err);
    }
    if let Err(err) = list.add_before(&"missing", Node::new("x")) {
        println!("add_before(\"missing\", ..):   {}", err);
    }
    println!("list afterwards:             {}", list);

    let mut fresh: LinkedList<&str> = LinkedList::new();
    if let Err(err) = fresh.add_after(&"a", Node::new("x")) {
        println!("add_after on an empty list:  {}", err);
    }

    // =========================================================================
    // Walking the chain
    // =========================================================================
    println!("\nWalking the chain");
    println!("{}", "=".repeat(60));

    let numbers: LinkedList<i32> = (1..=5).collect();
    println!("collected from 1..=5:        {}", numbers);

    let total: i32 = numbers.iter().map(|node| node.data).sum();
    println!("sum over iter():             {}", total);
    println!("len():                       {}", numbers.len());

    // =========================================================================
    // Draining to empty
    // =========================================================================
    println!("\nDraining to empty clears both endpoints");
    println!("{}", "=".repeat(60));

    while let Some(front) = list.head().map(|node| node.data) {
        let removed = list.remove(&front)?;
        println!("removed {:?}, list is now:   {}", removed, list);
    }
    println!(
        "is_empty: {}, head: {:?}, tail: {:?}",
        list.is_empty(),
        list.head().map(|node| node.data),
        list.tail().map(|node| node.data)
    );

    Ok(())
}

fn print_endpoints(list: &LinkedList<&str>) {
    match (list.head(), list.tail()) {
        (Some(head), Some(tail)) => println!("  head = {}, tail = {}", head, tail),
        _ => println!("  head = None, tail = None"),
    }
}
