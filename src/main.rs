use ordered_list::OrderedList;

pub mod ordered_list;

fn main() {
    // Default to info-level logging so the step narration shows up without
    // any environment setup.
    if let Err(_) = std::env::var("RUST_LOG") {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let mut list = OrderedList::new();
    println!("Initial list: {}", list);

    log::info!("Appending values 10, 20, 30, 40, 50");
    for value in [10, 20, 30, 40, 50].iter() {
        list.push_back(*value);
    }
    println!("{}", list);
    println!("List size: {}", list.len());

    log::info!("Prepending value 5");
    list.push_front(5);
    println!("{}", list);

    log::info!("Inserting 25 at position 3");
    list.insert_at(3, 25);
    println!("{}", list);

    println!("Value at position 2: {}", list.get_at(2));

    let search_value = 30;
    println!(
        "Does {} exist in the list? {}",
        search_value,
        if list.contains(search_value) {
            "Yes"
        } else {
            "No"
        }
    );

    let remove_val = 25;
    log::info!("Removing first occurrence of {}", remove_val);
    if list.remove_value(remove_val) {
        println!("Removed successfully. New list: {}", list);
    } else {
        println!("Value {} not found in the list.", remove_val);
    }

    let remove_pos = 2;
    log::info!("Removing element at position {}", remove_pos);
    if list.remove_at(remove_pos) {
        println!("Removed successfully. New list: {}", list);
    } else {
        println!("Invalid position {}", remove_pos);
    }

    log::info!("Walking the remaining elements");
    for value in &list {
        log::debug!("element {}", value);
    }

    list.clear();
    println!("After clearing the list, size: {}", list.len());
}
