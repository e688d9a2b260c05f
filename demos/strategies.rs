use std::rc::Rc;

use capture_guard::{Capturable, Strategy};

fn main() {
    let strategy: Strategy = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("weak")
        .parse()
        .unwrap_or_else(|err| {
            eprintln!("{err}");
            std::process::exit(2)
        });

    let greeting = Rc::new(String::from("hello"));
    let greet = greeting
        .capture_as(strategy)
        .fn_or_else(|| String::from("<gone>"), |greeting: Rc<String>, name: &str| {
            format!("{greeting}, {name}")
        });

    println!("{strategy}: {}", greet("world"));
    if strategy == Strategy::Unowned {
        // Calling an unowned capture after its object is dropped panics.
        return;
    }
    drop(greeting);
    println!("{strategy}: {}", greet("world"));
}
