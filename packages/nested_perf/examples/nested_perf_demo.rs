//! Prints the lines produced by a few typical measurement patterns.
//!
//! Set `RUST_LOG=nested_perf=trace` to also see the diagnostic events of the logger.

use std::fmt::Display;
use std::thread;
use std::time::Duration;

use nested_perf::NestedPerfLogger;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut logger = NestedPerfLogger::new();
    let separator = "=".repeat(80);

    println!("{}", logger.log_headers());
    println!("{separator}");

    // Unlabeled measurement with intermediate reports.
    println!("{}", logger.start("", "Testing for 100 ms"));
    println!("{}", logger.log("Intermediate Log Message #1"));
    thread::sleep(Duration::from_millis(100));
    println!("{}", logger.log("Intermediate Log Message #2"));
    println!("{}", logger.stop("Testing for 100 ms"));
    println!("{separator}");

    // Keyed measurement.
    println!("{}", logger.start("Key", "Testing 50 ms w Key"));
    thread::sleep(Duration::from_millis(50));
    println!("{}", logger.stop("Testing 50 ms w Key"));
    println!("{separator}");

    // Keyed measurement with additional data of mixed types.
    let data: [&dyn Display; 2] = [&123, &"key-value"];
    println!(
        "{}",
        logger.start_with_data("Product", "Testing for 50 ms w Addl. data", data)
    );
    thread::sleep(Duration::from_millis(50));
    println!("{}", logger.stop("Testing for 50 ms w Addl. data"));
    println!("{separator}");

    // Nested measurements, the innermost inheriting the key of its parent.
    let message = "Testing for 150 ms w Addl. data and Nested Measurements";
    println!("{}", logger.start_with_data("Product", message, ["Shoe"]));
    thread::sleep(Duration::from_millis(50));
    println!(
        "{}",
        logger.start_with_data("Item", message, ["Steve Madden Men's Jagwar"])
    );
    thread::sleep(Duration::from_millis(50));
    println!("{}", logger.start_with_data("Node", message, ["Men's Shoes"]));
    println!("{}", logger.start_with_data("", "Node-Nested", [3]));
    thread::sleep(Duration::from_millis(50));
    println!("{}", logger.log("done"));
    while !logger.is_empty() {
        println!("{}", logger.stop("done"));
    }
    println!("{separator}");
}
