fn main() {
    if let Err(e) = pacsearch::solver() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
