fn main() {
    if let Err(err) = hapi_query::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
