fn main() {
    if let Err(e) = lc_drv::main() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
