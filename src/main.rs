fn main() {
    std::process::exit(evm_cli::run_cli());
}
