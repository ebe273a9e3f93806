fn main() {
    env_logger::init();

    if let Err(error) = obj_ingest::app::run_from_env() {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}
