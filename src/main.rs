fn main() {
    env_logger::init();

    // 1. Parse commandline arguments
    let cli = affine3d::args::parse_cli_args();

    // 2. Run the command and print its output
    match affine3d::run(cli) {
        Ok(output) => print!("{}", output),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        },
    }
}
