//! strapi-postman CLI
//!
//! Binary name: `strapi-postman`

use std::process;

use strapi_postman::{app, cli};

fn main() {
    let matches = match cli::build_cli().try_get_matches() {
        Ok(matches) => matches,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            #[allow(clippy::exit)]
            process::exit(1);
        }
    };
    let options = cli::Options::from_matches(&matches);

    if let Err(e) = cli::setup::init_tracing(options.verbose) {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Error: {e}");
        }
        #[allow(clippy::exit)]
        process::exit(1);
    }

    match app::run(&options) {
        Ok(message) => {
            #[allow(clippy::print_stdout)]
            {
                println!("{message}");
            }
        }
        Err(err) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("Error: {err}");
            }

            #[allow(clippy::exit)]
            process::exit(app::exit_code(&err));
        }
    }
}
