use blackjack_cli::logging::init_logging;
use blackjack_cli::run;

fn main() {
    init_logging();
    let mut out = std::io::stdout();
    let mut err = std::io::stderr();
    let code = run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
