// Usage: stylint [PATHS]... [--config FILE] [--indent N] [--json]

fn main() {
    stylint::cli::run();
}
