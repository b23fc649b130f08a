use bench_inputs::cli::{init_logging, row_args_message, RowArgs};
use bench_inputs::output::{write_rows, ROW_FILE_NAME};
use clap::Parser;

fn main() {
    let args = match RowArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            println!("{}", row_args_message(&e));
            return;
        }
    };
    init_logging(false);

    match write_rows(ROW_FILE_NAME, args.n) {
        Ok(n) => println!("Wrote {} rows to '{}'.", n, ROW_FILE_NAME),
        Err(e) => println!("Error: {}", e),
    }
}
