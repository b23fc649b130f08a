use bench_inputs::cli::{init_logging, QueryArgs};
use bench_inputs::generate_queries;
use bench_inputs::output::write_queries;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let args = match QueryArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return;
        }
    };
    init_logging(args.verbose);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mode = args.mode();

    let queries = match generate_queries(
        &mut rng,
        args.min_val,
        args.max_val,
        args.num_queries,
        mode,
    ) {
        Ok(queries) => queries,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };

    match write_queries(&args.output_file, &queries) {
        Ok(count) => println!(
            "Generated {} {} queries and saved to '{}'.",
            count,
            mode,
            args.output_file.display()
        ),
        Err(e) => println!("Error: {}", e),
    }
}
