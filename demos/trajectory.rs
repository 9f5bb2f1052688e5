use spritejump::{
    run,
    Bootstrap,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let config = args.get(1)
        .cloned()
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/demos/config.toml").to_string());

    match run(Bootstrap { args, config: Some(config) }) {
        Ok(updates) => println!("{} updates", updates.len()),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        },
    }
}
