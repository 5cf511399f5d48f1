use anyhow::Result;
use assoc::{
	binding::{Binding, Reset, Sticky},
	typed::{TypedArray, TypedError},
};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{info, warn, LevelFilter};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
	/// Forget the key and value types once the array is emptied
	Reset,
	/// Keep the first key and value types forever
	Sticky,
}

/// Walks a shopping list through every associative array operation.
#[derive(Parser)]
#[command(name = "assoc-demo", version)]
struct Cli {
	/// What the array remembers about its types once emptied
	#[arg(long, value_enum, default_value_t = Policy::Reset)]
	binding: Policy,

	/// Increase logging verbosity (-v debug, -vv trace)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn report<T>(step: &str, result: Result<T, TypedError>) -> Option<T> {
	match result {
		Ok(value) => Some(value),
		Err(error) => {
			warn!("{step} failed");
			println!("ERROR: {error}");

			None
		}
	}
}

fn run<B: Binding>() {
	let mut list = TypedArray::<B>::new();

	// shopping list
	report("insert", list.insert("bread", 50));
	report("insert", list.insert("soap", 20));

	println!("{list}");

	if let Some((key, value)) = report("lookup", list.lookup("bread")) {
		println!("value is: {value}, for key: {key}");
	}

	// float key against string keys
	report("insert", list.insert(37373.3737, "someRandomNum"));

	report("modify", list.modify("bread", 100));

	println!("{list}");

	report("remove", list.remove("bread"));

	println!("{list}");

	// emptied, the binding strategy decides whether new types are accepted
	report("remove", list.remove("soap"));
	report("insert", list.insert(7, "seven"));

	println!("{list}");
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	let level = match cli.verbose {
		0 => LevelFilter::Info,
		1 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};

	env_logger::Builder::from_env(Env::default().default_filter_or("info"))
		.filter_level(level)
		.try_init()?;

	info!("running with {:?} binding", cli.binding);

	match cli.binding {
		Policy::Reset => run::<Reset>(),
		Policy::Sticky => run::<Sticky>(),
	}

	Ok(())
}
