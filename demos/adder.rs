use clap::Parser;

use gatesim_rs::adder::ParallelAdder;
use gatesim_rs::harness;

#[derive(Debug, Parser)]
#[command(author, version, about = "N-bit ripple-carry binary adder")]
struct Cli {
    /// First operand as a bit string, MSB first (e.g. "011").
    #[arg(value_name = "BITS", required_unless_present = "exhaustive")]
    a: Option<String>,

    /// Second operand as a bit string, MSB first.
    #[arg(value_name = "BITS", required_unless_present = "exhaustive")]
    b: Option<String>,

    /// Operand width in bits.
    #[clap(long, value_name = "INT", default_value = "3")]
    width: usize,

    /// Sweep the whole input domain instead of adding two operands.
    #[clap(long)]
    exhaustive: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    let mut adder = ParallelAdder::new(args.width);

    if args.exhaustive {
        for a in 0..1u64 << args.width {
            for b in 0..1u64 << args.width {
                let bits_a = harness::bits_from_value(a, args.width);
                let bits_b = harness::bits_from_value(b, args.width);
                let (sum, carry) = adder.add(&bits_a, &bits_b)?;
                println!(
                    "{} + {} = {}  ({} + {} = {})",
                    harness::render_bits(&bits_a),
                    harness::render_bits(&bits_b),
                    harness::render_sum(&sum, carry),
                    a,
                    b,
                    a + b,
                );
            }
        }
        return Ok(());
    }

    // Presence is guaranteed by clap when --exhaustive is absent.
    let text_a = args.a.unwrap();
    let text_b = args.b.unwrap();
    let bits_a = harness::parse_bits(&text_a, args.width)?;
    let bits_b = harness::parse_bits(&text_b, args.width)?;

    let (sum, carry) = adder.add(&bits_a, &bits_b)?;

    println!(" {}", text_a);
    println!(" {} +", text_b);
    println!("{}", "-".repeat(args.width + 2));
    println!("{}", harness::render_sum(&sum, carry));

    Ok(())
}
