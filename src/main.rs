use std::env;

use rustywspr::tracing_init::init_tracing;
use rustywspr::WsprMessage;

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        eprintln!("Usage: {} <callsign> <locator> <power_dbm>", args[0]);
        std::process::exit(1);
    }

    let callsign: &str = &args[1];
    let locator: &str = &args[2];
    let power: i32 = match args[3].parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("power_dbm must be an integer, got '{}'", args[3]);
            std::process::exit(1);
        }
    };

    let message = match WsprMessage::new(callsign, locator, power) {
        Ok(message) => message,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    println!("Message: {}", message);
    println!("Packed Callsign (N): {:028b}", message.packed_callsign);
    println!("Packed Grid/Power (M): {:022b}", message.packed_grid_power);

    let symbols_string: String = message
        .channel_symbols
        .iter()
        .map(|b| (b + b'0') as char)
        .collect();
    println!("Channel Symbols: {}", symbols_string);
}
