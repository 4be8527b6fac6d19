//! Run one invocation envelope through the edge rules.
//!
//! Reads the event JSON on stdin and prints the request or response
//! the platform would get back:
//!
//! ```text
//! echo '{"Records":[{"cf":{"request":{"uri":"/test/"}}}]}' | edge-event
//! ```

use static_site_edge::cdn_config;
use static_site_edge::cdn_event::Event;
use static_site_edge::cdn_rules;
use static_site_edge::logging;

use std::error::Error;
use std::io::Read;
use std::process;

fn main() {
    if let Err(err) = run() {
        eprintln!("edge-event: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let settings = cdn_config::load()?;
    logging::init(&settings.log_level);

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let handled = cdn_rules::handle(&settings, Event::from_json(&input)?)?;
    println!("{}", serde_json::to_string_pretty(&handled)?);
    Ok(())
}
