use log::debug;
use std::io::{self, BufWriter, Write};
use std::process;

use partitions::cli::{self, Command, UsageError};
use partitions::listing::{self, ListingError};

fn main() {
    env_logger::init();

    let request = match cli::parse(std::env::args_os()) {
        Ok(Command::Help(text)) => {
            println!("{}", text);
            return;
        }
        Ok(Command::List(request)) => request,
        Err(why) => {
            eprintln!("{}", why);
            if let UsageError::MissingRequiredOption(_) = why {
                eprintln!("{}", cli::help());
            }
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = listing::write_listing(&request, &mut out)
        .and_then(|listing| {
            out.flush()?;
            Ok(listing)
        });

    match result {
        Ok(listing) => debug!("done after {} objects", listing.written),
        Err(ListingError::Io(ref why)) if why.kind() == io::ErrorKind::BrokenPipe => {
            debug!("output closed early");
        }
        Err(why) => {
            eprintln!("{}", why);
            process::exit(1);
        }
    }
}
