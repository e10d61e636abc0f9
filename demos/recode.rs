// This is a part of singlebyte.
// See README.md and LICENSE.txt for details.

//! Recodes a byte stream in a legacy single-byte encoding into UTF-8.

use std::fs::File;
use std::io::{self, Read, Write};
use std::process;

use getopts::Options;
use singlebyte::label::encoding_from_label;
use singlebyte::DecoderTrap;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let mut opts = Options::new();
    opts.optopt("f", "from-code", "set input encoding", "NAME");
    opts.optopt("e", "error-policy", "set error policy (one of strict, ignore, replace)", "POLICY");
    opts.optopt("o", "output", "output file", "FILE");
    opts.optflag("h", "help", "print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => fail(&e.to_string()),
    };
    if matches.opt_present("h") {
        println!("{}", opts.usage("Recodes legacy single-byte text into UTF-8."));
        return;
    }

    let inenc = match matches.opt_str("f") {
        Some(name) => match encoding_from_label(&name) {
            Some(enc) => enc,
            None => fail(&format!("invalid input encoding name {}", name)),
        },
        None => &singlebyte::all::WINDOWS_1252,
    };

    let trap = match matches.opt_str("e").as_deref() {
        Some("strict") | None => DecoderTrap::Strict,
        Some("ignore") => DecoderTrap::Ignore,
        Some("replace") => DecoderTrap::Replace,
        Some(policy) => fail(&format!("invalid error policy {}", policy)),
    };

    let mut input = Vec::new();
    let read = match matches.free.first().map(|s| &s[..]) {
        Some("-") | None => io::stdin().read_to_end(&mut input),
        Some(path) => match File::open(path) {
            Ok(mut file) => file.read_to_end(&mut input),
            Err(e) => fail(&format!("cannot open {}: {}", path, e)),
        },
    };
    if let Err(e) = read {
        fail(&format!("read error: {}", e));
    }

    let decoded = match inenc.decode(&input, trap) {
        Ok(s) => s,
        Err(e) => fail(&format!("decoder error: {}", e)),
    };

    let written = match matches.opt_str("o").as_deref() {
        Some("-") | None => io::stdout().write_all(decoded.as_bytes()),
        Some(path) => match File::create(path) {
            Ok(mut file) => file.write_all(decoded.as_bytes()),
            Err(e) => fail(&format!("cannot create {}: {}", path, e)),
        },
    };
    if let Err(e) = written {
        fail(&format!("write error: {}", e));
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("recode: {}", msg);
    process::exit(1);
}
