extern crate clap;
extern crate log;
extern crate pin_bit_diff;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use pin_bit_diff::knowledge::PinConfigFlag;
use pin_bit_diff::{
    extract_pin_summary, probe_flag, read_pin_list, Bitstream, BitstreamNaming, ConfigRegion,
    PinDiffResolver, PinSummary,
};
use std::error::Error;

type CliResult = Result<(), Box<dyn Error>>;

fn region_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("header")
            .long("header")
            .help("Bytes at the start of the bitstream to ignore")
            .takes_value(true)
            .default_value("4096"),
        Arg::with_name("trailer")
            .long("trailer")
            .help("Bytes before the end of the address space to ignore")
            .takes_value(true)
            .default_value("4096"),
        Arg::with_name("total-size")
            .long("total-size")
            .help("Size of the configuration address space in bytes")
            .takes_value(true)
            .default_value("33554660"),
    ]
}

fn parse_usize(matches: &ArgMatches, name: &str) -> Result<usize, Box<dyn Error>> {
    let value = matches
        .value_of(name)
        .ok_or_else(|| format!("missing --{}", name))?;
    value
        .parse()
        .map_err(|_| format!("--{} expects an integer, got {:?}", name, value).into())
}

fn region(matches: &ArgMatches) -> Result<ConfigRegion, Box<dyn Error>> {
    Ok(ConfigRegion::new(
        parse_usize(matches, "header")?,
        parse_usize(matches, "trailer")?,
        parse_usize(matches, "total-size")?,
    ))
}

fn resolve(matches: &ArgMatches) -> CliResult {
    let (path_a, path_b) = match (matches.value_of("FILE_A"), matches.value_of("FILE_REF")) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err("[!] Parameter FILE_A or FILE_REF is not specified".into()),
    };
    let resolver = PinDiffResolver::new(region(matches)?);

    if matches.is_present("all") {
        let a = Bitstream::load(path_a)?;
        let b = Bitstream::load(path_b)?;
        for record in resolver.candidates(&a, &b)? {
            println!("{}", record);
        }
    } else {
        println!("{}", resolver.resolve(path_a, path_b)?);
    }
    Ok(())
}

fn extract(matches: &ArgMatches) -> CliResult {
    let pins = read_pin_list(matches.value_of("PIN_LIST").unwrap_or_default())?;
    let naming = BitstreamNaming::new(matches.value_of("prefix").unwrap_or_default());
    let resolver = PinDiffResolver::new(region(matches)?);
    let jobs = parse_usize(matches, "jobs")?;

    let extraction = extract_pin_summary(&pins, &naming, &resolver, jobs)?;
    for (pin, addresses) in extraction.summary.iter() {
        println!("{}: {}, {}", pin, addresses.bit_4ma, addresses.bit_8ma);
    }
    for failure in extraction.failures.iter() {
        eprintln!("[!] {}: {}", failure.pin, failure.error);
    }

    extraction
        .summary
        .save(matches.value_of("output").unwrap_or("pin_summary.json"))?;
    Ok(())
}

fn probe(matches: &ArgMatches) -> CliResult {
    let summary = PinSummary::load(matches.value_of("SUMMARY").unwrap_or_default())?;
    let reference = Bitstream::load(matches.value_of("REFERENCE").unwrap_or_default())?;
    let offsets = match matches.value_of("offset") {
        Some(_) => vec![parse_usize(matches, "offset")?],
        None => {
            let flag: PinConfigFlag = matches.value_of("flag").unwrap_or("series-term").parse()?;
            flag.offsets().to_vec()
        }
    };

    for offset in offsets {
        let flag_probe = probe_flag(&summary, &reference, offset);
        for (pin, value) in flag_probe.values.iter() {
            match value {
                Some(value) => println!("{}, offset = {}, val = {}", pin, offset, *value as u8),
                None => eprintln!("[!] {}: bit_8mA + {} is out of range", pin, offset),
            }
        }
        println!(
            "offset = {}: tot = {}, scanned = {}",
            offset,
            flag_probe.set_count(),
            flag_probe.values.len()
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = App::new("Pin bitstream diff tool")
        .version("0.1")
        .about("Locates the configuration bits of FPGA pin drive strength by comparing bitstreams")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("resolve")
                .about("Print the bit address of the first pin related change")
                .arg(
                    Arg::with_name("all")
                        .long("all")
                        .help("Print every candidate change instead")
                        .takes_value(false),
                )
                .args(&region_args())
                .arg(
                    Arg::with_name("FILE_A")
                        .help("Bitstream with the option changed")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("FILE_REF")
                        .help("Reference bitstream")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(
            SubCommand::with_name("extract")
                .about("Locate bit_4mA and bit_8mA of every pin in a list")
                .args(&region_args())
                .arg(
                    Arg::with_name("prefix")
                        .long("prefix")
                        .help("Bitstream path prefix, files are {prefix}{pin}_{4mA,8mA,12mA}.jic")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::with_name("output")
                        .long("output")
                        .short("o")
                        .takes_value(true)
                        .default_value("pin_summary.json"),
                )
                .arg(
                    Arg::with_name("jobs")
                        .long("jobs")
                        .short("j")
                        .help("Worker threads, 0 = one per CPU")
                        .takes_value(true)
                        .default_value("0"),
                )
                .arg(
                    Arg::with_name("PIN_LIST")
                        .help("File with one pin name per line")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            SubCommand::with_name("probe")
                .about("Read a pin configuration flag from a reference bitstream")
                .arg(
                    Arg::with_name("flag")
                        .long("flag")
                        .help("drive-8ma, drive-4ma, series-term, sstl-term or diff-sstl")
                        .takes_value(true)
                        .default_value("series-term"),
                )
                .arg(
                    Arg::with_name("offset")
                        .long("offset")
                        .help("Raw bit offset from bit_8mA, overrides --flag")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("SUMMARY")
                        .help("Pin summary JSON")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("REFERENCE")
                        .help("Reference bitstream")
                        .required(true)
                        .index(2),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        ("resolve", Some(sub_matches)) => resolve(sub_matches),
        ("extract", Some(sub_matches)) => extract(sub_matches),
        ("probe", Some(sub_matches)) => probe(sub_matches),
        _ => unreachable!("a subcommand is required"),
    };

    if let Err(why) = result {
        log::error!("{}", why);
        eprintln!("[!] {}", why);
        std::process::exit(1);
    }
}
