extern crate codonsites;

use std::io;
use std::process;

use clap::{App, Arg, ArgMatches};
use log::info;

use codonsites::{DegeneracyTable, GeneticCode, Result};
use codonsites::io::tsv;

fn main() {
    env_logger::init();

    let matches = App::new("codonsites")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tabulate first and third position degeneracy and L-values of codons")
        .arg(Arg::with_name("code")
            .short("g")
            .long("code")
            .value_name("ID")
            .help("NCBI genetic code id or name")
            .default_value("1")
            .takes_value(true))
        .arg(Arg::with_name("output")
            .short("o")
            .long("output")
            .value_name("FILE")
            .help("Output file (default: stdout)")
            .takes_value(true))
        .arg(Arg::with_name("list-codes")
            .long("list-codes")
            .help("List supported genetic codes and exit"))
        .arg(Arg::with_name("codons")
            .value_name("CODON")
            .help("Codons to report (default: all 64)")
            .multiple(true))
        .get_matches();

    if let Err(why) = run(&matches) {
        eprintln!("error: {}", why);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    if matches.is_present("list-codes") {
        for code in GeneticCode::all() {
            println!("{}\t{}", code, code.name());
        }
        return Ok(());
    }

    let code: GeneticCode = matches.value_of("code").unwrap_or("1").parse()?;
    let table = DegeneracyTable::new(code);
    let codons: Vec<&str> = matches.values_of("codons").map(|xs| xs.collect()).unwrap_or_default();

    match matches.value_of("output") {
        Some(path) => {
            info!("writing degeneracy table for genetic code {} to {}", code, path);
            write(tsv::Writer::to_file(path)?, &table, &codons)
        },
        None => {
            let stdout = io::stdout();
            write(tsv::Writer::new(stdout.lock()), &table, &codons)
        },
    }
}

fn write<W: io::Write>(mut writer: tsv::Writer<W>, table: &DegeneracyTable, codons: &[&str]) -> Result<()> {
    if codons.is_empty() {
        writer.write_table(table)
    } else {
        writer.write_codons(table, codons)
    }
}
