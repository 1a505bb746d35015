// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate sand_drepr;

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
#[macro_use]
extern crate log;
extern crate env_logger;
#[macro_use]
extern crate clap;

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use sand_drepr::prelude::*;
use sand_drepr::export::post_processing;

mod input;
mod engine;

fn main() {
    env_logger::init();

    if let Err(ref e) = run() {
        eprintln!("error: {}", e);
        for e in e.iter().skip(1) {
            eprintln!("caused by: {}", e);
        }

        // The backtrace is not always generated. Try to run with `RUST_BACKTRACE=1`.
        if let Some(backtrace) = e.backtrace() {
            eprintln!("{:?}", backtrace);
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let app_m = clap_app!(sand_drepr =>
        (about: "Export annotated tables to RDF with D-REPR")
        (@arg settings: -c +takes_value "settings file")
        (@subcommand model =>
            (about: "Write the D-REPR model of a table (model.json & model.yml)")
            (@arg input: -i +required +takes_value "input file: the table, its rows & semantic model")
            (@arg outdir: -o +required +takes_value "output directory")
        )
        (@subcommand resources =>
            (about: "Write the resources of the D-REPR model of a table")
            (@arg input: -i +required +takes_value "input file: the table, its rows & semantic model")
            (@arg outdir: -o +required +takes_value "output directory")
        )
        (@subcommand export =>
            (about: "Convert a table to RDF by running the D-REPR program")
            (@arg input: -i +required +takes_value "input file: the table, its rows & semantic model")
            (@arg outdir: -o +required +takes_value "working directory, the RDF is written to data.<format>")
            (@arg format: -f +takes_value "output format: ttl, jsonld or nt [default=ttl]")
            (@arg program: -p +takes_value "the D-REPR program [default=drepr]")
        )
        (@subcommand repair =>
            (about: "Add the links of literal nodes that D-REPR leaves out of its output")
            (@arg input: -i +required +takes_value "input file: the table, its rows & semantic model")
            (@arg rdf_file: -r +required +takes_value "RDF generated by D-REPR")
            (@arg format: -f +takes_value "format of the RDF file [default=ttl]")
        )
    ).get_matches();

    let appcfg = match app_m.value_of("settings") {
        Some(fsettings) => AppConfig::from_file(Path::new(fsettings))?,
        None => AppConfig::default(),
    };
    debug!("Current settings: {:?}", appcfg);

    let namespace = NamespaceService::new(&appcfg)?;
    let transforms = TransformCatalog::from_config(&appcfg);

    let (sub_name, sub_m) = app_m.subcommand();
    let sub_m = match sub_m {
        Some(sub_m) => sub_m,
        None => bail!("No subcommand provided"),
    };
    let finput = Path::new(sub_m.value_of("input").unwrap_or_default());
    let input = input::ExportInput::from_file(finput)?;
    let ontprops = input.get_ontprops(&appcfg);
    let format = OutputFormat::from_str(sub_m.value_of("format").unwrap_or("ttl"))?;

    let engine = engine::ProcessEngine {
        program: sub_m.value_of("program").unwrap_or("drepr").to_owned(),
        workdir: Path::new(sub_m.value_of("outdir").unwrap_or(".")).to_path_buf(),
    };
    let exporter = DreprExport {
        appcfg: &appcfg,
        namespace: &namespace,
        ontprops: &ontprops,
        transforms: &transforms,
        resources: &CsvResourceBuilder,
        engine: &engine,
    };

    match sub_name {
        "model" => {
            let files = exporter.export_data_model(&input.table, &input.semantic_model)?;
            write_files(&engine.workdir, &files)?;
        },
        "resources" => {
            let mut files = exporter.export_extra_resources(&input.table, &input.rows, &input.semantic_model)?;
            if input.table.n_columns() > 0 {
                let table = CsvResourceBuilder.table_resource(&input.table, &input.rows)?;
                files.insert(sand_drepr::export::TABLE_RESOURCE_ID.to_owned(), table.value);
            }
            let files = files.into_iter().map(|(id, content)| (format!("{}.csv", id), content)).collect();
            write_files(&engine.workdir, &files)?;
        },
        "export" => {
            fs::create_dir_all(&engine.workdir)
                .chain_err(|| format!("Cannot create directory {:?}", engine.workdir))?;
            let content = exporter.export_data(&input.table, &input.rows, &input.semantic_model, format)?;
            let foutput = engine.workdir.join(format!("data.{}", format));
            fs::write(&foutput, content).chain_err(|| format!("Cannot write {:?}", foutput))?;
            info!("Write RDF to {:?}", foutput);
        },
        "repair" => {
            let frdf = sub_m.value_of("rdf_file").unwrap_or_default();
            let content = fs::read_to_string(frdf).chain_err(|| format!("Cannot read RDF file: {}", frdf))?;
            let content = post_processing(&input.semantic_model, &content, format, namespace.prefixes())?;
            io::stdout().write_all(content.as_bytes())?;
        },
        _ => bail!("Invalid subcommand: {}", sub_name),
    }

    Ok(())
}

fn write_files(outdir: &Path, files: &::std::collections::BTreeMap<String, String>) -> Result<()> {
    fs::create_dir_all(outdir).chain_err(|| format!("Cannot create directory {:?}", outdir))?;
    for (name, content) in files {
        let fpath = outdir.join(name);
        fs::write(&fpath, content).chain_err(|| format!("Cannot write {:?}", fpath))?;
        info!("Write {:?}", fpath);
    }
    Ok(())
}
