use std::io::Write;

use clap::Parser;
use log::info;
use newton_raphson::find_root_of;

use params::{DemoArgs, DemoParams};
use report::write_report;

mod functions;
mod params;
mod report;

fn main() -> eyre::Result<()> {
    env_logger::init();

    let args = DemoArgs::parse();
    let params = DemoParams::from_args(&args)?;
    info!("Running with {params:?}");

    run(&mut std::io::stdout().lock(), &params)
}

fn run<W: Write>(writer: &mut W, params: &DemoParams) -> eyre::Result<()> {
    let DemoParams {
        function,
        initial_guess,
        settings,
    } = *params;

    writeln!(writer, "Newton-Raphson Method: Univariate")?;
    writeln!(writer, "\t{}", function.formula())?;

    let result = find_root_of(function.function(), initial_guess, &settings);
    info!("Finished with status code {}", result.status.code());

    write_report(writer, function.function(), initial_guess, &result)?;

    Ok(())
}
